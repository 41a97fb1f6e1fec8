use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Row, Table, Widget},
};

use crate::ui::style::{self, ACCENT, TEXT};
use crate::views;

use super::{Card, CardContext};

/// Window contents, oldest first; the newest row is highlighted.
#[derive(Debug, Default)]
pub struct ReadingsTableCard;

impl Card for ReadingsTableCard {
    fn title(&self, _ctx: &CardContext) -> String {
        " 📋 Most Recent Readings ".to_string()
    }

    fn render_body(&self, area: Rect, buf: &mut Buffer, ctx: &CardContext) {
        let rows = views::table_rows(ctx.snapshot, ctx.config.precision);
        let newest = rows.len().saturating_sub(1);

        let rows = rows.into_iter().enumerate().map(|(i, row)| {
            let style = if i == newest {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT)
            };
            Row::new(vec![row.value, row.timestamp]).style(style)
        });

        let header = Row::new(vec![
            format!("Temp ({})", ctx.config.unit_label),
            "Timestamp".to_string(),
        ])
        .style(style::title_style(TEXT))
        .bottom_margin(1);

        let table = Table::new(rows, [Constraint::Length(14), Constraint::Min(19)])
            .header(header)
            .column_spacing(2);

        Widget::render(table, area, buf);
    }
}
