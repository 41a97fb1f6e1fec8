use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};

use crate::ui::style::{ACCENT, MUTED, TEXT};
use crate::views;

use super::{Card, CardContext};

/// Big live value with a snowflake showcase.
#[derive(Debug, Default)]
pub struct ValueBoxCard;

impl Card for ValueBoxCard {
    fn title(&self, _ctx: &CardContext) -> String {
        " ❄ Current Temperature ".to_string()
    }

    fn render_body(&self, area: Rect, buf: &mut Buffer, ctx: &CardContext) {
        let Some(value) = views::current_value(ctx.snapshot, ctx.config.precision, &ctx.config.unit_label) else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Label
                Constraint::Length(1), // Value
                Constraint::Min(1),    // Tagline
            ])
            .split(area);

        Paragraph::new("Current Temperature")
            .style(Style::default().fg(TEXT))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        Paragraph::new(value)
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        Paragraph::new("Live from Antarctica")
            .style(Style::default().fg(MUTED))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}
