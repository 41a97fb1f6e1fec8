mod clock;
mod readings_table;
mod trend_chart;
mod value_box;

use std::fmt::Debug;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::config::DashboardConfig;
use crate::feed::Snapshot;
use crate::ui::style::{self, MUTED};

pub use clock::ClockCard;
pub use readings_table::ReadingsTableCard;
pub use trend_chart::TrendChartCard;
pub use value_box::ValueBoxCard;

pub const WAITING_TEXT: &str = "Waiting for first reading...";

/// What a card gets to draw from.
#[derive(Debug, Clone, Copy)]
pub struct CardContext<'a> {
    pub config: &'a DashboardConfig,
    pub snapshot: &'a Snapshot,
}

/// One framed panel of the dashboard.
pub trait Card: Debug {
    fn title(&self, ctx: &CardContext) -> String;

    fn accent(&self) -> Color {
        style::ACCENT
    }

    /// Draw the card contents inside the frame. Only called with a non-empty snapshot.
    fn render_body(&self, area: Rect, buf: &mut Buffer, ctx: &CardContext);

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &CardContext) {
        let block = style::card_block(self.title(ctx), self.accent());
        let inner = block.inner(area);
        Widget::render(block, area, buf);

        if ctx.snapshot.is_empty() {
            render_waiting(inner, buf);
        } else {
            self.render_body(inner, buf, ctx);
        }
    }
}

fn render_waiting(area: Rect, buf: &mut Buffer) {
    let waiting = Paragraph::new(WAITING_TEXT)
        .style(Style::default().fg(MUTED).add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    Widget::render(waiting, area, buf);
}
