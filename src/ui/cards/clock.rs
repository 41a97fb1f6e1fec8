use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};

use crate::ui::style::TEXT;
use crate::views;

use super::{Card, CardContext};

#[derive(Debug, Default)]
pub struct ClockCard;

impl Card for ClockCard {
    fn title(&self, _ctx: &CardContext) -> String {
        " 🕒 Current Date & Time ".to_string()
    }

    fn render_body(&self, area: Rect, buf: &mut Buffer, ctx: &CardContext) {
        if let Some(timestamp) = views::current_timestamp(ctx.snapshot) {
            Paragraph::new(timestamp)
                .style(Style::default().fg(TEXT).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .render(area, buf);
        }
    }
}
