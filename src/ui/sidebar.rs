use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::config::DashboardConfig;
use crate::ui::style::{self, ACCENT, MUTED, TEXT};

/// Title, description, links and a footer with the update cadence.
#[derive(Debug)]
pub struct Sidebar<'a> {
    config: &'a DashboardConfig,
}

impl<'a> Sidebar<'a> {
    pub fn new(config: &'a DashboardConfig) -> Self {
        Self { config }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(Span::styled(self.config.title.as_str(), style::title_style(ACCENT)))
                .alignment(Alignment::Center),
            Line::default(),
            Line::from(Span::styled(self.config.subtitle.as_str(), Style::default().fg(TEXT)))
                .alignment(Alignment::Center),
            Line::from(Span::styled("─".repeat(30), Style::default().fg(MUTED))),
        ];

        if !self.config.links.is_empty() {
            lines.push(Line::from(Span::styled("Links:", style::title_style(TEXT))));
            for link in &self.config.links {
                lines.push(Line::from(Span::styled(
                    link.label.as_str(),
                    Style::default().fg(ACCENT),
                )));
                lines.push(Line::from(Span::styled(
                    link.url.as_str(),
                    Style::default().fg(MUTED).add_modifier(Modifier::UNDERLINED),
                )));
            }
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            format!(
                "Updates every {}s, keeps {} readings",
                self.config.update_interval_secs, self.config.window_capacity
            ),
            Style::default().fg(MUTED),
        )));
        lines.push(Line::from(Span::styled("q / Esc to quit", Style::default().fg(MUTED))));
        lines
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = style::card_block(" About ".to_string(), ACCENT);
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
