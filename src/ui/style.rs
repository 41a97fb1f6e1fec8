use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

pub const ACCENT: Color = Color::Cyan;
pub const POINTS: Color = Color::LightCyan;
pub const TREND: Color = Color::Gray;
pub const MUTED: Color = Color::DarkGray;
pub const TEXT: Color = Color::White;

pub fn title_style(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Rounded, titled frame shared by every card.
pub fn card_block(title: String, accent: Color) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(title_style(accent))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
}
