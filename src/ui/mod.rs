pub mod cards;
pub mod sidebar;
pub mod style;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};

use crate::app::App;
use crate::config::DashboardConfig;
use crate::feed::Snapshot;

use cards::{Card, CardContext, ClockCard, ReadingsTableCard, TrendChartCard, ValueBoxCard};
use sidebar::Sidebar;

const SIDEBAR_WIDTH: u16 = 34;
const TOP_ROW_HEIGHT: u16 = 6;
const CHART_MIN_HEIGHT: u16 = 10;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.dashboard().render(area, buf);
    }
}

/// The whole screen, drawn from a config and one window snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Dashboard<'a> {
    config: &'a DashboardConfig,
    snapshot: &'a Snapshot,
}

impl<'a> Dashboard<'a> {
    pub fn new(config: &'a DashboardConfig, snapshot: &'a Snapshot) -> Self {
        Self { config, snapshot }
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let main_area = if self.config.show_sidebar {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
                .split(area);
            Sidebar::new(self.config).render(columns[0], buf);
            columns[1]
        } else {
            area
        };

        // header + border + header gap, plus one line per retained reading
        let table_height = self.config.window_capacity.min(20) as u16 + 4;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TOP_ROW_HEIGHT),
                Constraint::Length(table_height),
                Constraint::Min(CHART_MIN_HEIGHT),
            ])
            .split(main_area);

        let top_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        let ctx = CardContext {
            config: self.config,
            snapshot: self.snapshot,
        };

        ValueBoxCard.render(top_row[0], buf, &ctx);
        ClockCard.render(top_row[1], buf, &ctx);
        ReadingsTableCard.render(rows[1], buf, &ctx);
        TrendChartCard.render(rows[2], buf, &ctx);
    }
}

/// Flatten a rendered buffer into lines of text.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::snapshot_of;

    fn render(config: &DashboardConfig, snapshot: &Snapshot) -> String {
        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);
        Dashboard::new(config, snapshot).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_empty_dashboard_shows_placeholders() {
        let text = render(&DashboardConfig::default(), &Snapshot::default());
        assert!(text.contains("Antarctic Explorer"));
        assert!(text.contains("Current Temperature"));
        assert!(text.contains("Waiting for first reading"));
    }

    #[test]
    fn test_dashboard_shows_latest_reading() {
        let snapshot = snapshot_of(&[-16.4, -17.8, -17.1]);
        let text = render(&DashboardConfig::default(), &snapshot);
        assert!(text.contains("-17.1 °C"));
        assert!(text.contains("2024-01-01 12:00:06"));
        assert!(text.contains("2024-01-01 12:00:00"));
        assert!(!text.contains("Waiting for first reading"));
    }

    #[test]
    fn test_sidebar_can_be_hidden() {
        let config = DashboardConfig {
            show_sidebar: false,
            ..DashboardConfig::default()
        };
        let text = render(&config, &Snapshot::default());
        assert!(!text.contains("GitHub Source"));
        assert!(text.contains("Current Temperature"));
    }
}
