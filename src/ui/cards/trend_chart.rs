use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    widgets::{Axis, Chart, Dataset, GraphType, Widget},
};

use crate::trend::Trend;
use crate::ui::style::{MUTED, POINTS, TREND};
use crate::views;

use super::{Card, CardContext};

/// Scatter of the window with its least-squares line.
#[derive(Debug, Default)]
pub struct TrendChartCard;

impl Card for TrendChartCard {
    fn title(&self, ctx: &CardContext) -> String {
        let fit = Trend::fit(&ctx.snapshot.values());
        match fit.line().and_then(|line| line.r_squared) {
            Some(r_squared) => format!(" 📈 Temperature Trend Over Time (r² {:.2}) ", r_squared),
            None => " 📈 Temperature Trend Over Time ".to_string(),
        }
    }

    fn render_body(&self, area: Rect, buf: &mut Buffer, ctx: &CardContext) {
        let Some(series) = views::plot_series(ctx.snapshot) else {
            return;
        };

        let mut datasets = vec![
            Dataset::default()
                .name("Readings")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(POINTS))
                .data(&series.points),
        ];

        // Fewer than two readings: points only.
        if let Some(fitted) = &series.fitted {
            datasets.push(
                Dataset::default()
                    .name("Regression Line")
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(TREND))
                    .data(fitted),
            );
        }

        let x_axis = Axis::default()
            .title("Time")
            .style(Style::default().fg(MUTED))
            .labels(series.x_labels.clone())
            .bounds(series.x_bounds);

        let y_axis = Axis::default()
            .title(format!("Temperature ({})", ctx.config.unit_label))
            .style(Style::default().fg(MUTED))
            .labels(series.y_labels.clone())
            .bounds(series.y_bounds);

        let chart = Chart::new(datasets).x_axis(x_axis).y_axis(y_axis);
        Widget::render(chart, area, buf);
    }
}
