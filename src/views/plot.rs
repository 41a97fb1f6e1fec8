use chrono::TimeDelta;

use crate::{
    feed::Snapshot,
    trend::Trend,
};

/// Time-of-day format for x axis labels.
pub const PLOT_TIME_FORMAT: &str = "%H:%M:%S";

/// Chart data for the trend card.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    /// `(seconds since first reading, value)`; negative if the clock stepped back.
    pub points: Vec<(f64, f64)>,
    /// Fitted line at the same x positions; `None` without a trend.
    pub fitted: Option<Vec<(f64, f64)>>,
    pub trend: Trend,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
}

/// Scatter points plus trend line. `None` when there is nothing to plot.
pub fn plot_series(snapshot: &Snapshot) -> Option<PlotSeries> {
    let first = snapshot.readings().first()?.timestamp();

    let points: Vec<(f64, f64)> = snapshot
        .readings()
        .iter()
        .map(|reading| {
            let x = (reading.timestamp() - first).num_seconds() as f64;
            (x, reading.value())
        })
        .collect();

    let trend = Trend::fit(&snapshot.values());
    let fitted = trend.line().map(|line| {
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, _))| (x, line.value_at(i)))
            .collect::<Vec<_>>()
    });

    // Wall-clock jumps can move x backwards, so bound on the extremes.
    let (min_x, last_x) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(x, _)| {
            (lo.min(x), hi.max(x))
        });
    let max_x = last_x.max(min_x + 1.0);

    let all_y = points
        .iter()
        .map(|&(_, y)| y)
        .chain(fitted.iter().flatten().map(|&(_, y)| y));
    let (min_y, max_y) = all_y.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
        (lo.min(y), hi.max(y))
    });

    // Pad the y axis so points never sit on the border.
    let y_range = (max_y - min_y).max(1.0);
    let y_padding = y_range * 0.1;
    let y_min = min_y - y_padding;
    let y_max = max_y + y_padding;

    let x_labels = [min_x, (min_x + max_x) / 2.0, max_x]
        .iter()
        .map(|&secs| {
            (first + TimeDelta::seconds(secs.round() as i64))
                .format(PLOT_TIME_FORMAT)
                .to_string()
        })
        .collect();

    let y_labels = vec![
        format!("{:.1}", y_min),
        format!("{:.1}", (y_min + y_max) / 2.0),
        format!("{:.1}", y_max),
    ];

    Some(PlotSeries {
        points,
        fitted,
        trend,
        x_bounds: [min_x, max_x],
        y_bounds: [y_min, y_max],
        x_labels,
        y_labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::Reading;
    use crate::views::test_support::snapshot_of;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_snapshot_has_no_plot() {
        assert!(plot_series(&Snapshot::default()).is_none());
    }

    #[test]
    fn test_single_point_has_no_trend() {
        let series = plot_series(&snapshot_of(&[-17.0])).unwrap();
        assert_eq!(series.points, vec![(0.0, -17.0)]);
        assert_eq!(series.trend, Trend::Insufficient);
        assert!(series.fitted.is_none());
        assert_eq!(series.x_bounds, [0.0, 1.0]);
        assert!(series.y_bounds[0] < -17.0 && series.y_bounds[1] > -17.0);
    }

    #[test]
    fn test_points_use_elapsed_seconds() {
        let series = plot_series(&snapshot_of(&[-16.0, -17.0, -18.0])).unwrap();
        assert_eq!(series.points, vec![(0.0, -16.0), (3.0, -17.0), (6.0, -18.0)]);
        assert_eq!(series.x_bounds, [0.0, 6.0]);
        assert_eq!(series.x_labels, vec!["12:00:00", "12:00:03", "12:00:06"]);
    }

    #[test]
    fn test_fitted_line_parallel_to_points() {
        let series = plot_series(&snapshot_of(&[-16.0, -17.0, -18.0])).unwrap();
        let fitted = series.fitted.unwrap();
        assert_eq!(fitted.len(), 3);
        for ((px, _), (fx, fy)) in series.points.iter().zip(fitted.iter()) {
            assert_eq!(px, fx);
            assert!(*fy <= -16.0 + 1e-9 && *fy >= -18.0 - 1e-9);
        }
        assert!((fitted[2].1 + 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_clock_stepping_back_stays_in_bounds() {
        let start = NaiveDate::from_ymd_opt(2024, 10, 27).unwrap().and_hms_opt(2, 59, 57).unwrap();
        let snapshot = Snapshot::new(vec![
            Reading::new(-17.0, start),
            Reading::new(-16.5, start + TimeDelta::seconds(3)),
            Reading::new(-16.8, start - TimeDelta::seconds(3597)),
        ]);

        let series = plot_series(&snapshot).unwrap();
        assert_eq!(series.points[2].0, -3597.0);
        assert_eq!(series.x_bounds, [-3597.0, 3.0]);
        for &(x, _) in &series.points {
            assert!(x >= series.x_bounds[0] && x <= series.x_bounds[1]);
        }
        assert_eq!(series.x_labels.first().map(String::as_str), Some("02:00:00"));
    }

    #[test]
    fn test_bounds_contain_every_point() {
        let series = plot_series(&snapshot_of(&[-16.1, -17.9, -16.4, -17.2])).unwrap();
        for &(_, y) in &series.points {
            assert!(y > series.y_bounds[0] && y < series.y_bounds[1]);
        }
    }
}
