use antarctic_explorer::config::DashboardConfig;
use antarctic_explorer::feed::{HistoryWindow, ManualClock, Reading, ReadingGenerator, ValueRange};
use antarctic_explorer::trend::Trend;
use antarctic_explorer::views;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rand::{rngs::StdRng, SeedableRng};
use std::fs;
use tempfile::TempDir;

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 2, 10).unwrap().and_hms_opt(9, 30, 0).unwrap()
}

fn reading(label: f64) -> Reading {
    Reading::new(label, start())
}

#[test]
fn test_window_scenario_capacity_three() {
    let mut window = HistoryWindow::new(3).unwrap();
    let (a, b, c, d, e) = (reading(1.0), reading(2.0), reading(3.0), reading(4.0), reading(5.0));

    for r in [&a, &b, &c, &d] {
        window.append(r.clone());
    }
    let after_d = window.snapshot();
    assert_eq!(after_d.readings(), &[b.clone(), c.clone(), d.clone()]);

    window.append(e.clone());
    assert_eq!(window.snapshot().readings(), &[c, d.clone(), e]);

    // Earlier snapshot is untouched.
    assert_eq!(after_d.readings(), &[b, reading(3.0), d]);
}

#[test]
fn test_generated_feed_drives_every_view() {
    let config = DashboardConfig::default();
    let mut generator = ReadingGenerator::with_parts(
        HistoryWindow::new(config.window_capacity).unwrap(),
        ValueRange::new(config.min_value, config.max_value, config.precision).unwrap(),
        StdRng::seed_from_u64(2025),
        ManualClock::new(start(), TimeDelta::seconds(config.update_interval_secs as i64)),
    );

    // Startup state: nothing to show, nothing breaks.
    let empty = generator.snapshot();
    assert!(views::current_value(&empty, config.precision, &config.unit_label).is_none());
    assert!(views::plot_series(&empty).is_none());

    let (first, snapshot) = generator.tick();
    let series = views::plot_series(&snapshot).unwrap();
    assert_eq!(series.trend, Trend::Insufficient);
    assert!(series.fitted.is_none());
    assert_eq!(views::current_timestamp(&snapshot).as_deref(), Some("2025-02-10 09:30:00"));
    assert_eq!(
        views::current_value(&snapshot, 1, "°C"),
        Some(format!("{:.1} °C", first.value()))
    );

    let mut last = first;
    for _ in 0..9 {
        let (reading, _) = generator.tick();
        last = reading;
    }

    let snapshot = generator.snapshot();
    assert_eq!(snapshot.len(), config.window_capacity);
    assert_eq!(snapshot.latest(), Some(&last));
    assert_eq!(views::current_timestamp(&snapshot).as_deref(), Some("2025-02-10 09:30:27"));

    let rows = views::table_rows(&snapshot, config.precision);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].timestamp, "2025-02-10 09:30:15");

    let series = views::plot_series(&snapshot).unwrap();
    let fitted = series.fitted.expect("five points have a trend");
    assert_eq!(fitted.len(), series.points.len());
    assert_eq!(series.points.first().map(|p| p.0), Some(0.0));
    assert_eq!(series.points.last().map(|p| p.0), Some(12.0));

    for &(_, value) in &series.points {
        assert!((config.min_value..=config.max_value).contains(&value));
    }
}

#[test]
fn test_config_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yml");
    fs::write(
        &path,
        r#"
update_interval_secs: 1
window_capacity: 10
min_value: -40.0
max_value: -30.0
precision: 2
title: "South Pole Station"
show_sidebar: false
links: []
"#,
    )
    .unwrap();

    let config = DashboardConfig::load_from_path(&path).unwrap();
    assert_eq!(config.update_interval_secs, 1);
    assert_eq!(config.window_capacity, 10);
    assert_eq!(config.precision, 2);
    assert_eq!(config.title, "South Pole Station");
    assert!(!config.show_sidebar);
    assert!(config.links.is_empty());
    assert_eq!(config.unit_label, "°C");

    let generator = ReadingGenerator::from_config(&config).unwrap();
    assert_eq!(generator.window().capacity(), 10);
}

#[test]
fn test_invalid_config_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yml");
    fs::write(&path, "min_value: -10.0\nmax_value: -20.0\n").unwrap();

    let err = DashboardConfig::load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("min_value"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.yml");
    assert!(DashboardConfig::load_from_path(&path).is_err());
}

#[test]
fn test_example_config_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config.example.yml");
    let config = DashboardConfig::load_from_path(&path).unwrap();
    assert_eq!(config.window_capacity, 5);
    assert_eq!(config.links.len(), 2);
}
