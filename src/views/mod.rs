//! Projections of a window snapshot for the dashboard cards.
//!
//! All of these are pure: same snapshot in, same projection out.

mod plot;

use serde::Serialize;

use crate::feed::Snapshot;

pub use plot::{plot_series, PlotSeries, PLOT_TIME_FORMAT};

/// One line of the recent-readings table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub value: String,
    pub timestamp: String,
}

pub fn format_value(value: f64, precision: u32, unit: &str) -> String {
    format!("{:.*} {}", precision as usize, value, unit)
}

/// Latest value with its unit, e.g. `-17.2 °C`.
pub fn current_value(snapshot: &Snapshot, precision: u32, unit: &str) -> Option<String> {
    snapshot
        .latest()
        .map(|reading| format_value(reading.value(), precision, unit))
}

pub fn current_timestamp(snapshot: &Snapshot) -> Option<String> {
    snapshot.latest().map(|reading| reading.formatted_timestamp())
}

/// Rows in window order, oldest first.
pub fn table_rows(snapshot: &Snapshot, precision: u32) -> Vec<TableRow> {
    snapshot
        .readings()
        .iter()
        .map(|reading| TableRow {
            value: format!("{:.*}", precision as usize, reading.value()),
            timestamp: reading.formatted_timestamp(),
        })
        .collect()
}
