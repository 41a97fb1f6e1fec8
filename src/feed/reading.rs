use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Display format for reading timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One simulated sensor sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    value: f64,
    timestamp: NaiveDateTime,
}

impl Reading {
    /// Sub-second precision is dropped from `timestamp`.
    pub fn new(value: f64, timestamp: NaiveDateTime) -> Self {
        Self {
            value,
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
