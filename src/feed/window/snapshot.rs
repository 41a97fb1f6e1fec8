use serde::{Deserialize, Serialize};

use crate::feed::Reading;

use super::HistoryWindow;

/// Point-in-time copy of the window, oldest reading first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    readings: Vec<Reading>,
}

impl Snapshot {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self { readings }
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn latest(&self) -> Option<&Reading> {
        self.readings.last()
    }

    pub fn values(&self) -> Vec<f64> {
        self.readings.iter().map(Reading::value).collect()
    }
}

impl HistoryWindow {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.readings.iter().cloned().collect())
    }
}
