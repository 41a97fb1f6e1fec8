mod append;
mod snapshot;

use std::collections::VecDeque;

use crate::config::ValidationError;
use crate::feed::Reading;

pub use snapshot::Snapshot;

/// Fixed-capacity FIFO of the most recent readings, oldest first.
#[derive(Debug, Clone)]
pub struct HistoryWindow {
    capacity: usize,
    readings: VecDeque<Reading>,
}

impl HistoryWindow {
    pub fn new(capacity: usize) -> Result<Self, ValidationError> {
        if capacity == 0 {
            return Err(ValidationError::new(
                "window_capacity",
                "Must be at least 1",
            ));
        }

        Ok(Self {
            capacity,
            readings: VecDeque::with_capacity(capacity),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn latest(&self) -> Option<&Reading> {
        self.readings.back()
    }
}
