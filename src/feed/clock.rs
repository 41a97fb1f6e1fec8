use chrono::{Local, NaiveDateTime, TimeDelta};
use std::fmt::Debug;

/// Source of reading timestamps.
pub trait Clock: Send + Debug {
    fn now(&mut self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&mut self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Deterministic clock: returns `start`, then advances by `step` on every call.
#[derive(Debug, Clone)]
pub struct ManualClock {
    next: NaiveDateTime,
    step: TimeDelta,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime, step: TimeDelta) -> Self {
        Self { next: start, step }
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> NaiveDateTime {
        let current = self.next;
        self.next = current + self.step;
        current
    }
}
