mod new;
mod tick;
mod value_range;

use rand::rngs::StdRng;

use crate::feed::{HistoryWindow, Snapshot, SystemClock};

pub use value_range::ValueRange;

/// Produces one reading per tick and appends it to the history window.
///
/// The window is owned here; readers get copies through [`Self::snapshot`].
#[derive(Debug)]
pub struct ReadingGenerator<R = StdRng, C = SystemClock> {
    window: HistoryWindow,
    range: ValueRange,
    rng: R,
    clock: C,
}

impl<R, C> ReadingGenerator<R, C> {
    pub fn window(&self) -> &HistoryWindow {
        &self.window
    }

    pub fn range(&self) -> &ValueRange {
        &self.range
    }

    pub fn snapshot(&self) -> Snapshot {
        self.window.snapshot()
    }
}
