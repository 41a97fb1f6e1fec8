//! Simulated temperature feed: readings, the bounded history window and the
//! generator that fills it.

pub mod clock;
pub mod generator;
pub mod reading;
pub mod window;

pub use clock::{Clock, ManualClock, SystemClock};
pub use generator::{ReadingGenerator, ValueRange};
pub use reading::{Reading, TIMESTAMP_FORMAT};
pub use window::{HistoryWindow, Snapshot};
