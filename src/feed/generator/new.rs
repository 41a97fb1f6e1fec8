use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::{ConfigValidator, DashboardConfig, ValidationError},
    feed::{Clock, HistoryWindow, SystemClock},
    log_info,
};

use super::{ReadingGenerator, ValueRange};

impl ReadingGenerator {
    /// Generator backed by OS entropy and the local wall clock.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, ValidationError> {
        ConfigValidator::validate(config)?;

        let window = HistoryWindow::new(config.window_capacity)?;
        let range = ValueRange::new(config.min_value, config.max_value, config.precision)?;

        log_info!(
            "Reading generator ready: capacity={}, range=[{}, {}], precision={}",
            config.window_capacity, config.min_value, config.max_value, config.precision
        );

        Ok(Self::with_parts(window, range, StdRng::from_entropy(), SystemClock))
    }
}

impl<R: Rng, C: Clock> ReadingGenerator<R, C> {
    pub fn with_parts(window: HistoryWindow, range: ValueRange, rng: R, clock: C) -> Self {
        Self {
            window,
            range,
            rng,
            clock,
        }
    }
}
