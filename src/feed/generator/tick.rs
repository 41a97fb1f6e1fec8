use rand::Rng;

use crate::{
    feed::{Clock, Reading, Snapshot},
    log_debug,
};

use super::ReadingGenerator;

impl<R: Rng, C: Clock> ReadingGenerator<R, C> {
    /// Generate one reading, append it, and return it with the updated window.
    pub fn tick(&mut self) -> (Reading, Snapshot) {
        let value = self.range.sample(&mut self.rng);
        let reading = Reading::new(value, self.clock.now());

        self.window.append(reading.clone());
        let snapshot = self.window.snapshot();

        log_debug!(
            "New reading {} at {} (window {}/{})",
            reading.value(),
            reading.formatted_timestamp(),
            snapshot.len(),
            self.window.capacity()
        );

        (reading, snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::feed::{HistoryWindow, ManualClock, ValueRange};
    use chrono::{NaiveDate, TimeDelta};
    use rand::{rngs::StdRng, SeedableRng};

    fn generator(capacity: usize) -> ReadingGenerator<StdRng, ManualClock> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
        ReadingGenerator::with_parts(
            HistoryWindow::new(capacity).unwrap(),
            ValueRange::new(-18.0, -16.0, 1).unwrap(),
            StdRng::seed_from_u64(42),
            ManualClock::new(start, TimeDelta::seconds(3)),
        )
    }

    #[test]
    fn test_tick_returns_reading_and_updated_snapshot() {
        let mut generator = generator(5);
        let (reading, snapshot) = generator.tick();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.latest(), Some(&reading));
        assert_eq!(reading.formatted_timestamp(), "2024-01-01 12:00:00");
    }

    #[test]
    fn test_ticks_fill_then_slide() {
        let mut generator = generator(5);
        let mut produced = Vec::new();
        for _ in 0..8 {
            let (reading, _) = generator.tick();
            produced.push(reading);
        }

        let snapshot = generator.snapshot();
        assert_eq!(snapshot.len(), 5);
        assert_eq!(snapshot.readings(), &produced[3..]);
        assert_eq!(
            snapshot.latest().map(|r| r.formatted_timestamp()),
            Some("2024-01-01 12:00:21".to_string())
        );
    }

    #[test]
    fn test_values_stay_in_bounds() {
        let mut generator = generator(3);
        for _ in 0..500 {
            let (reading, _) = generator.tick();
            assert!((-18.0..=-16.0).contains(&reading.value()));
        }
    }

    #[test]
    fn test_from_config_rejects_bad_config() {
        let config = DashboardConfig {
            window_capacity: 0,
            ..DashboardConfig::default()
        };
        assert!(ReadingGenerator::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config_starts_empty() {
        let generator = ReadingGenerator::from_config(&DashboardConfig::default()).unwrap();
        assert!(generator.window().is_empty());
        assert_eq!(generator.window().capacity(), 5);
    }
}
