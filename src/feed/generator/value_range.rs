use rand::Rng;

use crate::config::{ConfigValidator, ValidationError};

/// Closed sampling interval plus the number of decimals kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
    precision: u32,
    /// Lowest and highest values with `precision` decimals inside `[min, max]`.
    grid: (f64, f64),
}

impl ValueRange {
    pub fn new(min: f64, max: f64, precision: u32) -> Result<Self, ValidationError> {
        let grid = ConfigValidator::validate_range(min, max, precision)?;
        Ok(Self {
            min,
            max,
            precision,
            grid,
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Uniform sample from `[min, max]`, rounded to `precision` decimals.
    /// Rounding past a bound lands on the nearest grid value inside it.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        let raw = rng.gen_range(self.min..=self.max);
        let (low, high) = self.grid;
        self.round(raw).clamp(low, high)
    }

    fn round(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.precision as i32);
        (value * factor).round() / factor
    }
}
