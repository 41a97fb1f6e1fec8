use crate::config::{
    validation::{config_validator::ConfigValidator, error::ValidationError},
    MAX_PRECISION,
};

/// Slack for scaled bounds that land a hair off an integer, e.g. `0.3 * 10`.
const GRID_EPSILON: f64 = 1e-9;

impl ConfigValidator {
    /// Checks the bounds and precision together and returns the lowest and
    /// highest values with `precision` decimals that lie inside `[min, max]`.
    pub fn validate_range(
        min_value: f64,
        max_value: f64,
        precision: u32,
    ) -> Result<(f64, f64), ValidationError> {
        Self::validate_bounds(min_value, max_value)?;

        if precision > MAX_PRECISION {
            return Err(ValidationError::new(
                "precision",
                format!("Must be between 0 and {}, got {}", MAX_PRECISION, precision),
            ));
        }

        let factor = 10f64.powi(precision as i32);
        let low = snap(min_value * factor, f64::ceil) / factor;
        let high = snap(max_value * factor, f64::floor) / factor;

        if !low.is_finite() || !high.is_finite() || !(high - low).is_finite() {
            return Err(ValidationError::new(
                "precision",
                format!(
                    "{} decimals overflow the range {} to {}",
                    precision, min_value, max_value
                ),
            ));
        }

        if low > high {
            return Err(ValidationError::new(
                "precision",
                format!(
                    "No value with {} decimals lies between {} and {}",
                    precision, min_value, max_value
                ),
            ));
        }

        Ok((low, high))
    }
}

fn snap(scaled: f64, inward: fn(f64) -> f64) -> f64 {
    let nearest = scaled.round();
    if (scaled - nearest).abs() < GRID_EPSILON {
        nearest
    } else {
        inward(scaled)
    }
}
