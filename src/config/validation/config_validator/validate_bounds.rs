use crate::config::validation::{config_validator::ConfigValidator, error::ValidationError};

impl ConfigValidator {
    pub fn validate_bounds(min_value: f64, max_value: f64) -> Result<(), ValidationError> {
        if !min_value.is_finite() {
            return Err(ValidationError::new(
                "min_value",
                format!("Must be a finite number, got {}", min_value),
            ));
        }

        if !max_value.is_finite() {
            return Err(ValidationError::new(
                "max_value",
                format!("Must be a finite number, got {}", max_value),
            ));
        }

        if min_value > max_value {
            return Err(ValidationError::new(
                "min_value",
                format!("Must not exceed max_value ({} > {})", min_value, max_value),
            ));
        }

        if !(max_value - min_value).is_finite() {
            return Err(ValidationError::new(
                "max_value",
                format!("Range is too wide to sample ({} to {})", min_value, max_value),
            ));
        }

        Ok(())
    }
}
