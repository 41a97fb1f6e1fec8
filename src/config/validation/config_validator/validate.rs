use crate::{
    config::{
        validation::{config_validator::ConfigValidator, error::ValidationError},
        DashboardConfig,
    },
    log_debug,
};

impl ConfigValidator {
    /// Check a config before anything is built from it.
    pub fn validate(config: &DashboardConfig) -> Result<(), ValidationError> {
        log_debug!("Validating config: {:?}", config);

        if config.window_capacity == 0 {
            return Err(ValidationError::new(
                "window_capacity",
                "Must be at least 1",
            ));
        }

        if config.update_interval_secs == 0 {
            return Err(ValidationError::new(
                "update_interval_secs",
                "Must be at least 1 second",
            ));
        }

        Self::validate_range(config.min_value, config.max_value, config.precision)?;
        Ok(())
    }
}
