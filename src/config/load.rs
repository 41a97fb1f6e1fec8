use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::Result,
    log_info,
};

use super::{ConfigValidator, DashboardConfig};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "ANTARCTIC_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "config.yml";

impl DashboardConfig {
    /// Parse and validate a config from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: DashboardConfig = serde_yaml::from_str(yaml)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        log_info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the startup config: `ANTARCTIC_CONFIG` if set, then
    /// `./config.yml` if it exists, then the built-in defaults.
    pub fn load() -> Result<Self> {
        match Self::resolve_path(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from)) {
            Some(path) => Self::load_from_path(&path),
            None => {
                let config = Self::default();
                ConfigValidator::validate(&config)?;
                log_info!("No config file found, using defaults");
                Ok(config)
            }
        }
    }

    fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        if explicit.is_some() {
            return explicit;
        }
        let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
        fallback.exists().then_some(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins_even_if_missing() {
        let explicit = PathBuf::from("/definitely/not/here.yml");
        assert_eq!(
            DashboardConfig::resolve_path(Some(explicit.clone())),
            Some(explicit)
        );
    }

    #[test]
    fn test_from_yaml_rejects_invalid_values() {
        let err = DashboardConfig::from_yaml("window_capacity: 0\n").unwrap_err();
        assert!(err.to_string().contains("window_capacity"));
    }

    #[test]
    fn test_from_yaml_rejects_malformed_yaml() {
        assert!(DashboardConfig::from_yaml("window_capacity: [").is_err());
    }
}
