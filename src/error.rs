use thiserror::Error;

use crate::config::ValidationError;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Config error: {0}")]
    ConfigError(#[from] ValidationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
