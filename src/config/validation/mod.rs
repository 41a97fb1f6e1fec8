mod error;
mod config_validator;

pub use config_validator::ConfigValidator;
pub use error::ValidationError;
