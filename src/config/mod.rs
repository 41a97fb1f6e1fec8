//! Dashboard configuration.
//!
//! Everything here is read once at startup. A config that fails validation
//! stops the process before the terminal is touched.

mod load;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use load::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
pub use validation::{ConfigValidator, ValidationError};

pub const DEFAULT_UPDATE_INTERVAL_SECS: u64 = 3;
pub const DEFAULT_WINDOW_CAPACITY: usize = 5;
pub const DEFAULT_MIN_VALUE: f64 = -18.0;
pub const DEFAULT_MAX_VALUE: f64 = -16.0;
pub const DEFAULT_PRECISION: u32 = 1;
pub const MAX_PRECISION: u32 = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Seconds between two generated readings.
    pub update_interval_secs: u64,
    /// How many readings the history window keeps.
    pub window_capacity: usize,
    /// Lower sampling bound (inclusive).
    pub min_value: f64,
    /// Upper sampling bound (inclusive).
    pub max_value: f64,
    /// Decimal places kept on each generated value.
    pub precision: u32,
    pub unit_label: String,
    pub title: String,
    pub subtitle: String,
    pub show_sidebar: bool,
    pub links: Vec<Link>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            update_interval_secs: DEFAULT_UPDATE_INTERVAL_SECS,
            window_capacity: DEFAULT_WINDOW_CAPACITY,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            precision: DEFAULT_PRECISION,
            unit_label: "°C".to_string(),
            title: "Antarctic Explorer".to_string(),
            subtitle: "A demonstration of real-time temperature readings in Antarctica.".to_string(),
            show_sidebar: true,
            links: vec![
                Link::new("GitHub Source", "https://github.com/denisecase/cintel-05-cintel"),
                Link::new("GitHub Pages", "https://denisecase.github.io/cintel-05-cintel/"),
                Link::new("Ratatui", "https://ratatui.rs/"),
                Link::new("Tokio", "https://tokio.rs/"),
            ],
        }
    }
}

impl DashboardConfig {
    pub fn update_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.update_interval_secs)
    }
}
