pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod feed;
pub mod trend;
pub mod ui;
pub mod util;
pub mod views;

pub use app::App;
pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
