// src/util/log.rs

//! File-backed logging for the TUI.
//!
//! The terminal belongs to ratatui while the dashboard runs, so every log
//! line goes to `logs/dashboard.log` through a `tracing` subscriber instead.
use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use tracing::Level;

pub const LOG_FILE_NAME: &str = "dashboard.log";

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Whether `log_debug!` lines are emitted. Set `DEBUG=true` to enable.
pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| {
        std::env::var("DEBUG").unwrap_or_default() == "true"
    })
}

/// Install the global subscriber writing to `<log_dir>/dashboard.log`.
///
/// The file is truncated on each start. Returns the path of the log file.
pub fn init(log_dir: &Path) -> std::io::Result<PathBuf> {
    create_dir_all(log_dir)?;
    let path = log_dir.join(LOG_FILE_NAME);
    let file = File::create(&path)?;

    let max_level = if debug_enabled() { Level::DEBUG } else { Level::INFO };

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(max_level)
        .try_init();

    Ok(path)
}

/// Convenience macro for error logging with formatting
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        ::tracing::error!($($arg)*);
    }};
}

/// Convenience macro for warning logging with formatting
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        ::tracing::warn!($($arg)*);
    }};
}

/// Convenience macro for info logging with formatting
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        ::tracing::info!($($arg)*);
    }};
}

/// Convenience macro for debug logging with formatting
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if $crate::util::log::debug_enabled() {
            ::tracing::debug!($($arg)*);
        }
    }};
}
