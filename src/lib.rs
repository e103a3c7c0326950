// termdash library - public API

// Re-export error types
pub mod error;
pub use error::{DashError, Result};

// Module declarations
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use core::config::Config;

/// Initialize logging.
///
/// Defaults to `warn` so log lines do not tear the dashboard; `RUST_LOG`
/// overrides it.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
