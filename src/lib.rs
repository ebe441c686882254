// goto Library - Public API

// Re-export error types
pub mod error;
pub use error::{GotoError, Result};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use core::config::Config;

/// Initialize logging
///
/// Defaults to `warn` so that stdout stays clean for the shell wrapper;
/// override with `RUST_LOG`. Records go to stderr.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
