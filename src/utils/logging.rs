//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Default filter when `RUST_LOG` is unset; keeps stderr quiet around prompts.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Setup logging for the gate
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();
}
