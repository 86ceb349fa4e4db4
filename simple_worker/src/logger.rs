//! Process-wide logger.

use env_logger::{Builder, Env};
use log::SetLoggerError;

/// Install `env_logger` as the global `log` backend, `info` unless `RUST_LOG`
/// says otherwise.
///
/// Fails if a logger is already installed; callers treat that as fatal.
pub fn init() -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or("info")).try_init()
}
