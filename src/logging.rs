//! Logging setup
//!
//! `RUST_LOG` controls the level. A TUI can't log to stdout, so when a log file
//! is given everything goes there; otherwise only warnings reach stderr.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Default filter when logging to a file
pub const FILE_FILTER: &str = "debug";

/// Default filter when logging to stderr
pub const STDERR_FILTER: &str = "warn";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_target(false);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;

            builder
                .with_env_filter(env_filter(FILE_FILTER))
                .with_writer(Mutex::new(file))
                .with_ansi(false) // No color codes in log file
                .try_init()
        }
        None => builder
            .with_env_filter(env_filter(STDERR_FILTER))
            .with_writer(std::io::stderr)
            .try_init(),
    }
    .map_err(|err| anyhow::anyhow!(err))
    .context("failed to install logger")
}
