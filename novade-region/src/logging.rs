//! Logging setup for consumers and tests of the region library.
//!
//! The library itself only emits `tracing` events. These helpers install a
//! `tracing-subscriber` formatter for binaries and tests that want to see them.

use crate::config::LoggingConfig;
use crate::error::LoggingError;

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Target of every event this crate emits.
const LOG_TARGET: &str = "novade_region";

/// Filter directive that shows this crate's events at `level` and only
/// warnings from everything else.
fn crate_directive(level: Level) -> String {
    format!("warn,{}={}", LOG_TARGET, level.as_str().to_lowercase())
}

/// Installs a stderr subscriber for the sweep and canonicalizer events.
///
/// `RUST_LOG` takes precedence when set. Otherwise region events are shown
/// from `info` up and other crates from `warn` up. Does nothing if a global
/// subscriber is already set.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(crate_directive(Level::INFO)));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

fn parse_level(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(LoggingError::FilterError(format!("Invalid log level: {}", other))),
    }
}

/// Installs the global subscriber described by `config`.
///
/// # Errors
///
/// Returns [`LoggingError::FilterError`] for an unknown level or format and
/// [`LoggingError::InitializationFailure`] if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let level = parse_level(&config.level)?;
    let filter = EnvFilter::new(crate_directive(level));

    let result = match config.format.to_lowercase().as_str() {
        "json" => fmt::Subscriber::builder()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .try_init(),
        "text" => fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
            .try_init(),
        other => {
            return Err(LoggingError::FilterError(format!("Invalid log format: {}", other)));
        }
    };

    result.map_err(|e| {
        LoggingError::InitializationFailure(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            e
        ))
    })
}
