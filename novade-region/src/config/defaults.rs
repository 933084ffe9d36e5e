//! Default configuration values for NovaDE Region.
//!
//! These functions are used by `serde`'s `default` attribute in the
//! configuration structures when a value is not present in the source.

use crate::config::{EngineConfig, LoggingConfig};

/// Returns the default `LoggingConfig`.
pub(super) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        format: default_log_format(),
    }
}

/// Returns the default log level string (`"info"`).
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// Returns the default log format string (`"text"`).
pub(super) fn default_log_format() -> String {
    "text".to_string()
}

/// Returns the default `EngineConfig`.
pub(super) fn default_engine_config() -> EngineConfig {
    EngineConfig {
        coalesce_bands: default_bool_true(),
        pairwise_fast_path: default_bool_true(),
    }
}

pub(super) fn default_bool_true() -> bool {
    true
}
