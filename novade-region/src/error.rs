//! Error handling for the NovaDE region library.
//!
//! Three error enums are defined here, all built with `thiserror`:
//!
//! - [`RegionError`]: failures of the region algebra itself. Every variant is
//!   fatal for the combinator call that produced it; no partial result is
//!   returned.
//! - [`ConfigError`]: failures while reading, parsing, or validating a
//!   [`crate::config::RegionConfig`].
//! - [`LoggingError`]: failures while installing the `tracing` subscriber.

use std::path::PathBuf;
use thiserror::Error;

/// Identifies which operand of a two-list combination a coverage count belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverageSource {
    /// The left-hand operand.
    A,
    /// The right-hand operand.
    B,
}

impl std::fmt::Display for CoverageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoverageSource::A => write!(f, "a"),
            CoverageSource::B => write!(f, "b"),
        }
    }
}

/// Errors produced by region and region list operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    /// An index was outside the valid range of a region's bounds or a list's elements.
    #[error("Index {index} out of range (length {len})")]
    OutOfRange { index: usize, len: usize },

    /// A sweep band's coverage count for one operand would have gone negative.
    #[error("Invalid edge count for {list} list at y = {y}")]
    InconsistentCoverage { list: CoverageSource, y: i64 },

    /// A sweep band would have to be split beyond an infinite sentinel coordinate.
    #[error("Cannot split sweep band at infinite boundary {at}")]
    InfiniteSplit { at: i32 },
}

/// Error type for configuration-related operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error occurred while attempting to read a configuration file.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text was not valid TOML or did not match the schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but contains invalid values.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Error type for logging initialization.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The global subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),

    /// The configured level or format is not recognized.
    #[error("Failed to set log filter: {0}")]
    FilterError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_region_error_display() {
        let err = RegionError::OutOfRange { index: 4, len: 4 };
        assert_eq!(err.to_string(), "Index 4 out of range (length 4)");

        let err = RegionError::InconsistentCoverage { list: CoverageSource::B, y: 12 };
        assert_eq!(err.to_string(), "Invalid edge count for b list at y = 12");

        let err = RegionError::InfiniteSplit { at: i32::MAX };
        assert!(err.to_string().contains("infinite boundary"));
    }

    #[test]
    fn test_config_read_error_has_source() {
        let err = ConfigError::ReadError {
            path: PathBuf::from("/nonexistent/region.toml"),
            source: IoError::new(ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("region.toml"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_parse_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: ConfigError = toml_err.into();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
