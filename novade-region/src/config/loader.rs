//! Loading and validation of [`RegionConfig`].
//!
//! Configuration is read from TOML, either from a string or from an explicit
//! file path. After parsing, [`ConfigLoader::validate_config`] lowercases the
//! logging level and format and rejects values the logging module does not
//! understand.

use std::fs;
use std::path::Path;

use crate::config::RegionConfig;
use crate::error::ConfigError;

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_FORMATS: [&str; 2] = ["text", "json"];

/// Namespace for the configuration loading functions.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parses and validates configuration from TOML text.
    ///
    /// Empty or whitespace-only input yields the default configuration.
    pub fn load_from_str(content: &str) -> Result<RegionConfig, ConfigError> {
        let mut config: RegionConfig = if content.trim().is_empty() {
            RegionConfig::default()
        } else {
            toml::from_str(content)?
        };
        Self::validate_config(&mut config)?;
        Ok(config)
    }

    /// Reads, parses and validates the configuration file at `path`.
    pub fn load_from_path(path: &Path) -> Result<RegionConfig, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::load_from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded region configuration");
        Ok(config)
    }

    /// Normalizes and checks the logging settings.
    pub fn validate_config(config: &mut RegionConfig) -> Result<(), ConfigError> {
        let level = config.logging.level.to_lowercase();
        if !VALID_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                config.logging.level
            )));
        }
        config.logging.level = level;

        let format = config.logging.format.to_lowercase();
        if !VALID_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log format: {}",
                config.logging.format
            )));
        }
        config.logging.format = format;

        Ok(())
    }
}
