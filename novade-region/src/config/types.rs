//! Configuration data structures for NovaDE Region.
//!
//! All structs deny unknown fields and fall back to the values in
//! [`super::defaults`] for anything left out.

use super::defaults;
use serde::Deserialize;

/// Settings for the `tracing` subscriber installed by [`crate::logging::init_logging`].
///
/// # Examples
///
/// ```
/// use novade_region::config::LoggingConfig;
///
/// let config: LoggingConfig = toml::from_str(r#"level = "debug""#).unwrap();
/// assert_eq!(config.level, "debug");
/// assert_eq!(config.format, "text");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of "trace", "debug", "info", "warn", "error" (case-insensitive).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Either "text" or "json" (case-insensitive).
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Tuning switches for [`crate::SetOperationEngine`].
///
/// Neither switch changes results, only how they are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Join neighbouring sweep bands with identical coverage during the sweep.
    #[serde(default = "defaults::default_bool_true")]
    pub coalesce_bands: bool,
    /// Use the closed-form combiners when both operands are single rectangles.
    #[serde(default = "defaults::default_bool_true")]
    pub pairwise_fast_path: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        defaults::default_engine_config()
    }
}

/// Root configuration for the region library.
///
/// ```
/// use novade_region::config::RegionConfig;
///
/// let config: RegionConfig = toml::from_str(
///     r#"
///     [engine]
///     coalesce_bands = false
///     "#,
/// )
/// .unwrap();
/// assert!(!config.engine.coalesce_bands);
/// assert!(config.engine.pairwise_fast_path);
/// assert_eq!(config.logging.level, "info");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionConfig {
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    #[serde(default = "defaults::default_engine_config")]
    pub engine: EngineConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert!(config.coalesce_bands);
        assert!(config.pairwise_fast_path);
    }

    #[test]
    fn test_region_config_deserialize_empty() {
        let config: RegionConfig = toml::from_str("").unwrap();
        assert_eq!(config, RegionConfig::default());
    }

    #[test]
    fn test_region_config_deserialize_full() {
        let config: RegionConfig = toml::from_str(
            r#"
            [logging]
            level = "trace"
            format = "json"

            [engine]
            coalesce_bands = false
            pairwise_fast_path = false
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.format, "json");
        assert!(!config.engine.coalesce_bands);
        assert!(!config.engine.pairwise_fast_path);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(toml::from_str::<RegionConfig>("[engine]\nturbo = true").is_err());
        assert!(toml::from_str::<RegionConfig>("[metrics]\nenabled = true").is_err());
    }
}
