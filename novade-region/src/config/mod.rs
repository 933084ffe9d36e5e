//! Configuration for the region library.
//!
//! - [`types`]: [`RegionConfig`], [`EngineConfig`] and [`LoggingConfig`].
//! - [`defaults`]: default values used when fields are missing.
//! - [`loader`]: [`ConfigLoader`], which parses TOML and validates the result.
//!
//! # Examples
//!
//! ```
//! use novade_region::config::ConfigLoader;
//! use novade_region::SetOperationEngine;
//!
//! let config = ConfigLoader::load_from_str("[engine]\ncoalesce_bands = false").unwrap();
//! let engine = SetOperationEngine::new(config.engine);
//! assert!(!engine.config().coalesce_bands);
//! ```

mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, LoggingConfig, RegionConfig};
