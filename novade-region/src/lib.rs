//! # NovaDE Region
//!
//! Exact set algebra on integer rectangles, used for surface damage, input,
//! opaque and clip regions.
//!
//! - [`Region`]: a closed axis-aligned rectangle with inclusive `i32` bounds.
//!   Sides may be infinite, using `i32::MIN` / `i32::MAX` as sentinels.
//! - [`RegionList`]: a list of regions describing their union. Results of
//!   set operations are canonical: disjoint, non-mergeable and sorted.
//! - [`sort_and_merge`]: normalizes a list in place.
//! - Set operations: `&` (intersection), `|` (union), `^` (symmetric
//!   difference), `!` (complement) and [`not_in`] (difference), for any mix
//!   of regions and lists. Fallible named forms live in [`ops`].
//! - [`SetOperationEngine`]: the plane sweep behind the operators, with
//!   tuning via [`config::EngineConfig`].
//!
//! ```
//! use novade_region::{not_in, Region, RegionList};
//!
//! let screen = Region::new(0, 1919, 0, 1079);
//! let damage = RegionList::from([Region::new(100, 199, 100, 199), Region::new(150, 249, 150, 249)]);
//!
//! let visible = &damage & screen;
//! assert!(visible.is_canonical());
//! assert!(visible.contains(240, 240));
//!
//! let untouched = not_in(&screen, &damage).unwrap();
//! assert!(!untouched.contains(120, 120));
//! ```

pub mod canonical;
pub mod config;
pub mod error;
pub mod logging;
pub mod ops;
pub mod pairwise;
pub mod region;
pub mod region_list;
pub mod sweep;

pub use canonical::sort_and_merge;
pub use error::{ConfigError, CoverageSource, LoggingError, RegionError};
pub use ops::{complement, intersection, not_in, symmetric_difference, union, RegionSet};
pub use region::Region;
pub use region_list::RegionList;
pub use sweep::{SetOperation, SetOperationEngine};
