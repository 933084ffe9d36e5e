//! An owned sequence of [`Region`]s describing an arbitrary planar set.

use crate::canonical;
use crate::error::RegionError;
use crate::region::Region;
use std::fmt;
use std::ops::Deref;

/// An ordered list of regions whose union describes a set of integer points.
///
/// Lists returned by the set operations are canonical: pairwise disjoint,
/// free of empty entries, not mergeable, and sorted by [`Region`] order. A
/// list built by hand may be anything until [`RegionList::sort_and_merge`]
/// or a set operation normalizes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RegionList {
    regions: Vec<Region>,
}

impl RegionList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { regions: Vec::new() }
    }

    /// Creates an empty list with room for `capacity` regions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { regions: Vec::with_capacity(capacity) }
    }

    /// Appends a region without normalizing.
    pub fn push(&mut self, region: Region) {
        self.regions.push(region);
    }

    /// Removes every region.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Returns the regions as a slice.
    pub fn as_slice(&self) -> &[Region] {
        &self.regions
    }

    /// Consumes the list and returns its regions.
    pub fn into_vec(self) -> Vec<Region> {
        self.regions
    }

    /// Returns the region at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::OutOfRange`] when `index` is past the end of the list.
    pub fn region_at(&self, index: usize) -> Result<Region, RegionError> {
        self.regions
            .get(index)
            .copied()
            .ok_or(RegionError::OutOfRange { index, len: self.regions.len() })
    }

    /// Returns `true` if any member region contains the point.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.regions.iter().any(|r| r.contains(x, y))
    }

    /// Normalizes the list in place into its canonical form.
    pub fn sort_and_merge(&mut self) {
        canonical::normalize(&mut self.regions);
    }

    /// Consumes the list and returns its canonical form.
    pub fn into_canonical(mut self) -> Self {
        self.sort_and_merge();
        self
    }

    /// Checks the canonical-form invariant without modifying the list.
    pub fn is_canonical(&self) -> bool {
        canonical::is_canonical(&self.regions)
    }
}

impl Deref for RegionList {
    type Target = [Region];

    fn deref(&self) -> &[Region] {
        &self.regions
    }
}

impl From<Vec<Region>> for RegionList {
    fn from(regions: Vec<Region>) -> Self {
        Self { regions }
    }
}

impl From<Region> for RegionList {
    fn from(region: Region) -> Self {
        Self { regions: vec![region] }
    }
}

impl<const N: usize> From<[Region; N]> for RegionList {
    fn from(regions: [Region; N]) -> Self {
        Self { regions: regions.to_vec() }
    }
}

impl FromIterator<Region> for RegionList {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        Self { regions: iter.into_iter().collect() }
    }
}

impl Extend<Region> for RegionList {
    fn extend<I: IntoIterator<Item = Region>>(&mut self, iter: I) {
        self.regions.extend(iter);
    }
}

impl IntoIterator for RegionList {
    type Item = Region;
    type IntoIter = std::vec::IntoIter<Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.into_iter()
    }
}

impl<'a> IntoIterator for &'a RegionList {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

impl fmt::Display for RegionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.regions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", r)?;
        }
        Ok(())
    }
}
