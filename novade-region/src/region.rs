//! The integer rectangle primitive used for damage, input, opaque and clip regions.
//!
//! A [`Region`] is a closed, axis-aligned rectangle with inclusive integer
//! bounds. Unbounded sides are expressed with the sentinel values
//! [`i32::MIN`] (left/bottom) and [`i32::MAX`] (right/top). All mutating
//! arithmetic saturates at those sentinels instead of wrapping.

use crate::error::RegionError;
use std::cmp::Ordering;
use std::fmt;

const NEG_INF: i32 = i32::MIN;
const POS_INF: i32 = i32::MAX;

/// A closed axis-aligned rectangle with inclusive integer bounds.
///
/// The region is empty when `right < left` or `top < bottom`. Operations that
/// collapse an axis use the canonical empty form `right = left - 1`
/// (respectively `top = bottom - 1`).
///
/// # Examples
///
/// ```
/// use novade_region::Region;
///
/// let r = Region::new(0, 99, 0, 99);
/// assert_eq!(r.size_x(), 100);
/// assert!(Region::default().is_empty());
/// assert!(Region::infinite().is_infinite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    left: i32,
    right: i32,
    bottom: i32,
    top: i32,
}

impl Default for Region {
    fn default() -> Self {
        Self::empty()
    }
}

impl Region {
    /// Creates a region from its four inclusive bounds.
    pub const fn new(left: i32, right: i32, bottom: i32, top: i32) -> Self {
        Self { left, right, bottom, top }
    }

    /// Creates the canonical empty region.
    pub const fn empty() -> Self {
        Self { left: 0, right: -1, bottom: 0, top: -1 }
    }

    /// Creates a region covering the whole plane.
    pub const fn infinite() -> Self {
        Self { left: NEG_INF, right: POS_INF, bottom: NEG_INF, top: POS_INF }
    }

    /// Creates a region from an offset and a size.
    pub fn from_size(offset_x: i32, offset_y: i32, size_x: i32, size_y: i32) -> Self {
        let mut r = Self::empty();
        r.reset_by_size(offset_x, offset_y, size_x, size_y);
        r
    }

    /// Left bound, inclusive.
    pub const fn left(&self) -> i32 {
        self.left
    }

    /// Right bound, inclusive.
    pub const fn right(&self) -> i32 {
        self.right
    }

    /// Bottom bound, inclusive.
    pub const fn bottom(&self) -> i32 {
        self.bottom
    }

    /// Top bound, inclusive.
    pub const fn top(&self) -> i32 {
        self.top
    }

    /// Horizontal offset, the same as [`Region::left`].
    pub const fn offset_x(&self) -> i32 {
        self.left
    }

    /// Vertical offset, the same as [`Region::bottom`].
    pub const fn offset_y(&self) -> i32 {
        self.bottom
    }

    /// Width of the region, or 0 when either horizontal side is infinite.
    pub fn size_x(&self) -> i32 {
        if self.is_infinite_x() {
            return 0;
        }
        span(self.left, self.right)
    }

    /// Height of the region, or 0 when either vertical side is infinite.
    pub fn size_y(&self) -> i32 {
        if self.is_infinite_y() {
            return 0;
        }
        span(self.bottom, self.top)
    }

    /// Returns bound `index` in the order left, right, bottom, top.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::OutOfRange`] when `index >= 4`.
    pub fn bound(&self, index: usize) -> Result<i32, RegionError> {
        match index {
            0 => Ok(self.left),
            1 => Ok(self.right),
            2 => Ok(self.bottom),
            3 => Ok(self.top),
            _ => Err(RegionError::OutOfRange { index, len: 4 }),
        }
    }

    /// Resets to the canonical empty region.
    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    /// Replaces all four bounds.
    pub fn reset(&mut self, left: i32, right: i32, bottom: i32, top: i32) {
        *self = Self::new(left, right, bottom, top);
    }

    /// Resets to the whole plane.
    pub fn reset_infinite(&mut self) {
        *self = Self::infinite();
    }

    /// Sets the offset and size; the far bounds saturate at the infinite sentinels.
    pub fn reset_by_size(&mut self, offset_x: i32, offset_y: i32, size_x: i32, size_y: i32) {
        self.left = offset_x;
        self.bottom = offset_y;
        self.right = far_bound(offset_x, size_x);
        self.top = far_bound(offset_y, size_y);
    }

    /// Moves the region so its low corner is at `(offset_x, offset_y)`, preserving its size.
    ///
    /// On an infinite axis only the low bound moves. An empty region becomes
    /// the canonical empty region at the new offset.
    pub fn set_offset(&mut self, offset_x: i32, offset_y: i32) {
        if self.is_empty() {
            self.left = offset_x;
            self.bottom = offset_y;
            self.right = offset_x.saturating_sub(1);
            self.top = offset_y.saturating_sub(1);
            return;
        }

        if self.is_infinite_x() {
            self.left = offset_x;
        } else {
            let sx = self.size_x();
            self.left = offset_x;
            self.right = far_bound(offset_x, sx);
        }

        if self.is_infinite_y() {
            self.bottom = offset_y;
        } else {
            let sy = self.size_y();
            self.bottom = offset_y;
            self.top = far_bound(offset_y, sy);
        }
    }

    /// Resizes the region, leaving left and bottom untouched.
    pub fn set_size(&mut self, size_x: i32, size_y: i32) {
        self.right = far_bound(self.left, size_x);
        self.top = far_bound(self.bottom, size_y);
    }

    /// Returns `true` if the region covers no points.
    pub const fn is_empty(&self) -> bool {
        self.right < self.left || self.top < self.bottom
    }

    /// Returns `true` if any side is at its infinite sentinel.
    pub const fn is_infinite(&self) -> bool {
        self.is_infinite_x() || self.is_infinite_y()
    }

    /// Returns `true` if the left or right side is infinite.
    pub const fn is_infinite_x(&self) -> bool {
        self.is_infinite_left() || self.is_infinite_right()
    }

    /// Returns `true` if the bottom or top side is infinite.
    pub const fn is_infinite_y(&self) -> bool {
        self.is_infinite_bottom() || self.is_infinite_top()
    }

    /// Returns `true` if the left side is `i32::MIN`.
    pub const fn is_infinite_left(&self) -> bool {
        self.left == NEG_INF
    }

    /// Returns `true` if the right side is `i32::MAX`.
    pub const fn is_infinite_right(&self) -> bool {
        self.right == POS_INF
    }

    /// Returns `true` if the bottom side is `i32::MIN`.
    pub const fn is_infinite_bottom(&self) -> bool {
        self.bottom == NEG_INF
    }

    /// Returns `true` if the top side is `i32::MAX`.
    pub const fn is_infinite_top(&self) -> bool {
        self.top == POS_INF
    }

    /// Returns `true` if this region lies within `other` on all four sides.
    pub const fn inside(&self, other: &Region) -> bool {
        self.left >= other.left
            && self.right <= other.right
            && self.bottom >= other.bottom
            && self.top <= other.top
    }

    /// Returns `true` if the closed bound ranges overlap on both axes.
    pub const fn intersects(&self, other: &Region) -> bool {
        self.left <= other.right
            && self.right >= other.left
            && self.bottom <= other.top
            && self.top >= other.bottom
    }

    /// Returns `true` if column `x` lies within the horizontal bounds.
    pub const fn contains_x(&self, x: i32) -> bool {
        self.left <= x && x <= self.right
    }

    /// Returns `true` if row `y` lies within the vertical bounds.
    pub const fn contains_y(&self, y: i32) -> bool {
        self.bottom <= y && y <= self.top
    }

    /// Returns `true` if the point `(x, y)` lies within the region.
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        self.contains_x(x) && self.contains_y(y)
    }

    /// Clamps this region to its overlap with `other`.
    ///
    /// An axis without overlap collapses to its canonical empty form.
    pub fn intersect(&mut self, other: &Region) {
        self.left = self.left.max(other.left);
        self.right = self.right.min(other.right);
        if self.right < self.left {
            self.right = self.left.saturating_sub(1);
        }

        self.bottom = self.bottom.max(other.bottom);
        self.top = self.top.min(other.top);
        if self.top < self.bottom {
            self.top = self.bottom.saturating_sub(1);
        }
    }

    /// Replaces this region with the bounding box of itself and `other`.
    ///
    /// This is not a set union: it is only exact when the bounding box is
    /// already known to equal the union of the two regions.
    pub fn merge(&mut self, other: &Region) {
        self.left = self.left.min(other.left);
        self.right = self.right.max(other.right);
        self.bottom = self.bottom.min(other.bottom);
        self.top = self.top.max(other.top);
    }

    /// Expands each side outwards by the given amount; negative amounts contract.
    ///
    /// Sides already at an infinite sentinel are left alone. Arithmetic
    /// saturates at the sentinels, and an axis whose extent becomes invalid
    /// collapses to its canonical empty form.
    pub fn grow(&mut self, left: i32, right: i32, bottom: i32, top: i32) {
        if !self.is_infinite_left() {
            self.left = self.left.saturating_sub(left);
        }
        if !self.is_infinite_right() {
            self.right = self.right.saturating_add(right);
        }
        if self.right < self.left {
            self.right = self.left.saturating_sub(1);
        }

        if !self.is_infinite_bottom() {
            self.bottom = self.bottom.saturating_sub(bottom);
        }
        if !self.is_infinite_top() {
            self.top = self.top.saturating_add(top);
        }
        if self.top < self.bottom {
            self.top = self.bottom.saturating_sub(1);
        }
    }

    /// Grows all four sides by `amount`.
    pub fn grow_uniform(&mut self, amount: i32) {
        self.grow(amount, amount, amount, amount);
    }

    /// Grows left and right by `x`, bottom and top by `y`.
    pub fn grow_xy(&mut self, x: i32, y: i32) {
        self.grow(x, x, y, y);
    }

    /// Contracts each side inwards by the given amount.
    pub fn shrink(&mut self, left: i32, right: i32, bottom: i32, top: i32) {
        self.grow(
            left.saturating_neg(),
            right.saturating_neg(),
            bottom.saturating_neg(),
            top.saturating_neg(),
        );
    }

    /// Shrinks all four sides by `amount`.
    pub fn shrink_uniform(&mut self, amount: i32) {
        self.shrink(amount, amount, amount, amount);
    }

    /// Shrinks left and right by `x`, bottom and top by `y`.
    pub fn shrink_xy(&mut self, x: i32, y: i32) {
        self.shrink(x, x, y, y);
    }

    fn sort_key(&self) -> (i32, i32, i32, i32) {
        (self.bottom, self.left, self.top, self.right)
    }
}

/// `high - low + 1`, saturated into `i32`.
fn span(low: i32, high: i32) -> i32 {
    let s = i64::from(high) - i64::from(low) + 1;
    s.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// `offset + size - 1`, saturated into `i32`.
fn far_bound(offset: i32, size: i32) -> i32 {
    let b = i64::from(offset) + i64::from(size) - 1;
    b.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

// Regions sort by (bottom, left, top, right).
impl Ord for Region {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Region {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region( {}, {}, {}, {} )", self.left, self.right, self.bottom, self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let r = Region::default();
        assert!(r.is_empty());
        assert_eq!(r, Region::new(0, -1, 0, -1));
        assert!(!r.is_infinite());
    }

    #[test]
    fn test_size() {
        let r = Region::new(0, 99, 0, 99);
        assert_eq!(r.size_x(), 100);
        assert_eq!(r.size_y(), 100);
    }

    #[test]
    fn test_size_of_infinite_side_is_zero() {
        let r = Region::new(i32::MIN, 10, 0, 9);
        assert_eq!(r.size_x(), 0);
        assert_eq!(r.size_y(), 10);
        assert_eq!(Region::infinite().size_x(), 0);
        assert_eq!(Region::infinite().size_y(), 0);
    }

    #[test]
    fn test_reset_by_size() {
        let mut r = Region::new(0, 99, 0, 99);
        r.reset_by_size(25, 25, 50, 50);
        assert_eq!(r.right(), 74);
        assert_eq!(r.top(), 74);
        assert_eq!(r.offset_x(), 25);
        assert_eq!(r.offset_y(), 25);
    }

    #[test]
    fn test_equality() {
        let a = Region::new(0, 99, 0, 99);
        let b = Region::new(25, 74, 25, 74);
        let c = a;
        assert_eq!(a, c);
        assert_ne!(c, b);
    }

    #[test]
    fn test_intersect_nested() {
        let a = Region::new(0, 99, 0, 99);
        let b = Region::new(25, 74, 25, 74);
        let mut c = a;
        c.intersect(&b);
        assert_eq!(c, b);
    }

    #[test]
    fn test_intersect_disjoint_collapses_axis() {
        let mut c = Region::new(0, 9, 0, 9);
        c.intersect(&Region::new(20, 29, 5, 14));
        assert!(c.is_empty());
        assert_eq!(c.left(), 20);
        assert_eq!(c.right(), 19);
        assert_eq!(c.bottom(), 5);
        assert_eq!(c.top(), 9);
    }

    #[test]
    fn test_inside_and_intersects() {
        let a = Region::new(0, 99, 0, 99);
        let b = Region::new(25, 74, 25, 74);
        assert!(b.inside(&a));
        assert!(!a.inside(&b));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&Region::new(100, 120, 0, 99)));
        assert!(a.intersects(&Region::new(99, 120, 99, 120)));
    }

    #[test]
    fn test_merge_is_bounding_box() {
        let mut a = Region::new(0, 9, 0, 9);
        a.merge(&Region::new(20, 29, 30, 39));
        assert_eq!(a, Region::new(0, 29, 0, 39));
    }

    #[test]
    fn test_grow_and_shrink() {
        let mut r = Region::new(10, 19, 10, 19);
        r.grow_uniform(5);
        assert_eq!(r, Region::new(5, 24, 5, 24));
        r.shrink_xy(5, 0);
        assert_eq!(r, Region::new(10, 19, 5, 24));
        r.shrink(0, 0, 20, 20);
        assert!(r.is_empty());
        assert_eq!(r.top(), r.bottom() - 1);
    }

    #[test]
    fn test_grow_skips_infinite_sides() {
        let mut r = Region::infinite();
        r.grow_uniform(10);
        assert_eq!(r, Region::infinite());
        r.shrink_uniform(10);
        assert_eq!(r, Region::infinite());

        let mut half = Region::new(i32::MIN, 0, 0, 0);
        half.grow(3, 3, 3, 3);
        assert_eq!(half, Region::new(i32::MIN, 3, -3, 3));
    }

    #[test]
    fn test_grow_saturates_at_sentinels() {
        let mut r = Region::new(i32::MIN + 1, i32::MAX - 1, 0, 0);
        r.grow_xy(10, 0);
        assert!(r.is_infinite_left());
        assert!(r.is_infinite_right());
    }

    #[test]
    fn test_set_offset_preserves_size() {
        let mut r = Region::new(0, 9, 0, 4);
        r.set_offset(100, 200);
        assert_eq!(r, Region::new(100, 109, 200, 204));

        let mut e = Region::default();
        e.set_offset(5, 6);
        assert_eq!(e, Region::new(5, 4, 6, 5));
        assert!(e.is_empty());
    }

    #[test]
    fn test_set_offset_on_infinite_axis_moves_low_bound_only() {
        let mut half = Region::new(i32::MIN, 10, 0, 9);
        half.set_offset(5, 20);
        assert_eq!(half, Region::new(5, 10, 20, 29));

        let mut upward = Region::new(0, 9, 3, i32::MAX);
        upward.set_offset(-4, -8);
        assert_eq!(upward, Region::new(-4, 5, -8, i32::MAX));

        let mut plane = Region::infinite();
        plane.set_offset(5, 20);
        assert_eq!(plane, Region::new(5, i32::MAX, 20, i32::MAX));
        assert!(plane.is_infinite_right() && plane.is_infinite_top());
        assert!(!plane.is_infinite_left() && !plane.is_infinite_bottom());
    }

    #[test]
    fn test_set_size() {
        let mut r = Region::new(3, 4, 5, 6);
        r.set_size(10, 20);
        assert_eq!(r, Region::new(3, 12, 5, 24));
    }

    #[test]
    fn test_bound_index() {
        let r = Region::new(1, 2, 3, 4);
        assert_eq!(r.bound(0), Ok(1));
        assert_eq!(r.bound(3), Ok(4));
        assert_eq!(r.bound(4), Err(RegionError::OutOfRange { index: 4, len: 4 }));
    }

    #[test]
    fn test_ordering_bottom_then_left() {
        let mut v = vec![
            Region::new(5, 9, 0, 9),
            Region::new(0, 4, 10, 19),
            Region::new(0, 4, 0, 9),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![Region::new(0, 4, 0, 9), Region::new(5, 9, 0, 9), Region::new(0, 4, 10, 19)]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Region::new(1, 2, 3, 4).to_string(), "region( 1, 2, 3, 4 )");
    }
}
