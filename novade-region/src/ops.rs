//! Public set operations on regions and region lists.
//!
//! The named functions ([`intersection`], [`union`], [`symmetric_difference`],
//! [`complement`], [`not_in`]) accept any mix of [`Region`] and
//! [`RegionList`] operands and return `Result`. The operator traits
//! (`&`, `|`, `^`, `!`) are implemented for the same combinations, owned or
//! borrowed, and panic if the underlying combination fails.
//!
//! Every result is a freshly built canonical [`RegionList`]; operands are
//! never modified.
//!
//! ```
//! use novade_region::{Region, RegionList};
//!
//! let a = Region::new(0, 99, 0, 99);
//! let b = Region::new(25, 74, 25, 74);
//!
//! assert_eq!((a & b).as_slice(), &[b]);
//! assert_eq!((a | b).as_slice(), &[a]);
//! assert_eq!((a ^ b).len(), 4);
//! assert!((RegionList::from(a) & !a).is_empty());
//! ```

use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::error::RegionError;
use crate::region::Region;
use crate::region_list::RegionList;
use crate::sweep::{SetOperation, SetOperationEngine};

/// Anything that can be viewed as a list of regions.
pub trait RegionSet {
    fn as_regions(&self) -> &[Region];
}

impl RegionSet for Region {
    fn as_regions(&self) -> &[Region] {
        std::slice::from_ref(self)
    }
}

impl RegionSet for RegionList {
    fn as_regions(&self) -> &[Region] {
        self.as_slice()
    }
}

impl RegionSet for [Region] {
    fn as_regions(&self) -> &[Region] {
        self
    }
}

impl RegionSet for Vec<Region> {
    fn as_regions(&self) -> &[Region] {
        self.as_slice()
    }
}

impl<T: RegionSet + ?Sized> RegionSet for &T {
    fn as_regions(&self) -> &[Region] {
        (**self).as_regions()
    }
}

fn combine<A, B>(a: &A, b: &B, op: SetOperation) -> Result<RegionList, RegionError>
where
    A: RegionSet + ?Sized,
    B: RegionSet + ?Sized,
{
    SetOperationEngine::default().combine(a.as_regions(), b.as_regions(), op)
}

/// Points covered by both `a` and `b`.
pub fn intersection<A, B>(a: &A, b: &B) -> Result<RegionList, RegionError>
where
    A: RegionSet + ?Sized,
    B: RegionSet + ?Sized,
{
    combine(a, b, SetOperation::And)
}

/// Points covered by `a` or `b`.
pub fn union<A, B>(a: &A, b: &B) -> Result<RegionList, RegionError>
where
    A: RegionSet + ?Sized,
    B: RegionSet + ?Sized,
{
    combine(a, b, SetOperation::Or)
}

/// Points covered by exactly one of `a` and `b`.
pub fn symmetric_difference<A, B>(a: &A, b: &B) -> Result<RegionList, RegionError>
where
    A: RegionSet + ?Sized,
    B: RegionSet + ?Sized,
{
    combine(a, b, SetOperation::Xor)
}

/// Points covered by `a` but not by `b`.
pub fn not_in<A, B>(a: &A, b: &B) -> Result<RegionList, RegionError>
where
    A: RegionSet + ?Sized,
    B: RegionSet + ?Sized,
{
    combine(a, b, SetOperation::Difference)
}

/// Points of the plane not covered by `a`.
pub fn complement<A>(a: &A) -> Result<RegionList, RegionError>
where
    A: RegionSet + ?Sized,
{
    combine(&Region::infinite(), a, SetOperation::Xor)
}

fn expect_combined(result: Result<RegionList, RegionError>) -> RegionList {
    match result {
        Ok(list) => list,
        Err(err) => panic!("region set operation failed: {}", err),
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $func:ident, $lhs:ty, $rhs:ty) => {
        impl $trait<$rhs> for $lhs {
            type Output = RegionList;

            /// # Panics
            ///
            /// Panics if the sweep reports a [`RegionError`].
            fn $method(self, rhs: $rhs) -> RegionList {
                expect_combined($func(&self, &rhs))
            }
        }
    };
}

macro_rules! impl_binary_ops {
    ($trait:ident, $method:ident, $func:ident) => {
        impl_binary_op!($trait, $method, $func, RegionList, RegionList);
        impl_binary_op!($trait, $method, $func, RegionList, &RegionList);
        impl_binary_op!($trait, $method, $func, &RegionList, RegionList);
        impl_binary_op!($trait, $method, $func, &RegionList, &RegionList);
        impl_binary_op!($trait, $method, $func, RegionList, Region);
        impl_binary_op!($trait, $method, $func, &RegionList, Region);
        impl_binary_op!($trait, $method, $func, Region, RegionList);
        impl_binary_op!($trait, $method, $func, Region, &RegionList);
        impl_binary_op!($trait, $method, $func, Region, Region);
    };
}

impl_binary_ops!(BitAnd, bitand, intersection);
impl_binary_ops!(BitOr, bitor, union);
impl_binary_ops!(BitXor, bitxor, symmetric_difference);

impl Not for Region {
    type Output = RegionList;

    fn not(self) -> RegionList {
        expect_combined(complement(&self))
    }
}

impl Not for RegionList {
    type Output = RegionList;

    fn not(self) -> RegionList {
        expect_combined(complement(&self))
    }
}

impl Not for &RegionList {
    type Output = RegionList;

    fn not(self) -> RegionList {
        expect_combined(complement(self))
    }
}
