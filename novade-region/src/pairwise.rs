//! Closed-form combinations of exactly two rectangles.
//!
//! These avoid the general sweep when both operands are single regions.
//! Every function returns pairwise-disjoint pieces and finishes by
//! canonicalizing, since neighbouring pieces may still be mergeable.

use crate::canonical::canonicalize;
use crate::error::CoverageSource;
use crate::region::Region;
use crate::region_list::RegionList;

/// `a & b` for two rectangles.
pub fn intersection(a: &Region, b: &Region) -> RegionList {
    let mut overlap = *a;
    overlap.intersect(b);
    if overlap.is_empty() {
        RegionList::new()
    } else {
        RegionList::from(overlap)
    }
}

/// `a | b` for two rectangles.
pub fn union(a: &Region, b: &Region) -> RegionList {
    if a.is_empty() || b.is_empty() || !a.intersects(b) {
        return canonicalize(vec![*a, *b]);
    }
    if a == b || a.inside(b) {
        return RegionList::from(*b);
    }
    if b.inside(a) {
        return RegionList::from(*a);
    }

    let mut overlap = *a;
    overlap.intersect(b);

    let mut pieces = Vec::with_capacity(3);
    if same_y(a, &overlap) {
        // a sits within b's rows: keep b whole, add a's columns left and right of b
        pieces.push(*b);
        push_outside_x(a, b, &mut pieces);
    } else if same_y(b, &overlap) {
        pieces.push(*a);
        push_outside_x(b, a, &mut pieces);
    } else if same_x(a, &overlap) {
        pieces.push(*b);
        push_outside_y(a, b, &mut pieces);
    } else if same_x(b, &overlap) {
        pieces.push(*a);
        push_outside_y(b, a, &mut pieces);
    } else {
        // staggered corners: overlap rows across both, then whatever sticks out above and below
        pieces.push(Region::new(
            a.left().min(b.left()),
            a.right().max(b.right()),
            overlap.bottom(),
            overlap.top(),
        ));

        let upper = if a.top() > overlap.top() { a } else { b };
        if upper.top() > overlap.top() {
            pieces.push(Region::new(upper.left(), upper.right(), overlap.top() + 1, upper.top()));
        }

        let lower = if a.bottom() < overlap.bottom() { a } else { b };
        if lower.bottom() < overlap.bottom() {
            pieces.push(Region::new(lower.left(), lower.right(), lower.bottom(), overlap.bottom() - 1));
        }
    }

    canonicalize(pieces)
}

/// `a ^ b` for two rectangles.
pub fn symmetric_difference(a: &Region, b: &Region) -> RegionList {
    if a.is_empty() || b.is_empty() || !a.intersects(b) {
        return canonicalize(vec![*a, *b]);
    }
    if a == b {
        return RegionList::new();
    }

    let pieces = boundary_strips(a, b).into_iter().map(|(r, _)| r).collect();
    canonicalize(pieces)
}

/// The part of `a` not covered by `b`.
pub fn difference(a: &Region, b: &Region) -> RegionList {
    if a.is_empty() {
        return RegionList::new();
    }
    if b.is_empty() || !a.intersects(b) {
        return RegionList::from(*a);
    }

    let pieces = boundary_strips(a, b)
        .into_iter()
        .filter(|(_, owner)| *owner == CoverageSource::A)
        .map(|(r, _)| r)
        .collect();
    canonicalize(pieces)
}

/// Splits `a ^ b` into up to four disjoint strips, one per differing side.
///
/// Left and right strips take the full height of the rectangle reaching
/// further on that side. Bottom and top strips are limited to the overlap's
/// columns so they never cover a corner already owned by a side strip.
/// Requires `a` and `b` to be non-empty and intersecting.
fn boundary_strips(a: &Region, b: &Region) -> Vec<(Region, CoverageSource)> {
    let ol = a.left().max(b.left());
    let or = a.right().min(b.right());
    let mut strips = Vec::with_capacity(4);

    if a.left() != b.left() {
        let (src, owner) = pick(a, b, a.left() < b.left());
        strips.push((Region::new(src.left(), ol - 1, src.bottom(), src.top()), owner));
    }

    if a.bottom() != b.bottom() {
        let (src, owner) = pick(a, b, a.bottom() < b.bottom());
        let nt = a.bottom().max(b.bottom()) - 1;
        strips.push((Region::new(ol, or, src.bottom(), nt), owner));
    }

    if a.right() != b.right() {
        let (src, owner) = pick(a, b, a.right() > b.right());
        strips.push((Region::new(or + 1, src.right(), src.bottom(), src.top()), owner));
    }

    if a.top() != b.top() {
        let (src, owner) = pick(a, b, a.top() > b.top());
        let nb = a.top().min(b.top()) + 1;
        strips.push((Region::new(ol, or, nb, src.top()), owner));
    }

    strips
}

fn pick<'a>(a: &'a Region, b: &'a Region, take_a: bool) -> (&'a Region, CoverageSource) {
    if take_a {
        (a, CoverageSource::A)
    } else {
        (b, CoverageSource::B)
    }
}

fn same_x(r: &Region, o: &Region) -> bool {
    r.left() == o.left() && r.right() == o.right()
}

fn same_y(r: &Region, o: &Region) -> bool {
    r.bottom() == o.bottom() && r.top() == o.top()
}

/// Pushes the columns of `piece` lying left and right of `outer`.
fn push_outside_x(piece: &Region, outer: &Region, out: &mut Vec<Region>) {
    if piece.left() < outer.left() {
        out.push(Region::new(piece.left(), outer.left() - 1, piece.bottom(), piece.top()));
    }
    if piece.right() > outer.right() {
        out.push(Region::new(outer.right() + 1, piece.right(), piece.bottom(), piece.top()));
    }
}

/// Pushes the rows of `piece` lying below and above `outer`.
fn push_outside_y(piece: &Region, outer: &Region, out: &mut Vec<Region>) {
    if piece.bottom() < outer.bottom() {
        out.push(Region::new(piece.left(), piece.right(), piece.bottom(), outer.bottom() - 1));
    }
    if piece.top() > outer.top() {
        out.push(Region::new(piece.left(), piece.right(), outer.top() + 1, piece.top()));
    }
}
