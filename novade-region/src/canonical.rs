//! Normalization of region lists into canonical form.
//!
//! A canonical list has no empty entries, no two entries that could be
//! replaced by their bounding box without changing the covered set, and is
//! sorted ascending by [`Region`] order. Merging can expose new merge
//! candidates, so the pairwise scan runs until a full pass changes nothing.

use crate::region::Region;
use crate::region_list::RegionList;

/// Canonicalizes `list` in place.
///
/// Exact for lists whose overlapping members are nested or share a full
/// edge; use a set operation (for example `list | RegionList::new()`) to
/// normalize arbitrary overlapping input.
pub fn sort_and_merge(list: &mut RegionList) {
    list.sort_and_merge();
}

/// Builds a canonical [`RegionList`] from raw pieces.
pub(crate) fn canonicalize(mut regions: Vec<Region>) -> RegionList {
    normalize(&mut regions);
    RegionList::from(regions)
}

pub(crate) fn normalize(regions: &mut Vec<Region>) {
    let mut passes = 0usize;
    loop {
        passes += 1;
        regions.retain(|r| !r.is_empty());

        let mut made_change = false;
        let mut i = 0;
        while i < regions.len() {
            let mut j = i + 1;
            while j < regions.len() {
                if mergeable(&regions[i], &regions[j]) {
                    let absorbed = regions.remove(j);
                    regions[i].merge(&absorbed);
                    made_change = true;
                    // the grown region may now absorb an entry we already passed
                    j = i + 1;
                    continue;
                }
                j += 1;
            }
            i += 1;
        }

        if !made_change {
            break;
        }
    }

    regions.sort();
    tracing::trace!(passes, regions = regions.len(), "Canonicalized region list");
}

/// Returns `true` if the bounding box of `c` and `p` equals their union.
pub(crate) fn mergeable(c: &Region, p: &Region) -> bool {
    if p.inside(c) || c.inside(p) {
        return true;
    }

    if c.left() == p.left() && c.right() == p.right() {
        return touches(c.bottom(), c.top(), p.bottom(), p.top());
    }

    if c.bottom() == p.bottom() && c.top() == p.top() {
        return touches(c.left(), c.right(), p.left(), p.right());
    }

    false
}

/// Closed ranges `[a0, a1]` and `[b0, b1]` overlap or are exactly adjacent.
fn touches(a0: i32, a1: i32, b0: i32, b1: i32) -> bool {
    i64::from(a0) <= i64::from(b1) + 1 && i64::from(b0) <= i64::from(a1) + 1
}

pub(crate) fn is_canonical(regions: &[Region]) -> bool {
    if regions.iter().any(Region::is_empty) {
        return false;
    }
    if regions.windows(2).any(|w| w[0] > w[1]) {
        return false;
    }
    for (i, a) in regions.iter().enumerate() {
        for b in &regions[i + 1..] {
            if a.intersects(b) || mergeable(a, b) {
                return false;
            }
        }
    }
    true
}
