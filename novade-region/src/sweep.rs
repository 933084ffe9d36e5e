//! General plane-sweep combination of two region lists.
//!
//! Every non-empty input rectangle contributes a start edge at its bottom row
//! and a stop edge one row above its top. Edges are processed in ascending
//! row order against a set of horizontal bands that always partition the
//! whole x axis. Each band carries how many rectangles of each operand cover
//! it and the row at which that coverage began. Whenever an edge changes a
//! band whose coverage satisfies the [`SetOperation`], the rows accumulated
//! since the band opened are emitted as an output rectangle.
//!
//! Bands live in a `Vec` ordered by x and are addressed by index, so splits
//! and joins never invalidate a cursor held elsewhere.

use crate::canonical::canonicalize;
use crate::config::EngineConfig;
use crate::error::{CoverageSource, RegionError};
use crate::pairwise;
use crate::region::Region;
use crate::region_list::RegionList;

/// The boolean predicate applied to per-operand coverage counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOperation {
    /// Covered by both operands.
    And,
    /// Covered by either operand.
    Or,
    /// Covered by exactly one operand.
    Xor,
    /// Covered by the first operand and not the second.
    Difference,
}

impl SetOperation {
    /// Evaluates the predicate for the given coverage counts.
    pub const fn holds(self, in_a: u32, in_b: u32) -> bool {
        match self {
            SetOperation::And => in_a > 0 && in_b > 0,
            SetOperation::Or => in_a > 0 || in_b > 0,
            SetOperation::Xor => (in_a > 0) != (in_b > 0),
            SetOperation::Difference => in_a > 0 && in_b == 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeKind {
    Start,
    Stop,
}

/// A horizontal span entering or leaving coverage at row `y`.
#[derive(Debug, Clone, Copy)]
struct Edge {
    left: i32,
    right: i32,
    y: i64,
    in_a: u32,
    in_b: u32,
    kind: EdgeKind,
}

/// A maximal x interval with uniform coverage since row `open_y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Band {
    left: i32,
    right: i32,
    open_y: i64,
    in_a: u32,
    in_b: u32,
}

impl Band {
    fn whole_line() -> Self {
        Self { left: i32::MIN, right: i32::MAX, open_y: i64::MIN, in_a: 0, in_b: 0 }
    }

    /// The rectangle covered by this band from `open_y` up to, not including, `y`.
    fn close(&self, y: i64) -> Region {
        Region::new(self.left, self.right, to_bound(self.open_y), to_bound(y - 1))
    }

    fn apply(&mut self, edge: &Edge) -> Result<(), RegionError> {
        match edge.kind {
            EdgeKind::Start => {
                self.in_a = self.in_a.saturating_add(edge.in_a);
                self.in_b = self.in_b.saturating_add(edge.in_b);
            }
            EdgeKind::Stop => {
                self.in_a = self.in_a.checked_sub(edge.in_a).ok_or(
                    RegionError::InconsistentCoverage { list: CoverageSource::A, y: edge.y },
                )?;
                self.in_b = self.in_b.checked_sub(edge.in_b).ok_or(
                    RegionError::InconsistentCoverage { list: CoverageSource::B, y: edge.y },
                )?;
            }
        }
        self.open_y = edge.y;
        Ok(())
    }

    /// Two neighbouring bands may be joined when doing so cannot change
    /// anything emitted later.
    fn can_join(&self, next: &Band, op: SetOperation) -> bool {
        self.in_a == next.in_a
            && self.in_b == next.in_b
            && (self.open_y == next.open_y || !op.holds(self.in_a, self.in_b))
    }
}

fn to_bound(y: i64) -> i32 {
    y.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Combines region lists under a [`SetOperation`].
///
/// # Examples
///
/// ```
/// use novade_region::{Region, SetOperation, SetOperationEngine};
///
/// let engine = SetOperationEngine::default();
/// let a = [Region::new(0, 99, 0, 99)];
/// let b = [Region::new(-25, 24, -25, 24), Region::new(75, 124, 75, 124)];
/// let both = engine.combine(&a, &b, SetOperation::And).unwrap();
/// assert_eq!(both.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SetOperationEngine {
    config: EngineConfig,
}

impl SetOperationEngine {
    /// Creates an engine with the given tuning.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the engine's tuning.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the canonical list of points where `op` holds for the
    /// coverage of `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InconsistentCoverage`] or
    /// [`RegionError::InfiniteSplit`] if the sweep bookkeeping breaks; no
    /// partial result is produced.
    pub fn combine(
        &self,
        a: &[Region],
        b: &[Region],
        op: SetOperation,
    ) -> Result<RegionList, RegionError> {
        let la: Vec<Region> = a.iter().filter(|r| !r.is_empty()).copied().collect();
        let lb: Vec<Region> = b.iter().filter(|r| !r.is_empty()).copied().collect();

        if la.is_empty() && matches!(op, SetOperation::And | SetOperation::Difference) {
            return Ok(RegionList::new());
        }
        if lb.is_empty() && op == SetOperation::And {
            return Ok(RegionList::new());
        }

        if self.config.pairwise_fast_path && la.len() == 1 && lb.len() == 1 {
            tracing::trace!(?op, "Combining two single regions in closed form");
            let (ra, rb) = (&la[0], &lb[0]);
            return Ok(match op {
                SetOperation::And => pairwise::intersection(ra, rb),
                SetOperation::Or => pairwise::union(ra, rb),
                SetOperation::Xor => pairwise::symmetric_difference(ra, rb),
                SetOperation::Difference => pairwise::difference(ra, rb),
            });
        }

        let result = self.sweep(&la, &lb, op);
        if let Err(err) = &result {
            tracing::warn!(?op, error = %err, "Region sweep aborted");
        }
        result
    }

    fn sweep(&self, a: &[Region], b: &[Region], op: SetOperation) -> Result<RegionList, RegionError> {
        let mut edges = Vec::with_capacity(2 * (a.len() + b.len()));
        push_edges(&mut edges, a, 1, 0);
        push_edges(&mut edges, b, 0, 1);
        // keyed on geometry only, so swapping the operands replays the same edge order
        edges.sort_by_key(|e| (e.y, e.kind == EdgeKind::Start, e.left, e.right));

        tracing::debug!(?op, a = a.len(), b = b.len(), edges = edges.len(), "Running region sweep");

        let mut bands = vec![Band::whole_line()];
        let mut out = Vec::new();
        for edge in &edges {
            self.process_edge(&mut bands, edge, op, &mut out)?;
        }
        debug_assert!(bands.iter().all(|band| band.in_a == 0 && band.in_b == 0));

        let result = canonicalize(out);
        tracing::debug!(?op, regions = result.len(), bands = bands.len(), "Region sweep finished");
        Ok(result)
    }

    fn process_edge(
        &self,
        bands: &mut Vec<Band>,
        edge: &Edge,
        op: SetOperation,
        out: &mut Vec<Region>,
    ) -> Result<(), RegionError> {
        // bands cover the whole line, so some band always reaches edge.left
        let mut idx = bands.partition_point(|band| band.right < edge.left);

        if bands[idx].left < edge.left {
            let at = edge.left.checked_sub(1).ok_or(RegionError::InfiniteSplit { at: edge.left })?;
            split(bands, idx, at)?;
            idx += 1;
        }

        let first = idx;
        while idx < bands.len() && bands[idx].left <= edge.right {
            if bands[idx].right > edge.right {
                split(bands, idx, edge.right)?;
            }

            let band = &mut bands[idx];
            if op.holds(band.in_a, band.in_b) && band.open_y < edge.y {
                let region = band.close(edge.y);
                tracing::trace!(%region, "Emitting swept region");
                out.push(region);
            }
            band.apply(edge)?;
            idx += 1;
        }

        if self.config.coalesce_bands {
            coalesce(bands, first.saturating_sub(1), idx, op);
        }
        Ok(())
    }
}

fn push_edges(edges: &mut Vec<Edge>, regions: &[Region], in_a: u32, in_b: u32) {
    for r in regions {
        let (left, right) = (r.left(), r.right());
        edges.push(Edge { left, right, y: i64::from(r.bottom()), in_a, in_b, kind: EdgeKind::Start });
        edges.push(Edge { left, right, y: i64::from(r.top()) + 1, in_a, in_b, kind: EdgeKind::Stop });
    }
}

/// Splits band `idx` into `[left, at]` and `[at + 1, right]`.
fn split(bands: &mut Vec<Band>, idx: usize, at: i32) -> Result<(), RegionError> {
    let next_left = at.checked_add(1).ok_or(RegionError::InfiniteSplit { at })?;
    let mut upper = bands[idx];
    upper.left = next_left;
    bands[idx].right = at;
    bands.insert(idx + 1, upper);
    Ok(())
}

/// Joins equivalent neighbours among bands `lo..=hi`.
fn coalesce(bands: &mut Vec<Band>, lo: usize, hi: usize, op: SetOperation) {
    let mut end = hi.min(bands.len() - 1);
    let mut i = lo;
    while i < end {
        if bands[i].can_join(&bands[i + 1], op) {
            let next = bands.remove(i + 1);
            bands[i].right = next.right;
            end -= 1;
        } else {
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn exhaustive() -> SetOperationEngine {
        SetOperationEngine::new(EngineConfig { coalesce_bands: true, pairwise_fast_path: false })
    }

    fn plain() -> SetOperationEngine {
        SetOperationEngine::new(EngineConfig { coalesce_bands: false, pairwise_fast_path: false })
    }

    fn check_exact(a: &[Region], b: &[Region], op: SetOperation, range: std::ops::RangeInclusive<i32>) {
        for engine in [exhaustive(), plain(), SetOperationEngine::default()] {
            let out = engine.combine(a, b, op).unwrap();
            assert!(out.is_canonical(), "{:?}: {}", op, out);
            for x in range.clone() {
                for y in range.clone() {
                    let ia = a.iter().filter(|r| r.contains(x, y)).count() as u32;
                    let ib = b.iter().filter(|r| r.contains(x, y)).count() as u32;
                    assert_eq!(out.contains(x, y), op.holds(ia, ib), "{:?} at ({}, {})", op, x, y);
                }
            }
        }
    }

    #[test]
    fn test_predicates() {
        assert!(SetOperation::And.holds(1, 2));
        assert!(!SetOperation::And.holds(1, 0));
        assert!(SetOperation::Or.holds(0, 1));
        assert!(!SetOperation::Or.holds(0, 0));
        assert!(SetOperation::Xor.holds(2, 0));
        assert!(!SetOperation::Xor.holds(1, 1));
        assert!(SetOperation::Difference.holds(3, 0));
        assert!(!SetOperation::Difference.holds(3, 1));
    }

    #[test]
    fn test_intersection_of_list_with_corners() {
        let a = [Region::new(0, 99, 0, 99)];
        let b = [Region::new(-25, 24, -25, 24), Region::new(75, 124, 75, 124)];
        let out = exhaustive().combine(&a, &b, SetOperation::And).unwrap();
        assert_eq!(out.as_slice(), &[Region::new(0, 24, 0, 24), Region::new(75, 99, 75, 99)]);
    }

    #[test]
    fn test_union_of_overlapping_inputs_within_one_list() {
        let a = [Region::new(0, 9, 0, 9), Region::new(5, 14, 5, 14), Region::new(0, 9, 0, 9)];
        check_exact(&a, &[], SetOperation::Or, -2..=16);
    }

    #[test]
    fn test_all_operations_exact_on_mixed_lists() {
        let a = [Region::new(0, 9, 0, 9), Region::new(12, 20, 3, 15), Region::new(4, 6, 12, 18)];
        let b = [Region::new(5, 14, 5, 14), Region::new(-3, 2, -3, 20), Region::new(16, 22, 0, 1)];
        for op in [SetOperation::And, SetOperation::Or, SetOperation::Xor, SetOperation::Difference] {
            check_exact(&a, &b, op, -4..=23);
            check_exact(&b, &a, op, -4..=23);
        }
    }

    #[test]
    fn test_adjacent_inputs_merge() {
        let a = [Region::new(0, 9, 0, 9), Region::new(10, 19, 0, 9)];
        let out = exhaustive().combine(&a, &[], SetOperation::Or).unwrap();
        assert_eq!(out.as_slice(), &[Region::new(0, 19, 0, 9)]);
    }

    #[test]
    fn test_complement_against_infinite_region() {
        let inf = [Region::infinite()];
        let a = [Region::new(0, 9, 0, 9), Region::new(20, 29, 0, 9)];
        let out = exhaustive().combine(&inf, &a, SetOperation::Xor).unwrap();
        assert!(out.is_canonical());
        assert!(!out.contains(5, 5));
        assert!(!out.contains(25, 9));
        assert!(out.contains(15, 5));
        assert!(out.contains(i32::MIN, i32::MIN));
        assert!(out.contains(i32::MAX, i32::MAX));
        assert!(out.contains(0, i32::MAX));

        let back = exhaustive().combine(&inf, out.as_slice(), SetOperation::Xor).unwrap();
        assert_eq!(back.as_slice(), &[Region::new(0, 9, 0, 9), Region::new(20, 29, 0, 9)]);
    }

    #[test]
    fn test_top_at_sentinel_is_kept() {
        let a = [Region::new(0, 0, 5, i32::MAX), Region::new(0, 0, 0, 1)];
        let out = exhaustive().combine(&a, &[], SetOperation::Or).unwrap();
        assert_eq!(out.as_slice(), &[Region::new(0, 0, 0, 1), Region::new(0, 0, 5, i32::MAX)]);
    }

    #[test]
    fn test_empty_operands() {
        let a = [Region::new(0, 9, 0, 9)];
        let engine = exhaustive();
        assert!(engine.combine(&[], &a, SetOperation::And).unwrap().is_empty());
        assert!(engine.combine(&a, &[], SetOperation::And).unwrap().is_empty());
        assert!(engine.combine(&[], &a, SetOperation::Difference).unwrap().is_empty());
        assert_eq!(engine.combine(&a, &[Region::default()], SetOperation::Xor).unwrap().as_slice(), &a);
        assert_eq!(engine.combine(&a, &[], SetOperation::Difference).unwrap().as_slice(), &a);
    }

    #[test]
    fn test_split_at_sentinel_is_rejected() {
        let mut bands = vec![Band::whole_line()];
        assert_eq!(split(&mut bands, 0, i32::MAX), Err(RegionError::InfiniteSplit { at: i32::MAX }));
        assert_eq!(bands, vec![Band::whole_line()]);
    }

    #[test]
    fn test_stop_without_start_is_inconsistent() {
        let mut band = Band::whole_line();
        let stop = Edge { left: 0, right: 0, y: 3, in_a: 0, in_b: 1, kind: EdgeKind::Stop };
        assert_eq!(
            band.apply(&stop),
            Err(RegionError::InconsistentCoverage { list: CoverageSource::B, y: 3 })
        );
    }

    #[test]
    fn test_swapped_operands_give_identical_lists() {
        let a = [Region::new(5, 5, 4, 6), Region::new(3, 6, 6, 6)];
        let b = [Region::new(5, 6, 5, 7), Region::new(2, 5, 6, 6)];
        for engine in [exhaustive(), plain(), SetOperationEngine::default()] {
            for op in [SetOperation::And, SetOperation::Or, SetOperation::Xor] {
                assert_eq!(engine.combine(&a, &b, op).unwrap(), engine.combine(&b, &a, op).unwrap(), "{:?}", op);
            }
        }
    }

    #[test]
    fn test_coalesce_joins_only_equivalent_bands() {
        let mut bands = vec![
            Band { left: i32::MIN, right: -1, open_y: 4, in_a: 0, in_b: 0 },
            Band { left: 0, right: 9, open_y: 4, in_a: 1, in_b: 0 },
            Band { left: 10, right: 19, open_y: 4, in_a: 1, in_b: 0 },
            Band { left: 20, right: 29, open_y: 2, in_a: 1, in_b: 0 },
            Band { left: 30, right: i32::MAX, open_y: 9, in_a: 0, in_b: 0 },
        ];
        coalesce(&mut bands, 0, 4, SetOperation::Or);
        assert_eq!(
            bands,
            vec![
                Band { left: i32::MIN, right: -1, open_y: 4, in_a: 0, in_b: 0 },
                Band { left: 0, right: 19, open_y: 4, in_a: 1, in_b: 0 },
                Band { left: 20, right: 29, open_y: 2, in_a: 1, in_b: 0 },
                Band { left: 30, right: i32::MAX, open_y: 9, in_a: 0, in_b: 0 },
            ]
        );
    }
}
