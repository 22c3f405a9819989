//! Pool resolution: active range minus paused sub-ranges.
//!
//! ```text
//! active  = 1-10
//! paused  = [3-4], [7]
//! pool    = 1-2,5-6,8-10     (complement)
//! paused# = 3                (union size; overlaps counted once)
//! ```
//!
//! The pool is what the cursor walker consumes.  Both values are caches over
//! the limit record's text fields and are always recomputed, never edited.

use crate::{RangeSet, SeedRange};

/// Identifiers of `total` not covered by any set in `excluded`.
///
/// Exclusions are merged first (touching exclusions count as one), then each
/// range of `total` is emitted minus the exclusions, in ascending order.
/// Returns the empty set when `total` is empty.
pub fn complement(total: &RangeSet, excluded: &[RangeSet]) -> RangeSet {
    if total.is_empty() {
        return RangeSet::empty();
    }
    let merged_excluded = RangeSet::from_ranges(
        excluded.iter().flat_map(|set| set.ranges().iter().copied()),
    );
    if merged_excluded.is_empty() {
        return total.clone();
    }

    let mut out: Vec<SeedRange> = Vec::new();
    for &SeedRange { start, end } in total.ranges() {
        let mut cursor = start;
        let mut exhausted = false;
        for ex in merged_excluded.ranges() {
            if ex.end < cursor {
                continue;
            }
            if ex.start > end {
                break;
            }
            if cursor < ex.start {
                out.push(SeedRange { start: cursor, end: (ex.start - 1).min(end) });
            }
            match ex.end.checked_add(1) {
                Some(next) => cursor = cursor.max(next),
                None => {
                    exhausted = true;
                    break;
                }
            }
        }
        if !exhausted && cursor <= end {
            out.push(SeedRange { start: cursor, end });
        }
    }
    RangeSet::from_ranges(out)
}

/// Number of distinct identifiers across all `inputs`.
pub fn union_size(inputs: &[RangeSet]) -> u64 {
    RangeSet::from_ranges(inputs.iter().flat_map(|set| set.ranges().iter().copied())).size()
}

// ── PoolSummary ───────────────────────────────────────────────────────────────

/// The derived figures shown next to a session's limit record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolSummary {
    /// Identifiers in the active range.
    pub total: u64,
    /// Identifiers still eligible for consumption.
    pub pool: RangeSet,
    /// Distinct identifiers across all paused reasons.
    pub total_paused: u64,
}

impl PoolSummary {
    pub fn resolve(active: &RangeSet, paused: &[RangeSet]) -> Self {
        Self {
            total:        active.size(),
            pool:         complement(active, paused),
            total_paused: union_size(paused),
        }
    }

    /// Identifiers available in the pool.
    pub fn available(&self) -> u64 {
        self.pool.size()
    }
}
