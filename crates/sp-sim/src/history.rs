//! Historical projection for days that have no saved record.
//!
//! Past days are reconstructed by treating the pool as one flat index space
//! and stepping through it at a fixed stride:
//!
//! ```text
//! k      = day_offset × drops_per_day + drop
//! begin  = (k × step) mod |pool|
//! window = flat[begin ..= begin + step − 1]   (wrapping to flat[0])
//! ```
//!
//! The window is returned as the real ranges it covers, so a projection that
//! straddles a gap in the pool (or the wrap point) yields several pieces.

use sp_core::{RangeSet, SeedRange};

/// Ids the `absolute_drop`-th drop would have taken at `step` per drop.
///
/// Empty when the pool is empty or `step` is zero.  A step larger than the
/// pool is clamped to the whole pool.
pub fn project_interval(pool: &RangeSet, step: u64, absolute_drop: u64) -> Vec<SeedRange> {
    let total = pool.size();
    if total == 0 || step == 0 {
        return Vec::new();
    }
    let step = step.min(total);
    let begin = ((u128::from(absolute_drop) * u128::from(step)) % u128::from(total)) as u64;

    let head = (total - begin).min(step);
    let mut pieces = flat_window(pool, begin, head);
    if head < step {
        pieces.extend(flat_window(pool, 0, step - head));
    }
    pieces
}

/// Projection of every drop on the day `day_offset` days away.
pub fn project_day(pool: &RangeSet, step: u64, day_offset: u64, num_drops: usize) -> Vec<Vec<SeedRange>> {
    let base = day_offset.saturating_mul(num_drops as u64);
    (0..num_drops as u64)
        .map(|d| project_interval(pool, step, base.saturating_add(d)))
        .collect()
}

/// `len` ids starting at flat position `from`, as ascending pieces.
fn flat_window(pool: &RangeSet, from: u64, len: u64) -> Vec<SeedRange> {
    let mut pieces = Vec::new();
    let mut skip = from;
    let mut left = len;
    for r in pool.ranges() {
        if left == 0 {
            break;
        }
        if skip >= r.len() {
            skip -= r.len();
            continue;
        }
        let start = r.start + skip;
        let take = (r.len() - skip).min(left);
        pieces.push(SeedRange { start, end: start + (take - 1) });
        left -= take;
        skip = 0;
    }
    pieces
}
