//! Phase 1: limit detection.
//!
//! Detection walks the day with every shortfall treated the same way and no
//! carry, so the alert it reports is a property of the inputs alone.  The
//! session's chosen policy never changes where (or whether) an alert fires;
//! it only changes what Phase 2 does about it.

use std::fmt;

use sp_core::{DropIdx, SeedRange};

use crate::session::SessionDay;
use crate::walker::WrapMode;

/// The first drop of a day whose step does not fit in its range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SessionLimitAlert {
    pub drop:             DropIdx,
    /// Ids left in the range at that drop.
    pub remaining_seeds:  u64,
    /// Interval of the last drop that did fit, if any.
    pub last_interval:    Option<SeedRange>,
}

impl SessionLimitAlert {
    /// Extra ids each drop before the alert gets under `split_today`.
    ///
    /// The remainder goes one id at a time to the earliest drops, so the
    /// result always sums to `remaining_seeds`.  Empty when the alert is at
    /// the first drop.
    pub fn split_distribution(&self) -> Vec<u64> {
        let before = self.drop.index() as u64;
        if before == 0 {
            return Vec::new();
        }
        let extra = self.remaining_seeds / before;
        let rem = self.remaining_seeds % before;
        (0..before).map(|d| extra + u64::from(d < rem)).collect()
    }
}

impl fmt::Display for SessionLimitAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "limit reached at {} with {} ids left", self.drop, self.remaining_seeds)?;
        if let Some(last) = self.last_interval {
            write!(f, " (last full interval {last})")?;
        }
        Ok(())
    }
}

/// Find the first drop whose nominal step exceeds the room in its range.
///
/// Replays are walked in `Duplicate` mode whatever their configured mode.
pub fn detect(day: &SessionDay<'_>) -> Option<SessionLimitAlert> {
    let walker = day.walker().with_mode(WrapMode::Duplicate);
    let mut cursor = day.open(&walker)?;
    let mut last_interval = None;

    for drop in day.drops() {
        cursor = day.reposition(&walker, cursor, drop);
        let step = day.step.step_for(drop);
        if step == 0 {
            continue;
        }
        let room = walker.room(&cursor);
        if room < step {
            let alert = SessionLimitAlert { drop, remaining_seeds: room, last_interval };
            log::debug!("{alert}");
            return Some(alert);
        }
        let (interval, next) = walker.take(&cursor, step);
        last_interval = Some(interval);
        cursor = next;
    }
    None
}
