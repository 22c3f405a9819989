//! Phase 2: interval calculation under a limit handling policy.
//!
//! # Per-drop request
//!
//! ```text
//! request(d) = step(d) + split_extra(d) + carry(d-1)
//! ```
//!
//! `split_extra` is non-zero only under `split_today`, for drops before the
//! alert.  `carry` is non-zero only after a spill-over; for drop 1 it is the
//! carry the previous day ended with.
//!
//! # Shortfalls
//!
//! When `request > room` the drop is resolved one of three ways:
//!
//! | Handling | Emitted interval       | Carry            | Cursor afterwards    |
//! |----------|------------------------|------------------|----------------------|
//! | spill    | rest of current range  | `request − room` | next range           |
//! | cap      | rest of current range  | 0                | next range           |
//! | skip     | `request` ids from the first later range that holds them | 0 | after the interval |
//!
//! `ignore` skips at every shortfall.  `this_drop` caps at the alert drop,
//! `next_drop` caps at the drop after it.  Every other shortfall spills.

use std::fmt;

use sp_core::{DropIdx, SeedRange};

use crate::alert::{SessionLimitAlert, detect};
use crate::policy::LimitPolicy;
use crate::session::SessionDay;
use crate::walker::{Cursor, PoolWalker};

// ── Results ───────────────────────────────────────────────────────────────────

/// The outcome of one drop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DropResult {
    pub drop:            DropIdx,
    /// Step the schedule assigns to this drop.
    pub nominal:         u64,
    /// Ids asked for: nominal plus split extra plus carry in.
    pub requested:       u64,
    /// Ids handed out; `None` means nothing was emitted.
    pub interval:        Option<SeedRange>,
    pub actual:          u64,
    /// Ids pushed to the next drop.
    pub carry_out:       u64,
    /// `true` when the interval came from a replay pool.
    pub from_simulation: bool,
}

impl DropResult {
    fn empty(drop: DropIdx, nominal: u64, requested: u64) -> Self {
        Self {
            drop,
            nominal,
            requested,
            interval: None,
            actual: 0,
            carry_out: 0,
            from_simulation: false,
        }
    }

    /// The interval as shown in tables, or `empty` when none was emitted.
    pub fn interval_text(&self, empty: &str) -> String {
        match self.interval {
            Some(r) => r.to_string(),
            None => empty.to_owned(),
        }
    }
}

impl fmt::Display for DropResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.interval {
            Some(r) => write!(f, "{r}"),
            None => f.write_str("-"),
        }
    }
}

/// One session's full day: every drop plus the detected alert.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SessionDayPlan {
    pub drops:     Vec<DropResult>,
    /// Alert found by detection, whatever the policy.
    pub alert:     Option<SessionLimitAlert>,
    pub policy:    Option<LimitPolicy>,
    /// Where drop 1 actually started.
    pub start:     Option<u64>,
    /// Carry left over after the last drop.
    pub carry_out: u64,
}

impl SessionDayPlan {
    /// The alert the operator should see; hidden once dismissed.
    pub fn surfaced_alert(&self) -> Option<&SessionLimitAlert> {
        match self.policy {
            Some(p) if !p.surfaces_alert() => None,
            _ => self.alert.as_ref(),
        }
    }

    pub fn total_nominal(&self) -> u64 {
        self.drops.iter().map(|d| d.nominal).sum()
    }

    pub fn total_actual(&self) -> u64 {
        self.drops.iter().map(|d| d.actual).sum()
    }

    /// The last emitted interval of the day.
    pub fn last_interval(&self) -> Option<SeedRange> {
        self.drops.iter().rev().find_map(|d| d.interval)
    }

    pub fn intervals(&self) -> impl Iterator<Item = Option<SeedRange>> + '_ {
        self.drops.iter().map(|d| d.interval)
    }
}

// ── Simulation ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Shortfall {
    Spill,
    Cap,
    Skip,
}

fn shortfall_handling(
    policy: Option<LimitPolicy>,
    alert:  Option<&SessionLimitAlert>,
    drop:   DropIdx,
) -> Shortfall {
    let at_alert = |offset: u32| alert.is_some_and(|a| a.drop.0.checked_add(offset) == Some(drop.0));
    match policy {
        Some(LimitPolicy::Ignore) => Shortfall::Skip,
        Some(LimitPolicy::ThisDrop) if at_alert(0) => Shortfall::Cap,
        Some(LimitPolicy::NextDrop) if at_alert(1) => Shortfall::Cap,
        _ => Shortfall::Spill,
    }
}

/// Run both phases for one session-day.
pub fn simulate_day(day: &SessionDay<'_>, policy: Option<LimitPolicy>) -> SessionDayPlan {
    let alert = detect(day);
    calculate(day, alert, policy)
}

/// Phase 2 alone, for a known detection result.
pub fn calculate(
    day:    &SessionDay<'_>,
    alert:  Option<SessionLimitAlert>,
    policy: Option<LimitPolicy>,
) -> SessionDayPlan {
    let walker = day.walker();
    let mut plan = SessionDayPlan { alert, policy, ..SessionDayPlan::default() };

    let split = match (policy, alert.as_ref()) {
        (Some(LimitPolicy::SplitToday), Some(a)) => a.split_distribution(),
        _ => Vec::new(),
    };

    let mut cursor = day.open(&walker);
    plan.start = cursor.map(|c| c.pos);
    let mut carry = day.carry_in;

    for drop in day.drops() {
        let nominal = day.step.step_for(drop);
        let extra = split.get(drop.index()).copied().unwrap_or(0);
        let requested = nominal.saturating_add(extra).saturating_add(carry);

        let Some(current) = cursor.map(|c| day.reposition(&walker, c, drop)) else {
            // Empty pool: nothing to emit and nowhere to carry to.
            plan.drops.push(DropResult::empty(drop, nominal, requested));
            continue;
        };
        if requested == 0 {
            plan.drops.push(DropResult::empty(drop, nominal, 0));
            cursor = Some(current);
            carry = 0;
            continue;
        }

        let handling = shortfall_handling(policy, plan.alert.as_ref(), drop);
        let (result, next) = step_drop(&walker, current, drop, nominal, requested, handling);
        log::trace!("{drop}: requested {requested}, got {result}");
        carry = result.carry_out;
        cursor = Some(next);
        plan.drops.push(result);
    }

    plan.carry_out = carry;
    plan
}

fn step_drop(
    walker:    &PoolWalker<'_>,
    cursor:    Cursor,
    drop:      DropIdx,
    nominal:   u64,
    requested: u64,
    handling:  Shortfall,
) -> (DropResult, Cursor) {
    let emit = |cursor: Cursor, n: u64, carry_out: u64| {
        let (interval, next) = walker.take(&cursor, n);
        let result = DropResult {
            drop,
            nominal,
            requested,
            interval: Some(interval),
            actual: n,
            carry_out,
            from_simulation: cursor.in_simulation(),
        };
        (result, next)
    };

    let room = walker.room(&cursor);
    if room >= requested {
        return emit(cursor, requested, 0);
    }

    match handling {
        Shortfall::Spill => emit(cursor, room, requested - room),
        Shortfall::Cap => emit(cursor, room, 0),
        Shortfall::Skip => {
            let mut candidate = cursor;
            for _ in 0..walker.range_count() {
                candidate = walker.next_range(&candidate);
                if walker.room(&candidate) >= requested {
                    return emit(candidate, requested, 0);
                }
            }
            // No range holds the full request: take what the range reached holds.
            emit(candidate, walker.room(&candidate), 0)
        }
    }
}
