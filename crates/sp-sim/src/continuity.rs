//! Day-to-day continuity and multi-day roll-out.
//!
//! Without a START override, a session's day begins one past the end of the
//! previous day's last emitted interval.  With no usable history it begins
//! at the first id of the pool.  A spill-over the previous day ended with is
//! added to the first drop of the next.  A position that lands outside the pool is
//! resolved by the walker (next range above it, else wrap to the start).

use sp_core::RangeSet;

use crate::policy::LimitPolicy;
use crate::session::SessionDay;
use crate::simulate::{SessionDayPlan, simulate_day};

/// Default START for today given yesterday's plan for the same session.
pub fn default_start(previous: Option<&SessionDayPlan>, pool: &RangeSet) -> Option<u64> {
    previous
        .and_then(SessionDayPlan::last_interval)
        .map(|r| r.end.saturating_add(1))
        .or_else(|| pool.first())
}

/// Plan `days` consecutive days for one session.
///
/// The first day is `first` exactly as given.  Every later day drops the
/// START override and the replay pool, starts where the day before ended,
/// and takes over its carry.
pub fn roll_out(first: &SessionDay<'_>, policy: Option<LimitPolicy>, days: usize) -> Vec<SessionDayPlan> {
    let mut plans: Vec<SessionDayPlan> = Vec::with_capacity(days);
    for day_index in 0..days {
        let plan = match plans.last() {
            None => simulate_day(first, policy),
            Some(previous) => {
                let next = first
                    .with_start(None)
                    .with_replay(None)
                    .with_default_start(default_start(Some(previous), first.pool))
                    .with_carry_in(previous.carry_out);
                simulate_day(&next, policy)
            }
        };
        log::trace!("roll-out day {}: {} ids", day_index + 1, plan.total_actual());
        plans.push(plan);
    }
    plans
}
