//! Planner observer trait for progress reporting and data collection.

use chrono::NaiveDate;
use sp_core::{CategoryId, SessionIdx};

use crate::alert::SessionLimitAlert;
use crate::planner::CategoryDayPlan;
use crate::simulate::DropResult;

/// Which session-day a callback is about.
#[derive(Copy, Clone, Debug)]
pub struct PlanContext<'a> {
    pub category: &'a CategoryId,
    pub date:     NaiveDate,
    pub session:  SessionIdx,
    pub name:     &'a str,
}

/// Callbacks invoked by [`CategoryPlanner::plan_day`][crate::CategoryPlanner::plan_day]
/// once every session of the day has been simulated.
///
/// Callbacks arrive in session order, then drop order, even when sessions
/// were simulated in parallel.  All methods default to no-ops.
///
/// # Example: alert collector
///
/// ```rust,ignore
/// struct Alerts(Vec<String>);
///
/// impl PlanObserver for Alerts {
///     fn on_alert(&mut self, ctx: &PlanContext<'_>, alert: &SessionLimitAlert) {
///         self.0.push(format!("{} {}: {alert}", ctx.date, ctx.name));
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called before a session's drops are reported.
    fn on_session_start(&mut self, _ctx: &PlanContext<'_>) {}

    /// Called once per drop, in drop order.
    fn on_drop(&mut self, _ctx: &PlanContext<'_>, _result: &DropResult) {}

    /// Called for a surfaced alert (never for a dismissed one).
    fn on_alert(&mut self, _ctx: &PlanContext<'_>, _alert: &SessionLimitAlert) {}

    /// Called once the whole category-day is assembled.
    fn on_category_end(&mut self, _plan: &CategoryDayPlan) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
