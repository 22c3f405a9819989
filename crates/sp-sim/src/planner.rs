//! The category planner: every principal session of a category, one day at a
//! time.
//!
//! # Per-day inputs
//!
//! | Input   | Source, in priority order                                      |
//! |---------|----------------------------------------------------------------|
//! | STEP    | saved record override, else the rotation default step         |
//! | START   | saved record override, else continuity from the previous day, |
//! |         | else the first id of the pool                                  |
//! | policy  | per-session choice made on the builder, else spill-over        |
//!
//! Sessions are independent of each other, so with the `parallel` feature
//! they are simulated on Rayon's thread pool.  Observer callbacks are issued
//! afterwards, sequentially, in session order.

use chrono::{Days, NaiveDate};
use sp_core::{CategoryId, DropIdx, EngineConfig, RangeSet, SeedRange, SessionIdx};
use sp_limits::LimitSource;
use sp_schedule::{Category, DayPlanRecord, Rotation, ScheduleConfig};

use crate::alert::SessionLimitAlert;
use crate::continuity::default_start;
use crate::history::project_day;
use crate::observer::{PlanContext, PlanObserver};
use crate::policy::LimitPolicy;
use crate::session::{Replay, SessionDay};
use crate::simulate::{SessionDayPlan, simulate_day};

// ── Resolved per-session inputs ───────────────────────────────────────────────

/// A principal session with its pool and defaults resolved.
#[derive(Clone, Debug)]
pub struct SessionInput {
    pub session:      SessionIdx,
    pub name:         String,
    pub pool:         RangeSet,
    pub limit_source: LimitSource,
    /// Rotation default per-drop step.
    pub default_step: u64,
    pub policy:       Option<LimitPolicy>,
    pub replay:       Option<Replay>,
}

// ── Output ────────────────────────────────────────────────────────────────────

/// One session's column of a day plan.
#[derive(Clone, Debug)]
pub struct SessionColumn {
    pub session:      SessionIdx,
    pub name:         String,
    pub pool:         RangeSet,
    /// STEP in effect for the day.
    pub step:         ScheduleConfig,
    /// START override in effect for the day, if one was saved.
    pub start_config: Option<ScheduleConfig>,
    pub plan:         SessionDayPlan,
}

impl SessionColumn {
    /// Where drop 1 started.
    pub fn start(&self) -> Option<u64> {
        self.plan.start
    }
}

/// One category's plan for one day.
#[derive(Clone, Debug)]
pub struct CategoryDayPlan {
    pub category_id:   CategoryId,
    pub category_name: String,
    pub script_name:   String,
    pub date:          NaiveDate,
    pub drop_labels:   Vec<String>,
    pub rotation:      Rotation,
    pub sessions:      Vec<SessionColumn>,
}

impl CategoryDayPlan {
    pub fn num_drops(&self) -> usize {
        self.drop_labels.len()
    }

    pub fn session(&self, session: SessionIdx) -> Option<&SessionColumn> {
        self.sessions.get(session.index())
    }

    /// Surfaced alerts, in session order.
    pub fn alerts(&self) -> impl Iterator<Item = (&SessionColumn, &SessionLimitAlert)> {
        self.sessions
            .iter()
            .filter_map(|c| c.plan.surfaced_alert().map(|a| (c, a)))
    }

    /// The STEP/START values of this plan as a saveable record.
    ///
    /// Saved START overrides are kept as typed; otherwise the resolved start
    /// position is stored so reloading the record reproduces the day.
    pub fn to_record(&self) -> DayPlanRecord {
        let mut record = DayPlanRecord::new(self.category_id.clone(), self.date);
        for column in &self.sessions {
            record.set_step(column.session, column.step.clone());
            let start = match (&column.start_config, column.start()) {
                (Some(cfg), _) => Some(cfg.clone()),
                (None, Some(pos)) => Some(ScheduleConfig::Constant(pos)),
                (None, None) => None,
            };
            if let Some(start) = start {
                record.set_start(column.session, start);
            }
        }
        record
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

/// Plans a category's days.  Create via [`PlannerBuilder`][crate::PlannerBuilder].
#[derive(Clone, Debug)]
pub struct CategoryPlanner {
    pub(crate) config:   EngineConfig,
    pub(crate) category: Category,
    pub(crate) rotation: Rotation,
    pub(crate) sessions: Vec<SessionInput>,
}

impl CategoryPlanner {
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    pub fn sessions(&self) -> &[SessionInput] {
        &self.sessions
    }

    pub fn num_drops(&self) -> usize {
        self.category.plan.num_drops()
    }

    /// One label per drop; drops without a configured slot are named by
    /// position.
    pub fn drop_labels(&self) -> Vec<String> {
        let mut labels = self.category.plan.drop_labels(&self.config);
        for d in labels.len()..self.num_drops() {
            labels.push(DropIdx(d as u32).to_string());
        }
        labels
    }

    /// Plan one day.
    ///
    /// `record` holds the overrides saved for `date`; a record for another
    /// category is ignored.  `previous` is the plan of the day before; it
    /// drives START continuity and hands over its spill-over carry.
    pub fn plan_day<O: PlanObserver>(
        &self,
        date:     NaiveDate,
        record:   Option<&DayPlanRecord>,
        previous: Option<&CategoryDayPlan>,
        observer: &mut O,
    ) -> CategoryDayPlan {
        self.plan(date, record, previous, true, observer)
    }

    fn plan<O: PlanObserver>(
        &self,
        date:        NaiveDate,
        record:      Option<&DayPlanRecord>,
        previous:    Option<&CategoryDayPlan>,
        with_replay: bool,
        observer:    &mut O,
    ) -> CategoryDayPlan {
        let record = record.filter(|r| {
            let matches = r.category_id == self.category.id;
            if !matches {
                log::warn!(
                    "ignoring day-plan record for category {} while planning {}",
                    r.category_id,
                    self.category.id
                );
            }
            matches
        });
        let num_drops = self.num_drops();

        // ── Resolve STEP/START per session (sequential) ───────────────────
        let steps: Vec<ScheduleConfig> = self
            .sessions
            .iter()
            .map(|s| {
                record
                    .and_then(|r| r.step(s.session))
                    .cloned()
                    .unwrap_or(ScheduleConfig::Constant(s.default_step))
            })
            .collect();
        let starts: Vec<Option<ScheduleConfig>> = self
            .sessions
            .iter()
            .map(|s| record.and_then(|r| r.start(s.session)).cloned())
            .collect();

        let plans = {
            let days: Vec<SessionDay<'_>> = self
                .sessions
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    let prev = previous.and_then(|p| p.session(s.session)).map(|c| &c.plan);
                    SessionDay::new(&s.pool, &steps[i], num_drops)
                        .with_start(starts[i].as_ref())
                        .with_default_start(default_start(prev, &s.pool))
                        .with_carry_in(prev.map_or(0, |p| p.carry_out))
                        .with_replay(s.replay.as_ref().filter(|_| with_replay))
                })
                .collect();

            // ── Simulate (optionally parallel) ────────────────────────────
            self.simulate_sessions(&days)
        };

        let sessions: Vec<SessionColumn> = self
            .sessions
            .iter()
            .zip(steps)
            .zip(starts)
            .zip(plans)
            .map(|(((s, step), start_config), plan)| SessionColumn {
                session: s.session,
                name: s.name.clone(),
                pool: s.pool.clone(),
                step,
                start_config,
                plan,
            })
            .collect();

        let day_plan = CategoryDayPlan {
            category_id:   self.category.id.clone(),
            category_name: self.category.name.clone(),
            script_name:   self.category.plan.script_name.clone(),
            date,
            drop_labels:   self.drop_labels(),
            rotation:      self.rotation,
            sessions,
        };

        // ── Report (sequential, session order) ────────────────────────────
        for column in &day_plan.sessions {
            let ctx = PlanContext {
                category: &day_plan.category_id,
                date,
                session:  column.session,
                name:     &column.name,
            };
            observer.on_session_start(&ctx);
            for result in &column.plan.drops {
                observer.on_drop(&ctx, result);
            }
            if let Some(alert) = column.plan.surfaced_alert() {
                observer.on_alert(&ctx, alert);
            }
        }
        observer.on_category_end(&day_plan);
        day_plan
    }

    /// Plan `days` consecutive days from `first`.
    ///
    /// Each day picks its saved record from `records` (matched on category
    /// and date) and continues from the day before; the first day continues
    /// from `previous`.  Replay pools apply to the first day only.
    pub fn plan_days<O: PlanObserver>(
        &self,
        first:    NaiveDate,
        days:     usize,
        records:  &[DayPlanRecord],
        previous: Option<&CategoryDayPlan>,
        observer: &mut O,
    ) -> Vec<CategoryDayPlan> {
        let mut plans: Vec<CategoryDayPlan> = Vec::with_capacity(days);
        for offset in 0..days {
            let Some(date) = first.checked_add_days(Days::new(offset as u64)) else {
                log::warn!("date overflow after {offset} days; stopping roll-out");
                break;
            };
            let record = records
                .iter()
                .find(|r| r.date == date && r.category_id == self.category.id);
            let prev = plans.last().or(previous);
            let plan = self.plan(date, record, prev, offset == 0, observer);
            plans.push(plan);
        }
        plans
    }

    /// Projected intervals `days_ago` days back, per session then per drop.
    ///
    /// `None` for today (`days_ago == 0`) and beyond the configured history
    /// window.
    pub fn project_history(&self, days_ago: u32) -> Option<Vec<Vec<Vec<SeedRange>>>> {
        if days_ago == 0 || days_ago >= self.config.history_days {
            return None;
        }
        let num_drops = self.num_drops();
        Some(
            self.sessions
                .iter()
                .map(|s| project_day(&s.pool, s.default_step, u64::from(days_ago), num_drops))
                .collect(),
        )
    }

    fn simulate_sessions(&self, days: &[SessionDay<'_>]) -> Vec<SessionDayPlan> {
        #[cfg(not(feature = "parallel"))]
        {
            days.iter()
                .zip(&self.sessions)
                .map(|(day, s)| simulate_day(day, s.policy))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            days.par_iter()
                .zip(self.sessions.par_iter())
                .map(|(day, s)| simulate_day(day, s.policy))
                .collect()
        }
    }
}
