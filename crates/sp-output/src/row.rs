//! Plain data row types written by output backends.

use sp_core::EngineConfig;
use sp_sim::{CategoryDayPlan, DropResult, PlanContext, SessionColumn, SessionLimitAlert};

/// Date format used in every exported row.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One drop of one session on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropRow {
    pub category_id:     String,
    pub date:            String,
    /// 1-based principal session number.
    pub session:         u32,
    pub session_name:    String,
    /// 1-based drop number.
    pub drop:            u32,
    pub label:           String,
    pub nominal:         u64,
    pub requested:       u64,
    /// Interval text; the empty-interval placeholder when nothing was emitted.
    pub interval:        String,
    pub actual:          u64,
    pub carry_out:       u64,
    pub from_simulation: bool,
}

impl DropRow {
    pub fn new(
        plan:   &CategoryDayPlan,
        column: &SessionColumn,
        result: &DropResult,
        config: &EngineConfig,
    ) -> Self {
        let label = plan
            .drop_labels
            .get(result.drop.index())
            .cloned()
            .unwrap_or_else(|| result.drop.to_string());
        Self {
            category_id:     plan.category_id.to_string(),
            date:            plan.date.format(DATE_FORMAT).to_string(),
            session:         column.session.number() as u32,
            session_name:    column.name.clone(),
            drop:            result.drop.number() as u32,
            label,
            nominal:         result.nominal,
            requested:       result.requested,
            interval:        result.interval_text(&config.empty_interval_label),
            actual:          result.actual,
            carry_out:       result.carry_out,
            from_simulation: result.from_simulation,
        }
    }

    /// Every drop of every session in `plan`, session-major.
    pub fn all(plan: &CategoryDayPlan, config: &EngineConfig) -> Vec<DropRow> {
        plan.sessions
            .iter()
            .flat_map(|c| c.plan.drops.iter().map(move |d| DropRow::new(plan, c, d, config)))
            .collect()
    }
}

/// A surfaced limit alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRow {
    pub category_id:     String,
    pub date:            String,
    pub session:         u32,
    pub session_name:    String,
    /// 1-based drop number the alert fired at.
    pub drop:            u32,
    pub remaining_seeds: u64,
    /// Last interval that fit, or empty.
    pub last_interval:   String,
}

impl AlertRow {
    pub fn new(ctx: &PlanContext<'_>, alert: &SessionLimitAlert) -> Self {
        Self {
            category_id:     ctx.category.to_string(),
            date:            ctx.date.format(DATE_FORMAT).to_string(),
            session:         ctx.session.number() as u32,
            session_name:    ctx.name.to_owned(),
            drop:            alert.drop.number() as u32,
            remaining_seeds: alert.remaining_seeds,
            last_interval:   alert.last_interval.map(|r| r.to_string()).unwrap_or_default(),
        }
    }
}
