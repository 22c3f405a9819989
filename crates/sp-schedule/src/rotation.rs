//! Rotation: how many days one pass through a category's pools takes.
//!
//! ```text
//! rotation      = Σ pool sizes / Σ drop values        (1 when Σ drop values = 0)
//! session step  = round(pool size / rotation / drops) (0 when rotation = 0)
//! ```
//!
//! With every session stepping this way, each pool is consumed once per
//! `rotation` days regardless of its size.

use crate::PlanConfiguration;

/// Rotation figures for one category.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rotation {
    /// Σ pool sizes over principal sessions.
    pub total_seeds:   u64,
    /// Σ nominal drop values.
    pub total_per_day: u64,
    /// Drops per day (at least 1).
    pub num_drops:     usize,
    /// Days needed to cycle once through the pools (fractional).
    pub days:          f64,
}

impl Rotation {
    pub fn new(total_seeds: u64, total_per_day: u64, num_drops: usize) -> Self {
        let days = if total_per_day > 0 {
            total_seeds as f64 / total_per_day as f64
        } else {
            1.0
        };
        Self { total_seeds, total_per_day, num_drops: num_drops.max(1), days }
    }

    /// Rotation for a plan whose sessions have the given pool sizes.
    pub fn for_plan(plan: &PlanConfiguration, pool_sizes: &[u64]) -> Self {
        let total = pool_sizes.iter().fold(0u64, |acc, &n| acc.saturating_add(n));
        Self::new(total, plan.total_per_day(), plan.num_drops())
    }

    /// Default per-drop step for a session whose pool holds `pool_size` ids.
    pub fn step_for_session(&self, pool_size: u64) -> u64 {
        if self.days <= 0.0 {
            return 0;
        }
        (pool_size as f64 / self.days / self.num_drops as f64).round() as u64
    }

    /// Whole calendar days needed to cycle once (rounded up).
    pub fn cycle_days(&self) -> u64 {
        self.days.ceil().max(0.0) as u64
    }
}
