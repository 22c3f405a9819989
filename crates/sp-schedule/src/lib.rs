//! `sp-schedule` — drop schedules, plan configuration, rotation, and records.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`config`]    | `ScheduleConfig` (constant / piecewise), `ScheduleClause`    |
//! | [`plan`]      | `PlanConfiguration`, `PlanDrop`, `TimeWindow`, status, mode  |
//! | [`category`]  | `Category`, `Session`                                        |
//! | [`rotation`]  | `Rotation` (days per cycle, default per-session step)        |
//! | [`record`]    | `DayPlanRecord`, `DayPlanEntry`                              |
//! | [`loader`]    | `load_records_csv`, `load_records_reader`                    |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                         |
//!
//! # Resolving per-drop values (summary)
//!
//! ```text
//! step  "40"          → 40 on every drop
//! step  "1-3:10,4:20" → 10,10,10,20, then 0
//! start "1201"        → drop 1 starts at 1201, later drops follow the cursor
//! start "3:500"       → drop 3 jumps to 500
//! ```

pub mod category;
pub mod config;
pub mod error;
pub mod loader;
pub mod plan;
pub mod record;
pub mod rotation;

#[cfg(test)]
mod tests;

pub use category::{Category, Session};
pub use config::{DropSpan, ScheduleClause, ScheduleConfig};
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_records_csv, load_records_reader};
pub use plan::{PlanConfiguration, PlanDrop, PlanMode, PlanStatus, TimeWindow};
pub use record::{DayPlanEntry, DayPlanRecord};
pub use rotation::Rotation;
