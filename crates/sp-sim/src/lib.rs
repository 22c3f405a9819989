//! `sp-sim` — the day-plan simulator for the seedplan engine.
//!
//! # Two-phase simulation
//!
//! ```text
//! for each principal session:
//!   ① Detect    — walk the day with a fixed policy and no carry; the first
//!                 drop whose step exceeds the room left in its range is the
//!                 session's limit alert.
//!   ② Calculate — walk again, resolving shortfalls with the session's
//!                 chosen policy (spill-over when none was chosen).
//! ```
//!
//! Detection never depends on the chosen policy, so switching policies
//! changes the intervals but never moves the alert.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`walker`]     | `PoolWalker`, `Cursor`, `WrapMode`                      |
//! | [`session`]    | `SessionDay`, `Replay`                                  |
//! | [`alert`]      | Phase 1: `detect`, `SessionLimitAlert`                  |
//! | [`simulate`]   | Phase 2: `calculate`, `simulate_day`, `DropResult`      |
//! | [`policy`]     | `LimitPolicy`                                           |
//! | [`continuity`] | `default_start`, `roll_out`                             |
//! | [`history`]    | `project_interval`, `project_day`                       |
//! | [`planner`]    | `CategoryPlanner`, `CategoryDayPlan`, `SessionColumn`   |
//! | [`builder`]    | `PlannerBuilder`                                        |
//! | [`observer`]   | `PlanObserver`, `NoopObserver`                          |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Simulates a category's sessions on Rayon's thread pool |
//! | `fx-hash`  | FxHash for the builder's per-session maps              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sp_sim::{NoopObserver, PlannerBuilder};
//!
//! let planner = PlannerBuilder::new(category, &limits).build()?;
//! let today = planner.plan_day(date, None, None, &mut NoopObserver);
//! ```

pub mod alert;
pub mod builder;
pub mod continuity;
pub mod error;
pub mod history;
pub mod observer;
pub mod planner;
pub mod policy;
pub mod session;
pub mod simulate;
pub mod walker;


pub use alert::{SessionLimitAlert, detect};
pub use builder::PlannerBuilder;
pub use continuity::{default_start, roll_out};
pub use error::{SimError, SimResult};
pub use history::{project_day, project_interval};
pub use observer::{NoopObserver, PlanContext, PlanObserver};
pub use planner::{CategoryDayPlan, CategoryPlanner, SessionColumn, SessionInput};
pub use policy::LimitPolicy;
pub use session::{Replay, SessionDay};
pub use simulate::{DropResult, SessionDayPlan, calculate, simulate_day};
pub use walker::{Cursor, PoolSource, PoolWalker, WrapMode};
