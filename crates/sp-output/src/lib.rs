//! `sp-output` — day-plan export for the seedplan engine.
//!
//! Two shapes of output:
//!
//! | Shape          | Function / type                   | Use                               |
//! |----------------|-----------------------------------|-----------------------------------|
//! | Operator table | [`write_table`], [`table_text`]   | CSV or TSV, one block per category |
//! | Flat rows      | [`PlanWriter`] backends           | one row per drop, plus alerts     |
//!
//! Flat-row backends:
//!
//! | Feature   | Backend     | Files created               |
//! |-----------|-------------|-----------------------------|
//! | *(none)*  | CSV         | `drops.csv`, `alerts.csv`   |
//! | `sqlite`  | SQLite      | `plans.db`                  |
//!
//! Backends are driven by [`PlanOutputObserver`], which implements
//! `sp_sim::PlanObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sp_output::{CsvWriter, PlanOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = PlanOutputObserver::new(writer, planner.config());
//! planner.plan_days(today, 7, &records, None, &mut obs);
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod table;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::PlanOutputObserver;
pub use row::{AlertRow, DropRow};
pub use table::{TableFormat, plan_table, table_text, write_table};
pub use writer::PlanWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
