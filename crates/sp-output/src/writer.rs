//! The `PlanWriter` trait implemented by all backend writers.

use crate::{AlertRow, DropRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// Writers are driven directly or through
/// [`PlanOutputObserver`][crate::PlanOutputObserver], which stores errors
/// instead of returning them.
pub trait PlanWriter {
    /// Write a batch of per-drop rows.
    fn write_drops(&mut self, rows: &[DropRow]) -> OutputResult<()>;

    /// Write one surfaced alert.
    fn write_alert(&mut self, row: &AlertRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
