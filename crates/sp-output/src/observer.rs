//! `PlanOutputObserver<W>` — bridges `PlanObserver` to a `PlanWriter`.

use sp_core::EngineConfig;
use sp_sim::{CategoryDayPlan, PlanContext, PlanObserver, SessionLimitAlert};

use crate::row::{AlertRow, DropRow};
use crate::writer::PlanWriter;
use crate::{OutputError, OutputResult};

/// A [`PlanObserver`] that writes every planned drop and surfaced alert to
/// any [`PlanWriter`] backend.
///
/// Drop rows are written once per category-day, when the plan (and so the
/// drop labels) is complete.  Errors from the writer are stored internally
/// because observer methods have no return value; check them with
/// [`take_error`][Self::take_error] after planning and call
/// [`finish`][Self::finish] when done.
pub struct PlanOutputObserver<W: PlanWriter> {
    writer:     W,
    config:     EngineConfig,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl<W: PlanWriter> PlanOutputObserver<W> {
    pub fn new(writer: W, config: &EngineConfig) -> Self {
        Self { writer, config: config.clone(), rows: 0, last_error: None }
    }

    /// Drop rows handed to the writer so far.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flush the writer; the error (if any) is stored like any other.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            log::warn!("plan output failed: {e}");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: PlanWriter> PlanObserver for PlanOutputObserver<W> {
    fn on_alert(&mut self, ctx: &PlanContext<'_>, alert: &SessionLimitAlert) {
        let result = self.writer.write_alert(&AlertRow::new(ctx, alert));
        self.store_err(result);
    }

    fn on_category_end(&mut self, plan: &CategoryDayPlan) {
        let rows = DropRow::all(plan, &self.config);
        if rows.is_empty() {
            return;
        }
        self.rows += rows.len();
        let result = self.writer.write_drops(&rows);
        self.store_err(result);
    }
}
