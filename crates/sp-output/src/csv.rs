//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `drops.csv`
//! - `alerts.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::PlanWriter;
use crate::{AlertRow, DropRow, OutputResult};

pub const DROP_COLUMNS: [&str; 12] = [
    "category_id",
    "date",
    "session",
    "session_name",
    "drop",
    "label",
    "nominal",
    "requested",
    "interval",
    "actual",
    "carry_out",
    "from_simulation",
];

pub const ALERT_COLUMNS: [&str; 7] = [
    "category_id",
    "date",
    "session",
    "session_name",
    "drop",
    "remaining_seeds",
    "last_interval",
];

/// Writes flat plan output to two CSV files.
pub struct CsvWriter {
    drops:    Writer<File>,
    alerts:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut drops = Writer::from_path(dir.join("drops.csv"))?;
        drops.write_record(DROP_COLUMNS)?;

        let mut alerts = Writer::from_path(dir.join("alerts.csv"))?;
        alerts.write_record(ALERT_COLUMNS)?;

        Ok(Self { drops, alerts, finished: false })
    }
}

impl PlanWriter for CsvWriter {
    fn write_drops(&mut self, rows: &[DropRow]) -> OutputResult<()> {
        for row in rows {
            self.drops.write_record(&[
                row.category_id.clone(),
                row.date.clone(),
                row.session.to_string(),
                row.session_name.clone(),
                row.drop.to_string(),
                row.label.clone(),
                row.nominal.to_string(),
                row.requested.to_string(),
                row.interval.clone(),
                row.actual.to_string(),
                row.carry_out.to_string(),
                (row.from_simulation as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_alert(&mut self, row: &AlertRow) -> OutputResult<()> {
        self.alerts.write_record(&[
            row.category_id.clone(),
            row.date.clone(),
            row.session.to_string(),
            row.session_name.clone(),
            row.drop.to_string(),
            row.remaining_seeds.to_string(),
            row.last_interval.clone(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.drops.flush()?;
        self.alerts.flush()?;
        Ok(())
    }
}
