//! CSV day-plan record loader.
//!
//! # CSV format
//!
//! One row per `(category, date, session)`.  `step` and `start` accept a
//! plain number or a piecewise clause list; an empty cell means "no
//! override".
//!
//! ```csv
//! category_id,date,session_index,step,start
//! cat-a,2026-10-15,0,40,1201
//! cat-a,2026-10-15,1,"1-3:10,4:20",
//! cat-b,2026-10-15,0,,500
//! ```
//!
//! Rows are grouped into one [`DayPlanRecord`] per `(category, date)`; the
//! returned list is ordered by category then date.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use sp_core::{CategoryId, SessionIdx};

use crate::{DayPlanRecord, ScheduleConfig, ScheduleError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RecordRow {
    category_id:   String,
    date:          String,
    session_index: u32,
    #[serde(default)]
    step:          String,
    #[serde(default)]
    start:         String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load day-plan records from a CSV file.
pub fn load_records_csv(path: &Path) -> Result<Vec<DayPlanRecord>, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_records_reader(file)
}

/// Like [`load_records_csv`] but accepts any `Read` source.
pub fn load_records_reader<R: Read>(reader: R) -> Result<Vec<DayPlanRecord>, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut grouped: BTreeMap<(String, NaiveDate), DayPlanRecord> = BTreeMap::new();

    for result in csv_reader.deserialize::<RecordRow>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        let date = parse_date(&row.date)?;
        let record = grouped
            .entry((row.category_id.clone(), date))
            .or_insert_with(|| DayPlanRecord::new(CategoryId(row.category_id.clone()), date));

        let session = SessionIdx(row.session_index);
        if let Some(step) = parse_cell(&row.step)? {
            record.set_step(session, step);
        }
        if let Some(start) = parse_cell(&row.start)? {
            record.set_start(session, start);
        }
    }

    log::debug!("loaded {} day-plan records", grouped.len());
    Ok(grouped.into_values().collect())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_date(s: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
        ScheduleError::Parse(format!("invalid date {s:?}: expected YYYY-MM-DD ({e})"))
    })
}

/// Stored overrides were validated when saved, so read them strictly.
fn parse_cell(s: &str) -> Result<Option<ScheduleConfig>, ScheduleError> {
    if s.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(ScheduleConfig::parse_strict(s)?))
}
