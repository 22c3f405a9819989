//! Day-plan records: the per-day STEP/START overrides a user saved.
//!
//! A record is keyed by `(category, date)` and maps each principal session
//! to the values typed for that day.  Absent sessions (or absent records)
//! fall back to computed defaults.  Storage and retention belong to the
//! caller; this type only carries the values.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sp_core::{CategoryId, SessionIdx};

use crate::ScheduleConfig;

/// STEP/START overrides for one session on one day.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayPlanEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step:  Option<ScheduleConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<ScheduleConfig>,
}

impl DayPlanEntry {
    pub fn is_empty(&self) -> bool {
        self.step.is_none() && self.start.is_none()
    }
}

/// All saved overrides for one `(category, date)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlanRecord {
    pub category_id: CategoryId,
    pub date:        NaiveDate,
    pub entries:     BTreeMap<SessionIdx, DayPlanEntry>,
}

impl DayPlanRecord {
    pub fn new(category_id: CategoryId, date: NaiveDate) -> Self {
        Self { category_id, date, entries: BTreeMap::new() }
    }

    pub fn entry(&self, session: SessionIdx) -> Option<&DayPlanEntry> {
        self.entries.get(&session)
    }

    pub fn step(&self, session: SessionIdx) -> Option<&ScheduleConfig> {
        self.entry(session).and_then(|e| e.step.as_ref())
    }

    pub fn start(&self, session: SessionIdx) -> Option<&ScheduleConfig> {
        self.entry(session).and_then(|e| e.start.as_ref())
    }

    /// Record a STEP override, keeping any START already set.
    pub fn set_step(&mut self, session: SessionIdx, step: ScheduleConfig) {
        self.entries.entry(session).or_default().step = Some(step);
    }

    /// Record a START override, keeping any STEP already set.
    pub fn set_start(&mut self, session: SessionIdx, start: ScheduleConfig) {
        self.entries.entry(session).or_default().start = Some(start);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(DayPlanEntry::is_empty)
    }
}
