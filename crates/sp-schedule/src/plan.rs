//! Plan configuration: the ordered drop list and the daily window.
//!
//! # Drop labels
//!
//! Drop rows are labelled for presentation only; labels never affect
//! allocation.  In priority order:
//!
//! | Source                     | Label                                        |
//! |----------------------------|----------------------------------------------|
//! | `PlanDrop::time` is set    | the literal text                             |
//! | `mode == Request`          | `EngineConfig::request_label`                |
//! | otherwise                  | `(window start hour + i) mod 24` : minutes   |

use serde::{Deserialize, Serialize};
use sp_core::{EngineConfig, parse_hm};

/// One consumption event in the daily schedule.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanDrop {
    /// Nominal per-drop count for the whole category.
    #[serde(default)]
    pub value: u64,
    /// Optional literal time label (e.g. `"14:30"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl PlanDrop {
    pub fn new(value: u64) -> Self {
        Self { value, time: None }
    }
}

/// Daily time window as `HH:MM` strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub start_time: String,
    pub end_time:   String,
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self { start_time: "09:00".to_owned(), end_time: "18:00".to_owned() }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    #[default]
    Active,
    Stopped,
}

/// How drops are triggered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanMode {
    /// Drops fire on the clock.
    #[default]
    Auto,
    /// Drops are fired on request, not by the clock.
    Request,
}

/// Everything a category's daily plan is configured with.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanConfiguration {
    pub drops:       Vec<PlanDrop>,
    #[serde(rename = "timeConfig")]
    pub time_window: TimeWindow,
    pub script_name: String,
    pub scenario:    String,
    pub status:      PlanStatus,
    pub mode:        PlanMode,
}

impl PlanConfiguration {
    /// Number of drops per day; a plan with no drops still counts as one.
    pub fn num_drops(&self) -> usize {
        self.drops.len().max(1)
    }

    /// Σ nominal drop values across the day.
    pub fn total_per_day(&self) -> u64 {
        self.drops.iter().fold(0u64, |acc, d| acc.saturating_add(d.value))
    }

    pub fn is_active(&self) -> bool {
        self.status == PlanStatus::Active
    }

    pub fn is_request(&self) -> bool {
        self.mode == PlanMode::Request
    }

    /// One presentation label per configured drop.
    pub fn drop_labels(&self, config: &EngineConfig) -> Vec<String> {
        let (hour, minute) =
            parse_hm(&self.time_window.start_time).unwrap_or_else(|| config.default_start_hm());
        self.drops
            .iter()
            .enumerate()
            .map(|(i, drop)| match &drop.time {
                Some(t) if !t.trim().is_empty() => t.clone(),
                _ if self.is_request() => config.request_label.clone(),
                _ => format!("{:02}:{:02}", (hour as usize + i) % 24, minute),
            })
            .collect()
    }
}
