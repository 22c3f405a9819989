//! Engine-wide presentation and history settings.

/// Top-level engine configuration.
///
/// Typically loaded from a JSON/TOML file by the application crate and passed
/// to the planner.  None of these values affect allocation math; they shape
/// labels and how far back the history view reaches.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// How many calendar days (today included) the history view covers.
    pub history_days: u32,

    /// Daily window start used when a plan has none, as `HH:MM`.
    pub default_start_time: String,

    /// Label shown instead of a clock time for drops in `request` mode.
    pub request_label: String,

    /// Placeholder for an empty range set.
    pub empty_range_label: String,

    /// Placeholder for a drop that produced no interval.
    pub empty_interval_label: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_days:         90,
            default_start_time:   "09:00".to_owned(),
            request_label:        "REQUEST".to_owned(),
            empty_range_label:    "NO".to_owned(),
            empty_interval_label: "-".to_owned(),
        }
    }
}

impl EngineConfig {
    /// Parse `default_start_time` into `(hour, minute)`.
    ///
    /// Unreadable components fall back to `09:00`.
    pub fn default_start_hm(&self) -> (u32, u32) {
        parse_hm(&self.default_start_time).unwrap_or((9, 0))
    }
}

/// Parse `"HH:MM"` into `(hour, minute)`; `None` when either part is unreadable.
pub fn parse_hm(text: &str) -> Option<(u32, u32)> {
    let (h, m) = text.trim().split_once(':')?;
    let h = h.trim().parse::<u32>().ok()?;
    let m = m.trim().parse::<u32>().ok()?;
    (h < 24 && m < 60).then_some((h, m))
}
