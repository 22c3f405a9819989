//! The per-session limit record and its derived caches.
//!
//! # Fields
//!
//! | Field                    | Kind      | Meaning                                   |
//! |--------------------------|-----------|-------------------------------------------|
//! | `limit_active_session`   | input     | the session's total usable range          |
//! | `intervals_quality`      | input     | paused: quality                           |
//! | `intervals_paused_search`| input     | paused: search                            |
//! | `intervals_toxic`        | input     | paused: toxic                             |
//! | `intervals_other`        | input     | paused: other                             |
//! | `intervals_in_repo`      | derived   | active minus all paused (the pool)        |
//! | `total_paused`           | derived   | distinct ids across the four paused sets  |
//!
//! Derived fields are caches.  Every setter recomputes them, and readers that
//! need the pool go through [`LimitConfig::pool`], which never trusts the
//! cache.

use serde::{Deserialize, Serialize};
use sp_core::{CategoryId, PoolSummary, RangeSet};

/// The editable text fields of a limit record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LimitField {
    ActiveSession,
    Quality,
    PausedSearch,
    Toxic,
    Other,
}

/// Limit configuration for one session, global or scoped to one category.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LimitConfig {
    pub profile_name:            String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id:             Option<CategoryId>,
    pub limit_active_session:    String,
    pub intervals_quality:       String,
    pub intervals_paused_search: String,
    pub intervals_toxic:         String,
    pub intervals_other:         String,
    pub intervals_in_repo:       String,
    pub total_paused:            u64,
}

impl LimitConfig {
    /// An empty record: no active range, nothing paused.
    pub fn new(profile_name: impl Into<String>, category_id: Option<CategoryId>) -> Self {
        Self {
            profile_name: profile_name.into(),
            category_id,
            ..Self::default()
        }
    }

    /// Builder-style setter used when constructing records in code.
    pub fn with(mut self, field: LimitField, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }

    pub fn is_global(&self) -> bool {
        self.category_id.is_none()
    }

    pub fn field(&self, field: LimitField) -> &str {
        match field {
            LimitField::ActiveSession => &self.limit_active_session,
            LimitField::Quality => &self.intervals_quality,
            LimitField::PausedSearch => &self.intervals_paused_search,
            LimitField::Toxic => &self.intervals_toxic,
            LimitField::Other => &self.intervals_other,
        }
    }

    /// Replace one text field and recompute the derived caches.
    pub fn set_field(&mut self, field: LimitField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LimitField::ActiveSession => self.limit_active_session = value,
            LimitField::Quality => self.intervals_quality = value,
            LimitField::PausedSearch => self.intervals_paused_search = value,
            LimitField::Toxic => self.intervals_toxic = value,
            LimitField::Other => self.intervals_other = value,
        }
        self.recompute();
    }

    // ── Parsed views ──────────────────────────────────────────────────────

    pub fn active(&self) -> RangeSet {
        RangeSet::parse(&self.limit_active_session)
    }

    /// The four paused sets, in field order.
    pub fn paused(&self) -> [RangeSet; 4] {
        [
            RangeSet::parse(&self.intervals_quality),
            RangeSet::parse(&self.intervals_paused_search),
            RangeSet::parse(&self.intervals_toxic),
            RangeSet::parse(&self.intervals_other),
        ]
    }

    pub fn summary(&self) -> PoolSummary {
        PoolSummary::resolve(&self.active(), &self.paused())
    }

    /// The pool (`intervals_in_repo`), recomputed from the input fields.
    pub fn pool(&self) -> RangeSet {
        self.summary().pool
    }

    // ── Derived caches ────────────────────────────────────────────────────

    /// Refresh `intervals_in_repo` and `total_paused` from the input fields.
    pub fn recompute(&mut self) {
        let summary = self.summary();
        self.intervals_in_repo = summary.pool.to_string();
        self.total_paused = summary.total_paused;
    }

    pub fn recomputed(mut self) -> Self {
        self.recompute();
        self
    }

    /// `true` if the cached fields match a fresh recomputation.
    pub fn is_consistent(&self) -> bool {
        let summary = self.summary();
        RangeSet::parse(&self.intervals_in_repo) == summary.pool
            && self.total_paused == summary.total_paused
    }

    /// Copy of this record scoped to `category`, leaving `self` untouched.
    pub fn fork_for(&self, category: CategoryId) -> Self {
        Self { category_id: Some(category), ..self.clone() }
    }
}
