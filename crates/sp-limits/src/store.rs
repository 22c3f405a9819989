//! `LimitStore`: resolution and editing of limit records.
//!
//! # Resolution order
//!
//! For a `(profile, category)` pair:
//!
//! 1. the record scoped to that category, else
//! 2. the global record for the profile (no category), else
//! 3. an empty virtual record scoped to the category.
//!
//! # Editing from a category view
//!
//! | Existing record       | Effect of `edit`                                     |
//! |-----------------------|------------------------------------------------------|
//! | category-scoped       | updated in place                                     |
//! | global only           | forked: a category-scoped copy is added and edited;  |
//! |                       | the global record stays for other categories         |
//! | none                  | a new category-scoped record is created              |

use std::borrow::Cow;

use sp_core::CategoryId;

use crate::{LimitConfig, LimitField};

/// Where a resolved record came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LimitSource {
    Category,
    Global,
    Virtual,
}

/// A record resolved for one `(profile, category)` pair.
#[derive(Clone, Debug)]
pub struct ResolvedLimit<'a> {
    pub limit:  Cow<'a, LimitConfig>,
    pub source: LimitSource,
}

/// What [`LimitStore::edit`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    Forked,
    Created,
}

/// All limit records of one entity/method, global and category-scoped.
#[derive(Clone, Debug, Default)]
pub struct LimitStore {
    limits: Vec<LimitConfig>,
}

impl LimitStore {
    /// Wrap `limits`, recomputing every derived cache on the way in.
    pub fn new(limits: Vec<LimitConfig>) -> Self {
        let limits = limits.into_iter().map(LimitConfig::recomputed).collect();
        Self { limits }
    }

    pub fn limits(&self) -> &[LimitConfig] {
        &self.limits
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// Exact lookup: `category = None` addresses the global record.
    pub fn get(&self, profile: &str, category: Option<&CategoryId>) -> Option<&LimitConfig> {
        self.position(profile, category).map(|i| &self.limits[i])
    }

    /// Resolve the record that applies to `profile` inside `category`.
    pub fn resolve(&self, profile: &str, category: &CategoryId) -> ResolvedLimit<'_> {
        if let Some(l) = self.get(profile, Some(category)) {
            return ResolvedLimit { limit: Cow::Borrowed(l), source: LimitSource::Category };
        }
        if let Some(l) = self.get(profile, None) {
            return ResolvedLimit { limit: Cow::Borrowed(l), source: LimitSource::Global };
        }
        ResolvedLimit {
            limit:  Cow::Owned(LimitConfig::new(profile, Some(category.clone()))),
            source: LimitSource::Virtual,
        }
    }

    /// Edit one field of the record `profile` sees inside `category`.
    pub fn edit(
        &mut self,
        profile:  &str,
        category: &CategoryId,
        field:    LimitField,
        value:    impl Into<String>,
    ) -> EditOutcome {
        if let Some(i) = self.position(profile, Some(category)) {
            self.limits[i].set_field(field, value);
            return EditOutcome::Updated;
        }
        if let Some(i) = self.position(profile, None) {
            let mut forked = self.limits[i].fork_for(category.clone());
            forked.set_field(field, value);
            log::warn!("limit for {profile:?} forked from global into category {category}");
            self.limits.push(forked);
            return EditOutcome::Forked;
        }
        let mut created = LimitConfig::new(profile, Some(category.clone()));
        created.set_field(field, value);
        self.limits.push(created);
        EditOutcome::Created
    }

    /// Insert or replace the record with the same `(profile, category)` key.
    pub fn upsert(&mut self, limit: LimitConfig) {
        let limit = limit.recomputed();
        match self.position(&limit.profile_name, limit.category_id.as_ref()) {
            Some(i) => self.limits[i] = limit,
            None => self.limits.push(limit),
        }
    }

    fn position(&self, profile: &str, category: Option<&CategoryId>) -> Option<usize> {
        self.limits
            .iter()
            .position(|l| l.profile_name == profile && l.category_id.as_ref() == category)
    }
}
