//! CSV limit loader.
//!
//! # CSV format
//!
//! ```csv
//! profile_name,category_id,limit_active_session,intervals_quality,intervals_paused_search,intervals_toxic,intervals_other
//! alpha,,1-5000,NO,,120-180,
//! alpha,cat-a,1-5000,10-20,,120-180,4000-4999
//! beta,cat-a,1-800,,,,
//! ```
//!
//! An empty `category_id` marks a global record.  Derived fields are not
//! read: they are recomputed for every row.  When two rows share a
//! `(profile, category)` key the later one wins.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use sp_core::CategoryId;

use crate::{LimitConfig, LimitError, LimitStore};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LimitRow {
    profile_name:            String,
    #[serde(default)]
    category_id:             String,
    #[serde(default)]
    limit_active_session:    String,
    #[serde(default)]
    intervals_quality:       String,
    #[serde(default)]
    intervals_paused_search: String,
    #[serde(default)]
    intervals_toxic:         String,
    #[serde(default)]
    intervals_other:         String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`LimitStore`] from a CSV file.
pub fn load_limits_csv(path: &Path) -> Result<LimitStore, LimitError> {
    let file = std::fs::File::open(path).map_err(LimitError::Io)?;
    load_limits_reader(file)
}

/// Like [`load_limits_csv`] but accepts any `Read` source.
pub fn load_limits_reader<R: Read>(reader: R) -> Result<LimitStore, LimitError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut store = LimitStore::default();

    for result in csv_reader.deserialize::<LimitRow>() {
        let row = result.map_err(|e| LimitError::Parse(e.to_string()))?;
        let profile = row.profile_name.trim();
        if profile.is_empty() {
            log::warn!("skipping limit row without a profile name");
            continue;
        }
        let category = row.category_id.trim();
        let limit = LimitConfig {
            profile_name:            profile.to_owned(),
            category_id:             (!category.is_empty()).then(|| CategoryId::from(category)),
            limit_active_session:    row.limit_active_session,
            intervals_quality:       row.intervals_quality,
            intervals_paused_search: row.intervals_paused_search,
            intervals_toxic:         row.intervals_toxic,
            intervals_other:         row.intervals_other,
            ..LimitConfig::default()
        };
        store.upsert(limit);
    }

    log::debug!("loaded {} limit records", store.len());
    Ok(store)
}
