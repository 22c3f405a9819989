//! Unit tests for sp-limits.

use sp_core::CategoryId;

use crate::{LimitConfig, LimitField};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn cat(id: &str) -> CategoryId {
    CategoryId::from(id)
}

fn global(profile: &str, active: &str) -> LimitConfig {
    LimitConfig::new(profile, None).with(LimitField::ActiveSession, active)
}

// ── LimitConfig ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod limit_config {
    use super::*;

    #[test]
    fn setters_keep_caches_consistent() {
        let mut l = global("alpha", "1-100");
        assert_eq!(l.intervals_in_repo, "1-100");
        assert_eq!(l.total_paused, 0);

        l.set_field(LimitField::Quality, "1-10");
        l.set_field(LimitField::Toxic, "5-20, 90");
        assert_eq!(l.intervals_in_repo, "21-89,91-100");
        assert_eq!(l.total_paused, 21);
        assert!(l.is_consistent());
    }

    #[test]
    fn paused_outside_active_still_counts_as_paused() {
        let l = global("a", "1-10").with(LimitField::Other, "50-59");
        assert_eq!(l.total_paused, 10);
        assert_eq!(l.intervals_in_repo, "1-10");
    }

    #[test]
    fn empty_active_means_empty_pool() {
        let l = LimitConfig::new("a", None).with(LimitField::Quality, "1-5");
        assert!(l.pool().is_empty());
        assert_eq!(l.intervals_in_repo, "");
        assert_eq!(l.total_paused, 5);
    }

    #[test]
    fn stale_cache_is_detected_and_pool_ignores_it() {
        let mut l = global("a", "1-50");
        l.intervals_in_repo = "1-999".into();
        assert!(!l.is_consistent());
        assert_eq!(l.pool().to_string(), "1-50");
        l.recompute();
        assert!(l.is_consistent());
    }

    #[test]
    fn fork_copies_fields_under_new_scope() {
        let g = global("a", "1-50").with(LimitField::Toxic, "3");
        let f = g.fork_for(cat("c1"));
        assert!(g.is_global());
        assert_eq!(f.category_id, Some(cat("c1")));
        assert_eq!(f.intervals_toxic, "3");
        assert_eq!(f.intervals_in_repo, g.intervals_in_repo);
    }

    #[test]
    fn json_uses_dashboard_field_names() {
        let l = global("a", "1-5");
        let json = serde_json::to_value(&l).unwrap();
        assert_eq!(json["profileName"], "a");
        assert_eq!(json["limitActiveSession"], "1-5");
        assert_eq!(json["intervalsInRepo"], "1-5");
        assert!(json.get("categoryId").is_none());
    }
}

// ── LimitStore ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use super::*;
    use crate::{EditOutcome, LimitSource, LimitStore};

    fn store() -> LimitStore {
        LimitStore::new(vec![
            global("alpha", "1-100"),
            LimitConfig::new("alpha", Some(cat("c1"))).with(LimitField::ActiveSession, "1-10"),
            global("beta", "500-600"),
        ])
    }

    #[test]
    fn resolution_prefers_category_then_global_then_virtual() {
        let s = store();
        let r = s.resolve("alpha", &cat("c1"));
        assert_eq!(r.source, LimitSource::Category);
        assert_eq!(r.limit.limit_active_session, "1-10");

        let r = s.resolve("alpha", &cat("c2"));
        assert_eq!(r.source, LimitSource::Global);
        assert_eq!(r.limit.limit_active_session, "1-100");

        let r = s.resolve("gamma", &cat("c1"));
        assert_eq!(r.source, LimitSource::Virtual);
        assert!(r.limit.pool().is_empty());
        assert_eq!(r.limit.category_id, Some(cat("c1")));
    }

    #[test]
    fn editing_global_from_category_forks() {
        let mut s = store();
        let outcome = s.edit("beta", &cat("c1"), LimitField::Quality, "500-549");
        assert_eq!(outcome, EditOutcome::Forked);
        assert_eq!(s.len(), 4);

        let forked = s.get("beta", Some(&cat("c1"))).unwrap();
        assert_eq!(forked.intervals_in_repo, "550-600");
        let untouched = s.get("beta", None).unwrap();
        assert_eq!(untouched.intervals_in_repo, "500-600");
    }

    #[test]
    fn editing_scoped_record_updates_in_place() {
        let mut s = store();
        let outcome = s.edit("alpha", &cat("c1"), LimitField::ActiveSession, "1-20");
        assert_eq!(outcome, EditOutcome::Updated);
        assert_eq!(s.len(), 3);
        assert_eq!(s.get("alpha", Some(&cat("c1"))).unwrap().intervals_in_repo, "1-20");
    }

    #[test]
    fn editing_missing_record_creates_scoped_one() {
        let mut s = store();
        let outcome = s.edit("delta", &cat("c9"), LimitField::ActiveSession, "7-9");
        assert_eq!(outcome, EditOutcome::Created);
        let created = s.get("delta", Some(&cat("c9"))).unwrap();
        assert_eq!(created.intervals_in_repo, "7-9");
        assert!(s.get("delta", None).is_none());
    }

    #[test]
    fn new_recomputes_stale_caches() {
        let mut stale = global("a", "1-10");
        stale.intervals_in_repo = "nonsense".into();
        stale.total_paused = 77;
        let s = LimitStore::new(vec![stale]);
        assert!(s.limits()[0].is_consistent());
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;
    use crate::{LimitError, load_limits_reader};

    const CSV: &str = "\
profile_name,category_id,limit_active_session,intervals_quality,intervals_paused_search,intervals_toxic,intervals_other
alpha,,1-5000,NO,,120-180,
alpha,cat-a,1-5000,10-20,,120-180,4000-4999
beta,cat-a,1-800,,,,
,cat-a,1-5,,,,
beta,cat-a,1-900,,,,
";

    #[test]
    fn loads_global_and_scoped_records() {
        let store = load_limits_reader(CSV.as_bytes()).unwrap();
        assert_eq!(store.len(), 3);

        let g = store.get("alpha", None).unwrap();
        assert_eq!(g.intervals_in_repo, "1-119,181-5000");
        assert_eq!(g.total_paused, 61);

        let scoped = store.get("alpha", Some(&cat("cat-a"))).unwrap();
        assert_eq!(scoped.intervals_in_repo, "1-9,21-119,181-3999,5000");
    }

    #[test]
    fn later_duplicate_wins() {
        let store = load_limits_reader(CSV.as_bytes()).unwrap();
        assert_eq!(store.get("beta", Some(&cat("cat-a"))).unwrap().limit_active_session, "1-900");
    }

    #[test]
    fn malformed_csv_is_a_parse_error() {
        let bad = "profile_name,category_id\nalpha,c1,extra\n";
        assert!(matches!(load_limits_reader(bad.as_bytes()), Err(LimitError::Parse(_))));
    }
}
