//! Unit tests for sp-schedule.

use sp_core::DropIdx;

use crate::{PlanConfiguration, PlanDrop, ScheduleConfig};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn plan(values: &[u64]) -> PlanConfiguration {
    PlanConfiguration {
        drops: values.iter().map(|&v| PlanDrop::new(v)).collect(),
        ..PlanConfiguration::default()
    }
}

fn d(i: u32) -> DropIdx {
    DropIdx(i)
}

// ── ScheduleConfig ────────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule_config {
    use sp_core::CoreError;

    use super::*;

    #[test]
    fn piecewise_step_example() {
        let cfg = ScheduleConfig::parse("1-3:10,4:20");
        assert_eq!(cfg.step_for(d(0)), 10);
        assert_eq!(cfg.step_for(d(2)), 10);
        assert_eq!(cfg.step_for(d(3)), 20);
    }

    #[test]
    fn unmatched_drop_steps_zero() {
        let cfg = ScheduleConfig::parse("1-3:10,4:20");
        assert_eq!(cfg.step_for(d(4)), 0);
        assert_eq!(cfg.start_override_for(d(4)), None);
    }

    #[test]
    fn constant_step_applies_everywhere() {
        let cfg = ScheduleConfig::parse(" 40 ");
        assert_eq!(cfg, ScheduleConfig::Constant(40));
        assert!((0..10).all(|i| cfg.step_for(d(i)) == 40));
    }

    #[test]
    fn constant_start_only_overrides_first_drop() {
        let cfg = ScheduleConfig::Constant(1201);
        assert_eq!(cfg.start_override_for(d(0)), Some(1201));
        assert_eq!(cfg.start_override_for(d(1)), None);
    }

    #[test]
    fn piecewise_start_matches_any_drop() {
        let cfg = ScheduleConfig::parse("3:500");
        assert_eq!(cfg.start_override_for(d(0)), None);
        assert_eq!(cfg.start_override_for(d(2)), Some(500));
    }

    #[test]
    fn first_matching_clause_wins() {
        let cfg = ScheduleConfig::parse("1-5:7,2:99");
        assert_eq!(cfg.step_for(d(1)), 7);
    }

    #[test]
    fn junk_clauses_are_dropped() {
        let cfg = ScheduleConfig::parse("1-2:5,oops,3:x,4:8");
        assert_eq!(cfg.to_string(), "1-2:5,4:8");
        assert_eq!(ScheduleConfig::parse("nonsense").step_for(d(0)), 0);
    }

    #[test]
    fn reversed_drop_span_is_normalised() {
        let cfg = ScheduleConfig::parse("3-1:6");
        assert_eq!(cfg.step_for(d(0)), 6);
        assert_eq!(cfg.to_string(), "1-3:6");
    }

    #[test]
    fn strict_parse_reports_bad_clause() {
        let err = ScheduleConfig::parse_strict("1-2:5,oops").unwrap_err();
        assert_eq!(err, CoreError::InvalidScheduleClause { clause: "oops".into() });
        assert!(ScheduleConfig::parse_strict("1-2:5, 3:9").is_ok());
    }

    #[test]
    fn serde_accepts_number_or_string() {
        let n: ScheduleConfig = serde_json::from_str("25").unwrap();
        assert_eq!(n, ScheduleConfig::Constant(25));
        let s: ScheduleConfig = serde_json::from_str("\"30\"").unwrap();
        assert_eq!(s, ScheduleConfig::Constant(30));
        let p: ScheduleConfig = serde_json::from_str("\"1-2:3\"").unwrap();
        assert_eq!(p.step_for(d(1)), 3);
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"1-2:3\"");
        assert_eq!(serde_json::to_string(&n).unwrap(), "25");
    }
}

// ── PlanConfiguration ─────────────────────────────────────────────────────────

#[cfg(test)]
mod plan_configuration {
    use sp_core::EngineConfig;

    use super::*;
    use crate::{PlanMode, TimeWindow};

    #[test]
    fn empty_plan_still_has_one_drop() {
        assert_eq!(plan(&[]).num_drops(), 1);
        assert_eq!(plan(&[5, 5, 5]).num_drops(), 3);
    }

    #[test]
    fn total_per_day_sums_values() {
        assert_eq!(plan(&[100, 50, 25]).total_per_day(), 175);
    }

    #[test]
    fn labels_follow_window_start() {
        let mut p = plan(&[1, 1, 1]);
        p.time_window = TimeWindow { start_time: "22:15".into(), end_time: "02:00".into() };
        assert_eq!(p.drop_labels(&EngineConfig::default()), ["22:15", "23:15", "00:15"]);
    }

    #[test]
    fn literal_time_wins() {
        let mut p = plan(&[1, 1]);
        p.drops[1].time = Some("17:45".into());
        assert_eq!(p.drop_labels(&EngineConfig::default()), ["09:00", "17:45"]);
    }

    #[test]
    fn request_mode_uses_request_label() {
        let mut p = plan(&[1, 1]);
        p.mode = PlanMode::Request;
        assert_eq!(p.drop_labels(&EngineConfig::default()), ["REQUEST", "REQUEST"]);
    }

    #[test]
    fn unreadable_window_falls_back_to_config() {
        let mut p = plan(&[1]);
        p.time_window.start_time = "soon".into();
        let cfg = EngineConfig { default_start_time: "06:30".into(), ..EngineConfig::default() };
        assert_eq!(p.drop_labels(&cfg), ["06:30"]);
    }

    #[test]
    fn deserializes_dashboard_payload() {
        let json = r#"{
            "drops": [{"value": 100}, {"value": 50, "time": "13:00"}],
            "timeConfig": {"startTime": "08:00", "endTime": "20:00"},
            "scriptName": "warmup",
            "status": "stopped",
            "mode": "request"
        }"#;
        let p: PlanConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(p.total_per_day(), 150);
        assert!(!p.is_active());
        assert!(p.is_request());
        assert_eq!(p.script_name, "warmup");
    }
}

// ── Category / Session ────────────────────────────────────────────────────────

#[cfg(test)]
mod category {
    use crate::{Category, Session};

    #[test]
    fn mirrors_are_not_principal() {
        let cat = Category {
            sessions: vec![
                Session::new("alpha"),
                Session::mirror("alpha-copy"),
                Session::new("beta_M1_x"),
                Session::new("gamma"),
            ],
            ..Category::default()
        };
        let names: Vec<&str> = cat.principal_sessions().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["alpha", "gamma"]);
        assert_eq!(cat.principal_count(), 2);
    }

    #[test]
    fn success_rate() {
        let mut s = Session::new("a");
        assert_eq!(s.success_rate(), None);
        s.session_count = 4;
        s.success_count = 3;
        assert_eq!(s.success_rate(), Some(0.75));
    }
}

// ── Rotation ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rotation {
    use super::*;
    use crate::Rotation;

    #[test]
    fn rotation_days_and_steps() {
        // 2 sessions with 1000 + 500 seeds, 3 drops totalling 300 per day.
        let rot = Rotation::for_plan(&plan(&[100, 100, 100]), &[1000, 500]);
        assert_eq!(rot.days, 5.0);
        assert_eq!(rot.cycle_days(), 5);
        assert_eq!(rot.step_for_session(1000), 67); // 1000 / 5 / 3 = 66.67
        assert_eq!(rot.step_for_session(500), 33);  //  500 / 5 / 3 = 33.33
    }

    #[test]
    fn zero_daily_total_means_one_day() {
        let rot = Rotation::for_plan(&plan(&[0, 0]), &[90]);
        assert_eq!(rot.days, 1.0);
        assert_eq!(rot.step_for_session(90), 45);
    }

    #[test]
    fn empty_pools_give_zero_steps() {
        let rot = Rotation::for_plan(&plan(&[10]), &[0, 0]);
        assert_eq!(rot.days, 0.0);
        assert_eq!(rot.step_for_session(0), 0);
        assert_eq!(rot.cycle_days(), 0);
    }

    #[test]
    fn fractional_rotation_rounds_up_in_cycle_days() {
        let rot = Rotation::for_plan(&plan(&[40]), &[100]);
        assert_eq!(rot.days, 2.5);
        assert_eq!(rot.cycle_days(), 3);
    }
}

// ── Records & loader ──────────────────────────────────────────────────────────

#[cfg(test)]
mod records {
    use chrono::NaiveDate;
    use sp_core::{CategoryId, SessionIdx};

    use crate::{DayPlanRecord, ScheduleConfig, ScheduleError, load_records_reader};

    #[test]
    fn set_step_keeps_start() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let mut rec = DayPlanRecord::new(CategoryId::from("c"), date);
        assert!(rec.is_empty());
        rec.set_start(SessionIdx(0), ScheduleConfig::Constant(10));
        rec.set_step(SessionIdx(0), ScheduleConfig::Constant(4));
        assert_eq!(rec.start(SessionIdx(0)), Some(&ScheduleConfig::Constant(10)));
        assert_eq!(rec.step(SessionIdx(0)), Some(&ScheduleConfig::Constant(4)));
        assert!(rec.step(SessionIdx(1)).is_none());
    }

    #[test]
    fn loader_groups_by_category_and_date() {
        let csv = "\
category_id,date,session_index,step,start
cat-a,2026-10-15,0,40,1201
cat-a,2026-10-15,1,\"1-3:10,4:20\",
cat-b,2026-10-15,0,,500
cat-a,2026-10-14,0,35,
";
        let records = load_records_reader(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);

        let first = &records[0];
        assert_eq!(first.category_id.as_str(), "cat-a");
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());

        let second = &records[1];
        assert_eq!(second.step(SessionIdx(0)), Some(&ScheduleConfig::Constant(40)));
        assert_eq!(second.start(SessionIdx(0)), Some(&ScheduleConfig::Constant(1201)));
        assert_eq!(second.step(SessionIdx(1)).map(|c| c.to_string()), Some("1-3:10,4:20".into()));
        assert!(second.start(SessionIdx(1)).is_none());

        let third = &records[2];
        assert!(third.step(SessionIdx(0)).is_none());
        assert_eq!(third.start(SessionIdx(0)), Some(&ScheduleConfig::Constant(500)));
    }

    #[test]
    fn loader_rejects_bad_date() {
        let csv = "category_id,date,session_index,step,start\nc,15/10/2026,0,1,1\n";
        assert!(matches!(load_records_reader(csv.as_bytes()), Err(ScheduleError::Parse(_))));
    }

    #[test]
    fn loader_rejects_bad_override() {
        let csv = "category_id,date,session_index,step,start\nc,2026-10-15,0,abc,1\n";
        assert!(matches!(load_records_reader(csv.as_bytes()), Err(ScheduleError::Core(_))));
    }
}
