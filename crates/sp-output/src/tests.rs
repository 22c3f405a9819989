//! Integration tests for sp-output.

use chrono::NaiveDate;
use sp_core::{CategoryId, EngineConfig, SessionIdx};
use sp_limits::{LimitConfig, LimitField, LimitStore};
use sp_schedule::{Category, DayPlanRecord, PlanDrop, ScheduleConfig, Session};
use sp_sim::{CategoryDayPlan, CategoryPlanner, NoopObserver, PlannerBuilder};

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn category() -> Category {
    let mut c = Category {
        id: CategoryId::from("c1"),
        name: "Category one".into(),
        sessions: vec![Session::new("alpha"), Session::new("beta")],
        ..Category::default()
    };
    c.plan.drops = vec![PlanDrop::new(10), PlanDrop::new(20)];
    c.plan.script_name = "daily.js".into();
    c
}

fn planner(alpha: &str) -> CategoryPlanner {
    let limits = LimitStore::new(vec![
        LimitConfig::new("alpha", None).with(LimitField::ActiveSession, alpha),
        LimitConfig::new("beta", None).with(LimitField::ActiveSession, "1-800"),
    ]);
    PlannerBuilder::new(category(), &limits).build().unwrap()
}

fn plan() -> CategoryDayPlan {
    planner("1-400").plan_day(date(), None, None, &mut NoopObserver)
}

fn tmp() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

// ── Table export ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod table_tests {
    use super::*;
    use crate::{TableFormat, plan_table, table_text};

    #[test]
    fn table_layout() {
        let rows = plan_table(&plan(), &EngineConfig::default());
        let expected: Vec<Vec<&str>> = vec![
            vec!["Category one"],
            vec!["SCRIPT NAME", "", "daily.js"],
            vec!["SESSION NAME", "", "alpha", "beta"],
            vec!["INTERVALS IN REPO", "", "1-400", "1-800"],
            vec!["STEP", "", "5", "10"],
            vec!["START", "", "1", "1"],
            vec!["TIME", "DROPS", "Interval", "Interval"],
            vec!["09:00", "drop 1", "1-5", "1-10"],
            vec!["10:00", "drop 2", "6-10", "11-20"],
        ];
        assert_eq!(rows, expected);
    }

    #[test]
    fn saved_start_is_shown_as_typed() {
        let mut record = DayPlanRecord::new(CategoryId::from("c1"), date());
        record.set_start(SessionIdx(1), ScheduleConfig::parse("1:50,2:300"));
        let plan = planner("1-400").plan_day(date(), Some(&record), None, &mut NoopObserver);
        let rows = plan_table(&plan, &EngineConfig::default());
        assert_eq!(rows[5], ["START", "", "1", "1:50,2:300"]);
        assert_eq!(rows[8][3], "300-309");
    }

    #[test]
    fn empty_pool_uses_placeholder() {
        let plan = planner("").plan_day(date(), None, None, &mut NoopObserver);
        let rows = plan_table(&plan, &EngineConfig::default());
        assert_eq!(rows[3][2], "-");
        assert_eq!(rows[5][2], "-");
        assert_eq!(rows[7][2], "-");
    }

    #[test]
    fn tsv_text_is_tab_separated() {
        let text = table_text(&[plan()], &EngineConfig::default(), TableFormat::Tsv).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "SCRIPT NAME\t\tdaily.js");
        assert_eq!(lines[6], "TIME\tDROPS\tInterval\tInterval");
        assert_eq!(lines[7], "09:00\tdrop 1\t1-5\t1-10");
    }

    #[test]
    fn csv_text_reads_back() {
        let text = table_text(&[plan()], &EngineConfig::default(), TableFormat::Csv).unwrap();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());
        let records: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 9);
        assert_eq!(&records[8][2], "6-10");
    }
}

// ── CSV writer ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::csv::{ALERT_COLUMNS, DROP_COLUMNS};
    use crate::{CsvWriter, DropRow, PlanOutputObserver, PlanWriter};

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("drops.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, DROP_COLUMNS);

        let mut rdr = csv::Reader::from_path(dir.path().join("alerts.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ALERT_COLUMNS);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_drops(&[]).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn drop_rows_cover_every_session_and_drop() {
        let rows = DropRow::all(&plan(), &EngineConfig::default());
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].session_name, "alpha");
        assert_eq!(rows[0].date, "2024-03-01");
        assert_eq!(rows[1].label, "10:00");
        assert_eq!((rows[3].session, rows[3].drop), (2, 2));
        assert_eq!(rows[3].interval, "11-20");
    }

    #[test]
    fn observer_writes_drops_and_alerts() {
        let dir = tmp();
        let planner = planner("1-7");
        let mut record = DayPlanRecord::new(CategoryId::from("c1"), date());
        record.set_step(SessionIdx(0), ScheduleConfig::Constant(4));

        let mut obs = PlanOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), planner.config());
        planner.plan_day(date(), Some(&record), None, &mut obs);
        obs.finish();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.rows_written(), 4);

        let mut rdr = csv::Reader::from_path(dir.path().join("drops.csv")).unwrap();
        let drops: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(drops.len(), 4);
        assert_eq!(&drops[0][8], "1-4"); // interval
        assert_eq!(&drops[1][8], "5-7");
        assert_eq!(&drops[1][10], "1"); // carry_out

        let mut rdr = csv::Reader::from_path(dir.path().join("alerts.csv")).unwrap();
        let alerts: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(alerts.len(), 1);
        assert_eq!(&alerts[0][3], "alpha");
        assert_eq!(&alerts[0][4], "2"); // drop
        assert_eq!(&alerts[0][5], "3"); // remaining_seeds
        assert_eq!(&alerts[0][6], "1-4");
    }
}

// ── SQLite writer ─────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::{PlanOutputObserver, SqliteWriter};

    #[test]
    fn sqlite_writes_and_replaces_rows() {
        let dir = tmp();
        let planner = planner("1-400");
        let mut obs = PlanOutputObserver::new(SqliteWriter::new(dir.path()).unwrap(), planner.config());
        planner.plan_day(date(), None, None, &mut obs);
        // Planning the same day again replaces its rows.
        planner.plan_day(date(), None, None, &mut obs);
        obs.finish();
        assert!(obs.take_error().is_none());

        let conn = rusqlite::Connection::open(dir.path().join("plans.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM drops", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 4);

        let interval: String = conn
            .query_row(
                "SELECT interval FROM drops WHERE session = 1 AND drop_number = 2",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(interval, "6-10");
    }
}
