//! daily — plan one category for a few days and export the result.
//!
//! Inputs are embedded from `data/`:
//!
//! - `limits.csv`: global and category-scoped limit records
//! - `category.json`: the category, its sessions, and its plan configuration
//! - `records.csv`: STEP/START overrides saved for the first day
//! - `engine.json`: engine configuration
//!
//! Usage: `daily [output-dir]` (default `./output`).  Set `RUST_LOG=debug`
//! to see alerts and relocated starts as they are found.

use std::io::{self, Cursor};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use sp_core::EngineConfig;
use sp_limits::load_limits_reader;
use sp_output::{CsvWriter, PlanOutputObserver, TableFormat, write_table};
use sp_schedule::{Category, load_records_reader};
use sp_sim::{LimitPolicy, PlannerBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const LIMITS_CSV:    &str = include_str!("../data/limits.csv");
const RECORDS_CSV:   &str = include_str!("../data/records.csv");
const CATEGORY_JSON: &str = include_str!("../data/category.json");
const ENGINE_JSON:   &str = include_str!("../data/engine.json");

const FIRST_DAY: &str = "2026-10-16";
const DAYS:      usize = 3;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("output"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    // 1. Load inputs.
    let config: EngineConfig = serde_json::from_str(ENGINE_JSON).context("parsing engine.json")?;
    let category: Category = serde_json::from_str(CATEGORY_JSON).context("parsing category.json")?;
    let limits = load_limits_reader(Cursor::new(LIMITS_CSV))?;
    let records = load_records_reader(Cursor::new(RECORDS_CSV))?;
    let first = NaiveDate::parse_from_str(FIRST_DAY, "%Y-%m-%d")?;

    println!("=== daily — seedplan ===");
    println!(
        "Category: {} ({} principal of {} sessions)  |  Days: {DAYS}",
        category.name,
        category.principal_count(),
        category.sessions.len()
    );
    println!("Loaded {} limit records, {} day-plan records", limits.len(), records.len());

    // 2. Build the planner.
    let planner = PlannerBuilder::new(category, &limits)
        .config(config.clone())
        .policy("beta_main", LimitPolicy::SplitToday)
        .build()?;

    let rotation = planner.rotation();
    println!(
        "Rotation: {:.2} days ({} seeds / {} per day), full cycle in {} days",
        rotation.days,
        rotation.total_seeds,
        rotation.total_per_day,
        rotation.cycle_days()
    );
    for s in planner.sessions() {
        println!(
            "  {:<12} pool {:<28} step {:>4}  ({:?} limit)",
            s.name,
            s.pool.format_or(&config.empty_range_label),
            s.default_step,
            s.limit_source
        );
    }
    println!();

    // 3. Plan the days, streaming flat rows to CSV.
    let writer = CsvWriter::new(&out_dir)?;
    let mut observer = PlanOutputObserver::new(writer, &config);
    let plans = planner.plan_days(first, DAYS, &records, None, &mut observer);
    observer.finish();
    if let Some(e) = observer.take_error() {
        return Err(e).context("writing plan rows");
    }
    log::info!("planned {} days for {}", plans.len(), planner.category().id);

    // 4. Print each day's table and alerts.
    for plan in &plans {
        println!("── {} ──", plan.date);
        write_table(std::slice::from_ref(plan), &config, TableFormat::Tsv, io::stdout())?;
        for (column, alert) in plan.alerts() {
            println!("ALERT {}: {alert}", column.name);
        }
        println!();
    }

    // 5. Save today's values and show what yesterday probably looked like.
    if let Some(today) = plans.first() {
        let record = today.to_record();
        let path = out_dir.join(format!("record_{}.json", record.date));
        std::fs::write(&path, serde_json::to_string_pretty(&record)?)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Saved today's STEP/START to {}", path.display());
    }
    if let Some(yesterday) = planner.project_history(1) {
        println!("Projected yesterday:");
        for (s, drops) in planner.sessions().iter().zip(yesterday) {
            let shown: Vec<String> = drops
                .iter()
                .map(|pieces| {
                    let parts: Vec<String> = pieces.iter().map(ToString::to_string).collect();
                    if parts.is_empty() { config.empty_interval_label.clone() } else { parts.join("+") }
                })
                .collect();
            println!("  {:<12} {}", s.name, shown.join("  "));
        }
    }

    println!(
        "\nWrote {} drop rows to {}",
        observer.rows_written(),
        out_dir.join("drops.csv").display()
    );
    Ok(())
}
