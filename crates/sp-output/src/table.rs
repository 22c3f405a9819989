//! The operator-facing day table.
//!
//! One block per category, laid out the way the plan is read on the floor:
//!
//! ```text
//! Category one
//! SCRIPT NAME        |        | daily.js
//! SESSION NAME       |        | alpha     | beta
//! INTERVALS IN REPO  |        | 1-400     | 1-800
//! STEP               |        | 5         | 10
//! START              |        | 1         | 1
//! TIME               | DROPS  | Interval  | Interval
//! 09:00              | drop 1 | 1-5       | 1-10
//! 10:00              | drop 2 | 6-10      | 11-20
//! ```
//!
//! Rows have different lengths; writers are configured as flexible.

use std::io::Write;

use sp_core::EngineConfig;
use sp_sim::{CategoryDayPlan, SessionColumn};

use crate::OutputResult;

/// Field separator for [`write_table`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TableFormat {
    #[default]
    Csv,
    /// Tab-separated, ready to paste into a spreadsheet.
    Tsv,
}

impl TableFormat {
    pub fn delimiter(self) -> u8 {
        match self {
            TableFormat::Csv => b',',
            TableFormat::Tsv => b'\t',
        }
    }
}

/// Build the table rows for one category-day.
pub fn plan_table(plan: &CategoryDayPlan, config: &EngineConfig) -> Vec<Vec<String>> {
    let empty = config.empty_interval_label.as_str();
    let mut rows = vec![
        vec![plan.category_name.clone()],
        vec!["SCRIPT NAME".to_owned(), String::new(), plan.script_name.clone()],
        header_row("SESSION NAME", plan, |c| c.name.clone()),
        header_row("INTERVALS IN REPO", plan, |c| c.pool.format_or(empty)),
        header_row("STEP", plan, |c| c.step.to_string()),
        header_row("START", plan, |c| start_text(c, empty)),
    ];

    let mut columns = vec!["TIME".to_owned(), "DROPS".to_owned()];
    columns.extend(plan.sessions.iter().map(|_| "Interval".to_owned()));
    rows.push(columns);

    for (d, label) in plan.drop_labels.iter().enumerate() {
        let mut row = vec![label.clone(), format!("drop {}", d + 1)];
        row.extend(plan.sessions.iter().map(|c| {
            c.plan
                .drops
                .get(d)
                .map_or_else(|| empty.to_owned(), |r| r.interval_text(empty))
        }));
        rows.push(row);
    }
    rows
}

fn header_row(
    name: &str,
    plan: &CategoryDayPlan,
    cell: impl Fn(&SessionColumn) -> String,
) -> Vec<String> {
    [name.to_owned(), String::new()]
        .into_iter()
        .chain(plan.sessions.iter().map(cell))
        .collect()
}

fn start_text(column: &SessionColumn, empty: &str) -> String {
    match (&column.start_config, column.start()) {
        (Some(cfg), _) => cfg.to_string(),
        (None, Some(pos)) => pos.to_string(),
        (None, None) => empty.to_owned(),
    }
}

/// Write the tables of `plans` to `out`, separated by a blank line.
pub fn write_table<W: Write>(
    plans:  &[CategoryDayPlan],
    config: &EngineConfig,
    format: TableFormat,
    out:    W,
) -> OutputResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(format.delimiter())
        .flexible(true)
        .from_writer(out);
    for (i, plan) in plans.iter().enumerate() {
        if i > 0 {
            writer.write_record([""])?;
        }
        for row in plan_table(plan, config) {
            writer.write_record(&row)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// [`write_table`] into a `String`.
pub fn table_text(plans: &[CategoryDayPlan], config: &EngineConfig, format: TableFormat) -> OutputResult<String> {
    let mut buf = Vec::new();
    write_table(plans, config, format, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}
