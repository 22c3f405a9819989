//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `plans.db` file in the configured output directory with
//! two tables: `drops` and `alerts`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::PlanWriter;
use crate::{AlertRow, DropRow, OutputResult};

/// Writes flat plan output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `plans.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("plans.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS drops (
                 category_id     TEXT    NOT NULL,
                 date            TEXT    NOT NULL,
                 session         INTEGER NOT NULL,
                 session_name    TEXT    NOT NULL,
                 drop_number     INTEGER NOT NULL,
                 label           TEXT    NOT NULL,
                 nominal         INTEGER NOT NULL,
                 requested       INTEGER NOT NULL,
                 interval        TEXT    NOT NULL,
                 actual          INTEGER NOT NULL,
                 carry_out       INTEGER NOT NULL,
                 from_simulation INTEGER NOT NULL,
                 PRIMARY KEY (category_id, date, session, drop_number)
             );
             CREATE TABLE IF NOT EXISTS alerts (
                 category_id     TEXT    NOT NULL,
                 date            TEXT    NOT NULL,
                 session         INTEGER NOT NULL,
                 session_name    TEXT    NOT NULL,
                 drop_number     INTEGER NOT NULL,
                 remaining_seeds INTEGER NOT NULL,
                 last_interval   TEXT    NOT NULL,
                 PRIMARY KEY (category_id, date, session)
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl PlanWriter for SqliteWriter {
    fn write_drops(&mut self, rows: &[DropRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            // Re-planning a day replaces its rows.
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO drops \
                 (category_id, date, session, session_name, drop_number, label, \
                  nominal, requested, interval, actual, carry_out, from_simulation) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.category_id,
                    row.date,
                    row.session,
                    row.session_name,
                    row.drop,
                    row.label,
                    row.nominal,
                    row.requested,
                    row.interval,
                    row.actual,
                    row.carry_out,
                    row.from_simulation as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_alert(&mut self, row: &AlertRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO alerts \
             (category_id, date, session, session_name, drop_number, remaining_seeds, last_interval) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                row.category_id,
                row.date,
                row.session,
                row.session_name,
                row.drop,
                row.remaining_seeds,
                row.last_interval,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
