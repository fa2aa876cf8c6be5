//! SQLite output backend (feature = `"sqlite"`).
//!
//! Creates `output.db` in the configured directory with three tables:
//!
//! ```sql
//! board_states     (round, board, row, col, agents)
//! round_stats      (round, awake_observers, estimated_beacons, mean_distance)
//! simulation_stats (description, rounds, rounds_measured,
//!                   min_distance, max_distance, mean_distance)
//! ```
//!
//! Missing distances are stored as `NULL`.

use std::path::Path;

use rusqlite::{Connection, params};

use crate::writer::OutputWriter;
use crate::{BoardCellRow, OutputResult, RoundStatsRow, SimulationStatsRow};

/// Writes simulation output to a SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS board_states (
                 round  INTEGER NOT NULL,
                 board  TEXT    NOT NULL,
                 row    INTEGER NOT NULL,
                 col    INTEGER NOT NULL,
                 agents TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS round_stats (
                 round             INTEGER NOT NULL,
                 awake_observers   INTEGER NOT NULL,
                 estimated_beacons INTEGER NOT NULL,
                 mean_distance     REAL
             );
             CREATE TABLE IF NOT EXISTS simulation_stats (
                 description     TEXT    NOT NULL,
                 rounds          INTEGER NOT NULL,
                 rounds_measured INTEGER NOT NULL,
                 min_distance    REAL,
                 max_distance    REAL,
                 mean_distance   REAL
             );",
        )?;
        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_board_cells(&mut self, rows: &[BoardCellRow]) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO board_states (round, board, row, col, agents)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(params![row.round, row.board, row.row, row.col, row.agents])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_round_stats(&mut self, row: &RoundStatsRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO round_stats (round, awake_observers, estimated_beacons, mean_distance)
             VALUES (?1, ?2, ?3, ?4)",
            params![row.round, row.awake_observers, row.estimated_beacons, row.mean_distance],
        )?;
        Ok(())
    }

    fn write_simulation_stats(&mut self, row: &SimulationStatsRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO simulation_stats
                 (description, rounds, rounds_measured, min_distance, max_distance, mean_distance)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                row.description,
                row.rounds,
                row.rounds_measured,
                row.min_distance,
                row.max_distance,
                row.mean_distance,
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
