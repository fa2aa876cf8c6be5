//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `board_states.csv`
//! - `round_stats.csv`
//! - `simulation_stats.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{BoardCellRow, OutputResult, RoundStatsRow, SimulationStatsRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    boards:     Writer<File>,
    rounds:     Writer<File>,
    simulation: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut boards = Writer::from_path(dir.join("board_states.csv"))?;
        boards.write_record(["round", "board", "row", "col", "agents"])?;

        let mut rounds = Writer::from_path(dir.join("round_stats.csv"))?;
        rounds.write_record(["round", "awake_observers", "estimated_beacons", "mean_distance"])?;

        let mut simulation = Writer::from_path(dir.join("simulation_stats.csv"))?;
        simulation.write_record([
            "description",
            "rounds",
            "rounds_measured",
            "min_distance",
            "max_distance",
            "mean_distance",
        ])?;

        Ok(Self {
            boards,
            rounds,
            simulation,
            finished: false,
        })
    }
}

// Missing measurements are written as empty fields.
fn opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_board_cells(&mut self, rows: &[BoardCellRow]) -> OutputResult<()> {
        for row in rows {
            self.boards.write_record(&[
                row.round.to_string(),
                row.board.to_owned(),
                row.row.to_string(),
                row.col.to_string(),
                row.agents.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_round_stats(&mut self, row: &RoundStatsRow) -> OutputResult<()> {
        self.rounds.write_record(&[
            row.round.to_string(),
            row.awake_observers.to_string(),
            row.estimated_beacons.to_string(),
            opt(row.mean_distance),
        ])?;
        Ok(())
    }

    fn write_simulation_stats(&mut self, row: &SimulationStatsRow) -> OutputResult<()> {
        self.simulation.write_record(&[
            row.description.clone(),
            row.rounds.to_string(),
            row.rounds_measured.to_string(),
            opt(row.min_distance),
            opt(row.max_distance),
            opt(row.mean_distance),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.boards.flush()?;
        self.rounds.flush()?;
        self.simulation.flush()?;
        Ok(())
    }
}
