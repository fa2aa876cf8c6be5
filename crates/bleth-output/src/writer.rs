//! The `OutputWriter` trait implemented by all backend writers.

use crate::{BoardCellRow, OutputResult, RoundStatsRow, SimulationStatsRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are returned to [`OutputHooks`](crate::OutputHooks), which keeps
/// the first one for [`take_error`](crate::OutputHooks::take_error).
pub trait OutputWriter {
    /// Write the occupied cells of one board snapshot.
    fn write_board_cells(&mut self, rows: &[BoardCellRow]) -> OutputResult<()>;

    /// Write one round's statistics.
    fn write_round_stats(&mut self, row: &RoundStatsRow) -> OutputResult<()>;

    /// Write the run summary.
    fn write_simulation_stats(&mut self, row: &SimulationStatsRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
