//! `OutputHooks<W>`: bridges `SimHooks` to an `OutputWriter`.

use bleth_board::{Board, BoardKind, BoardState};
use bleth_core::Round;
use bleth_sim::{SimConfig, SimHooks, SimView};

use crate::row::{BoardCellRow, SimulationStatsRow};
use crate::stats::TracingStats;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimHooks`] that snapshots both boards every round, measures the
/// tracing statistics, and writes everything to an [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimHooks` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct OutputHooks<W: OutputWriter> {
    writer:      W,
    description: String,
    last_round:  Round,
    stats:       TracingStats,
    summary:     Option<SimulationStatsRow>,
    last_error:  Option<OutputError>,
}

impl<W: OutputWriter> OutputHooks<W> {
    /// Create hooks backed by `writer`; `config` supplies the run's
    /// description and last round.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            description: config.description.clone(),
            last_round:  config.last_round(),
            stats:       TracingStats::new(),
            summary:     None,
            last_error:  None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Per-round statistics gathered so far.
    pub fn stats(&self) -> &TracingStats {
        &self.stats
    }

    /// Run summary, available once the simulation has completed.
    pub fn summary(&self) -> Option<&SimulationStatsRow> {
        self.summary.as_ref()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_board(&mut self, board: &Board, kind: BoardKind, round: Round) -> OutputResult<()> {
        let state = BoardState::capture(board, kind, round, self.last_round)?;
        let rows = BoardCellRow::from_state(&state);
        if rows.is_empty() {
            return Ok(());
        }
        self.writer.write_board_cells(&rows)
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimHooks for OutputHooks<W> {
    fn on_round_state_ready(&mut self, board: &Board, estimated: &Board, round: Round) {
        let result = self.write_board(board, BoardKind::Real, round);
        self.store_err(result);
        let result = self.write_board(estimated, BoardKind::Estimated, round);
        self.store_err(result);
    }

    fn on_round_stats_ready(&mut self, _round: Round, view: &SimView<'_>) {
        let row = self.stats.record(view);
        let result = self.writer.write_round_stats(&row);
        self.store_err(result);
    }

    fn on_simulation_complete(&mut self, _view: &SimView<'_>) {
        let summary = self.stats.summary(&self.description);
        tracing::info!(
            rounds = summary.rounds,
            measured = summary.rounds_measured,
            mean_distance = ?summary.mean_distance,
            "tracing statistics"
        );
        let result = self.writer.write_simulation_stats(&summary);
        self.store_err(result);
        self.summary = Some(summary);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
