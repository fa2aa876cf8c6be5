//! Plain data row types written by output backends.

use bleth_board::BoardState;

/// One occupied cell of one board at one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCellRow {
    pub round:  u32,
    /// `"real"` or `"estimated"`.
    pub board:  &'static str,
    pub row:    u32,
    pub col:    u32,
    /// Agent labels in cell order, `;`-separated.
    pub agents: String,
}

impl BoardCellRow {
    /// One row per occupied cell of `state`, row-major.
    pub fn from_state(state: &BoardState) -> Vec<BoardCellRow> {
        state
            .occupied()
            .map(|(row, col, labels)| BoardCellRow {
                round:  state.round.0,
                board:  state.kind.as_str(),
                row,
                col,
                agents: labels.join(";"),
            })
            .collect()
    }
}

/// Statistics for one simulated round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundStatsRow {
    pub round:             u32,
    pub awake_observers:   u32,
    pub estimated_beacons: u32,
    /// Mean real-vs-estimated Manhattan distance over estimated beacons;
    /// `None` while no beacon has been heard.
    pub mean_distance:     Option<f64>,
}

/// Statistics for a whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationStatsRow {
    pub description:     String,
    pub rounds:          u32,
    /// Rounds that contributed a `mean_distance`.
    pub rounds_measured: u32,
    pub min_distance:    Option<f64>,
    pub max_distance:    Option<f64>,
    pub mean_distance:   Option<f64>,
}
