//! Board snapshots handed to persistence and reporting collaborators.

use bleth_core::Round;

use crate::{Board, BoardError, BoardResult};

/// Which board a snapshot was taken from.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardKind {
    Real,
    Estimated,
}

impl BoardKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            BoardKind::Real      => "real",
            BoardKind::Estimated => "estimated",
        }
    }
}

/// A frozen label grid of one board at one round.
///
/// Each cell holds the display labels (`"Beacon0"`, `"Observer2"`, …) of the
/// agents on it, in board insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub kind:  BoardKind,
    pub round: Round,
    pub rows:  u32,
    pub cols:  u32,
    /// Row-major, `rows * cols` entries.
    cells:     Vec<Vec<String>>,
}

impl BoardState {
    /// Snapshot `board` as the state of `round`.
    ///
    /// Fails with [`BoardError::ExceedingRound`] if `round` is past
    /// `last_round`, the simulation's configured maximum.
    pub fn capture(board: &Board, kind: BoardKind, round: Round, last_round: Round) -> BoardResult<Self> {
        if round > last_round {
            return Err(BoardError::ExceedingRound { round, max: last_round });
        }

        let (rows, cols) = (board.rows(), board.cols());
        let mut cells = vec![Vec::new(); rows as usize * cols as usize];
        for (loc, agents) in board.all_occupied() {
            let idx = loc.row as usize * cols as usize + loc.col as usize;
            cells[idx] = agents.iter().map(ToString::to_string).collect();
        }

        Ok(Self { kind, round, rows, cols, cells })
    }

    /// Labels at `(row, col)`; empty when out of range.
    pub fn cell(&self, row: u32, col: u32) -> &[String] {
        if row >= self.rows || col >= self.cols {
            return &[];
        }
        &self.cells[(row * self.cols + col) as usize]
    }

    /// Non-empty cells as `(row, col, labels)`, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (u32, u32, &[String])> + '_ {
        self.cells.iter().enumerate().filter(|(_, c)| !c.is_empty()).map(move |(i, c)| {
            let i = i as u32;
            (i / self.cols, i % self.cols, c.as_slice())
        })
    }
}
