//! Board error type.

use thiserror::Error;

use bleth_core::{Location, Round};

/// Errors produced by `bleth-board`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("location {location} is outside the {rows}x{cols} board")]
    OutOfBounds { location: Location, rows: u32, cols: u32 },

    #[error("agent reference is null")]
    NullAgent,

    #[error("round {round} exceeds the simulation's last round {max}")]
    ExceedingRound { round: Round, max: Round },
}

pub type BoardResult<T> = Result<T, BoardError>;
