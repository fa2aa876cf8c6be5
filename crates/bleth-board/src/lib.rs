//! `bleth-board`: spatial occupancy index for the bleth simulator.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`board`]   | `Board`: `Location → [AgentRef]` with bounds validation   |
//! | [`state`]   | `BoardState`, `BoardKind`: label-grid snapshots           |
//! | [`error`]   | `BoardError`, `BoardResult<T>`                            |
//!
//! The same `Board` type serves both as the simulation's real board and as
//! the resolver's estimated board; only the owner differs.

pub mod board;
pub mod error;
pub mod state;

#[cfg(test)]
mod tests;

pub use board::Board;
pub use error::{BoardError, BoardResult};
pub use state::{BoardKind, BoardState};
