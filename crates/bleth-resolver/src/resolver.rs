//! The `Resolver` trait.

use bleth_board::{Board, BoardResult};
use bleth_core::{Location, Transmission};

/// Collects per-round observer reports and maintains an estimated board.
pub trait Resolver {
    /// Record that an observer standing at `observer_location` heard each of
    /// `transmissions` this round.  Calls from different observers may arrive
    /// in any order.
    fn receive_information(&mut self, observer_location: Location, transmissions: &[Transmission]);

    /// Update estimates from this round's reports, then discard the reports.
    fn estimate(&mut self) -> BoardResult<()>;

    /// The estimated board.
    fn board(&self) -> &Board;
}
