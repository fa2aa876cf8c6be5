//! Movement strategies.

use bleth_board::Board;
use bleth_core::{AgentRng, Direction, Location};

/// Proposes an agent's next location.
///
/// Implementations must not retry or wrap: a proposal that would leave the
/// board collapses to `current`.
///
/// # Example
///
/// ```rust,ignore
/// struct Diagonal;
///
/// impl MovementStrategy for Diagonal {
///     fn propose(&self, board: &Board, current: Location, _rng: &mut AgentRng) -> Location {
///         let next = current.neighbor(Direction::Down).neighbor(Direction::Right);
///         if board.is_location_valid(next) { next } else { current }
///     }
/// }
/// ```
pub trait MovementStrategy: Send + Sync + 'static {
    fn propose(&self, board: &Board, current: Location, rng: &mut AgentRng) -> Location;
}

/// Never moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stationary;

impl MovementStrategy for Stationary {
    fn propose(&self, _board: &Board, current: Location, _rng: &mut AgentRng) -> Location {
        current
    }
}

/// Steps to one of the four axis-aligned neighbors, chosen uniformly.
///
/// An off-board pick means the agent stays put for the round.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomWalk;

impl MovementStrategy for RandomWalk {
    fn propose(&self, board: &Board, current: Location, rng: &mut AgentRng) -> Location {
        let Some(&direction) = rng.choose(&Direction::ALL[..]) else {
            return current;
        };
        step_or_stay(board, current, direction)
    }
}

/// Always steps in one direction, clamping at the board edge.
#[derive(Debug, Clone, Copy)]
pub struct FixedDirection(pub Direction);

impl MovementStrategy for FixedDirection {
    fn propose(&self, board: &Board, current: Location, _rng: &mut AgentRng) -> Location {
        step_or_stay(board, current, self.0)
    }
}

#[inline]
fn step_or_stay(board: &Board, current: Location, direction: Direction) -> Location {
    let next = current.neighbor(direction);
    if board.is_location_valid(next) { next } else { current }
}
