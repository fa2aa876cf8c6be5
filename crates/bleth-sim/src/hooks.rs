//! Hook trait for persistence, reporting, and statistics collaborators.

use bleth_agent::{Beacon, Observer};
use bleth_board::Board;
use bleth_core::Round;
use bleth_resolver::{GlobalResolver, Resolver};

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at fixed
/// points of the round loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Each per-round hook fires at most once
/// per round; `on_simulation_complete` fires once per simulation.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimHooks for Progress {
///     fn on_round_stats_ready(&mut self, round: Round, view: &SimView<'_>) {
///         println!("{round}: {} beacons estimated", view.resolver.estimates().count());
///     }
/// }
/// ```
pub trait SimHooks {
    /// Board state is final for `round`.  Also called for round 0, before any
    /// agent has moved.
    fn on_round_state_ready(&mut self, _board: &Board, _estimated: &Board, _round: Round) {}

    /// Called right after `on_round_state_ready` for rounds `1..=max`.
    fn on_round_stats_ready(&mut self, _round: Round, _view: &SimView<'_>) {}

    /// Called once after the last round.
    fn on_simulation_complete(&mut self, _view: &SimView<'_>) {}
}

/// A [`SimHooks`] that does nothing.
pub struct NoopHooks;

impl SimHooks for NoopHooks {}

/// Read-only view of the simulation handed to hooks.
pub struct SimView<'a> {
    /// Most recently completed round.
    pub round:     Round,
    pub last:      Round,
    pub board:     &'a Board,
    pub beacons:   &'a [Beacon],
    pub observers: &'a [Observer],
    pub resolver:  &'a GlobalResolver,
}

impl SimView<'_> {
    #[inline]
    pub fn estimated_board(&self) -> &Board {
        self.resolver.board()
    }
}
