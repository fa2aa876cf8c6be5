//! The `Simulation` struct and its round loop.

use bleth_agent::{Beacon, Observer};
use bleth_board::Board;
use bleth_core::Round;
use bleth_resolver::{GlobalResolver, Resolver};

use crate::{SimConfig, SimHooks, SimResult, SimView};

/// Where a simulation is in its lifecycle.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SimState {
    /// Round 0; initial state not yet captured.
    NotStarted,
    /// `1 <= current_round <= max_rounds`.
    Running,
    /// `current_round > max_rounds`.
    Completed,
}

/// The simulation runner.
///
/// Holds the real board, the agents (fixed after construction), the
/// resolver, and the round counter.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Simulation {
    pub(crate) config:        SimConfig,
    pub(crate) board:         Board,
    pub(crate) beacons:       Vec<Beacon>,
    pub(crate) observers:     Vec<Observer>,
    pub(crate) resolver:      GlobalResolver,
    pub(crate) current_round: Round,
    pub(crate) completed:     bool,
}

impl Simulation {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The real board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The resolver's estimated board.
    pub fn estimated_board(&self) -> &Board {
        self.resolver.board()
    }

    pub fn resolver(&self) -> &GlobalResolver {
        &self.resolver
    }

    /// Beacons in construction (= id) order.
    pub fn beacons(&self) -> &[Beacon] {
        &self.beacons
    }

    /// Observers in construction (= id) order.
    pub fn observers(&self) -> &[Observer] {
        &self.observers
    }

    /// The round that will be played next (or `max + 1` once completed).
    pub fn current_round(&self) -> Round {
        self.current_round
    }

    pub fn state(&self) -> SimState {
        if self.current_round == Round::ZERO {
            SimState::NotStarted
        } else if self.current_round > self.config.last_round() {
            SimState::Completed
        } else {
            SimState::Running
        }
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Run every remaining round, then fire `on_simulation_complete`.
    ///
    /// Calling `run` on a completed simulation does nothing.
    pub fn run<H: SimHooks>(&mut self, hooks: &mut H) -> SimResult<()> {
        self.begin(hooks);
        while self.current_round <= self.config.last_round() {
            self.play_round(hooks)?;
        }
        self.finish(hooks);
        Ok(())
    }

    /// Play at most `n` rounds from the current position.
    ///
    /// The round-0 capture does not count towards `n`.  If the last round is
    /// reached, `on_simulation_complete` fires exactly as it would for
    /// [`run`](Self::run).
    pub fn run_rounds<H: SimHooks>(&mut self, n: u32, hooks: &mut H) -> SimResult<()> {
        self.begin(hooks);
        for _ in 0..n {
            if self.current_round > self.config.last_round() {
                break;
            }
            self.play_round(hooks)?;
        }
        if self.current_round > self.config.last_round() {
            self.finish(hooks);
        }
        Ok(())
    }

    fn begin<H: SimHooks>(&mut self, hooks: &mut H) {
        if self.current_round == Round::ZERO {
            hooks.on_round_state_ready(&self.board, self.resolver.board(), Round::ZERO);
            self.current_round = self.current_round.next();
        }
    }

    fn finish<H: SimHooks>(&mut self, hooks: &mut H) {
        if self.completed {
            return;
        }
        self.completed = true;
        tracing::debug!(rounds = self.config.max_rounds, "simulation complete");
        hooks.on_simulation_complete(&self.view());
    }

    // ── Core round processing ─────────────────────────────────────────────

    fn play_round<H: SimHooks>(&mut self, hooks: &mut H) -> SimResult<()> {
        let round = self.current_round;
        let _span = tracing::debug_span!("round", round = round.0).entered();

        // ── ① Movement: beacons first, then observers ────────────────────
        for beacon in &mut self.beacons {
            beacon.step(&mut self.board)?;
        }
        for observer in &mut self.observers {
            observer.step(&mut self.board)?;
        }

        // ── ② Duty cycle ──────────────────────────────────────────────────
        for observer in &mut self.observers {
            observer.update_awakeness(round);
        }

        // ── ③ Transmission ────────────────────────────────────────────────
        let deliveries = self.deliver_transmissions()?;

        // ── ④ Report ──────────────────────────────────────────────────────
        for observer in &mut self.observers {
            observer.pass_information_to_resolver(&mut self.resolver);
        }

        // ── ⑤ Estimate ────────────────────────────────────────────────────
        let heard = self.resolver.heard_this_round();
        self.resolver.estimate()?;
        tracing::debug!(deliveries, heard, "round played");

        // ── ⑥ Hooks ───────────────────────────────────────────────────────
        hooks.on_round_state_ready(&self.board, self.resolver.board(), round);
        hooks.on_round_stats_ready(round, &self.view_at(round));

        self.current_round = round.next();
        Ok(())
    }

    /// Deliver each beacon's transmission to every awake observer within the
    /// radius.  Returns the number of deliveries.
    fn deliver_transmissions(&mut self) -> SimResult<usize> {
        let radius = self.config.radius;
        let mut deliveries = 0;
        for beacon in &self.beacons {
            let transmission = beacon.transmit();
            let at = beacon.location();
            for observer in self.observers.iter_mut().filter(|o| o.is_awake()) {
                if at.manhattan(observer.location()) as f64 <= radius {
                    observer.observe(transmission)?;
                    deliveries += 1;
                }
            }
        }
        Ok(deliveries)
    }

    // ── Views ─────────────────────────────────────────────────────────────

    /// Read-only view labelled with the most recently completed round.
    pub fn view(&self) -> SimView<'_> {
        let last = self.config.last_round();
        let done = Round(self.current_round.0.saturating_sub(1).min(last.0));
        self.view_at(done)
    }

    fn view_at(&self, round: Round) -> SimView<'_> {
        SimView {
            round,
            last:      self.config.last_round(),
            board:     &self.board,
            beacons:   &self.beacons,
            observers: &self.observers,
            resolver:  &self.resolver,
        }
    }
}
