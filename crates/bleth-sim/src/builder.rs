//! Fluent builder for constructing a [`Simulation`].

use std::sync::Arc;

use bleth_agent::{Beacon, IdAllocator, Observer};
use bleth_board::Board;
use bleth_core::{Location, Round, SimRng};
use bleth_resolver::GlobalResolver;
use bleth_strategy::{AwakenessKind, AwakenessStrategy, FixedAwakeness, MovementKind, MovementStrategy};

use crate::{SimConfig, SimError, SimResult, Simulation, validate};

/// Explicit placement of one beacon, for restoring a previous run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeaconSpec {
    pub location: Location,
    /// Overrides the population's movement strategy for this beacon.
    pub movement: Option<MovementKind>,
}

impl BeaconSpec {
    pub fn at(location: Location) -> Self {
        Self { location, movement: None }
    }
}

/// Explicit placement of one observer, for restoring a previous run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverSpec {
    pub location: Location,
    /// Overrides the population's movement strategy for this observer.
    pub movement: Option<MovementKind>,
    /// Fixed duty-cycle phase.  Only valid with [`AwakenessKind::Fixed`];
    /// any other awakeness kind rejects it at build time.
    pub phase:    Option<u32>,
}

impl ObserverSpec {
    pub fn at(location: Location) -> Self {
        Self { location, movement: None, phase: None }
    }
}

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`SimConfig`]: extent, counts, strategy tags, duty cycle, radius, seed
///
/// # Optional inputs (have defaults)
///
/// | Method                         | Default                                  |
/// |--------------------------------|------------------------------------------|
/// | `.beacon_movement_strategy(s)` | `config.beacon_movement.build()`         |
/// | `.observer_movement_strategy(s)` | `config.observer_movement.build()`     |
/// | `.beacons(v)`                  | Random locations, one per configured beacon |
/// | `.observers(v)`                | Random locations, staggered phases       |
/// | `.resume_at(r)`                | Round 0 (fresh run)                      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .beacons(vec![BeaconSpec::at(Location::new(1, 0))])
///     .observers(vec![ObserverSpec::at(Location::new(0, 0))])
///     .build()?;
/// sim.run(&mut NoopHooks)?;
/// ```
pub struct SimBuilder {
    config:            SimConfig,
    beacon_movement:   Option<Arc<dyn MovementStrategy>>,
    observer_movement: Option<Arc<dyn MovementStrategy>>,
    beacons:           Option<Vec<BeaconSpec>>,
    observers:         Option<Vec<ObserverSpec>>,
    start_round:       Round,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            beacon_movement:   None,
            observer_movement: None,
            beacons:           None,
            observers:         None,
            start_round:       Round::ZERO,
        }
    }

    /// Use a custom movement strategy for every beacon without a per-agent
    /// override.
    pub fn beacon_movement_strategy(mut self, strategy: Arc<dyn MovementStrategy>) -> Self {
        self.beacon_movement = Some(strategy);
        self
    }

    /// Use a custom movement strategy for every observer without a per-agent
    /// override.
    pub fn observer_movement_strategy(mut self, strategy: Arc<dyn MovementStrategy>) -> Self {
        self.observer_movement = Some(strategy);
        self
    }

    /// Supply every beacon's placement (must be length `beacon_count`).
    pub fn beacons(mut self, beacons: Vec<BeaconSpec>) -> Self {
        self.beacons = Some(beacons);
        self
    }

    /// Supply every observer's placement (must be length `observer_count`).
    pub fn observers(mut self, observers: Vec<ObserverSpec>) -> Self {
        self.observers = Some(observers);
        self
    }

    /// Continue a previous run: the next round played is `round`.
    ///
    /// A resumed simulation skips the round-0 capture.
    pub fn resume_at(mut self, round: Round) -> Self {
        self.start_round = round;
        self
    }

    /// Validate inputs, create the agents on a fresh board, and return a
    /// ready-to-run [`Simulation`].
    pub fn build(self) -> SimResult<Simulation> {
        let config = self.config;
        validate(&config)?;

        // ── Validate optional inputs ──────────────────────────────────────
        if let Some(b) = &self.beacons {
            check_count(config.beacon_count, b.len(), "beacon placements")?;
        }
        if let Some(o) = &self.observers {
            check_count(config.observer_count, o.len(), "observer placements")?;
        }
        if config.awakeness != AwakenessKind::Fixed
            && self.observers.iter().flatten().any(|o| o.phase.is_some())
        {
            return Err(SimError::Config(format!(
                "observer phases require fixed awakeness, not {}",
                config.awakeness
            )));
        }
        if self.start_round.0 > config.max_rounds.saturating_add(1) {
            return Err(SimError::Config(format!(
                "cannot resume at {} past the last round {}",
                self.start_round,
                config.last_round()
            )));
        }

        let mut board = Board::new(config.rows, config.cols);
        let mut rng = SimRng::new(config.seed);
        let mut ids = IdAllocator::new();

        // ── Beacons ───────────────────────────────────────────────────────
        let shared = self.beacon_movement.unwrap_or_else(|| config.beacon_movement.build());
        let mut beacons = Vec::with_capacity(config.beacon_count as usize);
        for i in 0..config.beacon_count as usize {
            let spec = match &self.beacons {
                Some(specs) => specs[i],
                None        => BeaconSpec::at(random_location(&mut rng, &config)),
            };
            let movement = spec.movement.map_or_else(|| Arc::clone(&shared), MovementKind::build);
            let id = ids.next_beacon();
            beacons.push(Beacon::new(id, spec.location, movement, config.seed, &mut board)?);
        }

        // ── Observers ─────────────────────────────────────────────────────
        let shared = self.observer_movement.unwrap_or_else(|| config.observer_movement.build());
        let mut observers = Vec::with_capacity(config.observer_count as usize);
        for i in 0..config.observer_count as usize {
            let spec = match &self.observers {
                Some(specs) => specs[i],
                None        => ObserverSpec::at(random_location(&mut rng, &config)),
            };
            let movement = spec.movement.map_or_else(|| Arc::clone(&shared), MovementKind::build);
            let id = ids.next_observer();
            let awakeness: Box<dyn AwakenessStrategy> = match (config.awakeness, spec.phase) {
                (AwakenessKind::Fixed, Some(phase)) => Box::new(FixedAwakeness::new(
                    config.awakeness_cycle,
                    config.awakeness_duration,
                    phase,
                )?),
                (kind, _) => kind.build(
                    config.awakeness_cycle,
                    config.awakeness_duration,
                    id,
                    config.seed,
                )?,
            };
            observers.push(Observer::new(id, spec.location, movement, awakeness, config.seed, &mut board)?);
        }

        tracing::debug!(
            rows = config.rows,
            cols = config.cols,
            beacons = beacons.len(),
            observers = observers.len(),
            "simulation built"
        );

        Ok(Simulation {
            resolver:      GlobalResolver::new(config.rows, config.cols),
            config,
            board,
            beacons,
            observers,
            current_round: self.start_round,
            completed:     false,
        })
    }
}

fn check_count(expected: u32, got: usize, what: &'static str) -> SimResult<()> {
    if got != expected as usize {
        return Err(SimError::AgentCountMismatch { expected: expected as usize, got, what });
    }
    Ok(())
}

fn random_location(rng: &mut SimRng, config: &SimConfig) -> Location {
    Location::new(
        rng.gen_range(0..config.rows as i32),
        rng.gen_range(0..config.cols as i32),
    )
}
