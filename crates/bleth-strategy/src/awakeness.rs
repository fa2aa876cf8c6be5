//! Duty-cycle (awakeness) strategies.
//!
//! Every strategy is parameterised by a `cycle` length and a `duration`
//! (`1 <= duration <= cycle`): within each block of `cycle` rounds the
//! observer is awake for exactly `duration` consecutive rounds.  The variants
//! differ only in where that window sits.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use bleth_core::{Round, mix_seed};

use crate::{StrategyError, StrategyResult};

/// Decides whether an observer listens on a given round.
pub trait AwakenessStrategy: Send + Sync + 'static {
    fn is_awake(&self, round: Round) -> bool;

    fn cycle(&self) -> u32;

    fn duration(&self) -> u32;
}

fn check_params(cycle: u32, duration: u32) -> StrategyResult<()> {
    if duration == 0 || duration > cycle {
        return Err(StrategyError::InvalidAwakeness { cycle, duration });
    }
    Ok(())
}

// ── FixedAwakeness ────────────────────────────────────────────────────────────

/// Awake on the same slots of every cycle.
///
/// The window opens at `phase` (mod `cycle`): the observer is awake iff
/// `(round - phase) mod cycle < duration`.  With `phase = 0` this is
/// `round mod cycle < duration`.
#[derive(Debug, Clone, Copy)]
pub struct FixedAwakeness {
    cycle:    u32,
    duration: u32,
    phase:    u32,
}

impl FixedAwakeness {
    pub fn new(cycle: u32, duration: u32, phase: u32) -> StrategyResult<Self> {
        check_params(cycle, duration)?;
        Ok(Self { cycle, duration, phase: phase % cycle })
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }
}

impl AwakenessStrategy for FixedAwakeness {
    fn is_awake(&self, round: Round) -> bool {
        let cycle = self.cycle as u64;
        let shifted = (round.0 as u64 + cycle - self.phase as u64) % cycle;
        shifted < self.duration as u64
    }

    fn cycle(&self) -> u32 {
        self.cycle
    }

    fn duration(&self) -> u32 {
        self.duration
    }
}

// ── RandomAwakeness ───────────────────────────────────────────────────────────

/// Awake for `duration` consecutive rounds per cycle, starting at a slot
/// drawn afresh for each cycle.
///
/// The start slot is derived from `(seed, cycle index)` alone, so asking
/// about the same round twice always gives the same answer and the window
/// never straddles a cycle boundary.
#[derive(Debug, Clone, Copy)]
pub struct RandomAwakeness {
    cycle:    u32,
    duration: u32,
    seed:     u64,
}

impl RandomAwakeness {
    pub fn new(cycle: u32, duration: u32, seed: u64) -> StrategyResult<Self> {
        check_params(cycle, duration)?;
        Ok(Self { cycle, duration, seed })
    }

    /// First awake slot (offset within the cycle) of cycle number `cycle_index`.
    pub fn window_start(&self, cycle_index: u32) -> u32 {
        let slots = self.cycle - self.duration + 1;
        let mut rng = SmallRng::seed_from_u64(mix_seed(self.seed, cycle_index as u64));
        rng.gen_range(0..slots)
    }
}

impl AwakenessStrategy for RandomAwakeness {
    fn is_awake(&self, round: Round) -> bool {
        let start = self.window_start(round.0 / self.cycle);
        let slot = round.0 % self.cycle;
        slot >= start && slot < start + self.duration
    }

    fn cycle(&self) -> u32 {
        self.cycle
    }

    fn duration(&self) -> u32 {
        self.duration
    }
}
