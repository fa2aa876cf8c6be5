//! Deterministic per-agent and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (stream_key * MIXING_CONSTANT)
//!
//! where `stream_key` comes from [`AgentRef::stream_key`], so beacons and
//! observers never collide.  The mixing constant is the 64-bit fractional
//! part of the golden ratio, which spreads consecutive keys uniformly across
//! the seed space.  Consequences:
//!
//! - A random-walk beacon's path depends only on the seed and its own id,
//!   never on how many other agents drew numbers before it.
//! - The same seed and configuration always reproduce the same run.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::AgentRef;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Mix `key` into `seed`.  Used for every derived stream in the simulator.
#[inline]
pub fn mix_seed(seed: u64, key: u64) -> u64 {
    seed ^ key.wrapping_mul(MIXING_CONSTANT)
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG, owned by the agent it is seeded for.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent handle.
    pub fn new(global_seed: u64, agent: AgentRef) -> Self {
        AgentRng(SmallRng::seed_from_u64(mix_seed(global_seed, agent.stream_key())))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for build-time decisions (initial placement).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
