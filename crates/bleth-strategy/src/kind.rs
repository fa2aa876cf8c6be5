//! Configuration tags and the factories that turn them into strategies.
//!
//! Tags round-trip through strings (`"stationary"`, `"random"`, `"up"`, …;
//! `"fixed"`, `"random"`), which is how request parameters and config files
//! name them.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use bleth_core::{AgentRef, Direction, ObserverId, mix_seed};

use crate::{
    AwakenessStrategy, FixedAwakeness, FixedDirection, MovementStrategy, RandomAwakeness,
    RandomWalk, Stationary, StrategyError, StrategyResult,
};

// ── MovementKind ──────────────────────────────────────────────────────────────

/// Selects one of the built-in movement strategies.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum MovementKind {
    #[default]
    Stationary,
    RandomWalk,
    Fixed(Direction),
}

impl MovementKind {
    /// Instantiate the strategy.  One instance may be shared by many agents.
    pub fn build(self) -> Arc<dyn MovementStrategy> {
        match self {
            MovementKind::Stationary => Arc::new(Stationary),
            MovementKind::RandomWalk => Arc::new(RandomWalk),
            MovementKind::Fixed(d)   => Arc::new(FixedDirection(d)),
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovementKind::Stationary => f.write_str("stationary"),
            MovementKind::RandomWalk => f.write_str("random"),
            MovementKind::Fixed(d)   => f.write_str(d.as_str()),
        }
    }
}

impl FromStr for MovementKind {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stationary" => Ok(MovementKind::Stationary),
            "random"     => Ok(MovementKind::RandomWalk),
            other => other
                .parse::<Direction>()
                .map(MovementKind::Fixed)
                .map_err(|_| StrategyError::UnknownMovement(s.to_owned())),
        }
    }
}

impl TryFrom<String> for MovementKind {
    type Error = StrategyError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MovementKind> for String {
    fn from(kind: MovementKind) -> String {
        kind.to_string()
    }
}

// ── AwakenessKind ─────────────────────────────────────────────────────────────

/// Selects one of the built-in awakeness strategies.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum AwakenessKind {
    #[default]
    Fixed,
    Random,
}

impl AwakenessKind {
    /// Instantiate the strategy for one observer.
    ///
    /// `Fixed` staggers phases by observer index (`index * duration mod
    /// cycle`) so that `ceil(cycle / duration)` observers already cover every
    /// round.  `Random` derives its per-cycle windows from `seed` and the
    /// observer's id.
    pub fn build(
        self,
        cycle:    u32,
        duration: u32,
        observer: ObserverId,
        seed:     u64,
    ) -> StrategyResult<Box<dyn AwakenessStrategy>> {
        match self {
            AwakenessKind::Fixed => {
                let phase = if cycle == 0 {
                    0
                } else {
                    ((observer.0 as u64 * duration as u64) % cycle as u64) as u32
                };
                Ok(Box::new(FixedAwakeness::new(cycle, duration, phase)?))
            }
            AwakenessKind::Random => {
                let stream = mix_seed(seed, AgentRef::Observer(observer).stream_key());
                Ok(Box::new(RandomAwakeness::new(cycle, duration, stream)?))
            }
        }
    }
}

impl fmt::Display for AwakenessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AwakenessKind::Fixed  => f.write_str("fixed"),
            AwakenessKind::Random => f.write_str("random"),
        }
    }
}

impl FromStr for AwakenessKind {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed"  => Ok(AwakenessKind::Fixed),
            "random" => Ok(AwakenessKind::Random),
            _        => Err(StrategyError::UnknownAwakeness(s.to_owned())),
        }
    }
}

impl TryFrom<String> for AwakenessKind {
    type Error = StrategyError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AwakenessKind> for String {
    fn from(kind: AwakenessKind) -> String {
        kind.to_string()
    }
}
