//! Simulation configuration and its validation.

use bleth_core::Round;
use bleth_strategy::{AwakenessKind, MovementKind};

use crate::{SimError, SimResult};

/// Everything needed to build a fresh simulation.
///
/// Typically deserialized from JSON/TOML by the application (feature
/// `serde`) and passed to [`SimBuilder`](crate::SimBuilder).  Strategy tags
/// are written as their string names, e.g. `"random"` or `"up"`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Free-form label carried through to output.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,

    pub rows: u32,
    pub cols: u32,

    pub beacon_count:   u32,
    pub observer_count: u32,

    /// Index of the last simulated round.  Rounds `1..=max_rounds` are played.
    pub max_rounds: u32,

    /// Manhattan distance within which an awake observer hears a beacon.
    pub radius: f64,

    pub awakeness_cycle:    u32,
    pub awakeness_duration: u32,

    pub beacon_movement:   MovementKind,
    pub observer_movement: MovementKind,
    pub awakeness:         AwakenessKind,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    /// The last round as a [`Round`].
    #[inline]
    pub fn last_round(&self) -> Round {
        Round(self.max_rounds)
    }
}

/// Reject configurations that could never run.
///
/// Counts are unsigned, so "negative" values cannot reach this point; they
/// fail when the configuration is parsed.
pub fn validate(config: &SimConfig) -> SimResult<()> {
    if config.rows == 0 || config.cols == 0 {
        return Err(SimError::Config(format!(
            "board must have at least one row and one column, got {}x{}",
            config.rows, config.cols
        )));
    }
    if config.rows > i32::MAX as u32 || config.cols > i32::MAX as u32 {
        return Err(SimError::Config(format!(
            "board extent {}x{} exceeds the addressable grid",
            config.rows, config.cols
        )));
    }
    if config.max_rounds == u32::MAX {
        return Err(SimError::Config(format!(
            "max_rounds must be below {}, the round counter's limit",
            u32::MAX
        )));
    }
    if config.awakeness_cycle == 0 {
        return Err(SimError::Config("awakeness cycle must be at least 1".into()));
    }
    if config.awakeness_duration == 0 || config.awakeness_duration > config.awakeness_cycle {
        return Err(SimError::Config(format!(
            "awakeness duration {} must be within 1..={} (the cycle)",
            config.awakeness_duration, config.awakeness_cycle
        )));
    }
    if !config.radius.is_finite() || config.radius < 0.0 {
        return Err(SimError::Config(format!(
            "transmission radius must be a non-negative number, got {}",
            config.radius
        )));
    }
    Ok(())
}
