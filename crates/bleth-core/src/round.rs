//! Discrete simulation time.
//!
//! Round 0 is the initial state captured before any movement; rounds
//! `1..=max` are the simulated steps.

use std::fmt;

/// A simulation round index.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round(pub u32);

impl Round {
    pub const ZERO: Round = Round(0);

    /// The following round.
    #[inline]
    pub fn next(self) -> Round {
        Round(self.0 + 1)
    }

    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}
