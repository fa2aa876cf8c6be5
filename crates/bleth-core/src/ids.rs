//! Strongly typed identifier wrappers.
//!
//! Beacons and observers are numbered independently, each starting at 0 in
//! construction order.  The inner integer is `pub` so ids can index straight
//! into the simulation's agent `Vec`s via `.index()`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no agent", equal to the inner type's `MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identifier of a beacon; also the payload of its [`Transmission`](crate::Transmission).
    pub struct BeaconId(u32);
}

typed_id! {
    /// Identifier of an observer.
    pub struct ObserverId(u32);
}

impl fmt::Display for BeaconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Beacon{}", self.0)
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Observer{}", self.0)
    }
}

/// A reference to an agent as stored in a board cell.
///
/// Boards never own agents; they hold these lightweight handles.  A handle
/// whose id is the `INVALID` sentinel stands for "no agent" and is rejected
/// by every board operation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentRef {
    Beacon(BeaconId),
    Observer(ObserverId),
}

impl AgentRef {
    /// `true` if this handle does not refer to a real agent.
    #[inline]
    pub fn is_null(self) -> bool {
        match self {
            AgentRef::Beacon(id) => !id.is_valid(),
            AgentRef::Observer(id) => !id.is_valid(),
        }
    }

    /// Key used to derive the agent's RNG stream.  Beacons and observers
    /// occupy disjoint halves of the key space.
    #[inline]
    pub fn stream_key(self) -> u64 {
        match self {
            AgentRef::Beacon(id) => id.0 as u64,
            AgentRef::Observer(id) => (1u64 << 32) | id.0 as u64,
        }
    }
}

impl fmt::Display for AgentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentRef::Beacon(id) => write!(f, "{id}"),
            AgentRef::Observer(id) => write!(f, "{id}"),
        }
    }
}
