//! `bleth-core`: foundational types for the `bleth` beacon-tracing simulator.
//!
//! This crate is a dependency of every other `bleth-*` crate.  It has no
//! `bleth-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module           | Contents                                             |
//! |------------------|------------------------------------------------------|
//! | [`ids`]          | `BeaconId`, `ObserverId`, `AgentRef`                 |
//! | [`grid`]         | `Location`, `Direction`, Manhattan distance          |
//! | [`round`]        | `Round` counter                                      |
//! | [`transmission`] | `Transmission` (beacon advertisement)                |
//! | [`rng`]          | `AgentRng` (per-agent), `SimRng` (global)            |
//! | [`error`]        | `CoreError`, `CoreResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod round;
pub mod transmission;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use grid::{Direction, Location};
pub use ids::{AgentRef, BeaconId, ObserverId};
pub use rng::{AgentRng, SimRng, mix_seed};
pub use round::Round;
pub use transmission::Transmission;
