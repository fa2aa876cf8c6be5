//! `bleth-agent`: the two agent kinds that live on the real board.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`beacon`]   | `Beacon`: moves and transmits its fixed id                |
//! | [`observer`] | `Observer`: moves, sleeps/wakes, records what it hears    |
//! | [`ids`]      | `IdAllocator`: per-simulation sequential ids              |
//! | [`error`]    | `AgentError`, `AgentResult<T>`                            |
//!
//! Agents do not hold a reference to their board.  Every mutating call takes
//! `&mut Board` explicitly, so the simulation stays the single owner.

pub mod beacon;
pub mod error;
pub mod ids;
pub mod observer;

#[cfg(test)]
mod tests;

pub use beacon::Beacon;
pub use error::{AgentError, AgentResult};
pub use ids::IdAllocator;
pub use observer::Observer;
