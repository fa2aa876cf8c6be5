//! `bleth-strategy`: pluggable agent policies.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`movement`]  | `MovementStrategy` trait; `Stationary`, `RandomWalk`, `FixedDirection` |
//! | [`awakeness`] | `AwakenessStrategy` trait; `FixedAwakeness`, `RandomAwakeness` |
//! | [`kind`]      | `MovementKind`, `AwakenessKind` tags, factories, string parsing |
//! | [`error`]     | `StrategyError`, `StrategyResult<T>`                         |
//!
//! # Design notes
//!
//! Strategies never mutate the board.  A movement strategy only *proposes*
//! the next location; the owning agent applies it through
//! `Board::move_agent`.  Awakeness is a pure function of the round index.
//!
//! Both traits are `Send + Sync` so a single movement strategy instance can
//! be shared (`Arc`) by every agent of one population.

pub mod awakeness;
pub mod error;
pub mod kind;
pub mod movement;


pub use awakeness::{AwakenessStrategy, FixedAwakeness, RandomAwakeness};
pub use error::{StrategyError, StrategyResult};
pub use kind::{AwakenessKind, MovementKind};
pub use movement::{FixedDirection, MovementStrategy, RandomWalk, Stationary};
