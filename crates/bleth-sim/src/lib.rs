//! `bleth-sim`: round loop orchestrator for the bleth simulator.
//!
//! # Round loop
//!
//! ```text
//! round 0:          capture initial state (on_round_state_ready), advance
//! for round in 1..=max_rounds:
//!   ① Move:          every beacon, then every observer, construction order
//!   ② Awakeness:     every observer caches is_awake(round)
//!   ③ Transmit:      each beacon's transmission reaches every awake
//!                     observer within Manhattan distance <= radius
//!   ④ Report:        observers forward what they heard to the resolver
//!   ⑤ Estimate:      resolver updates its estimated board
//!   ⑥ Hooks:         on_round_state_ready, then on_round_stats_ready
//! after the last round: on_simulation_complete (once)
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bleth_sim::{NoopHooks, SimBuilder, SimConfig};
//!
//! let mut sim = SimBuilder::new(config).build()?;
//! sim.run(&mut NoopHooks)?;
//! ```
//!
//! # Cargo features
//!
//! | Feature | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | `SimConfig` derives `Serialize`/`Deserialize`.      |

pub mod builder;
pub mod config;
pub mod error;
pub mod hooks;
pub mod sim;


pub use builder::{BeaconSpec, ObserverSpec, SimBuilder};
pub use config::{SimConfig, validate};
pub use error::{SimError, SimResult};
pub use hooks::{NoopHooks, SimHooks, SimView};
pub use sim::{SimState, Simulation};
