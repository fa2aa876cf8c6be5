//! `bleth-output`: statistics and persistence collaborators for bleth.
//!
//! The simulator itself performs no I/O.  This crate hangs off its
//! [`SimHooks`](bleth_sim::SimHooks) and turns each round into rows:
//!
//! | Feature   | Backend | Files created                                               |
//! |-----------|---------|-------------------------------------------------------------|
//! | *(none)*  | CSV     | `board_states.csv`, `round_stats.csv`, `simulation_stats.csv` |
//! | `sqlite`  | SQLite  | `output.db`                                                 |
//!
//! Statistics follow the tracing experiment: for every beacon that has an
//! estimate, the Manhattan distance between where it really is and where the
//! resolver thinks it is.  See [`TracingStats`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use bleth_output::{CsvWriter, OutputHooks};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut hooks = OutputHooks::new(writer, sim.config());
//! sim.run(&mut hooks)?;
//! if let Some(e) = hooks.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod hooks;
pub mod row;
pub mod stats;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use hooks::OutputHooks;
pub use row::{BoardCellRow, RoundStatsRow, SimulationStatsRow};
pub use stats::TracingStats;
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
