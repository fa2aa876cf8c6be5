//! tracing-demo: beacon tracing on a small grid.
//!
//! Random-walking beacons are heard by duty-cycled observers; the global
//! resolver estimates where each beacon is and the output hooks record how
//! far off those estimates drift.
//!
//! ```text
//! tracing-demo [config.json] [output-dir]
//! ```
//!
//! Without a config file the built-in defaults below are used.  Log
//! verbosity follows `RUST_LOG` (default `info`; `debug` shows round spans,
//! `trace` every estimate).

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bleth_core::Direction;
use bleth_output::{CsvWriter, OutputHooks};
use bleth_sim::{SimBuilder, SimConfig};
use bleth_strategy::{AwakenessKind, MovementKind};

// ── Defaults ──────────────────────────────────────────────────────────────────

const ROWS:       u32 = 20;
const COLS:       u32 = 20;
const BEACONS:    u32 = 5;
const OBSERVERS:  u32 = 40;
const MAX_ROUNDS: u32 = 100;
const RADIUS:     f64 = 2.0;
const CYCLE:      u32 = 4;
const DURATION:   u32 = 1;
const SEED:       u64 = 42;

fn default_config() -> SimConfig {
    SimConfig {
        description:        "random beacons, down-drifting observers".into(),
        rows:               ROWS,
        cols:               COLS,
        beacon_count:       BEACONS,
        observer_count:     OBSERVERS,
        max_rounds:         MAX_ROUNDS,
        radius:             RADIUS,
        awakeness_cycle:    CYCLE,
        awakeness_duration: DURATION,
        beacon_movement:    MovementKind::RandomWalk,
        observer_movement:  MovementKind::Fixed(Direction::Down),
        awakeness:          AwakenessKind::Random,
        seed:               SEED,
    }
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None       => default_config(),
    };
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("output/tracing"));

    info!(
        description = %config.description,
        rows = config.rows,
        cols = config.cols,
        beacons = config.beacon_count,
        observers = config.observer_count,
        rounds = config.max_rounds,
        seed = config.seed,
        "configuration loaded"
    );

    // 1. Build sim.
    let mut sim = SimBuilder::new(config.clone()).build()?;

    // 2. Set up output.
    std::fs::create_dir_all(&out_dir)?;
    let writer = CsvWriter::new(&out_dir)?;
    let mut hooks = OutputHooks::new(writer, &config);

    // 3. Run.
    let t0 = Instant::now();
    sim.run(&mut hooks)?;
    let elapsed = t0.elapsed();

    if let Some(e) = hooks.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  output written to {}", out_dir.display());
    if let Some(summary) = hooks.summary() {
        let fmt = |v: Option<f64>| v.map_or_else(|| "-".to_owned(), |v| format!("{v:.3}"));
        println!(
            "  rounds measured: {}/{}  min {}  max {}  mean {}",
            summary.rounds_measured,
            summary.rounds,
            fmt(summary.min_distance),
            fmt(summary.max_distance),
            fmt(summary.mean_distance),
        );
    }
    println!();

    // 5. Final beacon table.
    println!("{:<10} {:<12} {:<12} {:<8}", "Beacon", "Real", "Estimated", "Error");
    println!("{}", "-".repeat(44));
    for beacon in sim.beacons() {
        let real = beacon.location();
        let (estimate, error) = match sim.resolver().estimate_of(beacon.id()) {
            Some(est) => (est.to_string(), real.manhattan(est).to_string()),
            None      => ("-".to_owned(), "-".to_owned()),
        };
        println!("{:<10} {:<12} {:<12} {:<8}", beacon.id().to_string(), real.to_string(), estimate, error);
    }

    Ok(())
}
