//! Tracing-experiment statistics.

use bleth_sim::SimView;

use crate::{RoundStatsRow, SimulationStatsRow};

/// Aggregates per-round estimation error into run-level statistics.
///
/// Each round contributes the mean Manhattan distance between every
/// estimated beacon's real and estimated location.  The run summary is the
/// minimum, maximum, and mean of those per-round means.
#[derive(Debug, Default)]
pub struct TracingStats {
    rounds: Vec<RoundStatsRow>,
}

impl TracingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure the round `view` describes and remember it.
    pub fn record(&mut self, view: &SimView<'_>) -> RoundStatsRow {
        let mut total = 0u64;
        let mut estimated = 0u32;
        for beacon in view.beacons {
            if let Some(estimate) = view.resolver.estimate_of(beacon.id()) {
                total += beacon.location().manhattan(estimate) as u64;
                estimated += 1;
            }
        }

        let row = RoundStatsRow {
            round:             view.round.0,
            awake_observers:   view.observers.iter().filter(|o| o.is_awake()).count() as u32,
            estimated_beacons: estimated,
            mean_distance:     (estimated > 0).then(|| total as f64 / estimated as f64),
        };
        self.rounds.push(row);
        row
    }

    /// Rows recorded so far, in round order.
    pub fn rounds(&self) -> &[RoundStatsRow] {
        &self.rounds
    }

    /// Run-level summary of everything recorded.
    pub fn summary(&self, description: &str) -> SimulationStatsRow {
        let means: Vec<f64> = self.rounds.iter().filter_map(|r| r.mean_distance).collect();
        let measured = means.len();
        SimulationStatsRow {
            description:     description.to_owned(),
            rounds:          self.rounds.len() as u32,
            rounds_measured: measured as u32,
            min_distance:    means.iter().copied().reduce(f64::min),
            max_distance:    means.iter().copied().reduce(f64::max),
            mean_distance:   (measured > 0).then(|| means.iter().sum::<f64>() / measured as f64),
        }
    }
}
