//! `GlobalResolver`: one resolver that sees every observer's reports.

use std::collections::BTreeMap;

use bleth_board::{Board, BoardResult};
use bleth_core::{AgentRef, BeaconId, Location, Transmission};

use crate::Resolver;

/// Estimates each beacon at the centroid of the observers that heard it.
///
/// For a beacon heard this round, the new estimate is the centroid of all
/// reporting observer locations plus, if the beacon was estimated before,
/// its previous estimate counted as one more report.  Beacons not heard this
/// round keep their previous estimate; beacons never heard have no entry and
/// do not appear on the estimated board.
///
/// Reports are keyed in a `BTreeMap`, so beacons are (re)placed on the
/// estimated board in ascending id order every round.
#[derive(Debug)]
pub struct GlobalResolver {
    board:         Board,
    estimates:     BTreeMap<BeaconId, Location>,
    round_reports: BTreeMap<Transmission, Vec<Location>>,
}

impl GlobalResolver {
    /// A resolver whose estimated board has the given extent (normally the
    /// real board's).
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            board:         Board::new(rows, cols),
            estimates:     BTreeMap::new(),
            round_reports: BTreeMap::new(),
        }
    }

    /// Latest estimate for `beacon`, if it has ever been heard.
    pub fn estimate_of(&self, beacon: BeaconId) -> Option<Location> {
        self.estimates.get(&beacon).copied()
    }

    /// All estimates, ascending by beacon id.
    pub fn estimates(&self) -> impl Iterator<Item = (BeaconId, Location)> + '_ {
        self.estimates.iter().map(|(&id, &loc)| (id, loc))
    }

    /// Number of distinct beacons with reports pending for this round.
    pub fn heard_this_round(&self) -> usize {
        self.round_reports.len()
    }
}

impl Resolver for GlobalResolver {
    fn receive_information(&mut self, observer_location: Location, transmissions: &[Transmission]) {
        for &transmission in transmissions {
            self.round_reports.entry(transmission).or_default().push(observer_location);
        }
    }

    fn estimate(&mut self) -> BoardResult<()> {
        let reports = std::mem::take(&mut self.round_reports);

        for (transmission, mut locations) in reports {
            let beacon = transmission.advertisement();
            let prior = self.estimates.get(&beacon).copied();
            if let Some(prior) = prior {
                locations.push(prior);
            }
            let Some(estimate) = centroid(&locations) else {
                continue;
            };

            let agent = AgentRef::Beacon(beacon);
            match prior {
                Some(prior) => self.board.move_agent(prior, estimate, agent)?,
                None        => self.board.place_agent(estimate, agent)?,
            }
            tracing::trace!(%beacon, reports = locations.len(), %estimate, "beacon estimated");
            self.estimates.insert(beacon, estimate);
        }
        Ok(())
    }

    fn board(&self) -> &Board {
        &self.board
    }
}

/// Row-wise and column-wise mean of `locations`, each rounded to the nearest
/// integer with halves rounding up.  `None` for an empty slice.
pub fn centroid(locations: &[Location]) -> Option<Location> {
    if locations.is_empty() {
        return None;
    }
    let n = locations.len() as i64;
    let rows: i64 = locations.iter().map(|l| l.row as i64).sum();
    let cols: i64 = locations.iter().map(|l| l.col as i64).sum();
    Some(Location::new(round_half_up(rows, n), round_half_up(cols, n)))
}

/// `floor(sum / n + 1/2)` in exact integer arithmetic.
#[inline]
fn round_half_up(sum: i64, n: i64) -> i32 {
    (2 * sum + n).div_euclid(2 * n) as i32
}
