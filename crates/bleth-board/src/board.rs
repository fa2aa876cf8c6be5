//! The `Board` occupancy index.

use rustc_hash::FxHashMap;

use bleth_core::{AgentRef, Location};

use crate::{BoardError, BoardResult};

/// A `rows × cols` grid mapping each cell to the agents standing on it.
///
/// Agents are stored as [`AgentRef`] handles in insertion order per cell.
/// The board never checks that an agent occupies only one cell; callers keep
/// that invariant by using [`place_agent`](Self::place_agent) once and
/// [`move_agent`](Self::move_agent) afterwards.
#[derive(Debug, Clone)]
pub struct Board {
    rows:  u32,
    cols:  u32,
    cells: FxHashMap<Location, Vec<AgentRef>>,
}

impl Board {
    /// An empty board with the given extent.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols, cells: FxHashMap::default() }
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `true` if `location` lies within `0..rows × 0..cols`.
    #[inline]
    pub fn is_location_valid(&self, location: Location) -> bool {
        location.row >= 0
            && location.col >= 0
            && (location.row as u32) < self.rows
            && (location.col as u32) < self.cols
    }

    /// Add `agent` to the cell at `location`.
    ///
    /// Placing the same agent twice duplicates its membership; avoiding that
    /// is the caller's job.
    pub fn place_agent(&mut self, location: Location, agent: AgentRef) -> BoardResult<()> {
        self.check_bounds(location)?;
        check_agent(agent)?;
        self.cells.entry(location).or_default().push(agent);
        Ok(())
    }

    /// Remove `agent` from `from` (if it is there) and append it to `to`.
    ///
    /// Both locations are validated before anything is touched, so a failed
    /// move leaves the board unchanged.
    pub fn move_agent(&mut self, from: Location, to: Location, agent: AgentRef) -> BoardResult<()> {
        self.check_bounds(from)?;
        self.check_bounds(to)?;
        check_agent(agent)?;

        if let Some(cell) = self.cells.get_mut(&from) {
            if let Some(pos) = cell.iter().position(|&a| a == agent) {
                cell.remove(pos);
            }
            if cell.is_empty() {
                self.cells.remove(&from);
            }
        }
        self.cells.entry(to).or_default().push(agent);
        Ok(())
    }

    /// Agents at `location`, in insertion order.  Empty for unoccupied or
    /// out-of-bounds cells.
    pub fn agents_at(&self, location: Location) -> &[AgentRef] {
        self.cells.get(&location).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every occupied cell with its agents, in row-major order.
    pub fn all_occupied(&self) -> Vec<(Location, &[AgentRef])> {
        let mut occupied: Vec<(Location, &[AgentRef])> = self
            .cells
            .iter()
            .map(|(&loc, agents)| (loc, agents.as_slice()))
            .collect();
        occupied.sort_unstable_by_key(|&(loc, _)| loc);
        occupied
    }

    /// Total number of agent memberships across all cells.
    pub fn agent_count(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    /// Every valid location, row-major.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        (0..self.rows as i32)
            .flat_map(move |row| (0..self.cols as i32).map(move |col| Location::new(row, col)))
    }

    fn check_bounds(&self, location: Location) -> BoardResult<()> {
        if self.is_location_valid(location) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds { location, rows: self.rows, cols: self.cols })
        }
    }
}

fn check_agent(agent: AgentRef) -> BoardResult<()> {
    if agent.is_null() { Err(BoardError::NullAgent) } else { Ok(()) }
}
