//! Beacons: mobile transmitters.

use std::sync::Arc;

use bleth_board::Board;
use bleth_core::{AgentRef, AgentRng, BeaconId, Location, Transmission};
use bleth_strategy::MovementStrategy;

use crate::AgentResult;

/// A beacon moves by its strategy and broadcasts its id every round.
pub struct Beacon {
    id:       BeaconId,
    location: Location,
    movement: Arc<dyn MovementStrategy>,
    rng:      AgentRng,
}

impl Beacon {
    /// Create a beacon and place it on `board` at `location`.
    ///
    /// Fails (and places nothing) if `location` is off the board or `id` is
    /// the invalid sentinel.
    pub fn new(
        id:          BeaconId,
        location:    Location,
        movement:    Arc<dyn MovementStrategy>,
        global_seed: u64,
        board:       &mut Board,
    ) -> AgentResult<Self> {
        let agent = AgentRef::Beacon(id);
        board.place_agent(location, agent)?;
        Ok(Self {
            id,
            location,
            movement,
            rng: AgentRng::new(global_seed, agent),
        })
    }

    #[inline]
    pub fn id(&self) -> BeaconId {
        self.id
    }

    #[inline]
    pub fn agent_ref(&self) -> AgentRef {
        AgentRef::Beacon(self.id)
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    /// The broadcast for this beacon.  Always the same value.
    #[inline]
    pub fn transmit(&self) -> Transmission {
        Transmission::new(self.id)
    }

    /// The location the strategy proposes from here.
    pub fn propose(&mut self, board: &Board) -> Location {
        self.movement.propose(board, self.location, &mut self.rng)
    }

    /// Move one step according to the strategy and record it on `board`.
    pub fn step(&mut self, board: &mut Board) -> AgentResult<()> {
        let next = self.propose(board);
        board.move_agent(self.location, next, self.agent_ref())?;
        self.location = next;
        Ok(())
    }
}
