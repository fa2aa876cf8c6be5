//! Observers: mobile, duty-cycled listeners.

use std::sync::Arc;

use bleth_board::Board;
use bleth_core::{AgentRef, AgentRng, Location, ObserverId, Round, Transmission};
use bleth_resolver::Resolver;
use bleth_strategy::{AwakenessStrategy, MovementStrategy};

use crate::{AgentError, AgentResult};

/// An observer records the transmissions it hears while awake and hands
/// them to the resolver once per round.
pub struct Observer {
    id:        ObserverId,
    location:  Location,
    movement:  Arc<dyn MovementStrategy>,
    awakeness: Box<dyn AwakenessStrategy>,
    rng:       AgentRng,
    awake:     bool,
    heard:     Vec<Transmission>,
}

impl Observer {
    /// Create an observer and place it on `board` at `location`.
    ///
    /// The observer starts asleep until the first
    /// [`update_awakeness`](Self::update_awakeness).
    pub fn new(
        id:          ObserverId,
        location:    Location,
        movement:    Arc<dyn MovementStrategy>,
        awakeness:   Box<dyn AwakenessStrategy>,
        global_seed: u64,
        board:       &mut Board,
    ) -> AgentResult<Self> {
        let agent = AgentRef::Observer(id);
        board.place_agent(location, agent)?;
        Ok(Self {
            id,
            location,
            movement,
            awakeness,
            rng: AgentRng::new(global_seed, agent),
            awake: false,
            heard: Vec::new(),
        })
    }

    #[inline]
    pub fn id(&self) -> ObserverId {
        self.id
    }

    #[inline]
    pub fn agent_ref(&self) -> AgentRef {
        AgentRef::Observer(self.id)
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Awake state cached by the last `update_awakeness` call.
    #[inline]
    pub fn is_awake(&self) -> bool {
        self.awake
    }

    pub fn awakeness(&self) -> &dyn AwakenessStrategy {
        self.awakeness.as_ref()
    }

    /// Transmissions recorded since the last hand-off.
    pub fn pending(&self) -> &[Transmission] {
        &self.heard
    }

    /// Move one step according to the strategy and record it on `board`.
    pub fn step(&mut self, board: &mut Board) -> AgentResult<()> {
        let next = self.movement.propose(board, self.location, &mut self.rng);
        board.move_agent(self.location, next, self.agent_ref())?;
        self.location = next;
        Ok(())
    }

    /// Recompute and cache whether this observer listens during `round`.
    pub fn update_awakeness(&mut self, round: Round) {
        self.awake = self.awakeness.is_awake(round);
    }

    /// Record `transmission` as heard from the current location.
    pub fn observe(&mut self, transmission: Transmission) -> AgentResult<()> {
        if !self.awake {
            return Err(AgentError::ObserverAsleep(self.id));
        }
        self.heard.push(transmission);
        Ok(())
    }

    /// Forward everything heard this round to `resolver` and start afresh.
    pub fn pass_information_to_resolver<R: Resolver + ?Sized>(&mut self, resolver: &mut R) {
        resolver.receive_information(self.location, &self.heard);
        self.heard.clear();
    }
}
