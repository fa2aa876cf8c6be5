//! Unit tests for bleth-agent.

#[cfg(test)]
mod helpers {
    use std::sync::Arc;

    use bleth_strategy::{FixedAwakeness, MovementStrategy, RandomWalk, Stationary};

    pub const SEED: u64 = 42;

    pub fn stationary() -> Arc<dyn MovementStrategy> {
        Arc::new(Stationary)
    }

    pub fn random() -> Arc<dyn MovementStrategy> {
        Arc::new(RandomWalk)
    }

    pub fn alternating() -> Box<FixedAwakeness> {
        Box::new(FixedAwakeness::new(2, 1, 0).unwrap())
    }
}

#[cfg(test)]
mod beacon {
    use std::sync::Arc;

    use bleth_board::{Board, BoardError};
    use bleth_core::{AgentRef, BeaconId, Direction, Location};
    use bleth_strategy::FixedDirection;

    use super::helpers::{SEED, random, stationary};
    use crate::{AgentError, Beacon};

    #[test]
    fn creation_outside_board_fails_and_places_nothing() {
        let mut board = Board::new(1, 1);
        let err = Beacon::new(BeaconId(0), Location::new(0, -1), random(), SEED, &mut board)
            .err()
            .unwrap();
        assert!(matches!(err, AgentError::Board(BoardError::OutOfBounds { .. })));
        assert_eq!(board.agent_count(), 0);
    }

    #[test]
    fn creation_places_on_board() {
        let mut board = Board::new(2, 2);
        let b = Beacon::new(BeaconId(3), Location::new(1, 0), stationary(), SEED, &mut board).unwrap();
        assert_eq!(board.agents_at(Location::new(1, 0)), &[AgentRef::Beacon(BeaconId(3))]);
        assert_eq!(b.agent_ref(), AgentRef::Beacon(BeaconId(3)));
    }

    #[test]
    fn transmit_carries_id_and_is_idempotent() {
        let mut board = Board::new(3, 3);
        let b = Beacon::new(BeaconId(5), Location::new(0, 0), random(), SEED, &mut board).unwrap();
        assert_eq!(b.transmit().advertisement(), BeaconId(5));
        assert_eq!(b.transmit(), b.transmit());
        assert_eq!(b.location(), b.location());
    }

    #[test]
    fn step_updates_board_and_location() {
        let mut board = Board::new(2, 2);
        let mut b = Beacon::new(
            BeaconId(0),
            Location::new(1, 0),
            Arc::new(FixedDirection(Direction::Up)),
            SEED,
            &mut board,
        )
        .unwrap();

        b.step(&mut board).unwrap();
        assert_eq!(b.location(), Location::new(0, 0));
        assert_eq!(board.agents_at(Location::new(0, 0)), &[b.agent_ref()]);
        assert!(board.agents_at(Location::new(1, 0)).is_empty());

        b.step(&mut board).unwrap();
        assert_eq!(b.location(), Location::new(0, 0));
        assert_eq!(board.agent_count(), 1);
    }

    #[test]
    fn random_beacon_stays_on_board() {
        let mut board = Board::new(3, 3);
        let mut b = Beacon::new(BeaconId(0), Location::new(1, 1), random(), SEED, &mut board).unwrap();
        for _ in 0..100 {
            b.step(&mut board).unwrap();
            assert!(board.is_location_valid(b.location()));
            assert_eq!(board.agents_at(b.location()), &[b.agent_ref()]);
        }
    }
}

#[cfg(test)]
mod observer {
    use bleth_board::Board;
    use bleth_core::{BeaconId, Location, ObserverId, Round, Transmission};
    use bleth_resolver::{GlobalResolver, Resolver};

    use super::helpers::{SEED, alternating, stationary};
    use crate::{AgentError, Observer};

    fn observer_at(board: &mut Board, at: Location) -> Observer {
        Observer::new(ObserverId(0), at, stationary(), alternating(), SEED, board).unwrap()
    }

    #[test]
    fn starts_asleep_and_follows_strategy() {
        let mut board = Board::new(2, 2);
        let mut o = observer_at(&mut board, Location::new(0, 0));
        assert!(!o.is_awake());
        o.update_awakeness(Round(0));
        assert!(o.is_awake());
        o.update_awakeness(Round(1));
        assert!(!o.is_awake());
    }

    #[test]
    fn observe_while_asleep_is_rejected() {
        let mut board = Board::new(2, 2);
        let mut o = observer_at(&mut board, Location::new(0, 0));
        o.update_awakeness(Round(1));
        assert_eq!(
            o.observe(Transmission::new(BeaconId(0))),
            Err(AgentError::ObserverAsleep(ObserverId(0)))
        );
        assert!(o.pending().is_empty());
    }

    #[test]
    fn pass_information_forwards_and_clears() {
        let mut board = Board::new(2, 2);
        let mut o = observer_at(&mut board, Location::new(1, 1));
        let mut resolver = GlobalResolver::new(2, 2);

        o.update_awakeness(Round(2));
        o.observe(Transmission::new(BeaconId(0))).unwrap();
        o.observe(Transmission::new(BeaconId(1))).unwrap();
        assert_eq!(o.pending().len(), 2);

        o.pass_information_to_resolver(&mut resolver);
        assert!(o.pending().is_empty());
        assert_eq!(resolver.heard_this_round(), 2);

        resolver.estimate().unwrap();
        assert_eq!(resolver.estimate_of(BeaconId(1)), Some(Location::new(1, 1)));
    }

    #[test]
    fn stationary_step_keeps_location() {
        let mut board = Board::new(2, 2);
        let mut o = observer_at(&mut board, Location::new(0, 1));
        o.step(&mut board).unwrap();
        assert_eq!(o.location(), Location::new(0, 1));
        assert_eq!(board.agents_at(Location::new(0, 1)), &[o.agent_ref()]);
    }
}

#[cfg(test)]
mod ids {
    use bleth_core::{BeaconId, ObserverId};

    use crate::IdAllocator;

    #[test]
    fn sequences_are_independent_and_start_at_zero() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_beacon(), BeaconId(0));
        assert_eq!(ids.next_beacon(), BeaconId(1));
        assert_eq!(ids.next_observer(), ObserverId(0));
        assert_eq!(ids.beacons_allocated(), 2);
        assert_eq!(ids.observers_allocated(), 1);

        let mut other = IdAllocator::new();
        assert_eq!(other.next_beacon(), BeaconId(0));
    }
}
