//! Unit tests for bleth-board.

#[cfg(test)]
mod board {
    use bleth_core::{AgentRef, BeaconId, Location, ObserverId};

    use crate::{Board, BoardError};

    const FIRST:  AgentRef = AgentRef::Beacon(BeaconId(0));
    const SECOND: AgentRef = AgentRef::Observer(ObserverId(0));

    fn loc(row: i32, col: i32) -> Location {
        Location::new(row, col)
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(2, 2);
        assert!(board.locations().all(|l| board.agents_at(l).is_empty()));
        assert!(board.all_occupied().is_empty());
        assert_eq!(board.locations().count(), 4);
    }

    #[test]
    fn place_agent_on_right_location_only() {
        let mut board = Board::new(2, 2);
        board.place_agent(loc(1, 1), FIRST).unwrap();
        assert_eq!(board.agents_at(loc(1, 1)), &[FIRST]);
        assert!(board.agents_at(loc(0, 0)).is_empty());
    }

    #[test]
    fn two_agents_on_same_location_keep_insertion_order() {
        let mut board = Board::new(2, 2);
        board.place_agent(loc(0, 1), FIRST).unwrap();
        board.place_agent(loc(0, 1), SECOND).unwrap();
        assert_eq!(board.agents_at(loc(0, 1)), &[FIRST, SECOND]);
    }

    #[test]
    fn place_null_agent_fails() {
        let mut board = Board::new(2, 2);
        let err = board.place_agent(loc(0, 0), AgentRef::Beacon(BeaconId::INVALID)).unwrap_err();
        assert_eq!(err, BoardError::NullAgent);
    }

    #[test]
    fn out_of_bounds_checked_before_null() {
        let mut board = Board::new(2, 2);
        let err = board.place_agent(loc(2, 0), AgentRef::Beacon(BeaconId::INVALID)).unwrap_err();
        assert!(matches!(err, BoardError::OutOfBounds { .. }));
    }

    #[test]
    fn place_outside_each_edge_fails() {
        let mut board = Board::new(2, 2);
        for bad in [loc(-1, 0), loc(0, -1), loc(2, 0), loc(0, 2)] {
            assert_eq!(
                board.place_agent(bad, FIRST),
                Err(BoardError::OutOfBounds { location: bad, rows: 2, cols: 2 }),
            );
        }
        assert_eq!(board.agent_count(), 0);
    }

    #[test]
    fn move_to_non_empty_location_appends() {
        let mut board = Board::new(2, 2);
        board.place_agent(loc(0, 0), FIRST).unwrap();
        board.place_agent(loc(0, 1), SECOND).unwrap();
        board.move_agent(loc(0, 0), loc(0, 1), FIRST).unwrap();
        assert!(board.agents_at(loc(0, 0)).is_empty());
        assert_eq!(board.agents_at(loc(0, 1)), &[SECOND, FIRST]);
    }

    #[test]
    fn move_from_shared_location_leaves_other() {
        let mut board = Board::new(2, 2);
        board.place_agent(loc(0, 0), FIRST).unwrap();
        board.place_agent(loc(0, 0), SECOND).unwrap();
        board.move_agent(loc(0, 0), loc(0, 1), FIRST).unwrap();
        assert_eq!(board.agents_at(loc(0, 0)), &[SECOND]);
        assert_eq!(board.agents_at(loc(0, 1)), &[FIRST]);
    }

    #[test]
    fn move_to_current_location_is_observably_noop() {
        let mut board = Board::new(2, 2);
        board.place_agent(loc(0, 0), FIRST).unwrap();
        board.move_agent(loc(0, 0), loc(0, 0), FIRST).unwrap();
        assert_eq!(board.agents_at(loc(0, 0)), &[FIRST]);
        assert_eq!(board.agent_count(), 1);
    }

    #[test]
    fn sequential_moves_into_same_cell_preserve_call_order() {
        let mut board = Board::new(3, 3);
        board.place_agent(loc(0, 0), FIRST).unwrap();
        board.place_agent(loc(2, 2), SECOND).unwrap();
        board.move_agent(loc(0, 0), loc(1, 1), FIRST).unwrap();
        board.move_agent(loc(2, 2), loc(1, 1), SECOND).unwrap();
        assert_eq!(board.agents_at(loc(1, 1)), &[FIRST, SECOND]);
    }

    #[test]
    fn move_in_place_within_shared_cell_goes_last() {
        let mut board = Board::new(2, 2);
        board.place_agent(loc(0, 0), SECOND).unwrap();
        board.place_agent(loc(0, 0), FIRST).unwrap();
        board.move_agent(loc(0, 0), loc(0, 0), SECOND).unwrap();
        assert_eq!(board.agents_at(loc(0, 0)), &[FIRST, SECOND]);
    }

    #[test]
    fn failed_move_leaves_board_untouched() {
        let mut board = Board::new(2, 2);
        board.place_agent(loc(0, 0), FIRST).unwrap();
        assert!(board.move_agent(loc(0, 0), loc(-1, 0), FIRST).is_err());
        assert!(board.move_agent(loc(5, 5), loc(0, 1), FIRST).is_err());
        assert_eq!(board.agents_at(loc(0, 0)), &[FIRST]);
        assert!(board.agents_at(loc(0, 1)).is_empty());
    }

    #[test]
    fn move_of_absent_agent_still_inserts() {
        let mut board = Board::new(2, 2);
        board.move_agent(loc(0, 0), loc(1, 0), FIRST).unwrap();
        assert_eq!(board.agents_at(loc(1, 0)), &[FIRST]);
    }

    #[test]
    fn all_occupied_is_row_major() {
        let mut board = Board::new(3, 3);
        board.place_agent(loc(2, 0), FIRST).unwrap();
        board.place_agent(loc(0, 2), SECOND).unwrap();
        let locs: Vec<Location> = board.all_occupied().into_iter().map(|(l, _)| l).collect();
        assert_eq!(locs, vec![loc(0, 2), loc(2, 0)]);
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use bleth_core::{AgentRef, BeaconId, Location};

    use crate::{Board, BoardError};

    const AGENT: AgentRef = AgentRef::Beacon(BeaconId(0));

    /// A board extent plus one in-bounds location.
    fn board_and_location() -> impl Strategy<Value = (u32, u32, Location)> {
        (1u32..12, 1u32..12).prop_flat_map(|(rows, cols)| {
            (Just(rows), Just(cols), 0..rows as i32, 0..cols as i32)
                .prop_map(|(r, c, row, col)| (r, c, Location::new(row, col)))
        })
    }

    proptest! {
        #[test]
        fn placed_agent_is_found_only_there((rows, cols, at) in board_and_location()) {
            let mut board = Board::new(rows, cols);
            board.place_agent(at, AGENT).unwrap();
            prop_assert!(board.agents_at(at).contains(&AGENT));
            for other in board.locations().filter(|&l| l != at) {
                prop_assert!(board.agents_at(other).is_empty());
            }
        }

        #[test]
        fn move_relocates((rows, cols, from) in board_and_location(), dr in 0i32..12, dc in 0i32..12) {
            let mut board = Board::new(rows, cols);
            let to = Location::new(dr % rows as i32, dc % cols as i32);
            board.place_agent(from, AGENT).unwrap();
            board.move_agent(from, to, AGENT).unwrap();
            prop_assert!(board.agents_at(to).contains(&AGENT));
            if from != to {
                prop_assert!(!board.agents_at(from).contains(&AGENT));
            }
            prop_assert_eq!(board.agent_count(), 1);
        }

        #[test]
        fn out_of_bounds_always_rejected(rows in 1u32..12, cols in 1u32..12, row in -20i32..20, col in -20i32..20) {
            let mut board = Board::new(rows, cols);
            let at = Location::new(row, col);
            let inside = row >= 0 && col >= 0 && row < rows as i32 && col < cols as i32;
            let placed = board.place_agent(at, AGENT);
            if inside {
                prop_assert!(placed.is_ok());
            } else {
                prop_assert_eq!(placed, Err(BoardError::OutOfBounds { location: at, rows, cols }));
                let moved = board.move_agent(Location::new(0, 0), at, AGENT);
                let rejected = matches!(moved, Err(BoardError::OutOfBounds { .. }));
                prop_assert!(rejected);
            }
        }
    }
}

#[cfg(test)]
mod state {
    use bleth_core::{AgentRef, BeaconId, Location, ObserverId, Round};

    use crate::{Board, BoardError, BoardKind, BoardState};

    #[test]
    fn capture_labels_cells() {
        let mut board = Board::new(2, 3);
        board.place_agent(Location::new(1, 2), AgentRef::Beacon(BeaconId(0))).unwrap();
        board.place_agent(Location::new(1, 2), AgentRef::Observer(ObserverId(4))).unwrap();

        let state = BoardState::capture(&board, BoardKind::Real, Round(1), Round(3)).unwrap();
        assert_eq!(state.cell(1, 2), &["Beacon0".to_string(), "Observer4".to_string()]);
        assert!(state.cell(0, 0).is_empty());
        assert!(state.cell(9, 9).is_empty());
        assert_eq!(state.occupied().count(), 1);
        assert_eq!(state.kind, BoardKind::Real);
    }

    #[test]
    fn capture_past_last_round_fails() {
        let board = Board::new(1, 1);
        let err = BoardState::capture(&board, BoardKind::Estimated, Round(4), Round(3)).unwrap_err();
        assert_eq!(err, BoardError::ExceedingRound { round: Round(4), max: Round(3) });
        assert!(BoardState::capture(&board, BoardKind::Estimated, Round(3), Round(3)).is_ok());
    }
}
