//! Unit tests for bleth-resolver.

#[cfg(test)]
mod centroid {
    use bleth_core::Location;

    use crate::centroid;

    fn loc(row: i32, col: i32) -> Location {
        Location::new(row, col)
    }

    #[test]
    fn empty_has_no_centroid() {
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn identical_reports_are_exact() {
        assert_eq!(centroid(&[loc(3, 4), loc(3, 4), loc(3, 4)]), Some(loc(3, 4)));
    }

    #[test]
    fn thirds_round_down() {
        assert_eq!(centroid(&[loc(0, 0), loc(0, 1), loc(1, 0)]), Some(loc(0, 0)));
    }

    #[test]
    fn half_rounds_up() {
        assert_eq!(centroid(&[loc(0, 0), loc(0, 1)]), Some(loc(0, 1)));
        assert_eq!(centroid(&[loc(2, 0), loc(3, 0)]), Some(loc(3, 0)));
    }

    #[test]
    fn two_thirds_round_up() {
        assert_eq!(centroid(&[loc(0, 1), loc(1, 1), loc(1, 0)]), Some(loc(1, 1)));
    }
}

#[cfg(test)]
mod global {
    use bleth_core::{AgentRef, BeaconId, Location, Transmission};

    use crate::{GlobalResolver, Resolver};

    const B0: BeaconId = BeaconId(0);
    const B1: BeaconId = BeaconId(1);

    fn tx(id: BeaconId) -> Transmission {
        Transmission::new(id)
    }

    fn loc(row: i32, col: i32) -> Location {
        Location::new(row, col)
    }

    #[test]
    fn unheard_beacons_are_absent() {
        let mut r = GlobalResolver::new(3, 3);
        r.estimate().unwrap();
        assert_eq!(r.estimate_of(B0), None);
        assert_eq!(r.board().agent_count(), 0);
    }

    #[test]
    fn first_sighting_places_at_centroid() {
        let mut r = GlobalResolver::new(3, 3);
        r.receive_information(loc(0, 0), &[tx(B0)]);
        r.receive_information(loc(0, 1), &[tx(B0)]);
        r.receive_information(loc(1, 0), &[tx(B0)]);
        r.estimate().unwrap();
        assert_eq!(r.estimate_of(B0), Some(loc(0, 0)));
        assert_eq!(r.board().agents_at(loc(0, 0)), &[AgentRef::Beacon(B0)]);
    }

    #[test]
    fn prior_estimate_counts_as_extra_report() {
        let mut r = GlobalResolver::new(5, 5);
        r.receive_information(loc(0, 0), &[tx(B0)]);
        r.estimate().unwrap();
        assert_eq!(r.estimate_of(B0), Some(loc(0, 0)));

        // Round 2: heard only at (4, 4).  With the prior folded in the mean is
        // (2, 2); without it the estimate would jump to (4, 4).
        r.receive_information(loc(4, 4), &[tx(B0)]);
        r.estimate().unwrap();
        assert_eq!(r.estimate_of(B0), Some(loc(2, 2)));
        assert!(r.board().agents_at(loc(0, 0)).is_empty());
        assert_eq!(r.board().agents_at(loc(2, 2)), &[AgentRef::Beacon(B0)]);
        assert_eq!(r.board().agent_count(), 1);
    }

    #[test]
    fn silent_round_keeps_stale_estimate() {
        let mut r = GlobalResolver::new(3, 3);
        r.receive_information(loc(1, 2), &[tx(B0), tx(B1)]);
        r.estimate().unwrap();

        r.receive_information(loc(0, 0), &[tx(B1)]);
        r.estimate().unwrap();
        assert_eq!(r.estimate_of(B0), Some(loc(1, 2)));
        assert_eq!(r.estimate_of(B1), Some(loc(1, 1)));
    }

    #[test]
    fn reports_cleared_after_estimate() {
        let mut r = GlobalResolver::new(3, 3);
        r.receive_information(loc(2, 2), &[tx(B0)]);
        assert_eq!(r.heard_this_round(), 1);
        r.estimate().unwrap();
        assert_eq!(r.heard_this_round(), 0);

        // A second estimate with nothing new must not move anything.
        r.estimate().unwrap();
        assert_eq!(r.estimate_of(B0), Some(loc(2, 2)));
    }

    #[test]
    fn estimation_independent_of_report_order() {
        let reports = [(loc(0, 0), B0), (loc(2, 1), B0), (loc(1, 2), B1), (loc(2, 2), B0)];

        let mut forward = GlobalResolver::new(3, 3);
        for &(at, b) in &reports {
            forward.receive_information(at, &[tx(b)]);
        }
        forward.estimate().unwrap();

        let mut backward = GlobalResolver::new(3, 3);
        for &(at, b) in reports.iter().rev() {
            backward.receive_information(at, &[tx(b)]);
        }
        backward.estimate().unwrap();

        assert_eq!(forward.estimates().collect::<Vec<_>>(), backward.estimates().collect::<Vec<_>>());
    }

    #[test]
    fn empty_report_from_observer_is_harmless() {
        let mut r = GlobalResolver::new(2, 2);
        r.receive_information(loc(0, 0), &[]);
        r.estimate().unwrap();
        assert_eq!(r.estimates().count(), 0);
    }
}
