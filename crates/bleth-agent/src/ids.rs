//! Sequential id allocation scoped to one simulation.

use bleth_core::{BeaconId, ObserverId};

/// Hands out beacon and observer ids in construction order, each sequence
/// starting at 0.
///
/// One allocator belongs to one simulation build, so independent runs never
/// share a counter.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next_beacon:   u32,
    next_observer: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_beacon(&mut self) -> BeaconId {
        let id = BeaconId(self.next_beacon);
        self.next_beacon += 1;
        id
    }

    pub fn next_observer(&mut self) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        id
    }

    pub fn beacons_allocated(&self) -> u32 {
        self.next_beacon
    }

    pub fn observers_allocated(&self) -> u32 {
        self.next_observer
    }
}
