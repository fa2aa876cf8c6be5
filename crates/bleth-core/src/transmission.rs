//! Beacon advertisements.

use crate::BeaconId;

/// One beacon broadcast.  Carries only the beacon's identifier; two beacons
/// never share one, so equality and hashing are by identifier.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transmission {
    advertisement: BeaconId,
}

impl Transmission {
    #[inline]
    pub fn new(advertisement: BeaconId) -> Self {
        Self { advertisement }
    }

    /// The advertised beacon identifier.
    #[inline]
    pub fn advertisement(self) -> BeaconId {
        self.advertisement
    }
}
