//! `bleth-resolver`: estimates where beacons are from what observers heard.
//!
//! | Module       | Contents                                           |
//! |--------------|----------------------------------------------------|
//! | [`resolver`] | `Resolver` trait                                   |
//! | [`global`]   | `GlobalResolver`: centroid estimator, `centroid`   |
//!
//! Observers push `(their location, transmissions heard)` during a round;
//! the simulation then calls [`Resolver::estimate`] once, which folds the
//! round's reports into the resolver's own estimated board and forgets them.

pub mod global;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use global::{GlobalResolver, centroid};
pub use resolver::Resolver;
