//! A policy that ignores every other car.

use lemni_world::CarRecord;

use crate::{Decision, DrivingPolicy};

/// A [`DrivingPolicy`] that never brakes and never changes lane.
///
/// Useful as a baseline in tests: cars then only stop for the light.
pub struct CruisePolicy;

impl DrivingPolicy for CruisePolicy {
    fn decide(&self, _me: &CarRecord, _world: &[CarRecord]) -> Decision {
        Decision::NONE
    }
}
