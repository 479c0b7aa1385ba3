//! The default policy: react to the closest car in the same lane.

use lemni_world::CarRecord;
use tracing::trace;

use crate::{Decision, DrivingPolicy, nearest_same_lane};

/// Brake behind a stopped car, overtake a car that is close ahead.
///
/// With `closest` the nearest same-lane car:
///
/// | Rule        | Fires when                                                        |
/// |-------------|-------------------------------------------------------------------|
/// | brake       | `distance < threshold` and `closest` is stopped and ahead of `me` |
/// | switch lane | `distance < threshold` and `closest` is ahead of `me`             |
///
/// "Ahead" compares raw phases, so a car just past the wrap point never
/// counts as ahead of one about to wrap.
#[derive(Clone, Debug)]
pub struct NearestNeighborPolicy {
    /// Reaction distance in track units.
    pub threshold:   f64,
    /// Distance beyond which cars are not even considered.
    pub scan_radius: f64,
}

impl Default for NearestNeighborPolicy {
    fn default() -> Self {
        Self { threshold: 1.0, scan_radius: 1000.0 }
    }
}

impl DrivingPolicy for NearestNeighborPolicy {
    fn decide(&self, me: &CarRecord, world: &[CarRecord]) -> Decision {
        let Some(closest) = nearest_same_lane(me, world, self.scan_radius) else {
            return Decision::NONE;
        };

        let close_behind = closest.distance < self.threshold && me.phase < closest.phase;
        let decision = Decision {
            brake:       close_behind && !closest.is_driving,
            switch_lane: close_behind,
        };

        if decision != Decision::NONE {
            trace!(
                neighbor = closest.index,
                distance = closest.distance,
                brake = decision.brake,
                switch_lane = decision.switch_lane,
                "neighbour reaction"
            );
        }
        decision
    }
}
