//! Nearest same-lane car lookup.

use lemni_world::CarRecord;

/// The closest car found by [`nearest_same_lane`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    /// Index of the neighbour in the scanned slice.
    pub index:      usize,
    pub distance:   f64,
    pub phase:      f64,
    pub is_driving: bool,
}

/// Scan `world` in index order for the car in `me`'s lane closest to `me`.
///
/// Records whose position equals `me.position` are skipped: that covers the
/// caller's own slot as well as any car still parked at the same spot.  Only
/// candidates strictly closer than `max_distance` are considered, and a
/// later candidate must be strictly closer to replace an earlier one, so the
/// first minimum wins ties.
pub fn nearest_same_lane(me: &CarRecord, world: &[CarRecord], max_distance: f64) -> Option<Neighbor> {
    let mut best: Option<Neighbor> = None;
    let mut best_distance = max_distance;

    for (index, other) in world.iter().enumerate() {
        if other.position == me.position || other.lane != me.lane {
            continue;
        }
        let distance = me.position.distance(other.position);
        if distance < best_distance {
            best_distance = distance;
            best = Some(Neighbor {
                index,
                distance,
                phase:      other.phase,
                is_driving: other.is_driving,
            });
        }
    }
    best
}
