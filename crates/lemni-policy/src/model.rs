//! The `DrivingPolicy` trait — the extension point for car behaviour.

use lemni_world::CarRecord;

/// What a car should do differently on its next tick.
///
/// The two flags are independent: a single neighbour can make a car both
/// brake and change lane in the same tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Decision {
    /// Hold position on the next tick.
    pub brake:       bool,
    /// Move to the other lane.
    pub switch_lane: bool,
}

impl Decision {
    pub const NONE: Decision = Decision { brake: false, switch_lane: false };
}

/// Pluggable per-tick decision rule.
///
/// # Thread safety
///
/// Every car worker calls `decide` concurrently on a shared policy, so
/// implementations must be `Send + Sync` and should not hold mutable state.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysSwitch;
///
/// impl DrivingPolicy for AlwaysSwitch {
///     fn decide(&self, _me: &CarRecord, _world: &[CarRecord]) -> Decision {
///         Decision { brake: false, switch_lane: true }
///     }
/// }
/// ```
pub trait DrivingPolicy: Send + Sync + 'static {
    /// Decide from the caller's own record and a snapshot of every slot.
    ///
    /// `world` contains the caller's slot too; implementations identify it
    /// by position, not index.
    fn decide(&self, me: &CarRecord, world: &[CarRecord]) -> Decision;
}
