//! `lemni-policy` — how a car reacts to the cars around it.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`neighbor`]   | `Neighbor`, `nearest_same_lane` scan                        |
//! | [`model`]      | `DrivingPolicy` trait, `Decision`                           |
//! | [`nearest`]    | `NearestNeighborPolicy`: brake and lane-switch rules       |
//! | [`cruise`]     | `CruisePolicy`: never brakes or switches                   |
//!
//! # Design notes
//!
//! Each car calls its policy once per tick with a snapshot of the world it
//! has just read.  The snapshot may be a tick stale for other cars; the rules
//! only need eventual convergence, so no coordination happens here.  Policies
//! are `Send + Sync` and stateless: the only memory a car carries between
//! ticks (its brake flag) lives in the car, not the policy.

pub mod cruise;
pub mod model;
pub mod nearest;
pub mod neighbor;


pub use cruise::CruisePolicy;
pub use model::{Decision, DrivingPolicy};
pub use nearest::NearestNeighborPolicy;
pub use neighbor::{Neighbor, nearest_same_lane};
