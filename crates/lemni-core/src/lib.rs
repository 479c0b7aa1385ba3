//! `lemni-core` — foundational types for the lemni figure-eight simulation.
//!
//! This crate is a dependency of every other `lemni-*` crate.  It has no
//! `lemni-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CarId`, `WorkerId`                                   |
//! | [`geo`]         | `Position`, `Lane`, Euclidean distance                |
//! | [`curve`]       | Lemniscate parametrisation for both lanes             |
//! | [`light`]       | `TrafficLight`, `LightMode`, `is_green`               |
//! | [`time`]        | `TimeSource` trait and clock implementations          |
//! | [`rng`]         | `AgentRng` (per-car parameter draws)                  |
//! | [`config`]      | `SimConfig`                                           |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to value and config types.  |

pub mod config;
pub mod curve;
pub mod error;
pub mod geo;
pub mod ids;
pub mod light;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use curve::{LEMNISCATE_END, lane_position};
pub use error::{CoreError, CoreResult};
pub use geo::{Lane, Position};
pub use ids::{CarId, WorkerId};
pub use light::{LightMode, TrafficLight, is_green};
pub use rng::AgentRng;
pub use time::{ManualClock, MonotonicClock, ScaledClock, TimeSource};
