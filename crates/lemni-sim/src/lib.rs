//! `lemni-sim` — concurrent tick loop for the lemni figure-eight simulation.
//!
//! # Workers
//!
//! ```text
//! rayon pool with car_count + 1 threads, every thread runs until the deadline:
//!
//!   coordinator (pool index = config.coordinator)
//!     ① open a render cycle every render_interval_secs
//!     ② emit the frame once every car painted, or on timeout
//!     ③ reset the working grid every reset_interval_secs
//!
//!   car (every other index, dense CarId order)
//!     ① accelerate; hold at a crossing or on a brake, else advance phase
//!     ② consult the DrivingPolicy against a snapshot of every slot
//!     ③ publish position, lane, phase, driving flag into its own slot
//!     ④ paint a marker into the open render cycle (once per cycle)
//! ```
//!
//! Workers share no locks on the hot path: slots are seqlocked atomics and
//! the render cycle is a handful of atomic counters.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lemni_core::{ScaledClock, SimConfig};
//! use lemni_render::ConsoleSink;
//! use lemni_sim::SimBuilder;
//!
//! let sim = SimBuilder::new(SimConfig::default())
//!     .clock(ScaledClock::start(10.0))
//!     .build()?;
//! let report = sim.run(&mut ConsoleSink::stdout())?;
//! println!("{} lane switches", report.total_lane_switches());
//! ```

pub mod agent;
pub mod builder;
pub mod coordinator;
pub mod error;
pub mod report;
pub mod roles;
pub mod sim;


pub use agent::{CarAgent, Hold, TickOutcome};
pub use builder::SimBuilder;
pub use coordinator::Coordinator;
pub use error::{SimError, SimResult};
pub use report::{CarStats, CoordinatorStats, RunReport};
pub use roles::{Role, RoleTable};
pub use sim::Sim;
