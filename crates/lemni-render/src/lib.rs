//! `lemni-render` — periodic ASCII snapshots of the track.
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`grid`]      | `TrackGrid` (background), `SharedGrid` (working, atomic)   |
//! | [`cycle`]     | `RenderCycle` trigger, `CycleGate` per-car contribution gate |
//! | [`frame`]     | `Frame`, one emitted snapshot                               |
//! | [`sink`]      | `FrameSink` trait, `ConsoleSink`, `MemorySink`, `NoopSink` |
//! | [`renderer`]  | `SnapshotRenderer` ties the pieces together                 |
//! | [`error`]     | `RenderError`, `RenderResult`                              |
//!
//! # Render cycle
//!
//! ```text
//! coordinator: open cycle ──────────────────────────────► emit frame, close
//!                   │                                 ▲
//! car k:            └─ sees open cycle, paints '*' ──┘ (once per cycle)
//! ```
//!
//! Cars that have not seen the open cycle by the time it is emitted simply
//! miss it.  The working grid is periodically reset to the background so
//! stale markers never linger for more than one reset interval.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lemni_render::{MemorySink, SnapshotRenderer};
//!
//! let renderer = SnapshotRenderer::new(car_count);
//! let mut sink = MemorySink::default();
//! renderer.open_cycle(now);
//! renderer.paint_car(Lane::Inner, position);
//! renderer.emit(now, &mut sink)?;
//! ```

pub mod cycle;
pub mod error;
pub mod frame;
pub mod grid;
pub mod renderer;
pub mod sink;

#[cfg(test)]
mod tests;

pub use cycle::{CycleGate, RenderCycle};
pub use error::{RenderError, RenderResult};
pub use frame::Frame;
pub use grid::{CAR_MARKER, GRID_COLS, GRID_ROWS, SharedGrid, TRACK_DOT, TrackGrid, cell_for};
pub use renderer::SnapshotRenderer;
pub use sink::{ConsoleSink, FrameSink, MemorySink, NoopSink};
