//! `SnapshotRenderer` — background, working grid, and cycle trigger in one
//! `Sync` value shared by all workers.

use lemni_core::{Lane, Position};
use tracing::{debug, info, warn};

use crate::grid::{CAR_MARKER, SharedGrid, TrackGrid, cell_for};
use crate::{CycleGate, Frame, FrameSink, RenderCycle, RenderResult};

/// Shared render state.
///
/// Roles:
/// - the coordinator calls [`open_cycle`](Self::open_cycle),
///   [`should_emit`](Self::should_emit), [`emit`](Self::emit) and
///   [`reset`](Self::reset);
/// - cars call [`contribute`](Self::contribute) every tick.
pub struct SnapshotRenderer {
    background:   TrackGrid,
    working:      SharedGrid,
    cycle:        RenderCycle,
    participants: usize,
}

impl SnapshotRenderer {
    /// Precompute the background and start with a clean working grid.
    ///
    /// `participants` is the number of cars expected to contribute to each
    /// cycle.
    pub fn new(participants: usize) -> Self {
        let background = TrackGrid::background();
        let working = SharedGrid::from_grid(&background);
        Self { background, working, cycle: RenderCycle::new(), participants }
    }

    pub fn background(&self) -> &TrackGrid {
        &self.background
    }

    pub fn cycle(&self) -> &RenderCycle {
        &self.cycle
    }

    /// Copy of the working grid.
    pub fn capture(&self) -> TrackGrid {
        self.working.capture()
    }

    // ── Coordinator side ──────────────────────────────────────────────────

    /// Open a new render cycle at `now`.
    pub fn open_cycle(&self, now: f64) -> u64 {
        let id = self.cycle.open(now);
        debug!(cycle = id, elapsed = now, "render cycle opened");
        id
    }

    /// `true` once every participant has painted or the cycle is older than
    /// `timeout_secs`.
    pub fn should_emit(&self, now: f64, timeout_secs: f64) -> bool {
        if !self.cycle.is_open() {
            return false;
        }
        let contributions = self.cycle.contributions();
        if contributions >= self.participants {
            return true;
        }
        if self.cycle.age(now) >= timeout_secs {
            warn!(
                cycle = self.cycle.opened(),
                contributions,
                expected = self.participants,
                "render cycle timed out; emitting partial frame"
            );
            return true;
        }
        false
    }

    /// Close the open cycle and hand its frame to `sink`.
    pub fn emit<S: FrameSink + ?Sized>(&self, now: f64, sink: &mut S) -> RenderResult<Frame> {
        self.cycle.close();
        let frame = Frame {
            cycle:         self.cycle.opened(),
            elapsed_secs:  now.max(0.0) as u64,
            contributions: self.cycle.contributions(),
            lines:         self.working.capture().lines(),
        };
        sink.emit(&frame)?;
        info!(
            cycle = frame.cycle,
            elapsed = frame.elapsed_secs,
            contributions = frame.contributions,
            "frame emitted"
        );
        Ok(frame)
    }

    /// Restore the working grid to the background.
    pub fn reset(&self) {
        self.working.reset_to(&self.background);
        debug!("working grid reset");
    }

    // ── Car side ──────────────────────────────────────────────────────────

    /// Paint a car marker unconditionally.
    pub fn paint_car(&self, lane: Lane, position: Position) {
        let (row, col) = cell_for(lane, position);
        self.working.paint(row, col, CAR_MARKER);
    }

    /// Paint this car's marker if a cycle is open and `gate` has not passed
    /// it yet.  Returns `true` when a marker was painted.
    pub fn contribute(&self, gate: &mut CycleGate, lane: Lane, position: Position) -> bool {
        let Some(id) = gate.pass(&self.cycle) else {
            return false;
        };
        self.paint_car(lane, position);
        self.cycle.contribute(id);
        true
    }
}
