//! The coordinator's per-tick duties.

use lemni_core::SimConfig;
use lemni_render::{FrameSink, RenderResult, SnapshotRenderer};

use crate::CoordinatorStats;

/// Opens render cycles, emits frames, and resets the working grid.
///
/// Each duty fires at most once per whole second: the coordinator remembers
/// the last second it acted on.
pub struct Coordinator {
    render_interval: u64,
    reset_interval:  u64,
    timeout_secs:    f64,
    participants:    usize,
    last_open:       Option<u64>,
    last_reset:      Option<u64>,
    stats:           CoordinatorStats,
}

impl Coordinator {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            render_interval: config.render_interval_secs,
            reset_interval:  config.reset_interval_secs,
            timeout_secs:    config.render_timeout_secs,
            participants:    config.car_count,
            last_open:       None,
            last_reset:      None,
            stats:           CoordinatorStats::default(),
        }
    }

    pub fn stats(&self) -> &CoordinatorStats {
        &self.stats
    }

    pub fn into_stats(self) -> CoordinatorStats {
        self.stats
    }

    pub fn tick<S: FrameSink + ?Sized>(
        &mut self,
        now:      f64,
        renderer: &SnapshotRenderer,
        sink:     &mut S,
    ) -> RenderResult<()> {
        self.stats.ticks += 1;
        let second = now.max(0.0) as u64;

        if second % self.render_interval == 0 && self.last_open != Some(second) {
            self.last_open = Some(second);
            renderer.open_cycle(now);
            self.stats.cycles_opened += 1;
        }

        if renderer.should_emit(now, self.timeout_secs) {
            let frame = renderer.emit(now, sink)?;
            self.stats.frames += 1;
            if frame.contributions < self.participants {
                self.stats.partial += 1;
            }
        }

        if (second + 1) % self.reset_interval == 0 && self.last_reset != Some(second) {
            self.last_reset = Some(second);
            renderer.reset();
            self.stats.resets += 1;
        }
        Ok(())
    }
}
