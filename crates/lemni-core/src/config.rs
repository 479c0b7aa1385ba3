//! Top-level simulation configuration.

use crate::{CoreError, CoreResult, LightMode};

/// Every tunable of a run.
///
/// The `Default` values reproduce the classic demo: five cars plus one
/// coordinator, a five-minute run, a frame every ten seconds, and a fresh
/// track every twelve.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of cars.  The worker pool gets one extra thread for the
    /// coordinator.
    pub car_count: usize,

    /// Worker index elected as coordinator.  Must be `<= car_count`.
    pub coordinator: usize,

    /// Workers stop once the whole elapsed second reaches this value.
    pub deadline_secs: u64,

    /// The coordinator opens a render cycle on every second that is a
    /// multiple of this.
    pub render_interval_secs: u64,

    /// The working grid is reset to the background on every second `s`
    /// where `(s + 1)` is a multiple of this.
    pub reset_interval_secs: u64,

    /// An open cycle is emitted after this many seconds even if some cars
    /// have not contributed.
    pub render_timeout_secs: f64,

    /// Master RNG seed for per-car parameters.
    pub seed: u64,

    pub light_mode: LightMode,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            car_count:            5,
            coordinator:          0,
            deadline_secs:        300,
            render_interval_secs: 10,
            reset_interval_secs:  12,
            render_timeout_secs:  1.0,
            seed:                 0x5eed,
            light_mode:           LightMode::Pulse,
        }
    }
}

impl SimConfig {
    /// Total pool size: all cars plus the coordinator.
    #[inline]
    pub fn worker_count(&self) -> usize {
        self.car_count + 1
    }

    /// Reject configurations that cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.car_count == 0 {
            return Err(CoreError::Config("car_count must be at least 1".into()));
        }
        if self.car_count > u16::MAX as usize - 1 {
            return Err(CoreError::Config(format!(
                "car_count {} exceeds the supported maximum {}",
                self.car_count,
                u16::MAX - 1
            )));
        }
        if self.coordinator >= self.worker_count() {
            return Err(CoreError::Config(format!(
                "coordinator index {} out of range for {} workers",
                self.coordinator,
                self.worker_count()
            )));
        }
        if self.deadline_secs == 0 {
            return Err(CoreError::Config("deadline_secs must be positive".into()));
        }
        if self.render_interval_secs == 0 || self.reset_interval_secs == 0 {
            return Err(CoreError::Config("render and reset intervals must be positive".into()));
        }
        if !(self.render_timeout_secs >= 0.0) {
            return Err(CoreError::Config("render_timeout_secs must be non-negative".into()));
        }
        Ok(())
    }
}
