//! Simulation time sources.
//!
//! # Design
//!
//! Time is a monotonically non-decreasing `f64` count of elapsed seconds
//! since the simulation started.  Every worker reads the same source but
//! derives its own `delta_time` from its own previous reading; there is no
//! global tick.
//!
//! Three implementations are provided:
//!
//! | Type             | Use                                                   |
//! |------------------|-------------------------------------------------------|
//! | `MonotonicClock` | Real wall-clock time from `Instant`.                  |
//! | `ScaledClock`    | Wall-clock time multiplied by a speed factor.         |
//! | `ManualClock`    | Advanced by hand; for deterministic tests.            |

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// A monotonic elapsed-seconds reading shared by all workers.
pub trait TimeSource: Send + Sync {
    /// Seconds since the simulation started.  Never decreases.
    fn elapsed_secs(&self) -> f64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn elapsed_secs(&self) -> f64 {
        (**self).elapsed_secs()
    }
}

// ── MonotonicClock ────────────────────────────────────────────────────────────

/// Elapsed real time with nanosecond granularity.
#[derive(Clone, Debug)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    /// Start counting from now.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::start()
    }
}

impl TimeSource for MonotonicClock {
    #[inline]
    fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

// ── ScaledClock ───────────────────────────────────────────────────────────────

/// Real time multiplied by `speed`.  `speed = 60.0` runs a five-minute
/// simulation in five seconds.
#[derive(Clone, Debug)]
pub struct ScaledClock {
    inner: MonotonicClock,
    speed: f64,
}

impl ScaledClock {
    /// Start counting from now.  Non-positive speeds are treated as `1.0`.
    pub fn start(speed: f64) -> Self {
        let speed = if speed > 0.0 { speed } else { 1.0 };
        Self { inner: MonotonicClock::start(), speed }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }
}

impl TimeSource for ScaledClock {
    #[inline]
    fn elapsed_secs(&self) -> f64 {
        self.inner.elapsed_secs() * self.speed
    }
}

// ── ManualClock ───────────────────────────────────────────────────────────────

/// A clock that only moves when told to.
///
/// The reading is stored as `f64` bits in an `AtomicU64` so the clock can be
/// shared with worker threads while a test thread advances it.
#[derive(Debug, Default)]
pub struct ManualClock {
    bits: AtomicU64,
}

impl ManualClock {
    pub fn new(start_secs: f64) -> Self {
        Self { bits: AtomicU64::new(start_secs.to_bits()) }
    }

    /// Move the clock to `secs`.  Ignored if it would move time backwards.
    pub fn set(&self, secs: f64) {
        let _ = self.bits.fetch_update(Ordering::AcqRel, Ordering::Acquire, |cur| {
            (secs > f64::from_bits(cur)).then_some(secs.to_bits())
        });
    }

    /// Advance the clock by `delta` seconds.
    pub fn advance(&self, delta: f64) {
        if delta > 0.0 {
            self.set(self.elapsed_secs() + delta);
        }
    }
}

impl TimeSource for ManualClock {
    #[inline]
    fn elapsed_secs(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }
}
