//! Render-cycle trigger shared by the coordinator and the cars.
//!
//! All state is atomic.  The coordinator is the only worker that opens or
//! closes a cycle; cars only read the trigger and bump the contribution
//! counter.  Relaxed ordering is enough for the flags themselves because
//! every consumer tolerates seeing a change late.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

/// The "render now" broadcast.
#[derive(Debug, Default)]
pub struct RenderCycle {
    open:          AtomicBool,
    /// Id of the most recently opened cycle; 0 means none yet.
    id:            AtomicU64,
    contributions: AtomicUsize,
    /// `f64` bits of the elapsed time at which the current cycle opened.
    opened_at:     AtomicU64,
}

impl RenderCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle at `now` and return its id.  Resets the contribution
    /// count.
    pub fn open(&self, now: f64) -> u64 {
        self.contributions.store(0, Ordering::Relaxed);
        self.opened_at.store(now.to_bits(), Ordering::Relaxed);
        let id = self.id.fetch_add(1, Ordering::AcqRel) + 1;
        self.open.store(true, Ordering::Release);
        id
    }

    /// Stop accepting contributions.
    pub fn close(&self) {
        self.open.store(false, Ordering::Release);
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    /// The open cycle's id, or `None` when no cycle is open.
    #[inline]
    pub fn current(&self) -> Option<u64> {
        if self.is_open() {
            Some(self.id.load(Ordering::Acquire))
        } else {
            None
        }
    }

    /// Total cycles ever opened.
    pub fn opened(&self) -> u64 {
        self.id.load(Ordering::Acquire)
    }

    /// Record one car's contribution to cycle `id`.  Contributions to a
    /// cycle that has since been replaced are dropped.
    pub fn contribute(&self, id: u64) {
        if self.id.load(Ordering::Acquire) == id {
            self.contributions.fetch_add(1, Ordering::AcqRel);
        }
    }

    pub fn contributions(&self) -> usize {
        self.contributions.load(Ordering::Acquire)
    }

    /// Seconds since the current cycle opened.
    pub fn age(&self, now: f64) -> f64 {
        now - f64::from_bits(self.opened_at.load(Ordering::Relaxed))
    }
}

/// A car's private "already painted this cycle" memory.
#[derive(Copy, Clone, Debug, Default)]
pub struct CycleGate {
    last: u64,
}

impl CycleGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// If `cycle` has an open cycle this gate has not passed yet, remember it
    /// and return its id.
    pub fn pass(&mut self, cycle: &RenderCycle) -> Option<u64> {
        let id = cycle.current()?;
        if id == self.last {
            return None;
        }
        self.last = id;
        Some(id)
    }
}
