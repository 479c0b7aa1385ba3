//! One car's record and the lock-free cell that stores it.
//!
//! # Protocol
//!
//! `Slot` is a sequence lock specialised for a single writer:
//!
//! ```text
//! writer:  seq ← seq+1 (odd)   fence(Release)   store fields   seq ← seq+1 (even, Release)
//! reader:  s1 ← seq (Acquire)  load fields   fence(Acquire)   s2 ← seq   retry unless s1 == s2 && even
//! ```
//!
//! Every field lives in its own atomic, so there are no data races in the
//! language sense; the sequence counter only guarantees that a reader never
//! assembles a record from two different writes.  The writer never waits.

use std::hint;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU64, Ordering, fence};

use lemni_core::{Lane, Position};

const FLAG_DRIVING: u8 = 0b01;
const FLAG_OUTER:   u8 = 0b10;

/// Everything other cars may know about one car.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarRecord {
    /// Last computed location.
    pub position:   Position,
    /// `false` while braking or waiting at a red light.
    pub is_driving: bool,
    pub lane:       Lane,
    /// Progress along the curve, in `[0, LEMNISCATE_END)`.
    pub phase:      f64,
}

impl CarRecord {
    /// State of every slot before its car has ticked.
    pub const INITIAL: CarRecord = CarRecord {
        position:   Position::ORIGIN,
        is_driving: true,
        lane:       Lane::Inner,
        phase:      0.0,
    };

    fn flags(&self) -> u8 {
        let mut f = 0;
        if self.is_driving {
            f |= FLAG_DRIVING;
        }
        if self.lane.as_bool() {
            f |= FLAG_OUTER;
        }
        f
    }
}

impl Default for CarRecord {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Lock-free storage for one [`CarRecord`].
#[derive(Debug)]
pub struct Slot {
    seq:     AtomicU64,
    x:       AtomicU64,
    y:       AtomicU64,
    phase:   AtomicU64,
    flags:   AtomicU8,
    claimed: AtomicBool,
}

impl Slot {
    pub fn new(record: CarRecord) -> Self {
        Self {
            seq:     AtomicU64::new(0),
            x:       AtomicU64::new(record.position.x.to_bits()),
            y:       AtomicU64::new(record.position.y.to_bits()),
            phase:   AtomicU64::new(record.phase.to_bits()),
            flags:   AtomicU8::new(record.flags()),
            claimed: AtomicBool::new(false),
        }
    }

    /// A consistent copy of the record.  Spins only while a write is in
    /// flight, which is a handful of stores.
    pub fn read(&self) -> CarRecord {
        loop {
            let s1 = self.seq.load(Ordering::Acquire);
            if s1 & 1 == 1 {
                hint::spin_loop();
                continue;
            }

            let x     = f64::from_bits(self.x.load(Ordering::Relaxed));
            let y     = f64::from_bits(self.y.load(Ordering::Relaxed));
            let phase = f64::from_bits(self.phase.load(Ordering::Relaxed));
            let flags = self.flags.load(Ordering::Relaxed);

            fence(Ordering::Acquire);
            let s2 = self.seq.load(Ordering::Relaxed);
            if s1 == s2 {
                return CarRecord {
                    position:   Position::new(x, y),
                    is_driving: flags & FLAG_DRIVING != 0,
                    lane:       Lane::from_bool(flags & FLAG_OUTER != 0),
                    phase,
                };
            }
            hint::spin_loop();
        }
    }

    /// Number of completed writes.
    pub fn version(&self) -> u64 {
        self.seq.load(Ordering::Acquire) / 2
    }

    /// Publish `record`.  Only reachable through `SlotWriter`, which
    /// guarantees a single writer.
    pub(crate) fn write(&self, record: &CarRecord) {
        let s = self.seq.load(Ordering::Relaxed);
        self.seq.store(s.wrapping_add(1), Ordering::Relaxed);
        fence(Ordering::Release);

        self.x.store(record.position.x.to_bits(), Ordering::Relaxed);
        self.y.store(record.position.y.to_bits(), Ordering::Relaxed);
        self.phase.store(record.phase.to_bits(), Ordering::Relaxed);
        self.flags.store(record.flags(), Ordering::Relaxed);

        self.seq.store(s.wrapping_add(2), Ordering::Release);
    }

    /// Take write ownership.  `false` if somebody already holds it.
    pub(crate) fn try_claim(&self) -> bool {
        self.claimed
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    pub(crate) fn release(&self) {
        self.claimed.store(false, Ordering::Release);
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed.load(Ordering::Acquire)
    }
}

impl Default for Slot {
    fn default() -> Self {
        Self::new(CarRecord::INITIAL)
    }
}
