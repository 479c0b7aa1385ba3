//! `WorldState` and the exclusive `SlotWriter` handle.

use lemni_core::CarId;

use crate::{CarRecord, Slot};

/// One slot per car, indexed by `CarId`.
///
/// `WorldState` is `Sync`: share it by reference (or `Arc`) with every
/// worker.  Reads go through [`read`](Self::read) / [`snapshot`](Self::snapshot);
/// writes require a [`SlotWriter`].
#[derive(Debug)]
pub struct WorldState {
    slots: Box<[Slot]>,
}

impl WorldState {
    /// `car_count` slots, all at [`CarRecord::INITIAL`].
    pub fn new(car_count: usize) -> Self {
        Self {
            slots: (0..car_count).map(|_| Slot::default()).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterator over all `CarId`s in ascending index order.
    pub fn car_ids(&self) -> impl Iterator<Item = CarId> + '_ {
        (0..self.slots.len() as u16).map(CarId)
    }

    /// A consistent copy of one car's record.
    ///
    /// # Panics
    /// Panics if `car` is out of range.
    #[inline]
    pub fn read(&self, car: CarId) -> CarRecord {
        self.slots[car.index()].read()
    }

    /// Every record, in `CarId` order.
    ///
    /// Each record is internally consistent; different records may come from
    /// different ticks.
    pub fn snapshot(&self) -> Vec<CarRecord> {
        self.slots.iter().map(Slot::read).collect()
    }

    /// Number of writes car `car` has published so far.
    pub fn version(&self, car: CarId) -> u64 {
        self.slots[car.index()].version()
    }

    /// Obtain exclusive write access to `car`'s slot.
    ///
    /// Returns `None` if the slot does not exist or is already claimed.
    /// Dropping the writer releases the claim.
    pub fn claim(&self, car: CarId) -> Option<SlotWriter<'_>> {
        let slot = self.slots.get(car.index())?;
        if slot.try_claim() {
            Some(SlotWriter { car, slot })
        } else {
            None
        }
    }
}

/// Exclusive write access to one slot.
///
/// Not `Clone`: at most one `SlotWriter` exists per slot at any time.
#[derive(Debug)]
pub struct SlotWriter<'w> {
    car:  CarId,
    slot: &'w Slot,
}

impl SlotWriter<'_> {
    #[inline]
    pub fn car(&self) -> CarId {
        self.car
    }

    /// Publish a new record for this car.
    #[inline]
    pub fn write(&mut self, record: &CarRecord) {
        self.slot.write(record);
    }

    /// The record as last published.
    #[inline]
    pub fn current(&self) -> CarRecord {
        self.slot.read()
    }
}

impl Drop for SlotWriter<'_> {
    fn drop(&mut self) {
        self.slot.release();
    }
}
