//! Worker → role assignment.

use lemni_core::{CarId, WorkerId};

/// What a pool worker does for the whole run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    /// Opens render cycles, emits frames, resets the grid.
    Coordinator,
    /// Drives one car and owns its slot.
    Car(CarId),
}

/// Maps the pool's `0..worker_count` indices onto roles.
///
/// Exactly one worker is the coordinator; the remaining indices map, in
/// order, onto dense car ids `0..car_count`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoleTable {
    workers:     usize,
    coordinator: usize,
}

impl RoleTable {
    /// `coordinator` must be `< workers`; `SimConfig::validate` checks this.
    pub fn new(workers: usize, coordinator: usize) -> Self {
        debug_assert!(coordinator < workers);
        Self { workers, coordinator }
    }

    pub fn worker_count(&self) -> usize {
        self.workers
    }

    pub fn coordinator(&self) -> WorkerId {
        WorkerId(self.coordinator as u16)
    }

    pub fn role(&self, worker: WorkerId) -> Role {
        let w = worker.index();
        if w == self.coordinator {
            Role::Coordinator
        } else if w < self.coordinator {
            Role::Car(CarId(w as u16))
        } else {
            Role::Car(CarId((w - 1) as u16))
        }
    }

    /// The worker driving `car`.
    pub fn worker_for(&self, car: CarId) -> WorkerId {
        let c = car.index();
        if c < self.coordinator {
            WorkerId(c as u16)
        } else {
            WorkerId((c + 1) as u16)
        }
    }
}
