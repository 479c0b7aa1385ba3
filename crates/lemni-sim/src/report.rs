//! Per-run summary returned by [`Sim::run`][crate::Sim::run].

use lemni_core::CarId;
use lemni_world::{CarParams, CarRecord};

use crate::agent::{Hold, TickOutcome};

/// Counters one car accumulates over a run.
#[derive(Clone, Debug, PartialEq)]
pub struct CarStats {
    pub car:           CarId,
    pub params:        CarParams,
    pub ticks:         u64,
    pub laps:          u64,
    pub lane_switches: u64,
    pub brake_ticks:   u64,
    /// Ticks spent waiting at either crossing.
    pub light_ticks:   u64,
    /// Render cycles this car painted a marker for.
    pub markers:       u64,
    pub last_record:   CarRecord,
}

impl CarStats {
    pub fn new(car: CarId, params: CarParams) -> Self {
        Self {
            car,
            params,
            ticks:         0,
            laps:          0,
            lane_switches: 0,
            brake_ticks:   0,
            light_ticks:   0,
            markers:       0,
            last_record:   CarRecord::INITIAL,
        }
    }

    pub(crate) fn record(&mut self, outcome: &TickOutcome) {
        self.ticks += 1;
        self.laps += outcome.wrapped as u64;
        self.lane_switches += outcome.switched as u64;
        self.markers += outcome.painted as u64;
        match outcome.hold {
            Some(Hold::Brake) => self.brake_ticks += 1,
            Some(Hold::RedLight | Hold::GreenLight) => self.light_ticks += 1,
            None => {}
        }
        self.last_record = outcome.record;
    }
}

/// Counters the coordinator accumulates over a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoordinatorStats {
    pub ticks:         u64,
    pub cycles_opened: u64,
    pub frames:        u64,
    /// Frames emitted before every car had contributed.
    pub partial:       u64,
    pub resets:        u64,
}

/// Everything [`Sim::run`][crate::Sim::run] reports back.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// One entry per car, in `CarId` order.
    pub cars:        Vec<CarStats>,
    pub coordinator: CoordinatorStats,
    /// World state after every worker stopped.
    pub final_world: Vec<CarRecord>,
}

impl RunReport {
    pub fn total_lane_switches(&self) -> u64 {
        self.cars.iter().map(|c| c.lane_switches).sum()
    }

    pub fn total_laps(&self) -> u64 {
        self.cars.iter().map(|c| c.laps).sum()
    }
}
