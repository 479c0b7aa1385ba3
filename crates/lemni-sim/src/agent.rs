//! One car's private state and its per-tick update.

use lemni_core::{CarId, LEMNISCATE_END, LightMode, TrafficLight, lane_position};
use lemni_policy::DrivingPolicy;
use lemni_render::{CycleGate, SnapshotRenderer};
use lemni_world::{CarParams, CarRecord, SlotWriter, WorldState};
use tracing::debug;

use crate::CarStats;

/// Scales `acceleration · delta_time` into a speed increment.
const ACCEL_FACTOR: f64 = 0.05;

/// Phase window in front of the first crossing; cars wait here while red.
pub const RED_STOP: (f64, f64) = (1.36, 1.56);
/// Phase window in front of the second crossing; cars wait here while green.
pub const GREEN_STOP: (f64, f64) = (4.5, 4.7);

#[inline]
fn within((lo, hi): (f64, f64), phase: f64) -> bool {
    phase >= lo && phase <= hi
}

/// Why a car did not move on a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Hold {
    /// Waiting at the crossing guarded for a red light.
    RedLight,
    /// Waiting at the crossing guarded for a green light.
    GreenLight,
    /// Braking behind a stopped car.
    Brake,
}

/// What happened on one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickOutcome {
    pub record:   CarRecord,
    pub hold:     Option<Hold>,
    pub wrapped:  bool,
    pub switched: bool,
    pub painted:  bool,
}

/// Everything a car keeps to itself between ticks.
pub struct CarAgent {
    car:       CarId,
    params:    CarParams,
    speed:     f64,
    /// Private progress accumulator; published in the slot each tick.
    phase:     f64,
    /// Brake decision carried into the next tick.
    brake:     bool,
    light:     TrafficLight,
    last_now:  f64,
    gate:      CycleGate,
    stats:     CarStats,
}

impl CarAgent {
    pub fn new(car: CarId, params: CarParams, light_mode: LightMode) -> Self {
        Self {
            car,
            params,
            speed:    0.0,
            phase:    0.0,
            brake:    false,
            light:    TrafficLight::new(light_mode),
            last_now: 0.0,
            gate:     CycleGate::new(),
            stats:    CarStats::new(car, params),
        }
    }

    pub fn car(&self) -> CarId {
        self.car
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn is_braking(&self) -> bool {
        self.brake
    }

    pub fn stats(&self) -> &CarStats {
        &self.stats
    }

    pub fn into_stats(self) -> CarStats {
        self.stats
    }

    /// Offset added to the phase so cars are spread along the track.
    ///
    /// This is the dense car index `0..car_count`, not the pool index, so
    /// car 0 starts at phase 0 whichever worker coordinates.
    #[inline]
    fn curve_offset(&self) -> f64 {
        self.car.index() as f64
    }

    /// Advance speed and phase to `now`.  Returns whether the phase wrapped
    /// and why the car held, if it did.
    pub fn advance(&mut self, now: f64) -> (bool, Option<Hold>) {
        let delta = now - self.last_now;
        self.last_now = now;

        if self.speed < self.params.max_speed {
            self.speed += self.params.acceleration * delta * ACCEL_FACTOR;
        }

        let green = self.light.observe(now);
        let hold = if within(RED_STOP, self.phase) && !green {
            Some(Hold::RedLight)
        } else if within(GREEN_STOP, self.phase) && green {
            Some(Hold::GreenLight)
        } else if self.brake {
            Some(Hold::Brake)
        } else {
            None
        };

        if hold.is_none() {
            self.phase += self.speed * delta;
        }

        let wrapped = self.phase >= LEMNISCATE_END;
        if wrapped {
            self.phase = 0.0;
        }
        (wrapped, hold)
    }

    /// One full tick: advance, consult the policy, publish the slot, and
    /// contribute to an open render cycle.
    pub fn tick<P: DrivingPolicy + ?Sized>(
        &mut self,
        now:      f64,
        world:    &WorldState,
        writer:   &mut SlotWriter<'_>,
        policy:   &P,
        renderer: &SnapshotRenderer,
    ) -> TickOutcome {
        let (wrapped, hold) = self.advance(now);

        let mut record = writer.current();
        record.is_driving = hold.is_none();
        record.phase = self.phase;

        let decision = policy.decide(&record, &world.snapshot());
        if decision.brake && !self.brake {
            debug!(car = %self.car, phase = self.phase, "braking");
        }
        self.brake = decision.brake;
        if decision.switch_lane {
            record.lane = record.lane.toggled();
            debug!(car = %self.car, lane = %record.lane, phase = self.phase, "lane switch");
        }

        record.position = lane_position(record.lane, self.phase + self.curve_offset());
        writer.write(&record);

        let painted = renderer.contribute(&mut self.gate, record.lane, record.position);

        let outcome = TickOutcome {
            record,
            hold,
            wrapped,
            switched: decision.switch_lane,
            painted,
        };
        self.stats.record(&outcome);
        outcome
    }
}
