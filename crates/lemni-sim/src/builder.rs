//! Fluent builder for constructing a [`Sim`].

use lemni_core::{MonotonicClock, SimConfig, TimeSource};
use lemni_policy::{DrivingPolicy, NearestNeighborPolicy};
use lemni_render::SnapshotRenderer;
use lemni_world::{CarParams, WorldBuilder};

use crate::{RoleTable, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P, C>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                       |
/// |-----------------|-----------------------------------------------|
/// | `.policy(p)`    | `NearestNeighborPolicy::default()`            |
/// | `.clock(c)`     | `MonotonicClock`                              |
/// | `.params(v)`    | Drawn per car from `config.seed`              |
///
/// Whatever the clock, `Sim::run` measures elapsed time from its own start,
/// so building the background and the pool never counts as driving time.
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(SimConfig::default())
///     .clock(ScaledClock::start(30.0))
///     .build()?;
/// let report = sim.run(&mut ConsoleSink::stdout())?;
/// ```
pub struct SimBuilder<P: DrivingPolicy, C: TimeSource> {
    config: SimConfig,
    policy: P,
    clock:  C,
    params: Option<Vec<CarParams>>,
}

impl SimBuilder<NearestNeighborPolicy, MonotonicClock> {
    /// Start from `config` with the default policy and a wall clock.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            policy: NearestNeighborPolicy::default(),
            clock:  MonotonicClock::start(),
            params: None,
        }
    }
}

impl<P: DrivingPolicy, C: TimeSource> SimBuilder<P, C> {
    /// Replace the driving policy.
    pub fn policy<Q: DrivingPolicy>(self, policy: Q) -> SimBuilder<Q, C> {
        SimBuilder {
            config: self.config,
            policy,
            clock:  self.clock,
            params: self.params,
        }
    }

    /// Replace the time source.  Only differences between readings matter.
    pub fn clock<D: TimeSource>(self, clock: D) -> SimBuilder<P, D> {
        SimBuilder {
            config: self.config,
            policy: self.policy,
            clock,
            params: self.params,
        }
    }

    /// Supply per-car parameters (must be length `car_count`).
    pub fn params(mut self, params: Vec<CarParams>) -> Self {
        self.params = Some(params);
        self
    }

    /// Validate inputs, lay out roles, draw parameters, precompute the
    /// background track, and spin up the worker pool.
    pub fn build(self) -> SimResult<Sim<P, C>> {
        self.config.validate()?;
        let car_count = self.config.car_count;

        let mut world = WorldBuilder::new(car_count, self.config.seed);
        if let Some(params) = self.params {
            if params.len() != car_count {
                return Err(SimError::CarCountMismatch {
                    expected: car_count,
                    got:      params.len(),
                    what:     "car params",
                });
            }
            world = world.params(params);
        }
        let (world, params) = world.build();

        let roles = RoleTable::new(self.config.worker_count(), self.config.coordinator);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(roles.worker_count())
            .thread_name(|i| format!("lemni-worker-{i}"))
            .build()?;

        let renderer = SnapshotRenderer::new(car_count);

        Ok(Sim {
            config: self.config,
            world,
            params,
            policy: self.policy,
            renderer,
            roles,
            clock: self.clock,
            pool,
        })
    }
}
