//! The `Sim` struct and its concurrent run loop.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use lemni_core::{CarId, SimConfig, TimeSource, WorkerId};
use lemni_policy::DrivingPolicy;
use lemni_render::{FrameSink, SnapshotRenderer};
use lemni_world::{CarParams, WorldState};
use rayon::ThreadPool;
use tracing::{debug, info};

use crate::agent::CarAgent;
use crate::coordinator::Coordinator;
use crate::{CarStats, CoordinatorStats, Role, RoleTable, RunReport, SimError, SimResult};

/// Shared by every worker for the duration of one `run`.
struct RunState<'r> {
    /// Clock reading when the run started.
    origin: f64,
    /// Raised by the first worker that fails.
    stop:   &'r AtomicBool,
}

/// What one worker hands back when it reaches the deadline.
enum WorkerOutcome {
    Coordinator(CoordinatorStats),
    Car(CarStats),
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// `Sim<P, C>` owns the shared state and a dedicated rayon pool with one
/// thread per worker.  [`run`](Self::run) broadcasts the same loop to every
/// thread; each thread looks up its role by its pool index:
///
/// - **Coordinator**: opens a render cycle every `render_interval_secs`,
///   emits the frame once every car has painted (or the cycle times out),
///   and resets the working grid every `reset_interval_secs`.
/// - **Car**: claims its slot, then ticks as fast as it can: advance,
///   consult the policy, publish, paint.
///
/// Elapsed time is measured from the moment `run` starts, whatever the clock
/// read before that.  Every worker stops on its own when the whole elapsed
/// second reaches `deadline_secs`; there is no barrier before that.  A worker
/// that fails raises a shared stop flag so the others return early.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: DrivingPolicy, C: TimeSource> {
    pub config: SimConfig,

    /// One slot per car.  Readable at any time, including after a run.
    pub world: WorldState,

    /// Per-car acceleration and speed cap, indexed by `CarId`.
    pub params: Vec<CarParams>,

    pub policy: P,

    /// Background, working grid, and render trigger.
    pub renderer: SnapshotRenderer,

    pub roles: RoleTable,

    pub(crate) clock: C,
    pub(crate) pool:  ThreadPool,
}

impl<P: DrivingPolicy, C: TimeSource> Sim<P, C> {
    // ── Public API ────────────────────────────────────────────────────────

    /// The time source every worker reads.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run every worker until the deadline and collect their statistics.
    ///
    /// `sink` receives every emitted frame; it is only ever touched by the
    /// coordinator thread.  `finish` is called on it once all workers stop.
    pub fn run<S: FrameSink>(&self, sink: &mut S) -> SimResult<RunReport> {
        info!(
            cars = self.config.car_count,
            coordinator = %self.roles.coordinator(),
            deadline = self.config.deadline_secs,
            "simulation started"
        );

        let origin = self.clock.elapsed_secs();
        let stop = AtomicBool::new(false);
        let outcomes: Vec<SimResult<WorkerOutcome>> = {
            let shared_sink = Mutex::new(&mut *sink);
            self.pool.broadcast(|ctx| {
                let run = RunState { origin, stop: &stop };
                let worker = WorkerId(ctx.index() as u16);
                let outcome = match self.roles.role(worker) {
                    Role::Coordinator => self.run_coordinator(&run, &shared_sink),
                    Role::Car(car) => self.run_car(&run, car),
                };
                if outcome.is_err() {
                    stop.store(true, Ordering::Release);
                }
                outcome
            })
        };

        let mut cars: Vec<Option<CarStats>> = vec![None; self.config.car_count];
        let mut coordinator = CoordinatorStats::default();
        for outcome in outcomes {
            match outcome? {
                WorkerOutcome::Coordinator(stats) => coordinator = stats,
                WorkerOutcome::Car(stats) => {
                    let idx = stats.car.index();
                    cars[idx] = Some(stats);
                }
            }
        }
        sink.finish()?;

        let cars: Vec<CarStats> = cars
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                s.unwrap_or_else(|| CarStats::new(CarId(i as u16), self.params[i]))
            })
            .collect();

        info!(
            frames = coordinator.frames,
            cycles = coordinator.cycles_opened,
            "simulation finished"
        );

        Ok(RunReport {
            cars,
            coordinator,
            final_world: self.world.snapshot(),
        })
    }

    // ── Worker loops ──────────────────────────────────────────────────────

    /// Seconds since `run` started, or `None` once the worker should stop:
    /// the whole elapsed second reached the deadline or another worker failed.
    #[inline]
    fn next_now(&self, run: &RunState<'_>) -> Option<f64> {
        if run.stop.load(Ordering::Acquire) {
            return None;
        }
        let now = (self.clock.elapsed_secs() - run.origin).max(0.0);
        ((now as u64) < self.config.deadline_secs).then_some(now)
    }

    fn run_coordinator<S: FrameSink>(
        &self,
        run:  &RunState<'_>,
        sink: &Mutex<&mut S>,
    ) -> SimResult<WorkerOutcome> {
        let mut guard = sink.lock().map_err(|_| SimError::SinkPoisoned)?;
        let sink: &mut S = &mut **guard;
        let mut coordinator = Coordinator::new(&self.config);

        while let Some(now) = self.next_now(run) {
            coordinator.tick(now, &self.renderer, sink)?;
            std::thread::yield_now();
        }

        debug!(ticks = coordinator.stats().ticks, "coordinator stopped");
        Ok(WorkerOutcome::Coordinator(coordinator.into_stats()))
    }

    fn run_car(&self, run: &RunState<'_>, car: CarId) -> SimResult<WorkerOutcome> {
        let mut writer = self.world.claim(car).ok_or(SimError::SlotTaken(car))?;
        let mut agent = CarAgent::new(car, self.params[car.index()], self.config.light_mode);

        while let Some(now) = self.next_now(run) {
            agent.tick(now, &self.world, &mut writer, &self.policy, &self.renderer);
        }

        debug!(car = %car, ticks = agent.stats().ticks, "car stopped");
        Ok(WorkerOutcome::Car(agent.into_stats()))
    }
}
