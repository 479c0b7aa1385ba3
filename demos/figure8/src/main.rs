//! figure8 — cars racing around a two-lane lemniscate.
//!
//! Every car runs on its own worker thread, stops at the traffic light in
//! front of each crossing, brakes behind stalled cars and overtakes by
//! switching lane.  A coordinator thread prints a 25-line snapshot of the
//! track every ten simulated seconds.
//!
//! Environment overrides:
//!
//! | Variable           | Default | Meaning                                  |
//! |--------------------|---------|------------------------------------------|
//! | `FIGURE8_CARS`     | 5       | number of cars                           |
//! | `FIGURE8_SEED`     | 24301   | seed for per-car acceleration and speed  |
//! | `FIGURE8_SPEED`    | 1.0     | simulated seconds per wall-clock second  |
//! | `FIGURE8_DEADLINE` | 300     | simulated seconds to run                 |
//!
//! Logs go to stderr and follow `RUST_LOG` (for example `RUST_LOG=info`);
//! frames go to stdout.

use std::env;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use lemni_core::{ScaledClock, SimConfig};
use lemni_policy::NearestNeighborPolicy;
use lemni_render::ConsoleSink;
use lemni_sim::SimBuilder;

fn main() -> Result<()> {
    init_tracing();

    let defaults = SimConfig::default();
    let config = SimConfig {
        car_count:     env_or("FIGURE8_CARS", defaults.car_count)?,
        seed:          env_or("FIGURE8_SEED", defaults.seed)?,
        deadline_secs: env_or("FIGURE8_DEADLINE", defaults.deadline_secs)?,
        ..defaults
    };
    let speed: f64 = env_or("FIGURE8_SPEED", 1.0)?;

    println!("=== figure8 — lemniscate traffic ===");
    println!(
        "Cars: {}  |  Deadline: {} s  |  Speed: {speed}x  |  Seed: {}",
        config.car_count, config.deadline_secs, config.seed
    );
    println!();

    let sim = SimBuilder::new(config.clone())
        .policy(NearestNeighborPolicy::default())
        .clock(ScaledClock::start(speed))
        .build()?;

    info!(workers = sim.roles.worker_count(), "pool ready");

    let mut sink = ConsoleSink::stdout();
    let t0 = Instant::now();
    let report = sim.run(&mut sink)?;
    let elapsed = t0.elapsed();

    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  frames emitted : {} of {} cycles ({} partial)",
        report.coordinator.frames, report.coordinator.cycles_opened, report.coordinator.partial
    );
    println!("  grid resets    : {}", report.coordinator.resets);
    println!("  lane switches  : {}", report.total_lane_switches());
    println!("  laps           : {}", report.total_laps());
    println!();

    println!(
        "{:<5} {:>5} {:>5} {:>10} {:>6} {:>8} {:>8} {:>7} {:<6}",
        "Car", "Accel", "Max", "Ticks", "Laps", "Switches", "Braking", "Light", "Lane"
    );
    println!("{}", "-".repeat(67));
    for car in &report.cars {
        println!(
            "{:<5} {:>5} {:>5} {:>10} {:>6} {:>8} {:>8} {:>7} {:<6}",
            car.car.index(),
            car.params.acceleration,
            car.params.max_speed,
            car.ticks,
            car.laps,
            car.lane_switches,
            car.brake_ticks,
            car.light_ticks,
            car.last_record.lane,
        );
    }

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parse `key` from the environment, falling back to `default` when unset.
fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        Err(_) => Ok(default),
    }
}
