//! Unit tests for lemni-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CarId, WorkerId};

    #[test]
    fn index_roundtrip() {
        let id = CarId(4);
        assert_eq!(id.index(), 4);
        assert_eq!(CarId::try_from(4usize).unwrap(), id);
    }

    #[test]
    fn oversized_index_rejected() {
        assert!(WorkerId::try_from(70_000usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(CarId(3).to_string(), "CarId(3)");
        assert_eq!(WorkerId(0).to_string(), "WorkerId(0)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Lane, Position};

    #[test]
    fn zero_distance() {
        let p = Position::new(3.5, -1.25);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert!((b.distance(a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(Position::new(2.5, -2.5).rounded(), (3, -3));
        assert_eq!(Position::new(0.49, -0.49).rounded(), (0, 0));
    }

    #[test]
    fn lane_toggle() {
        assert_eq!(Lane::Inner.toggled(), Lane::Outer);
        assert_eq!(Lane::Outer.toggled().toggled(), Lane::Outer);
        assert!(!Lane::Inner.as_bool());
        assert_eq!(Lane::from_bool(true), Lane::Outer);
        assert_eq!(Lane::default(), Lane::Inner);
    }
}

#[cfg(test)]
mod curve {
    use crate::curve::outer_scale;
    use crate::{LEMNISCATE_END, Lane, lane_position};

    fn sweep() -> impl Iterator<Item = f64> {
        (0..2_000).map(|i| -20.0 + i as f64 * 0.02)
    }

    #[test]
    fn inner_lane_within_amplitude_box() {
        for t in sweep() {
            let p = lane_position(Lane::Inner, t);
            assert!((-10.0..=10.0).contains(&p.x), "x out of range at t={t}: {p}");
            assert!((-5.0..=5.0).contains(&p.y), "y out of range at t={t}: {p}");
        }
    }

    #[test]
    fn inner_lane_known_points() {
        let start = lane_position(Lane::Inner, 0.0);
        assert!((start.x - 10.0).abs() < 1e-12);
        assert!(start.y.abs() < 1e-12);

        // The figure-eight crosses itself at the origin.
        let crossing = lane_position(Lane::Inner, std::f64::consts::FRAC_PI_2);
        assert!(crossing.x.abs() < 1e-9);
        assert!(crossing.y.abs() < 1e-9);
    }

    #[test]
    fn outer_lane_offset_and_scale() {
        let start = lane_position(Lane::Outer, 0.0);
        assert!((start.x - 11.5).abs() < 1e-9, "got {start}");
        let far = lane_position(Lane::Outer, std::f64::consts::PI);
        assert!((far.x - (-0.5 * 13.5 - 2.0)).abs() < 1e-6, "got {far}");
    }

    #[test]
    fn outer_scale_bounds() {
        for t in sweep() {
            let s = outer_scale(t);
            assert!((0.5..=1.0).contains(&s), "scale {s} at t={t}");
        }
    }

    #[test]
    fn deterministic() {
        for t in sweep() {
            assert_eq!(lane_position(Lane::Outer, t), lane_position(Lane::Outer, t));
        }
    }

    #[test]
    fn period_closes_the_loop() {
        let a = lane_position(Lane::Inner, 0.0);
        let b = lane_position(Lane::Inner, LEMNISCATE_END);
        assert!(a.distance(b) < 1e-3);
    }
}

#[cfg(test)]
mod light {
    use crate::{LightMode, TrafficLight, is_green};

    #[test]
    fn pulse_truth_table() {
        let expected = [false, false, true, false, false, false, true, false, false];
        for (t, want) in expected.iter().enumerate() {
            assert_eq!(is_green(t as f64), *want, "t={t}");
        }
    }

    #[test]
    fn fractional_seconds_truncate() {
        assert!(is_green(2.999));
        assert!(!is_green(3.001));
        assert!(is_green(6.5));
    }

    #[test]
    fn pure() {
        for i in 0..200 {
            let t = i as f64 * 0.173;
            assert_eq!(is_green(t), is_green(t));
        }
    }

    #[test]
    fn pulse_mode_matches_function() {
        let mut light = TrafficLight::new(LightMode::Pulse);
        for i in 0..40 {
            let t = i as f64 * 0.25;
            assert_eq!(light.observe(t), is_green(t));
        }
    }

    #[test]
    fn latched_mode_holds_through_odd_seconds() {
        let mut light = TrafficLight::new(LightMode::Latched);
        let observed: Vec<bool> = (0..9).map(|s| light.observe(s as f64)).collect();
        assert_eq!(
            observed,
            [false, false, true, true, false, false, true, true, false]
        );
        assert!(!light.is_green());
    }
}

#[cfg(test)]
mod time {
    use crate::{ManualClock, MonotonicClock, ScaledClock, TimeSource};

    #[test]
    fn manual_clock_is_monotonic() {
        let clock = ManualClock::new(1.0);
        clock.set(3.0);
        assert_eq!(clock.elapsed_secs(), 3.0);
        clock.set(2.0);
        assert_eq!(clock.elapsed_secs(), 3.0);
        clock.advance(0.5);
        assert_eq!(clock.elapsed_secs(), 3.5);
        clock.advance(-1.0);
        assert_eq!(clock.elapsed_secs(), 3.5);
    }

    #[test]
    fn monotonic_clock_never_decreases() {
        let clock = MonotonicClock::start();
        let mut last = clock.elapsed_secs();
        for _ in 0..1_000 {
            let now = clock.elapsed_secs();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn scaled_clock_runs_faster() {
        let clock = ScaledClock::start(1_000.0);
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(clock.elapsed_secs() >= 5.0);
        assert_eq!(ScaledClock::start(-3.0).speed(), 1.0);
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn default_is_valid() {
        let cfg = SimConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.worker_count(), 6);
    }

    #[test]
    fn rejects_zero_cars() {
        let cfg = SimConfig { car_count: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_coordinator_out_of_range() {
        let cfg = SimConfig { car_count: 2, coordinator: 3, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let ok = SimConfig { car_count: 2, coordinator: 2, ..SimConfig::default() };
        ok.validate().unwrap();
    }

    #[test]
    fn rejects_zero_intervals() {
        let cfg = SimConfig { render_interval_secs: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { reset_interval_secs: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { render_timeout_secs: f64::NAN, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentRng, CarId};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, CarId(0));
        let mut r2 = AgentRng::new(12345, CarId(0));
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1_000);
            let b: u32 = r2.gen_range(0..1_000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_cars_differ() {
        let mut r0 = AgentRng::new(1, CarId(0));
        let mut r1 = AgentRng::new(1, CarId(1));
        let a: Vec<u64> = (0..4).map(|_| r0.gen_range(0..u64::MAX)).collect();
        let b: Vec<u64> = (0..4).map(|_| r1.gen_range(0..u64::MAX)).collect();
        assert_ne!(a, b, "seeds for adjacent cars should diverge");
    }
}
