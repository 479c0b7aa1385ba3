//! Unit tests for lemni-world.

#[cfg(test)]
mod slot_tests {
    use lemni_core::{Lane, Position};

    use crate::{CarRecord, Slot};

    #[test]
    fn starts_at_initial_record() {
        let slot = Slot::default();
        assert_eq!(slot.read(), CarRecord::INITIAL);
        assert_eq!(slot.version(), 0);
        assert!(CarRecord::INITIAL.is_driving);
        assert_eq!(CarRecord::INITIAL.lane, Lane::Inner);
    }

    #[test]
    fn write_then_read() {
        let slot = Slot::default();
        let rec = CarRecord {
            position:   Position::new(-3.25, 1.5),
            is_driving: false,
            lane:       Lane::Outer,
            phase:      4.6,
        };
        slot.write(&rec);
        assert_eq!(slot.read(), rec);
        assert_eq!(slot.version(), 1);
    }

    #[test]
    fn claim_is_exclusive() {
        let slot = Slot::default();
        assert!(!slot.is_claimed());
        assert!(slot.try_claim());
        assert!(!slot.try_claim());
        assert!(slot.is_claimed(), "a failed claim leaves the owner in place");
        slot.release();
        assert!(!slot.is_claimed());
        assert!(slot.try_claim());
    }
}

#[cfg(test)]
mod world_tests {
    use lemni_core::{CarId, Lane, Position};

    use crate::{CarRecord, WorldState};

    #[test]
    fn fixed_size() {
        let world = WorldState::new(6);
        assert_eq!(world.len(), 6);
        assert!(!world.is_empty());
        assert_eq!(world.car_ids().count(), 6);
        assert!(world.snapshot().iter().all(|r| *r == CarRecord::INITIAL));
    }

    #[test]
    fn one_writer_per_slot() {
        let world = WorldState::new(2);
        let w0 = world.claim(CarId(0)).expect("first claim succeeds");
        assert!(world.claim(CarId(0)).is_none());
        assert!(world.claim(CarId(0)).is_none(), "still owned after a rejected claim");
        assert!(world.claim(CarId(1)).is_some());
        assert!(world.claim(CarId(2)).is_none(), "out of range");
        drop(w0);
        assert!(world.claim(CarId(0)).is_some(), "drop releases the claim");
    }

    #[test]
    fn rejected_claim_keeps_owner() {
        let world = WorldState::new(1);
        let mut owner = world.claim(CarId(0)).unwrap();
        for _ in 0..3 {
            assert!(world.claim(CarId(0)).is_none(), "second writer while owner is alive");
        }
        owner.write(&CarRecord { phase: 1.0, ..CarRecord::INITIAL });
        assert_eq!(world.read(CarId(0)).phase, 1.0);
        drop(owner);
        assert!(world.claim(CarId(0)).is_some());
    }

    #[test]
    fn writer_only_touches_its_slot() {
        let world = WorldState::new(3);
        let mut w1 = world.claim(CarId(1)).unwrap();
        let rec = CarRecord {
            position:   Position::new(1.0, 2.0),
            is_driving: true,
            lane:       Lane::Outer,
            phase:      0.5,
        };
        w1.write(&rec);
        assert_eq!(w1.car(), CarId(1));
        assert_eq!(w1.current(), rec);

        let snap = world.snapshot();
        assert_eq!(snap[0], CarRecord::INITIAL);
        assert_eq!(snap[1], rec);
        assert_eq!(snap[2], CarRecord::INITIAL);
        assert_eq!(world.version(CarId(1)), 1);
        assert_eq!(world.version(CarId(0)), 0);
    }
}

#[cfg(test)]
mod concurrency_tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use lemni_core::{CarId, Lane, Position};

    use crate::{CarRecord, WorldState};

    /// Every field is derived from the same counter, so a record mixing two
    /// writes is detectable.
    fn record_for(car: u16, n: u64) -> CarRecord {
        let v = n as f64 + car as f64 * 1e6;
        CarRecord {
            position:   Position::new(v, -v),
            is_driving: n % 3 == 0,
            lane:       Lane::from_bool(n % 2 == 1),
            phase:      v * 0.5,
        }
    }

    fn check(car: u16, rec: &CarRecord) {
        if *rec == CarRecord::INITIAL {
            return;
        }
        let v = rec.position.x;
        let n = (v - car as f64 * 1e6) as u64;
        assert_eq!(rec.position.y, -v, "torn y for car {car}");
        assert_eq!(rec.phase, v * 0.5, "torn phase for car {car}");
        assert_eq!(rec.is_driving, n % 3 == 0, "torn driving flag for car {car}");
        assert_eq!(rec.lane, Lane::from_bool(n % 2 == 1), "torn lane for car {car}");
    }

    #[test]
    fn concurrent_writers_never_expose_torn_records() {
        const CARS: u16 = 4;
        let world = WorldState::new(CARS as usize);
        let done = AtomicBool::new(false);

        std::thread::scope(|s| {
            let writers: Vec<_> = (0..CARS)
                .map(|car| {
                    let world = &world;
                    s.spawn(move || {
                        let mut w = world.claim(CarId(car)).unwrap();
                        for n in 1..=20_000u64 {
                            w.write(&record_for(car, n));
                        }
                    })
                })
                .collect();

            for _ in 0..2 {
                let world = &world;
                let done = &done;
                s.spawn(move || {
                    while !done.load(Ordering::Relaxed) {
                        for (i, rec) in world.snapshot().iter().enumerate() {
                            check(i as u16, rec);
                        }
                    }
                });
            }

            for w in writers {
                w.join().unwrap();
            }
            done.store(true, Ordering::Relaxed);
        });

        for car in 0..CARS {
            assert_eq!(world.read(CarId(car)), record_for(car, 20_000));
            assert_eq!(world.version(CarId(car)), 20_000);
        }
    }
}

#[cfg(test)]
mod builder_tests {
    use crate::{CarParams, WorldBuilder};

    #[test]
    fn params_in_range() {
        let (world, params) = WorldBuilder::new(50, 7).build();
        assert_eq!(world.len(), 50);
        for p in &params {
            assert!((1.0..=5.0).contains(&p.acceleration));
            assert!((10.0..=29.0).contains(&p.max_speed));
            assert_eq!(p.acceleration.fract(), 0.0);
            assert_eq!(p.max_speed.fract(), 0.0);
        }
    }

    #[test]
    fn same_seed_same_params() {
        let (_, a) = WorldBuilder::new(6, 99).build();
        let (_, b) = WorldBuilder::new(6, 99).build();
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_params_padded_with_draws() {
        let fixed = vec![CarParams::new(2.0, 12.0)];
        let (_, params) = WorldBuilder::new(3, 1).params(fixed).build();
        assert_eq!(params.len(), 3);
        assert_eq!(params[0], CarParams::new(2.0, 12.0));
    }
}
