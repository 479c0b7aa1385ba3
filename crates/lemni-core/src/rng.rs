//! Deterministic per-car RNG.
//!
//! # Determinism strategy
//!
//! Each car gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (car_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive car IDs uniformly across the seed space.  Cars
//! never share RNG state, and the same global seed always yields the same
//! per-car parameters regardless of which thread ends up driving which car.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::CarId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-car deterministic RNG.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and a car ID.
    pub fn new(global_seed: u64, car: CarId) -> Self {
        let seed = global_seed ^ (car.0 as u64 + 1).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
