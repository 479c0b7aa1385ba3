//! Fluent builder for constructing `WorldState` + per-car parameters together.
//!
//! # Usage
//!
//! ```rust
//! use lemni_world::WorldBuilder;
//!
//! let (world, params) = WorldBuilder::new(5, /*seed=*/ 42).build();
//!
//! assert_eq!(world.len(),  5);
//! assert_eq!(params.len(), 5);
//! ```

use lemni_core::{AgentRng, CarId};

use crate::{CarParams, WorldState};

/// Fluent builder for [`WorldState`] + `Vec<CarParams>`.
pub struct WorldBuilder {
    count:  usize,
    seed:   u64,
    params: Option<Vec<CarParams>>,
}

impl WorldBuilder {
    /// Create a builder for `count` cars using `seed` for parameter draws.
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed, params: None }
    }

    /// Use fixed parameters instead of random draws.
    ///
    /// A vector shorter than the car count is padded with random draws; a
    /// longer one is truncated.
    pub fn params(mut self, params: Vec<CarParams>) -> Self {
        self.params = Some(params);
        self
    }

    /// Construct the world and one `CarParams` per car.
    pub fn build(self) -> (WorldState, Vec<CarParams>) {
        let mut fixed = self.params.unwrap_or_default().into_iter();
        let params = (0..self.count as u16)
            .map(|i| {
                fixed
                    .next()
                    .unwrap_or_else(|| CarParams::draw(&mut AgentRng::new(self.seed, CarId(i))))
            })
            .collect();

        (WorldState::new(self.count), params)
    }
}
