//! Per-car driving parameters, drawn once at startup.

use lemni_core::AgentRng;

/// A car's private, immutable tuning.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarParams {
    /// Whole number in `1..=5`.
    pub acceleration: f64,
    /// Speed cap; whole number in `10..=29`.
    pub max_speed:    f64,
}

impl CarParams {
    pub fn new(acceleration: f64, max_speed: f64) -> Self {
        Self { acceleration, max_speed }
    }

    /// Draw a fresh set of parameters.
    pub fn draw(rng: &mut AgentRng) -> Self {
        let acceleration: u32 = rng.gen_range(1..=5);
        let max_speed: u32 = rng.gen_range(10..=29);
        Self::new(acceleration as f64, max_speed as f64)
    }
}
