//! Lemniscate of Bernoulli parametrisation for both lanes.
//!
//! Both lanes trace the same figure-eight.  The inner lane is the plain
//! lemniscate with amplitude 10.  The outer lane uses amplitude 13.5 scaled
//! by a smooth factor in [0.5, 1.0] that depends on the phase, shifted two
//! units along -x, which keeps it laterally separated from the inner lane on
//! both loops.
//!
//! These functions are pure: the static background track and the live car
//! positions are derived from the same code.

use crate::{Lane, Position};

/// Curve period used for phase wraparound and background sampling.
pub const LEMNISCATE_END: f64 = 6.2832;

const INNER_AMPLITUDE: f64 = 10.0;
const OUTER_AMPLITUDE: f64 = 13.5;
const OUTER_X_OFFSET: f64 = -2.0;

/// Position of a car in `lane` at curve parameter `t`.
///
/// Defined for all reals; callers are responsible for wrapping `t`.
pub fn lane_position(lane: Lane, t: f64) -> Position {
    let (sin, cos) = t.sin_cos();
    let denom = 1.0 + sin * sin;
    match lane {
        Lane::Inner => Position::new(
            INNER_AMPLITUDE * cos / denom,
            INNER_AMPLITUDE * cos * sin / denom,
        ),
        Lane::Outer => {
            let scale = outer_scale(t);
            Position::new(
                scale * OUTER_AMPLITUDE * cos / denom + OUTER_X_OFFSET,
                scale * OUTER_AMPLITUDE * cos * sin / denom,
            )
        }
    }
}

/// `0.5·cos²(t/2) + 0.5`, which oscillates between 0.5 and 1.0.
///
/// The cosine is taken in `f32` precision, so the outer lane carries single
/// precision rounding in its scale factor.
#[inline]
pub fn outer_scale(t: f64) -> f64 {
    let c = (t as f32 / 2.0).cos() as f64;
    0.5 * c * c + 0.5
}
