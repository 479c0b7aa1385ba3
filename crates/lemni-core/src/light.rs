//! The traffic light guarding both crossings of the figure-eight.
//!
//! The light is a function of the whole elapsed second `s = floor(t)`:
//!
//! ```text
//!   s mod 2 == 0  → green asserted
//!   s mod 4 == 0  → red asserted (checked second, so it wins)
//! ```
//!
//! Nothing is shared between cars: each car recomputes the light on its own
//! tick, so two cars crossing a second boundary at slightly different
//! instants may briefly disagree.  That is accepted.

/// Light evaluation strategy.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightMode {
    /// Pure function of the elapsed second: green only on seconds that are
    /// `2 mod 4`, red otherwise.
    #[default]
    Pulse,
    /// Seconds that assert neither colour keep the last observed value,
    /// which yields two seconds green followed by two seconds red.
    Latched,
}

/// `true` when the light is green at `elapsed_secs`.
///
/// Pure: the same input always yields the same output.
#[inline]
pub fn is_green(elapsed_secs: f64) -> bool {
    assert_colour(elapsed_secs).unwrap_or(false)
}

/// The colour asserted during this second, if any.
#[inline]
fn assert_colour(elapsed_secs: f64) -> Option<bool> {
    let s = elapsed_secs.max(0.0) as u64;
    if s % 4 == 0 {
        Some(false)
    } else if s % 2 == 0 {
        Some(true)
    } else {
        None
    }
}

/// A car's private view of the light.
///
/// In [`LightMode::Pulse`] this is a thin wrapper around [`is_green`]; in
/// [`LightMode::Latched`] it remembers the last asserted colour.
#[derive(Copy, Clone, Debug)]
pub struct TrafficLight {
    mode:  LightMode,
    green: bool,
}

impl TrafficLight {
    /// A light that starts red.
    pub fn new(mode: LightMode) -> Self {
        Self { mode, green: false }
    }

    /// Re-evaluate the light at `elapsed_secs` and return whether it is green.
    pub fn observe(&mut self, elapsed_secs: f64) -> bool {
        self.green = match self.mode {
            LightMode::Pulse   => is_green(elapsed_secs),
            LightMode::Latched => assert_colour(elapsed_secs).unwrap_or(self.green),
        };
        self.green
    }

    /// The most recently observed value.
    #[inline]
    pub fn is_green(&self) -> bool {
        self.green
    }
}
