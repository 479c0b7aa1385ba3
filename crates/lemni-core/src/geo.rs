//! Track-space coordinates and lane selection.

/// A point in track space.  One track unit is roughly one car length.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in track units.
    #[inline]
    pub fn distance(self, other: Position) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Both coordinates rounded half-away-from-zero, as used for grid cells.
    #[inline]
    pub fn rounded(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Which of the two curve variants a car follows.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lane {
    #[default]
    Inner,
    Outer,
}

impl Lane {
    /// The other lane.
    #[inline]
    pub fn toggled(self) -> Lane {
        match self {
            Lane::Inner => Lane::Outer,
            Lane::Outer => Lane::Inner,
        }
    }

    /// `false` for inner, `true` for outer.
    #[inline]
    pub fn as_bool(self) -> bool {
        matches!(self, Lane::Outer)
    }

    #[inline]
    pub fn from_bool(outer: bool) -> Lane {
        if outer { Lane::Outer } else { Lane::Inner }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lane::Inner => "inner",
            Lane::Outer => "outer",
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
