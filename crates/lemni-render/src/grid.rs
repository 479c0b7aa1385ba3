//! The character grid the track is drawn on.
//!
//! The grid is indexed `(row, col)` with the curve's x coordinate running
//! down the rows and y across the columns, so the figure-eight is drawn
//! standing upright.  Each lane has its own offset that brings its rounded
//! coordinates into range:
//!
//! | Lane  | row            | col            |
//! |-------|----------------|----------------|
//! | inner | `round(x) + 10`| `round(y) + 4` |
//! | outer | `round(x) + 9` | `round(y) + 5` |

use std::sync::atomic::{AtomicU8, Ordering};

use lemni_core::{LEMNISCATE_END, Lane, Position, lane_position};

pub const GRID_ROWS: usize = 25;
pub const GRID_COLS: usize = 50;

pub const BLANK: u8 = b' ';
pub const TRACK_DOT: u8 = b'.';
pub const CAR_MARKER: u8 = b'*';

/// Phase step used to trace the background track.
pub const SAMPLE_STEP: f64 = 0.1;

/// Grid cell for a car in `lane` at `position`.
///
/// Cells outside the grid are clamped onto its border; with the built-in
/// curves that never happens.
pub fn cell_for(lane: Lane, position: Position) -> (usize, usize) {
    let (x, y) = position.rounded();
    let (row, col) = match lane {
        Lane::Inner => (x + 10, y + 4),
        Lane::Outer => (x + 9, y + 5),
    };
    debug_assert!(
        (0..GRID_ROWS as i32).contains(&row) && (0..GRID_COLS as i32).contains(&col),
        "cell ({row}, {col}) for {lane} {position} outside grid"
    );
    (
        row.clamp(0, GRID_ROWS as i32 - 1) as usize,
        col.clamp(0, GRID_COLS as i32 - 1) as usize,
    )
}

// ── TrackGrid ─────────────────────────────────────────────────────────────────

/// A plain, single-owner grid.  Used for the precomputed background.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackGrid {
    cells: Vec<u8>,
}

impl TrackGrid {
    /// An all-blank grid.
    pub fn blank() -> Self {
        Self { cells: vec![BLANK; GRID_ROWS * GRID_COLS] }
    }

    /// Both lanes traced with dots, sampled every [`SAMPLE_STEP`] over one
    /// period.
    pub fn background() -> Self {
        let mut grid = Self::blank();
        let mut k = 0.0;
        while k < LEMNISCATE_END {
            for lane in [Lane::Inner, Lane::Outer] {
                let (row, col) = cell_for(lane, lane_position(lane, k));
                grid.set(row, col, TRACK_DOT);
            }
            k += SAMPLE_STEP;
        }
        grid
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * GRID_COLS + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, byte: u8) {
        self.cells[row * GRID_COLS + col] = byte;
    }

    /// Number of cells holding `byte`.
    pub fn count(&self, byte: u8) -> usize {
        self.cells.iter().filter(|&&b| b == byte).count()
    }

    /// One `String` per row, each exactly [`GRID_COLS`] wide.
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(GRID_COLS)
            .map(|row| String::from_utf8_lossy(row).into_owned())
            .collect()
    }
}

// ── SharedGrid ────────────────────────────────────────────────────────────────

/// The working grid every car paints into concurrently.
///
/// Cells are independent atomics: a paint racing a reset may be lost, which
/// is the same best-effort contract the render cycle already has.
#[derive(Debug)]
pub struct SharedGrid {
    cells: Box<[AtomicU8]>,
}

impl SharedGrid {
    pub fn from_grid(grid: &TrackGrid) -> Self {
        Self {
            cells: grid.cells.iter().map(|&b| AtomicU8::new(b)).collect(),
        }
    }

    /// Overwrite every cell with `grid`.
    pub fn reset_to(&self, grid: &TrackGrid) {
        for (cell, &b) in self.cells.iter().zip(&grid.cells) {
            cell.store(b, Ordering::Relaxed);
        }
    }

    #[inline]
    pub fn paint(&self, row: usize, col: usize, byte: u8) {
        self.cells[row * GRID_COLS + col].store(byte, Ordering::Relaxed);
    }

    /// Copy the current contents into a plain grid.
    pub fn capture(&self) -> TrackGrid {
        TrackGrid {
            cells: self.cells.iter().map(|c| c.load(Ordering::Relaxed)).collect(),
        }
    }
}
