//! Occupancy grid storage.
//!
//! The grid is the read-only input to junction detection: a rectangular,
//! row-major raster of [`CellState`] values. It is produced by an external
//! map-loading service (image + metadata decoding is not this crate's
//! concern) and never mutated during a scan.

use serde::{Deserialize, Serialize};

use crate::core::{CellState, GridCoord};
use crate::error::{Result, SandhiError};

/// Immutable rectangular occupancy grid, row-major.
///
/// Cell `(x, y)` lives at index `y * width + x`. Lookups outside
/// `[0, width) x [0, height)` return `None` from [`state`](Self::state);
/// callers in the detection pipeline treat such positions as obstacles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OccupancyGrid {
    cells: Vec<CellState>,
    width: usize,
    height: usize,
}

impl OccupancyGrid {
    /// Create a grid filled with a single state.
    pub fn filled(width: usize, height: usize, state: CellState) -> Self {
        Self {
            cells: vec![state; width * height],
            width,
            height,
        }
    }

    /// Create a grid from row-major cell data.
    ///
    /// Fails if `cells.len() != width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<CellState>) -> Result<Self> {
        if cells.len() != width * height {
            return Err(SandhiError::Grid(format!(
                "cell count {} does not match {}x{}",
                cells.len(),
                width,
                height
            )));
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Parse a grid from its ASCII art form.
    ///
    /// One line per row, top row first; `#` = obstacle, `.` = free,
    /// `?` = unknown (the [`CellState::as_char`] alphabet). Leading and
    /// trailing blank lines are ignored. All rows must have equal width.
    pub fn from_ascii(art: &str) -> Result<Self> {
        let lines: Vec<&str> = art
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(SandhiError::Grid("no rows in ASCII grid".to_string()));
        }

        let width = lines[0].chars().count();
        let mut cells = Vec::with_capacity(width * lines.len());
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != width {
                return Err(SandhiError::Grid(format!(
                    "row {} has width {}, expected {}",
                    row,
                    line.chars().count(),
                    width
                )));
            }
            for c in line.chars() {
                let state = CellState::from_char(c).ok_or_else(|| {
                    SandhiError::Grid(format!("unrecognized cell character {:?}", c))
                })?;
                cells.push(state);
            }
        }

        let height = lines.len();
        Self::from_cells(width, height, cells)
    }

    /// Render the grid as ASCII art (one line per row).
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.cells[y * self.width + x].as_char());
            }
            out.push('\n');
        }
        out
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell state at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn state(&self, x: i32, y: i32) -> Option<CellState> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width + x as usize])
    }

    /// Cell state at a coordinate, or `None` if out of bounds.
    #[inline]
    pub fn state_at(&self, coord: GridCoord) -> Option<CellState> {
        self.state(coord.x, coord.y)
    }

    /// Is `(x, y)` inside the grid and free? Out-of-bounds is never free.
    #[inline]
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(self.state(x, y), Some(s) if s.is_free())
    }

    /// Overwrite a cell. Only used while assembling a grid; the detection
    /// pipeline takes the grid by shared reference.
    pub fn set(&mut self, x: usize, y: usize, state: CellState) {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x] = state;
    }

    /// Ceiled length of the grid diagonal, in cells.
    ///
    /// Upper bound for every per-candidate search radius, used to size the
    /// row-extent cache.
    pub fn diagonal_radius(&self) -> u32 {
        let w = self.width as f64;
        let h = self.height as f64;
        (w * w + h * h).sqrt().ceil() as u32
    }
}
