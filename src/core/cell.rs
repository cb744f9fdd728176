//! Cell states for the occupancy grid.

use serde::{Deserialize, Serialize};

/// Occupancy state of a single grid cell.
///
/// The grid is a three-state raster:
/// - `Unknown` - Never observed, or ambiguous in the source map
/// - `Free` - Navigable free space
/// - `Obstacle` - Wall or other obstruction
///
/// For every clearance and search computation, coordinates outside the grid
/// behave like `Obstacle`: they are never free and never skipped silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Cell has never been observed
    #[default]
    Unknown = 0,

    /// Navigable free space
    Free = 1,

    /// Wall or obstruction
    Obstacle = 2,
}

impl CellState {
    /// Is this cell navigable free space?
    #[inline]
    pub fn is_free(self) -> bool {
        matches!(self, CellState::Free)
    }

    /// Is this cell a confirmed obstacle?
    #[inline]
    pub fn is_obstacle(self) -> bool {
        matches!(self, CellState::Obstacle)
    }

    /// Has this cell been observed?
    #[inline]
    pub fn is_known(self) -> bool {
        self != CellState::Unknown
    }

    /// Convert from u8 (for deserialization)
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => CellState::Free,
            2 => CellState::Obstacle,
            _ => CellState::Unknown,
        }
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellState::Unknown => '?',
            CellState::Free => '.',
            CellState::Obstacle => '#',
        }
    }

    /// Parse the character representation used by [`as_char`](Self::as_char).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '?' => Some(CellState::Unknown),
            '.' => Some(CellState::Free),
            '#' => Some(CellState::Obstacle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_state_free() {
        assert!(CellState::Free.is_free());
        assert!(!CellState::Obstacle.is_free());
        assert!(!CellState::Unknown.is_free());
    }

    #[test]
    fn test_cell_state_known() {
        assert!(CellState::Free.is_known());
        assert!(CellState::Obstacle.is_known());
        assert!(!CellState::Unknown.is_known());
    }

    #[test]
    fn test_cell_state_round_trip() {
        for state in [CellState::Unknown, CellState::Free, CellState::Obstacle] {
            assert_eq!(CellState::from_u8(state as u8), state);
            assert_eq!(CellState::from_char(state.as_char()), Some(state));
        }
        assert_eq!(CellState::from_u8(200), CellState::Unknown);
        assert_eq!(CellState::from_char('x'), None);
    }
}
