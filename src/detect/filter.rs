//! Candidate proximity filter.

use crate::core::GridCoord;
use crate::grid::OccupancyGrid;
use crate::raster::ClearanceShape;

/// Rejects candidate cells that sit too close to an obstacle.
///
/// Holds the single fixed clearance shape for `radius = threshold - 1`,
/// built once per scan. A candidate fails as soon as any cell inside the
/// shape is out of bounds or not free; a free candidate is never rejected
/// for its own state.
#[derive(Clone, Debug)]
pub struct ProximityFilter {
    shape: ClearanceShape,
}

impl ProximityFilter {
    /// Build the filter for a clearance threshold (threshold >= 1).
    pub fn new(threshold: u32) -> Self {
        Self {
            shape: ClearanceShape::build(threshold.saturating_sub(1)),
        }
    }

    /// Is the candidate too close to any obstacle (or the grid boundary)?
    ///
    /// Short-circuits on the first violation; this is a rejection test, not
    /// an exhaustive count.
    pub fn is_too_close(&self, grid: &OccupancyGrid, cell: GridCoord) -> bool {
        for (dy, extent) in self.shape.rows() {
            let y = cell.y + dy;
            for dx in extent.range() {
                if !grid.is_free(cell.x + dx, y) {
                    return true;
                }
            }
        }
        false
    }
}
