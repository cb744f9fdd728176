//! Expanding-radius basis point search.
//!
//! For one accepted candidate cell, the search grows a discrete circle
//! outward from the clearance threshold, recording the first obstacle cell
//! of each sufficiently separated obstacle cluster it meets. The candidate
//! is a junction when at least two such basis points exist.

use crate::core::GridCoord;
use crate::grid::OccupancyGrid;
use crate::raster::{RowExtentCache, RowExtents};

/// Result of one radial search.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Radius at which the search stopped (the last radius examined).
    pub radius: u32,
    /// Basis points in discovery order, pairwise separated by more than the
    /// configured minimum.
    pub basis_points: Vec<GridCoord>,
}

/// Radial basis search over one grid, sharing the precomputed extent cache.
///
/// Holds only shared read-only state; one instance serves every candidate,
/// including candidates evaluated on different worker threads. Each call to
/// [`run`](Self::run) owns its basis accumulator, so no candidate can
/// influence another.
pub struct BasisSearch<'a> {
    grid: &'a OccupancyGrid,
    cache: &'a RowExtentCache,
    threshold: u32,
    min_separation: f32,
}

impl<'a> BasisSearch<'a> {
    /// Create a search over `grid` starting at `threshold` with the given
    /// minimum basis separation in cells.
    pub fn new(
        grid: &'a OccupancyGrid,
        cache: &'a RowExtentCache,
        threshold: u32,
        min_separation: f32,
    ) -> Self {
        Self {
            grid,
            cache,
            threshold,
            min_separation,
        }
    }

    /// Exclusive upper bound on the search radius for a candidate.
    ///
    /// Distance to the map corner diagonally opposite the candidate's half
    /// of the grid along each axis (axis split at the integer midline).
    /// Beyond it the circle leaves the grid on every side, so no further
    /// basis point is reachable. The derivation is deliberately kept exact:
    /// it decides which junctions survive near grid edges.
    pub fn max_search_radius(&self, cell: GridCoord) -> u32 {
        let width = self.grid.width() as i32;
        let height = self.grid.height() as i32;
        let far_x = if cell.x > width / 2 { 0 } else { width - 1 };
        let far_y = if cell.y > height / 2 { 0 } else { height - 1 };
        cell.distance(GridCoord::new(far_x, far_y)).ceil() as u32
    }

    /// Run the search for one candidate cell.
    pub fn run(&self, cell: GridCoord) -> SearchOutcome {
        let max_radius = self.max_search_radius(cell);
        let mut basis_points: Vec<GridCoord> = Vec::new();
        let mut terminating = self.threshold;

        for radius in self.threshold..max_radius {
            terminating = radius;

            // Basis points found at earlier radii grant exactly one extra
            // round, absorbing discretization error at the ring boundary.
            let mut last_round = !basis_points.is_empty();

            let computed;
            let extents: &RowExtents = match self.cache.extents(radius) {
                Some(extents) => extents,
                None => {
                    computed = RowExtents::build(radius);
                    &computed
                }
            };

            for (dy, span) in extents.rows() {
                let y = cell.y + dy;
                for dx in span.left.range().chain(span.right.range()) {
                    let x = cell.x + dx;
                    match self.grid.state(x, y) {
                        // Leaving the grid stops further radius growth but
                        // not the scan of the current ring.
                        None => last_round = true,
                        Some(state) if !state.is_free() => {
                            let candidate = GridCoord::new(x, y);
                            let separated = basis_points
                                .iter()
                                .all(|b| b.distance(candidate) > self.min_separation);
                            if separated {
                                basis_points.push(candidate);
                            }
                        }
                        Some(_) => {}
                    }
                }
            }

            if last_round {
                break;
            }
        }

        SearchOutcome {
            radius: terminating,
            basis_points,
        }
    }
}
