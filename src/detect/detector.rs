//! Junction detection over a full grid.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::DetectorConfig;
use crate::core::GridCoord;
use crate::error::{Result, SandhiError};
use crate::grid::OccupancyGrid;
use crate::raster::RowExtentCache;

use super::filter::ProximityFilter;
use super::search::BasisSearch;

/// A detected junction: a free cell locally equidistant from at least two
/// separated obstacle clusters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JunctionPoint {
    /// Grid coordinate of the junction cell.
    pub coord: GridCoord,
    /// Radius at which the radial search terminated.
    pub radius: u32,
    /// Basis points in discovery order (always at least two).
    pub basis_points: Vec<GridCoord>,
}

impl JunctionPoint {
    /// Mean Euclidean distance from the junction to its basis points.
    pub fn average_clearance(&self) -> f32 {
        if self.basis_points.is_empty() {
            return 0.0;
        }
        let sum: f32 = self
            .basis_points
            .iter()
            .map(|b| self.coord.distance(*b))
            .sum();
        sum / self.basis_points.len() as f32
    }
}

/// Junction detection output, keyed by cell coordinate.
pub type JunctionMap = HashMap<GridCoord, JunctionPoint>;

/// Scans a grid for junction points.
///
/// The detector owns the lifetime of the row-extent cache: it is built once
/// per [`detect`](Self::detect) call, shared read-only by every candidate
/// evaluation, and dropped with the scan.
#[derive(Clone, Debug)]
pub struct JunctionDetector {
    config: DetectorConfig,
}

impl JunctionDetector {
    /// Create a detector, validating the configuration up front.
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Detect all junction points in the grid.
    ///
    /// Iterates every cell: non-free cells are skipped, the proximity filter
    /// gates candidates, and the radial search classifies them. The result
    /// set does not depend on iteration order or on the parallel flag.
    pub fn detect(&self, grid: &OccupancyGrid) -> Result<JunctionMap> {
        let (filter, cache) = self.prepare(grid)?;

        let start = Instant::now();
        let junctions: Vec<JunctionPoint> = if self.config.parallel {
            (0..grid.height() as i32)
                .into_par_iter()
                .flat_map_iter(|y| self.scan_row(grid, &filter, &cache, y))
                .collect()
        } else {
            (0..grid.height() as i32)
                .flat_map(|y| self.scan_row(grid, &filter, &cache, y))
                .collect()
        };

        debug!(
            "junction scan: {} junctions in {}x{} grid ({} ms)",
            junctions.len(),
            grid.width(),
            grid.height(),
            start.elapsed().as_millis()
        );

        Ok(Self::into_map(junctions))
    }

    /// Detect with a wall-clock budget, checked between rows.
    ///
    /// On expiry the rows scanned so far form the result: junction detection
    /// is enumerate-and-filter, so a partial set is valid, not an error.
    pub fn detect_with_deadline(
        &self,
        grid: &OccupancyGrid,
        budget: Duration,
    ) -> Result<JunctionMap> {
        let (filter, cache) = self.prepare(grid)?;

        let start = Instant::now();
        let mut junctions = Vec::new();
        for y in 0..grid.height() as i32 {
            if start.elapsed() > budget {
                debug!(
                    "junction scan deadline reached after {} of {} rows",
                    y,
                    grid.height()
                );
                break;
            }
            junctions.extend(self.scan_row(grid, &filter, &cache, y));
        }

        Ok(Self::into_map(junctions))
    }

    /// Validate the grid and build the per-scan shared structures.
    fn prepare(&self, grid: &OccupancyGrid) -> Result<(ProximityFilter, RowExtentCache)> {
        if grid.width() == 0 || grid.height() == 0 {
            return Err(SandhiError::EmptyGrid {
                width: grid.width(),
                height: grid.height(),
            });
        }

        let filter = ProximityFilter::new(self.config.threshold);
        // Sized to the grid diagonal, which bounds every per-candidate
        // search radius; misses fall back to lazy computation in the search.
        let cache = RowExtentCache::build(self.config.threshold, grid.diagonal_radius());
        debug!(
            "row-extent cache: radii {}..={}",
            cache.min_radius(),
            cache.max_radius().unwrap_or(cache.min_radius())
        );
        Ok((filter, cache))
    }

    /// Evaluate every cell of one grid row.
    fn scan_row(
        &self,
        grid: &OccupancyGrid,
        filter: &ProximityFilter,
        cache: &RowExtentCache,
        y: i32,
    ) -> Vec<JunctionPoint> {
        let search = BasisSearch::new(grid, cache, self.config.threshold, self.config.min_separation());
        let mut found = Vec::new();

        for x in 0..grid.width() as i32 {
            if !grid.is_free(x, y) {
                continue;
            }
            let cell = GridCoord::new(x, y);
            if filter.is_too_close(grid, cell) {
                continue;
            }
            let outcome = search.run(cell);
            if outcome.basis_points.len() >= 2 {
                found.push(JunctionPoint {
                    coord: cell,
                    radius: outcome.radius,
                    basis_points: outcome.basis_points,
                });
            }
        }

        found
    }

    /// Merge per-row results; coordinates are disjoint by construction.
    fn into_map(junctions: Vec<JunctionPoint>) -> JunctionMap {
        junctions.into_iter().map(|j| (j.coord, j)).collect()
    }
}

/// Detect junction points with a default configuration at the given
/// clearance threshold.
pub fn detect(grid: &OccupancyGrid, threshold: u32) -> Result<JunctionMap> {
    JunctionDetector::new(DetectorConfig::with_threshold(threshold))?.detect(grid)
}
