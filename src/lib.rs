//! # Sandhi: Topological Junction Extraction
//!
//! Extracts topological "junction" points from a 2D occupancy grid: free
//! cells that are locally equidistant from at least two separated obstacle
//! clusters, approximating vertices of the generalized Voronoi diagram
//! restricted to free space. The junction set seeds a topological graph used
//! for navigation and planning; graph construction itself lives downstream.
//!
//! ## Quick Start
//!
//! ```rust
//! use sandhi::{detect, CellState, OccupancyGrid};
//!
//! let mut grid = OccupancyGrid::filled(40, 40, CellState::Free);
//! for y in 0..40 {
//!     grid.set(0, y, CellState::Obstacle);
//!     grid.set(39, y, CellState::Obstacle);
//! }
//!
//! let junctions = detect(&grid, 8).expect("valid threshold and grid");
//! for junction in junctions.values() {
//!     assert!(junction.basis_points.len() >= 2);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Fundamental types ([`GridCoord`], [`CellState`])
//! - [`grid`]: Read-only occupancy grid storage
//! - [`config`]: Detector configuration
//! - [`raster`]: Midpoint circle rasterization and row-extent precomputation
//! - [`detect`]: Proximity filter, radial basis search, junction detector,
//!   critical point selection
//!
//! ## Data Flow
//!
//! ```text
//! OccupancyGrid ──► JunctionDetector
//!                     │  builds RowExtentCache + clearance shape once
//!                     ▼
//!            for every free cell:
//!            ProximityFilter ──► BasisSearch ──► JunctionPoint (if ≥2 basis)
//!                     │
//!                     ▼
//!            JunctionMap ──► find_critical_points (optional)
//! ```
//!
//! Cell evaluations share only immutable state, so the scan parallelizes
//! per row when [`DetectorConfig::parallel`] is set.

pub mod config;
pub mod core;
pub mod detect;
pub mod error;
pub mod grid;
pub mod raster;

// Re-export main types at crate root
pub use config::DetectorConfig;
pub use core::{CellState, GridCoord};
pub use detect::{
    detect, find_critical_points, CriticalPoint, JunctionDetector, JunctionMap, JunctionPoint,
};
pub use error::{Result, SandhiError};
pub use grid::OccupancyGrid;
