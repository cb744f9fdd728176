//! Core types for the Sandhi library.
//!
//! - [`GridCoord`]: Integer cell indices for occupancy grid access
//! - [`CellState`]: Three-state cell classification (Unknown, Free, Obstacle)

mod cell;
mod point;

pub use cell::CellState;
pub use point::GridCoord;
