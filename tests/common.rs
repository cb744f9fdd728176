//! Test utilities for junction detection scenarios.

#![allow(dead_code)]

use sandhi::{CellState, OccupancyGrid};

/// Free grid with a one-cell obstacle border.
pub fn bordered_grid(width: usize, height: usize) -> OccupancyGrid {
    let mut grid = OccupancyGrid::filled(width, height, CellState::Free);
    for x in 0..width {
        grid.set(x, 0, CellState::Obstacle);
        grid.set(x, height - 1, CellState::Obstacle);
    }
    for y in 0..height {
        grid.set(0, y, CellState::Obstacle);
        grid.set(width - 1, y, CellState::Obstacle);
    }
    grid
}

/// Two solid obstacle blobs with a vertical free corridor between them.
///
/// Columns `[0, corridor_start)` and `[corridor_end, width)` are obstacle;
/// the corridor spans `[corridor_start, corridor_end)` over the full height.
pub fn corridor_grid(
    width: usize,
    height: usize,
    corridor_start: usize,
    corridor_end: usize,
) -> OccupancyGrid {
    let mut grid = OccupancyGrid::filled(width, height, CellState::Free);
    for y in 0..height {
        for x in 0..corridor_start {
            grid.set(x, y, CellState::Obstacle);
        }
        for x in corridor_end..width {
            grid.set(x, y, CellState::Obstacle);
        }
    }
    grid
}

/// One solid rectangular obstacle block in otherwise free space.
pub fn single_block_grid(
    width: usize,
    height: usize,
    block_min: usize,
    block_max: usize,
) -> OccupancyGrid {
    let mut grid = OccupancyGrid::filled(width, height, CellState::Free);
    for y in block_min..=block_max {
        for x in block_min..=block_max {
            grid.set(x, y, CellState::Obstacle);
        }
    }
    grid
}
