//! Per-pixel colour transforms.

use crate::types::Grid;

/// Invert every pixel.
pub fn invert(grid: &Grid) -> Grid {
    grid.map(|c| c.invert())
}

/// Replace every pixel with the plain mean of its channels.
pub fn grayscale(grid: &Grid) -> Grid {
    grid.map(|c| c.normalise())
}
