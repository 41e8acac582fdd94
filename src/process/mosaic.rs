//! Tile-based mosaic of several pictures.
//!
//! The canvas is the first picture's extent, cut down to whole tiles.
//! Tile `(col, row)` is copied from input `(col + row) % n` at the same
//! origin, so the inputs cycle along the diagonals.

use crate::error::{PictureError, Result};
use crate::types::{Colour, Grid};

use super::extent::ExtentPolicy;

/// Compose `grids` into a mosaic of `tile_size x tile_size` tiles.
///
/// When the chosen input does not cover a tile, [`ExtentPolicy::Smallest`]
/// moves on to the next input in the cycle that does; the first input
/// always covers the canvas. [`ExtentPolicy::Largest`] fails with a
/// boundary error instead.
pub fn mosaic(tile_size: usize, grids: &[Grid], policy: ExtentPolicy) -> Result<Grid> {
    if tile_size == 0 {
        return Err(PictureError::InvalidParameter {
            message: "tile size must be at least 1".to_string(),
            help: None,
        });
    }

    let first = grids
        .first()
        .ok_or_else(|| PictureError::invalid("at least one picture is required"))?;
    let (width, height) = first.size();
    let cols = width / tile_size;
    let rows = height / tile_size;

    if cols == 0 || rows == 0 {
        return Err(PictureError::InvalidParameter {
            message: format!(
                "tile size {} does not fit a {}x{} picture",
                tile_size, width, height
            ),
            help: Some("Use a tile size no larger than the first picture's smallest side".to_string()),
        });
    }

    let attempts = match policy {
        ExtentPolicy::Smallest => grids.len(),
        ExtentPolicy::Largest => 1,
    };

    let mut output = Grid::new(cols * tile_size, rows * tile_size);
    for row in 0..rows {
        for col in 0..cols {
            let (x, y) = (col * tile_size, row * tile_size);
            let tile = source_tile(grids, (col + row) % grids.len(), attempts, x, y, tile_size)?;
            output.set_tile(x, y, tile_size, &tile)?;
        }
    }

    Ok(output)
}

/// Read a tile from `grids[start]`, trying up to `attempts` inputs in
/// cycle order. The last error is returned if none covers the tile.
fn source_tile(
    grids: &[Grid],
    start: usize,
    attempts: usize,
    x: usize,
    y: usize,
    size: usize,
) -> Result<Vec<Colour>> {
    let mut tile = grids[start].get_tile(x, y, size);
    for step in 1..attempts {
        if tile.is_ok() {
            break;
        }
        tile = grids[(start + step) % grids.len()].get_tile(x, y, size);
    }
    tile
}
