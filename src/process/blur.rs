//! Fixed 3x3 box blur.

use crate::types::{ChannelSum, Colour, Grid};

/// Number of samples in a 3x3 neighbourhood.
const KERNEL_SAMPLES: u32 = 9;

/// Blur interior pixels with the truncated mean of their 3x3 neighbourhood.
///
/// Border pixels have no full neighbourhood and are copied unchanged.
pub fn blur(grid: &Grid) -> Grid {
    let (w, h) = grid.size();

    Grid::from_fn(w, h, |x, y| {
        let interior = x > 0 && y > 0 && x + 1 < w && y + 1 < h;
        if interior {
            neighbourhood_mean(grid, x, y)
        } else {
            grid.colour_at(x, y)
        }
    })
}

fn neighbourhood_mean(grid: &Grid, x: usize, y: usize) -> Colour {
    let mut sum = ChannelSum::default();
    for ny in y - 1..=y + 1 {
        for nx in x - 1..=x + 1 {
            sum.add(grid.colour_at(nx, ny));
        }
    }
    sum.mean(KERNEL_SAMPLES)
}
