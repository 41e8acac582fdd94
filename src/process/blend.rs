//! Averaging blend across several pictures.

use crate::error::Result;
use crate::types::{ChannelSum, Grid};

use super::extent::{common_extent, ExtentPolicy};

/// Blend `grids` by averaging each channel across every input.
///
/// The output extent comes from [`common_extent`]. With
/// [`ExtentPolicy::Largest`], an input smaller than the extent fails the
/// whole call with a boundary error instead of contributing a default.
pub fn blend(grids: &[Grid], policy: ExtentPolicy) -> Result<Grid> {
    let (width, height) = common_extent(grids, policy)?;
    let count = grids.len() as u32;

    let mut output = Grid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let mut sum = ChannelSum::default();
            for grid in grids {
                sum.add(grid.get(x, y)?);
            }
            output.set(x, y, sum.mean(count))?;
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PictureError;
    use crate::types::Colour;

    fn pattern(width: usize, height: usize, seed: usize) -> Grid {
        Grid::from_fn(width, height, |x, y| {
            Colour::rgb(
                ((x + seed) * 17) as u8,
                ((y * seed) % 256) as u8,
                ((x ^ y) * 9) as u8,
            )
        })
    }

    #[test]
    fn test_blend_two_is_channel_mean() {
        let a = pattern(16, 16, 3);
        let b = pattern(16, 16, 11);
        let blended = blend(&[a.clone(), b.clone()], ExtentPolicy::Smallest).unwrap();

        for p in blended.pixels() {
            let ca = a.get(p.x, p.y).unwrap();
            let cb = b.get(p.x, p.y).unwrap();
            let expected = Colour::rgb(
                ((ca.r as u16 + cb.r as u16) / 2) as u8,
                ((ca.g as u16 + cb.g as u16) / 2) as u8,
                ((ca.b as u16 + cb.b as u16) / 2) as u8,
            );
            assert_eq!(p.colour, expected);
        }
    }

    #[test]
    fn test_blend_single_is_identity() {
        let a = pattern(5, 4, 2);
        assert_eq!(blend(&[a.clone()], ExtentPolicy::Smallest).unwrap(), a);
    }

    #[test]
    fn test_blend_truncates_mean() {
        let grids = [
            Grid::filled(2, 2, Colour::rgb(255, 0, 1)),
            Grid::filled(2, 2, Colour::rgb(255, 0, 1)),
            Grid::filled(2, 2, Colour::rgb(0, 2, 0)),
        ];
        let blended = blend(&grids, ExtentPolicy::Largest).unwrap();
        assert_eq!(blended, Grid::filled(2, 2, Colour::rgb(170, 0, 0)));
    }

    #[test]
    fn test_blend_smallest_truncates_extent() {
        let grids = [Grid::filled(6, 3, Colour::WHITE), Grid::new(4, 5)];
        let blended = blend(&grids, ExtentPolicy::Smallest).unwrap();
        assert_eq!(blended, Grid::filled(4, 3, Colour::rgb(127, 127, 127)));
    }

    #[test]
    fn test_blend_largest_reports_boundary() {
        let grids = [Grid::new(6, 3), Grid::new(4, 5)];
        let err = blend(&grids, ExtentPolicy::Largest).unwrap_err();
        assert!(matches!(err, PictureError::OutOfBounds { .. }));
    }

    #[test]
    fn test_blend_empty_is_invalid() {
        assert!(matches!(
            blend(&[], ExtentPolicy::Smallest),
            Err(PictureError::InvalidParameter { .. })
        ));
    }
}
