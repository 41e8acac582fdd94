//! Rotation and flipping by coordinate remapping.
//!
//! Each transform is written as a forward mapping `out[f(x, y)] = in[x, y]`
//! and evaluated through its inverse, so every output pixel is produced
//! exactly once.

use std::fmt;
use std::str::FromStr;

use crate::error::{PictureError, Result};
use crate::types::Grid;

/// Clockwise rotation angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Angle {
    Deg90,
    Deg180,
    Deg270,
}

impl Angle {
    /// The angle in degrees.
    pub fn degrees(self) -> u32 {
        match self {
            Angle::Deg90 => 90,
            Angle::Deg180 => 180,
            Angle::Deg270 => 270,
        }
    }
}

impl TryFrom<u32> for Angle {
    type Error = PictureError;

    fn try_from(degrees: u32) -> Result<Self> {
        match degrees {
            90 => Ok(Angle::Deg90),
            180 => Ok(Angle::Deg180),
            270 => Ok(Angle::Deg270),
            _ => Err(PictureError::InvalidParameter {
                message: format!("unsupported rotation angle {}", degrees),
                help: Some("rotation: 90 180 270".to_string()),
            }),
        }
    }
}

impl FromStr for Angle {
    type Err = PictureError;

    fn from_str(s: &str) -> Result<Self> {
        let degrees: u32 = s.trim().parse().map_err(|_| PictureError::InvalidParameter {
            message: format!("'{}' is not a rotation angle", s),
            help: Some("rotation: 90 180 270".to_string()),
        })?;
        Angle::try_from(degrees)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// Mirror axis for [`flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Mirror left to right.
    Horizontal,
    /// Mirror top to bottom.
    Vertical,
}

impl FromStr for Axis {
    type Err = PictureError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Ok(Axis::Horizontal),
            "v" | "vertical" => Ok(Axis::Vertical),
            _ => Err(PictureError::InvalidParameter {
                message: format!("'{}' is not a flip direction", s),
                help: Some("flip: H V".to_string()),
            }),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "H"),
            Axis::Vertical => write!(f, "V"),
        }
    }
}

/// Rotate clockwise by `angle`.
///
/// - 90: `out[h-1-y, x] = in[x, y]`, output is `h x w`
/// - 180: `out[w-1-x, h-1-y] = in[x, y]`
/// - 270: `out[y, w-1-x] = in[x, y]`, output is `h x w`
pub fn rotate(grid: &Grid, angle: Angle) -> Grid {
    let (w, h) = grid.size();

    match angle {
        Angle::Deg90 => Grid::from_fn(h, w, |ox, oy| grid.colour_at(oy, h - 1 - ox)),
        Angle::Deg180 => Grid::from_fn(w, h, |ox, oy| grid.colour_at(w - 1 - ox, h - 1 - oy)),
        Angle::Deg270 => Grid::from_fn(h, w, |ox, oy| grid.colour_at(w - 1 - oy, ox)),
    }
}

/// Mirror across `axis`. Dimensions are unchanged.
pub fn flip(grid: &Grid, axis: Axis) -> Grid {
    let (w, h) = grid.size();

    match axis {
        Axis::Horizontal => Grid::from_fn(w, h, |ox, oy| grid.colour_at(w - 1 - ox, oy)),
        Axis::Vertical => Grid::from_fn(w, h, |ox, oy| grid.colour_at(ox, h - 1 - oy)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    /// Every pixel distinct, so any remapping mistake shows up.
    fn asymmetric(width: usize, height: usize) -> Grid {
        Grid::from_fn(width, height, |x, y| Colour::rgb(x as u8, y as u8, 7))
    }

    #[test]
    fn test_rotate_90_moves_origin_to_top_right() {
        let mut grid = Grid::new(64, 64);
        grid.set(0, 0, Colour::WHITE).unwrap();

        let rotated = rotate(&grid, Angle::Deg90);
        assert_eq!(rotated.get(63, 0).unwrap(), Colour::WHITE);
        assert_eq!(rotated.get(0, 0).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_rotate_90_mapping() {
        let grid = asymmetric(4, 3);
        let rotated = rotate(&grid, Angle::Deg90);
        assert_eq!(rotated.size(), (3, 4));

        for p in grid.pixels() {
            assert_eq!(rotated.get(3 - 1 - p.y, p.x).unwrap(), p.colour);
        }
    }

    #[test]
    fn test_rotate_270_mapping() {
        let grid = asymmetric(4, 3);
        let rotated = rotate(&grid, Angle::Deg270);
        assert_eq!(rotated.size(), (3, 4));

        for p in grid.pixels() {
            assert_eq!(rotated.get(p.y, 4 - 1 - p.x).unwrap(), p.colour);
        }
    }

    #[test]
    fn test_rotate_180_mapping() {
        let grid = asymmetric(5, 2);
        let rotated = rotate(&grid, Angle::Deg180);
        assert_eq!(rotated.size(), (5, 2));

        for p in grid.pixels() {
            assert_eq!(rotated.get(4 - p.x, 1 - p.y).unwrap(), p.colour);
        }
    }

    #[test]
    fn test_rotate_90_then_270_is_identity() {
        let grid = asymmetric(6, 3);
        assert_eq!(rotate(&rotate(&grid, Angle::Deg90), Angle::Deg270), grid);
        assert_eq!(rotate(&rotate(&grid, Angle::Deg270), Angle::Deg90), grid);
    }

    #[test]
    fn test_rotate_90_four_times_is_identity() {
        let grid = asymmetric(5, 8);
        let mut rotated = grid.clone();
        for _ in 0..4 {
            rotated = rotate(&rotated, Angle::Deg90);
        }
        assert_eq!(rotated, grid);
    }

    #[test]
    fn test_rotate_180_is_double_flip() {
        let grid = asymmetric(7, 4);
        let flipped = flip(&flip(&grid, Axis::Horizontal), Axis::Vertical);
        assert_eq!(rotate(&grid, Angle::Deg180), flipped);
    }

    #[test]
    fn test_flip_mappings() {
        let grid = asymmetric(4, 3);
        let h = flip(&grid, Axis::Horizontal);
        let v = flip(&grid, Axis::Vertical);

        for p in grid.pixels() {
            assert_eq!(h.get(3 - p.x, p.y).unwrap(), p.colour);
            assert_eq!(v.get(p.x, 2 - p.y).unwrap(), p.colour);
        }
    }

    #[test]
    fn test_flip_twice_is_identity() {
        let grid = asymmetric(5, 5);
        assert_eq!(flip(&flip(&grid, Axis::Horizontal), Axis::Horizontal), grid);
        assert_eq!(flip(&flip(&grid, Axis::Vertical), Axis::Vertical), grid);
    }

    #[test]
    fn test_rotate_empty_grid() {
        let grid = Grid::new(0, 3);
        assert_eq!(rotate(&grid, Angle::Deg90).size(), (3, 0));
    }

    #[test]
    fn test_parse_angle() {
        assert_eq!("90".parse::<Angle>().unwrap(), Angle::Deg90);
        assert_eq!("180".parse::<Angle>().unwrap(), Angle::Deg180);
        assert_eq!(" 270 ".parse::<Angle>().unwrap(), Angle::Deg270);
        assert!("45".parse::<Angle>().is_err());
        assert!("ninety".parse::<Angle>().is_err());
        assert!(Angle::try_from(360).is_err());
    }

    #[test]
    fn test_parse_axis() {
        assert_eq!("H".parse::<Axis>().unwrap(), Axis::Horizontal);
        assert_eq!("v".parse::<Axis>().unwrap(), Axis::Vertical);
        assert_eq!("Vertical".parse::<Axis>().unwrap(), Axis::Vertical);
        assert!(matches!(
            "D".parse::<Axis>(),
            Err(PictureError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Angle::Deg270.to_string(), "270");
        assert_eq!(Axis::Vertical.to_string(), "V");
    }
}
