//! The picture grid - an owned 2-D buffer of colours.
//!
//! Pixels are stored row-major (`y * width + x`). Every accessor is
//! bounds-checked and reports violations as errors rather than panicking.

use std::iter::FusedIterator;

use image::RgbImage;

use crate::error::{PictureError, Result};

use super::Colour;

/// A single pixel produced while enumerating a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub x: usize,
    pub y: usize,
    pub colour: Colour,
}

/// A rectangular picture of RGB colours.
///
/// Dimensions are fixed at construction. Equality is structural: same
/// width, same height, identical pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    pixels: Vec<Colour>,
}

impl Grid {
    /// Create a black grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Colour::BLACK)
    }

    /// Create a grid with every pixel set to `colour`.
    pub fn filled(width: usize, height: usize, colour: Colour) -> Self {
        Self {
            width,
            height,
            pixels: vec![colour; width * height],
        }
    }

    /// Create a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Colour) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Test whether (x, y) lies inside the picture.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Get the colour at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Result<Colour> {
        let index = self.index(x, y)?;
        Ok(self.pixels[index])
    }

    /// Overwrite the colour at (x, y).
    pub fn set(&mut self, x: usize, y: usize, colour: Colour) -> Result<()> {
        let index = self.index(x, y)?;
        self.pixels[index] = colour;
        Ok(())
    }

    /// Apply `f` to every pixel, producing a new grid of the same size.
    pub fn map(&self, f: impl Fn(Colour) -> Colour) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&c| f(c)).collect(),
        }
    }

    /// Colour at a coordinate the caller has already proven in bounds.
    pub(crate) fn colour_at(&self, x: usize, y: usize) -> Colour {
        debug_assert!(self.contains(x, y));
        self.pixels[y * self.width + x]
    }

    /// Enumerate pixels in row-major order.
    ///
    /// Each call starts a fresh pass; the grid itself holds no cursor.
    pub fn pixels(&self) -> Pixels<'_> {
        Pixels {
            grid: self,
            index: 0,
        }
    }

    /// Read a `size x size` tile starting at (start_x, start_y).
    ///
    /// Colours are returned column-major: x outer, y inner.
    pub fn get_tile(&self, start_x: usize, start_y: usize, size: usize) -> Result<Vec<Colour>> {
        self.check_tile(start_x, start_y, size)?;

        let mut colours = Vec::with_capacity(size * size);
        for x in start_x..start_x + size {
            for y in start_y..start_y + size {
                colours.push(self.pixels[y * self.width + x]);
            }
        }
        Ok(colours)
    }

    /// Write a `size x size` tile starting at (start_x, start_y).
    ///
    /// `colours` must be in the order produced by [`Grid::get_tile`].
    /// Nothing is written if the call fails.
    pub fn set_tile(
        &mut self,
        start_x: usize,
        start_y: usize,
        size: usize,
        colours: &[Colour],
    ) -> Result<()> {
        let expected = size
            .checked_mul(size)
            .ok_or_else(|| self.tile_out_of_bounds(start_x, start_y, size))?;
        if colours.len() != expected {
            return Err(PictureError::LengthMismatch {
                expected,
                actual: colours.len(),
            });
        }
        self.check_tile(start_x, start_y, size)?;

        let mut source = colours.iter();
        for x in start_x..start_x + size {
            for y in start_y..start_y + size {
                if let Some(&colour) = source.next() {
                    self.pixels[y * self.width + x] = colour;
                }
            }
        }
        Ok(())
    }

    /// Build a grid from a decoded RGB image.
    pub fn from_rgb_image(img: &RgbImage) -> Self {
        Self {
            width: img.width() as usize,
            height: img.height() as usize,
            pixels: img.pixels().map(|&p| Colour::from(p)).collect(),
        }
    }

    /// Convert to an RGB image for encoding.
    ///
    /// Returns `None` when a dimension does not fit the image's `u32` size.
    pub fn to_rgb_image(&self) -> Option<RgbImage> {
        let width = u32::try_from(self.width).ok()?;
        let height = u32::try_from(self.height).ok()?;

        let mut img = RgbImage::new(width, height);
        for (pixel, colour) in img.pixels_mut().zip(&self.pixels) {
            *pixel = (*colour).into();
        }
        Some(img)
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if !self.contains(x, y) {
            return Err(PictureError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    fn check_tile(&self, start_x: usize, start_y: usize, size: usize) -> Result<()> {
        let fits = |start: usize, extent: usize| {
            start
                .checked_add(size)
                .is_some_and(|end| end <= extent)
        };

        if fits(start_x, self.width) && fits(start_y, self.height) {
            Ok(())
        } else {
            Err(self.tile_out_of_bounds(start_x, start_y, size))
        }
    }

    fn tile_out_of_bounds(&self, start_x: usize, start_y: usize, size: usize) -> PictureError {
        PictureError::TileOutOfBounds {
            x: start_x,
            y: start_y,
            size,
            width: self.width,
            height: self.height,
        }
    }
}

/// Row-major pixel iterator returned by [`Grid::pixels`].
#[derive(Debug, Clone)]
pub struct Pixels<'a> {
    grid: &'a Grid,
    index: usize,
}

impl Iterator for Pixels<'_> {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        let colour = *self.grid.pixels.get(self.index)?;
        let pixel = Pixel {
            x: self.index % self.grid.width,
            y: self.index / self.grid.width,
            colour,
        };
        self.index += 1;
        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.pixels.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pixels<'_> {}

impl FusedIterator for Pixels<'_> {}

impl<'a> IntoIterator for &'a Grid {
    type Item = Pixel;
    type IntoIter = Pixels<'a>;

    fn into_iter(self) -> Pixels<'a> {
        self.pixels()
    }
}
