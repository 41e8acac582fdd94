//! Colour type and per-pixel operations.

use std::fmt;

use image::Rgb;

/// An opaque 8-bit RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Replace every channel with its complement (`255 - channel`).
    pub fn invert(self) -> Self {
        Self::rgb(255 - self.r, 255 - self.g, 255 - self.b)
    }

    /// Replace every channel with the floor of the three-channel mean.
    ///
    /// This is a plain average, not a luminance-weighted grey.
    pub fn normalise(self) -> Self {
        let average = ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8;
        Self::rgb(average, average, average)
    }

    /// True when all three channels hold the same value.
    pub fn is_grey(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Convert to an RGB array.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgb<u8>> for Colour {
    fn from(pixel: Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self::rgb(r, g, b)
    }
}

impl From<Colour> for Rgb<u8> {
    fn from(colour: Colour) -> Self {
        Rgb(colour.to_rgb())
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Per-channel running sum used by the averaging transforms.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ChannelSum {
    r: u32,
    g: u32,
    b: u32,
}

impl ChannelSum {
    pub(crate) fn add(&mut self, colour: Colour) {
        self.r += colour.r as u32;
        self.g += colour.g as u32;
        self.b += colour.b as u32;
    }

    /// Truncated mean over `count` samples. `count` must be non-zero.
    pub(crate) fn mean(self, count: u32) -> Colour {
        Colour::rgb(
            (self.r / count) as u8,
            (self.g / count) as u8,
            (self.b / count) as u8,
        )
    }
}
