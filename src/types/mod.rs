//! Core domain types for picture.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Colour` - opaque 8-bit RGB colour values
//! - `Grid` - a fixed-size, bounds-checked buffer of colours
//! - `Pixel` - a coordinate/colour triple produced by grid enumeration

mod colour;
mod grid;

pub(crate) use colour::ChannelSum;
pub use colour::Colour;
pub use grid::{Grid, Pixel, Pixels};
