//! picture - RGB image transformations
//!
//! A small engine for inverting, greying, rotating, flipping, blurring,
//! blending and tiling 8-bit RGB pictures, plus the CLI that drives it.

pub mod cli;
pub mod codec;
pub mod error;
pub mod output;
pub mod process;
pub mod settings;
pub mod types;

pub use codec::{load_picture, load_pictures, save_picture};
pub use error::{PictureError, Result};
pub use process::{
    blend, blur, common_extent, flip, grayscale, invert, mosaic, rotate, Angle, Axis,
    ExtentPolicy, Transformation,
};
pub use settings::Settings;
pub use types::{Colour, Grid, Pixel, Pixels};
