//! Transform engine.
//!
//! Seven stateless transforms, each taking borrowed pictures and returning
//! a freshly allocated one. [`Transformation`] names a transform together
//! with its parameters so callers can dispatch with a single `match`.

mod blend;
mod blur;
mod colour;
mod extent;
mod geometry;
mod mosaic;

use std::fmt;

pub use blend::blend;
pub use blur::blur;
pub use colour::{grayscale, invert};
pub use extent::{common_extent, ExtentPolicy};
pub use geometry::{flip, rotate, Angle, Axis};
pub use mosaic::mosaic;

use crate::error::{PictureError, Result};
use crate::types::Grid;

/// A transform and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformation {
    Invert,
    Grayscale,
    Rotate(Angle),
    Flip(Axis),
    Blur,
    Blend,
    Mosaic { tile_size: usize },
}

impl Transformation {
    /// Build a transformation from its name and optional textual parameter.
    ///
    /// `rotate` takes an angle, `flip` an axis and `mosaic` a tile size;
    /// every other transform takes no parameter.
    pub fn from_name(name: &str, param: Option<&str>) -> Result<Self> {
        let name = name.trim().to_ascii_lowercase();
        let needs = |what: &str| PictureError::InvalidParameter {
            message: format!("{} requires {}", name, what),
            help: None,
        };

        let transformation = match (name.as_str(), param) {
            ("invert", None) => Transformation::Invert,
            ("grayscale" | "greyscale", None) => Transformation::Grayscale,
            ("blur", None) => Transformation::Blur,
            ("blend", None) => Transformation::Blend,
            ("rotate", Some(p)) => Transformation::Rotate(p.parse()?),
            ("rotate", None) => return Err(needs("an angle")),
            ("flip", Some(p)) => Transformation::Flip(p.parse()?),
            ("flip", None) => return Err(needs("a direction")),
            ("mosaic", Some(p)) => {
                let tile_size = p.trim().parse().map_err(|_| PictureError::InvalidParameter {
                    message: format!("'{}' is not a tile size", p),
                    help: Some("Tile size must be a positive integer".to_string()),
                })?;
                Transformation::Mosaic { tile_size }
            }
            ("mosaic", None) => return Err(needs("a tile size")),
            ("invert" | "grayscale" | "greyscale" | "blur" | "blend", Some(p)) => {
                return Err(PictureError::invalid(format!(
                    "{} takes no parameter, got '{}'",
                    name, p
                )))
            }
            _ => {
                return Err(PictureError::InvalidParameter {
                    message: format!("unknown transformation '{}'", name),
                    help: Some(
                        "Available: invert, grayscale, rotate, flip, blur, blend, mosaic"
                            .to_string(),
                    ),
                })
            }
        };

        Ok(transformation)
    }

    /// Lower-case name of the transform.
    pub fn name(&self) -> &'static str {
        match self {
            Transformation::Invert => "invert",
            Transformation::Grayscale => "grayscale",
            Transformation::Rotate(_) => "rotate",
            Transformation::Flip(_) => "flip",
            Transformation::Blur => "blur",
            Transformation::Blend => "blend",
            Transformation::Mosaic { .. } => "mosaic",
        }
    }

    /// Whether the transform accepts more than one input picture.
    pub fn is_multi_input(&self) -> bool {
        matches!(self, Transformation::Blend | Transformation::Mosaic { .. })
    }

    /// Run the transform over `inputs`.
    ///
    /// Single-input transforms require exactly one picture; `blend` and
    /// `mosaic` require at least one and reconcile sizes with `policy`.
    pub fn apply(&self, inputs: &[Grid], policy: ExtentPolicy) -> Result<Grid> {
        match *self {
            Transformation::Invert => Ok(invert(self.single(inputs)?)),
            Transformation::Grayscale => Ok(grayscale(self.single(inputs)?)),
            Transformation::Rotate(angle) => Ok(rotate(self.single(inputs)?, angle)),
            Transformation::Flip(axis) => Ok(flip(self.single(inputs)?, axis)),
            Transformation::Blur => Ok(blur(self.single(inputs)?)),
            Transformation::Blend => blend(inputs, policy),
            Transformation::Mosaic { tile_size } => mosaic(tile_size, inputs, policy),
        }
    }

    fn single<'a>(&self, inputs: &'a [Grid]) -> Result<&'a Grid> {
        match inputs {
            [grid] => Ok(grid),
            _ => Err(PictureError::invalid(format!(
                "{} takes exactly one picture, got {}",
                self.name(),
                inputs.len()
            ))),
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transformation::Rotate(angle) => write!(f, "rotate {}", angle),
            Transformation::Flip(axis) => write!(f, "flip {}", axis),
            Transformation::Mosaic { tile_size } => write!(f, "mosaic {}", tile_size),
            other => write!(f, "{}", other.name()),
        }
    }
}
