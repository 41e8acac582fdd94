//! Dimension reconciliation across several input pictures.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PictureError, Result};
use crate::types::Grid;

/// How multi-input transforms reconcile pictures of different sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExtentPolicy {
    /// Componentwise minimum: the largest extent contained in every input.
    #[default]
    Smallest,
    /// Componentwise maximum. Inputs smaller than this extent raise a
    /// boundary error when a transform reads past them.
    Largest,
}

impl fmt::Display for ExtentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtentPolicy::Smallest => write!(f, "smallest"),
            ExtentPolicy::Largest => write!(f, "largest"),
        }
    }
}

/// Compute the (width, height) shared by `grids` under `policy`.
pub fn common_extent(grids: &[Grid], policy: ExtentPolicy) -> Result<(usize, usize)> {
    let (first, rest) = grids
        .split_first()
        .ok_or_else(|| PictureError::invalid("at least one picture is required"))?;

    let extent = rest.iter().fold(first.size(), |(w, h), grid| match policy {
        ExtentPolicy::Smallest => (w.min(grid.width()), h.min(grid.height())),
        ExtentPolicy::Largest => (w.max(grid.width()), h.max(grid.height())),
    });

    Ok(extent)
}
