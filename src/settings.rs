//! Tool settings (picture.yaml).
//!
//! Settings are optional: a missing file means defaults. Command-line
//! flags override whatever the file says.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PictureError, Result};
use crate::process::ExtentPolicy;

/// Settings filename looked up in the working directory.
pub const SETTINGS_FILENAME: &str = "picture.yaml";

/// Settings loaded from picture.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// How blend and mosaic reconcile pictures of different sizes.
    pub extent: ExtentPolicy,

    /// Print per-step detail while running.
    pub verbose: bool,
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PictureError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse settings from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| PictureError::Parse {
            message: format!("Invalid settings: {}", e),
            help: Some(format!("Check {} syntax", SETTINGS_FILENAME)),
        })
    }

    /// Resolve settings: an explicit path must exist, otherwise
    /// `dir/picture.yaml` is used when present, else defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(SETTINGS_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
