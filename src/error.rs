use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for picture operations
#[derive(Error, Diagnostic, Debug)]
pub enum PictureError {
    #[error("Pixel ({x}, {y}) is outside a {width}x{height} picture")]
    #[diagnostic(code(picture::boundary))]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Tile of size {size} at ({x}, {y}) does not fit a {width}x{height} picture")]
    #[diagnostic(code(picture::boundary))]
    TileOutOfBounds {
        x: usize,
        y: usize,
        size: usize,
        width: usize,
        height: usize,
    },

    #[error("Expected {expected} colours for tile, got {actual}")]
    #[diagnostic(code(picture::length))]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter: {message}")]
    #[diagnostic(code(picture::parameter))]
    InvalidParameter {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to load {path}: {message}")]
    #[diagnostic(code(picture::load))]
    Load { path: PathBuf, message: String },

    #[error("Failed to save {path}: {message}")]
    #[diagnostic(
        code(picture::save),
        help("The transformed image could not be saved.")
    )]
    Save { path: PathBuf, message: String },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(picture::io))]
    Io { path: PathBuf, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(picture::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl PictureError {
    /// Shorthand for an `InvalidParameter` error without help text.
    pub fn invalid(message: impl Into<String>) -> Self {
        PictureError::InvalidParameter {
            message: message.into(),
            help: None,
        }
    }

    /// True for both pixel and tile boundary violations.
    pub fn is_boundary(&self) -> bool {
        matches!(
            self,
            PictureError::OutOfBounds { .. } | PictureError::TileOutOfBounds { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PictureError>;
