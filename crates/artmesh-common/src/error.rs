//! Error types for the artmesh pipelines.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using PipelineError.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Primary error type for mesh generation operations.
///
/// Validators report invalid inputs as ordinary return values, not through
/// this type. Everything here is a precondition or I/O failure that stops
/// a single generation request.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input image failed format/size/mode checks before processing.
    #[error("invalid input image {path}: {reason}")]
    Validation { path: PathBuf, reason: String },

    /// A referenced path does not exist at call time.
    #[error("file does not exist: {0}")]
    MissingFile(PathBuf),

    /// The file exists but cannot be parsed (image or mesh data).
    #[error("failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Degenerate geometry: zero-dimension image, zero or negative physical size.
    #[error("invalid geometry: {0}")]
    Geometry(String),

    /// Failure writing the mesh or material files.
    #[error("failed to export mesh to {path}: {message}")]
    Export { path: PathBuf, message: String },

    /// Unexpected I/O error outside the categories above.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// Create a Validation error.
    pub fn validation(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Validation {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Decode error.
    pub fn decode(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a Geometry error.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Create an Export error.
    pub fn export(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Export {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the caller can recover by supplying a different input.
    ///
    /// Export and I/O failures depend on the environment (disk full,
    /// permissions) rather than the input and may succeed on retry.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::MissingFile(_) | Self::Decode { .. } | Self::Geometry(_)
        )
    }
}
