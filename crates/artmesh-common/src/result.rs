//! Output records returned to callers after a generation request.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::dimensions::PhysicalDimensions;

/// Outcome of a display-cube generation.
///
/// Ephemeral: returned to the caller, never persisted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeResult {
    /// Path of the exported OBJ file.
    pub obj_path: PathBuf,
    /// Resolved physical dimensions of the cube.
    pub dimensions: PhysicalDimensions,
    /// The source image the cube was built from.
    pub source_image: PathBuf,
}

/// Outcome of a terrain generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainResult {
    /// Path of the exported OBJ file.
    pub obj_path: PathBuf,
    /// Height-field dimensions in samples (width, height).
    pub grid_size: (usize, usize),
    /// Vertical scale applied to the normalized heights.
    pub scale_factor: f64,
}
