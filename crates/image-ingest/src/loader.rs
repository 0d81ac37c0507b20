//! Image decoding into the pipeline's in-memory representations.

use std::path::Path;

use artmesh_common::{PipelineError, Result};

/// A decoded grayscale image as a row-major intensity grid.
///
/// Intensities are in [0, 255] as `f32` so downstream smoothing and
/// normalization never round-trip through integer pixels. Loaded fresh
/// per pipeline invocation and never mutated; derived data (height
/// fields, meshes) is always a new allocation.
#[derive(Debug, Clone)]
pub struct GrayscaleImage {
    /// Intensity samples in row-major order (row 0 first).
    pub data: Vec<f32>,
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
}

impl GrayscaleImage {
    /// Build an image from raw parts. Panics if the data length does not
    /// match the dimensions; callers construct from decoded buffers only.
    pub fn from_raw(data: Vec<f32>, width: usize, height: usize) -> Self {
        assert_eq!(data.len(), width * height, "grid size mismatch");
        Self {
            data,
            width,
            height,
        }
    }

    /// Get the intensity at a pixel coordinate.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }
}

/// Load an image as grayscale intensities.
///
/// Color input is converted with the standard luma weighting. Fails with
/// `MissingFile` when the path does not exist and `Decode` when the data
/// cannot be parsed as an image.
pub fn load_grayscale(path: impl AsRef<Path>) -> Result<GrayscaleImage> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PipelineError::MissingFile(path.to_path_buf()));
    }

    let decoded = image::open(path).map_err(|e| PipelineError::decode(path, e.to_string()))?;
    let gray = decoded.to_luma8();
    let (width, height) = gray.dimensions();

    let data: Vec<f32> = gray.into_raw().into_iter().map(f32::from).collect();
    Ok(GrayscaleImage::from_raw(
        data,
        width as usize,
        height as usize,
    ))
}

/// Read the pixel dimensions of an image without decoding pixel data.
pub fn image_dimensions(path: impl AsRef<Path>) -> Result<(u32, u32)> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PipelineError::MissingFile(path.to_path_buf()));
    }

    image::image_dimensions(path).map_err(|e| PipelineError::decode(path, e.to_string()))
}
