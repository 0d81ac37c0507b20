//! Physical dimension handling and pixel-to-centimeter conversion.

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Assumed image resolution when no measured size is supplied.
pub const DEFAULT_DPI: f64 = 300.0;

/// Default display-cube depth in centimeters.
pub const DEFAULT_DEPTH_CM: f64 = 3.0;

/// Real-world size of a generated object, in centimeters.
///
/// Either supplied explicitly by the caller (artworks are physically
/// measured) or derived from pixel dimensions at the assumed DPI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalDimensions {
    pub width_cm: f64,
    pub height_cm: f64,
    pub depth_cm: f64,
}

impl PhysicalDimensions {
    /// Create dimensions from explicit measurements.
    pub fn new(width_cm: f64, height_cm: f64, depth_cm: f64) -> Self {
        Self {
            width_cm,
            height_cm,
            depth_cm,
        }
    }

    /// Derive width/height from pixel dimensions at the assumed 300 DPI.
    pub fn from_pixels(width_px: u32, height_px: u32, depth_cm: f64) -> Self {
        let px_to_cm = CM_PER_INCH / DEFAULT_DPI;
        Self {
            width_cm: width_px as f64 * px_to_cm,
            height_cm: height_px as f64 * px_to_cm,
            depth_cm,
        }
    }

    /// Resolve dimensions from optional measurements plus pixel fallback.
    ///
    /// Measured size wins over pixel size, but only when both width and
    /// height are supplied; a lone measurement is ignored and both axes
    /// fall back to the pixel-derived values.
    pub fn resolve(
        width_cm: Option<f64>,
        height_cm: Option<f64>,
        depth_cm: f64,
        width_px: u32,
        height_px: u32,
    ) -> Self {
        match (width_cm, height_cm) {
            (Some(w), Some(h)) => Self::new(w, h, depth_cm),
            _ => Self::from_pixels(width_px, height_px, depth_cm),
        }
    }

    /// Reject zero or negative extents.
    pub fn validate(&self) -> Result<()> {
        if self.width_cm <= 0.0 || self.height_cm <= 0.0 || self.depth_cm <= 0.0 {
            return Err(PipelineError::geometry(format!(
                "dimensions must be positive: {:.2} x {:.2} x {:.2} cm",
                self.width_cm, self.height_cm, self.depth_cm
            )));
        }
        Ok(())
    }
}
