//! Pre-processing validation for uploaded artwork images.

use std::path::Path;

use artmesh_common::Result;
use image::{ColorType, ImageFormat};
use serde::{Deserialize, Serialize};

/// Minimum accepted width/height in pixels.
pub const MIN_DIMENSION_PX: u32 = 100;

/// Maximum accepted width/height in pixels.
pub const MAX_DIMENSION_PX: u32 = 4096;

/// Outcome of validating an input image.
///
/// Invalidity is a value, not an error: the caller rejects the upload and
/// asks for a different file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReport {
    pub valid: bool,
    pub reason: String,
}

impl ImageReport {
    fn ok() -> Self {
        Self {
            valid: true,
            reason: "image is valid".to_string(),
        }
    }

    fn fail(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: reason.into(),
        }
    }
}

/// Validate an image file before any processing starts.
///
/// Checks, in order: existence, recognizable format within {JPEG, PNG,
/// BMP}, decodability, pixel dimensions within [100, 4096] on both axes,
/// and color mode within {grayscale, RGB}. Corrupt data is reported as an
/// invalid result rather than an error; only unexpected I/O failures
/// (permissions, read errors) propagate as `Err`.
pub fn validate_image(path: impl AsRef<Path>) -> Result<ImageReport> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(ImageReport::fail("file does not exist"));
    }

    let reader = image::io::Reader::open(path)?.with_guessed_format()?;

    let format = match reader.format() {
        Some(f) => f,
        None => return Ok(ImageReport::fail("unrecognized image data")),
    };
    if !matches!(
        format,
        ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Bmp
    ) {
        return Ok(ImageReport::fail(format!(
            "unsupported format: {:?}",
            format
        )));
    }

    let decoded = match reader.decode() {
        Ok(img) => img,
        Err(e) => return Ok(ImageReport::fail(format!("failed to decode image: {}", e))),
    };

    let (width, height) = (decoded.width(), decoded.height());
    if width < MIN_DIMENSION_PX || height < MIN_DIMENSION_PX {
        return Ok(ImageReport::fail(format!(
            "image too small: {}x{}",
            width, height
        )));
    }
    if width > MAX_DIMENSION_PX || height > MAX_DIMENSION_PX {
        return Ok(ImageReport::fail(format!(
            "image too large: {}x{}",
            width, height
        )));
    }

    if !matches!(
        decoded.color(),
        ColorType::L8 | ColorType::L16 | ColorType::Rgb8 | ColorType::Rgb16
    ) {
        return Ok(ImageReport::fail(format!(
            "unsupported color mode: {:?}",
            decoded.color()
        )));
    }

    Ok(ImageReport::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{
        temp_dir, write_constant_png, write_corrupt_image, write_gradient_png, write_rgb_jpeg,
        write_rgba_png,
    };

    #[test]
    fn test_missing_file_is_invalid() {
        let report = validate_image("/nonexistent/artwork.png").unwrap();
        assert!(!report.valid);
        assert!(report.reason.contains("does not exist"));
    }

    #[test]
    fn test_corrupt_data_is_invalid_not_error() {
        let dir = temp_dir();
        let path = write_corrupt_image(dir.path(), "bad.png");
        let report = validate_image(&path).unwrap();
        assert!(!report.valid);
    }

    #[test]
    fn test_grayscale_png_is_valid() {
        let dir = temp_dir();
        let path = write_gradient_png(dir.path(), "grad.png", 200, 150);
        let report = validate_image(&path).unwrap();
        assert!(report.valid, "reason: {}", report.reason);
    }

    #[test]
    fn test_rgb_jpeg_is_valid() {
        let dir = temp_dir();
        let path = write_rgb_jpeg(dir.path(), "photo.jpg", 200, 150);
        let report = validate_image(&path).unwrap();
        assert!(report.valid, "reason: {}", report.reason);
    }

    #[test]
    fn test_rgba_mode_is_rejected() {
        let dir = temp_dir();
        let path = write_rgba_png(dir.path(), "alpha.png", 200, 150);
        let report = validate_image(&path).unwrap();
        assert!(!report.valid);
        assert!(report.reason.contains("color mode"));
    }

    #[test]
    fn test_size_boundaries() {
        let dir = temp_dir();

        // Exactly 100x100 is valid
        let path = write_constant_png(dir.path(), "min.png", 100, 100, 128);
        assert!(validate_image(&path).unwrap().valid);

        // 99x100 is too small
        let path = write_constant_png(dir.path(), "small.png", 99, 100, 128);
        let report = validate_image(&path).unwrap();
        assert!(!report.valid);
        assert!(report.reason.contains("too small"));

        // Exactly 4096x4096 is valid
        let path = write_constant_png(dir.path(), "max.png", 4096, 4096, 128);
        assert!(validate_image(&path).unwrap().valid);

        // 4097 on one axis is too large
        let path = write_constant_png(dir.path(), "big.png", 4097, 100, 128);
        let report = validate_image(&path).unwrap();
        assert!(!report.valid);
        assert!(report.reason.contains("too large"));
    }
}
