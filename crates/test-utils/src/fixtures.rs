//! Synthetic image fixtures for artmesh tests.
//!
//! All fixtures are written into a caller-supplied directory (normally a
//! `tempfile::TempDir`) so concurrent tests never collide on paths.

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

/// Create a fresh temporary directory for a test.
pub fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Write a grayscale PNG with a horizontal intensity gradient.
///
/// Pixel (x, y) has intensity proportional to x, so the image is
/// guaranteed non-constant for any width >= 2.
pub fn write_gradient_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = GrayImage::from_fn(width, height, |x, _| {
        Luma([(x * 255 / width.max(1)) as u8])
    });
    let path = dir.join(name);
    img.save(&path).expect("failed to write gradient PNG");
    path
}

/// Write a grayscale PNG where every pixel has the same intensity.
pub fn write_constant_png(dir: &Path, name: &str, width: u32, height: u32, value: u8) -> PathBuf {
    let img = GrayImage::from_pixel(width, height, Luma([value]));
    let path = dir.join(name);
    img.save(&path).expect("failed to write constant PNG");
    path
}

/// Write an RGB JPEG with a two-axis color gradient.
pub fn write_rgb_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
        ])
    });
    let path = dir.join(name);
    img.save(&path).expect("failed to write RGB JPEG");
    path
}

/// Write an RGBA PNG (a color mode the pipelines reject).
pub fn write_rgba_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 128]));
    let path = dir.join(name);
    img.save(&path).expect("failed to write RGBA PNG");
    path
}

/// Write a file with a PNG extension that is not a decodable image.
pub fn write_corrupt_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"this is not an image at all").expect("failed to write corrupt file");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_fixture_decodes() {
        let dir = temp_dir();
        let path = write_gradient_png(dir.path(), "grad.png", 32, 16);
        let img = image::open(&path).unwrap().to_luma8();
        assert_eq!(img.dimensions(), (32, 16));
        // Left edge darker than right edge
        assert!(img.get_pixel(0, 0)[0] < img.get_pixel(31, 0)[0]);
    }

    #[test]
    fn test_corrupt_fixture_does_not_decode() {
        let dir = temp_dir();
        let path = write_corrupt_image(dir.path(), "bad.png");
        assert!(image::open(&path).is_err());
    }
}
