//! Height-field construction: Gaussian smoothing plus normalization.

use image_ingest::GrayscaleImage;

/// Default smoothing strength in pixels.
pub const DEFAULT_BLUR_SIGMA: f32 = 2.0;

/// A normalized height field derived from image intensity.
///
/// Samples are in [0, 1] with the same shape as the source image. After
/// normalization the minimum input maps to 0.0 and the maximum to 1.0;
/// a constant-intensity input maps the whole field to 0.0 (the source
/// material would divide by zero here, so flat-at-zero is the defined
/// behavior).
#[derive(Debug, Clone)]
pub struct HeightField {
    /// Height samples in row-major order.
    pub data: Vec<f32>,
    /// Width in samples.
    pub width: usize,
    /// Height in samples.
    pub height: usize,
}

impl HeightField {
    /// Get the sample at a grid coordinate.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Minimum sample value, or None for an empty field.
    pub fn min(&self) -> Option<f32> {
        self.data.iter().copied().reduce(f32::min)
    }

    /// Maximum sample value, or None for an empty field.
    pub fn max(&self) -> Option<f32> {
        self.data.iter().copied().reduce(f32::max)
    }
}

/// Create a height field from a grayscale image.
///
/// Applies an isotropic Gaussian blur (`blur_sigma` in pixels, reflected
/// at the borders) and then min-max normalizes the result to [0, 1].
/// A sigma of zero or less skips the smoothing pass.
pub fn create_depth_map(image: &GrayscaleImage, blur_sigma: f32) -> HeightField {
    let smoothed = if blur_sigma > 0.0 {
        gaussian_blur(&image.data, image.width, image.height, blur_sigma)
    } else {
        image.data.clone()
    };

    HeightField {
        data: normalize(smoothed),
        width: image.width,
        height: image.height,
    }
}

/// Min-max normalize values to [0, 1] in place.
///
/// A constant input (max == min) maps everything to 0.0.
fn normalize(mut data: Vec<f32>) -> Vec<f32> {
    let min = data.iter().copied().reduce(f32::min).unwrap_or(0.0);
    let max = data.iter().copied().reduce(f32::max).unwrap_or(0.0);
    let range = max - min;

    if range <= f32::EPSILON {
        data.fill(0.0);
        return data;
    }

    for v in &mut data {
        *v = (*v - min) / range;
    }
    data
}

/// Separable Gaussian blur over a row-major grid.
///
/// The kernel is truncated at 3 sigma and renormalized; borders use
/// reflected indexing so edge samples keep full kernel weight.
fn gaussian_blur(data: &[f32], width: usize, height: usize, sigma: f32) -> Vec<f32> {
    if data.is_empty() {
        return Vec::new();
    }

    let kernel = gaussian_kernel(sigma);
    let radius = (kernel.len() / 2) as isize;

    // Horizontal pass
    let mut horizontal = vec![0.0f32; data.len()];
    for y in 0..height {
        let row = &data[y * width..(y + 1) * width];
        for x in 0..width {
            let mut acc = 0.0;
            for (k, &w) in kernel.iter().enumerate() {
                let sx = reflect_index(x as isize + k as isize - radius, width);
                acc += row[sx] * w;
            }
            horizontal[y * width + x] = acc;
        }
    }

    // Vertical pass
    let mut output = vec![0.0f32; data.len()];
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for (k, &w) in kernel.iter().enumerate() {
                let sy = reflect_index(y as isize + k as isize - radius, height);
                acc += horizontal[sy * width + x] * w;
            }
            output[y * width + x] = acc;
        }
    }

    output
}

/// Build a normalized 1D Gaussian kernel truncated at 3 sigma.
fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (sigma * 3.0).ceil().max(1.0) as isize;
    let two_sigma_sq = 2.0 * sigma * sigma;

    let mut kernel: Vec<f32> = (-radius..=radius)
        .map(|i| (-(i * i) as f32 / two_sigma_sq).exp())
        .collect();

    let sum: f32 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}

/// Reflect an index into [0, n), mirroring across the edges.
fn reflect_index(i: isize, n: usize) -> usize {
    let n = n as isize;
    let mut i = i;
    loop {
        if i < 0 {
            i = -i - 1;
        } else if i >= n {
            i = 2 * n - 1 - i;
        } else {
            return i as usize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{constant_grid, gradient_grid};

    fn field_from_grid(data: Vec<f32>, width: usize, height: usize, sigma: f32) -> HeightField {
        let image = GrayscaleImage::from_raw(data, width, height);
        create_depth_map(&image, sigma)
    }

    #[test]
    fn test_normalization_invariant() {
        let field = field_from_grid(gradient_grid(64, 32), 64, 32, DEFAULT_BLUR_SIGMA);
        assert!((field.min().unwrap() - 0.0).abs() < 1e-6);
        assert!((field.max().unwrap() - 1.0).abs() < 1e-6);
        assert!(field.data.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_constant_image_maps_to_zero() {
        let field = field_from_grid(constant_grid(32, 32, 137.0), 32, 32, DEFAULT_BLUR_SIGMA);
        assert!(field.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_blur_smooths_impulse() {
        // Single bright pixel in a dark field: after blurring, neighbors
        // of the peak must be nonzero and the peak must stay the maximum.
        let mut data = constant_grid(17, 17, 0.0);
        data[8 * 17 + 8] = 255.0;
        let field = field_from_grid(data, 17, 17, 2.0);

        let peak = field.get(8, 8).unwrap();
        let neighbor = field.get(9, 8).unwrap();
        let corner = field.get(0, 0).unwrap();
        assert!((peak - 1.0).abs() < 1e-6);
        assert!(neighbor > 0.0 && neighbor < peak);
        assert!(corner < neighbor);
    }

    #[test]
    fn test_zero_sigma_skips_blur() {
        let field = field_from_grid(vec![0.0, 255.0, 0.0, 255.0], 2, 2, 0.0);
        assert_eq!(field.data, vec![0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_kernel_is_normalized_and_symmetric() {
        let kernel = gaussian_kernel(2.0);
        let sum: f32 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert_eq!(kernel.len(), 13); // radius 6 at sigma 2
        for i in 0..kernel.len() / 2 {
            assert!((kernel[i] - kernel[kernel.len() - 1 - i]).abs() < 1e-7);
        }
    }

    #[test]
    fn test_reflect_index() {
        assert_eq!(reflect_index(-1, 5), 0);
        assert_eq!(reflect_index(-2, 5), 1);
        assert_eq!(reflect_index(0, 5), 0);
        assert_eq!(reflect_index(4, 5), 4);
        assert_eq!(reflect_index(5, 5), 4);
        assert_eq!(reflect_index(6, 5), 3);
    }
}
