//! Test data generators for creating synthetic grids.
//!
//! These generators create predictable, verifiable data patterns that can
//! be used across the test suite.

/// Creates a grid with a linear ramp along the x axis, values in [0, 255].
///
/// Mirrors the gradient image fixtures so height-field assertions can be
/// made against the same pattern without touching the filesystem.
pub fn gradient_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for _row in 0..height {
        for col in 0..width {
            data.push((col * 255 / width.max(1)) as f32);
        }
    }
    data
}

/// Creates a grid where every sample has the same value.
pub fn constant_grid(width: usize, height: usize, value: f32) -> Vec<f32> {
    vec![value; width * height]
}
