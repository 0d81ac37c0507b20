//! Image ingestion for the artmesh pipelines.
//!
//! Both generators start from the same two primitives:
//!
//! - [`validate_image`] checks a candidate file against the upload
//!   constraints (format, pixel size, color mode) and reports pass/fail
//!   with a reason. Invalid input is a normal return value, never an error.
//! - [`load_grayscale`] decodes an image into a row-major `f32` intensity
//!   grid for the terrain generator.
//!
//! Pixel-dimension lookup ([`image_dimensions`]) is exposed separately so
//! the cube generator can resolve physical sizes without a full decode.

mod loader;
mod validator;

// Re-exports
pub use loader::{image_dimensions, load_grayscale, GrayscaleImage};
pub use validator::{validate_image, ImageReport, MAX_DIMENSION_PX, MIN_DIMENSION_PX};
