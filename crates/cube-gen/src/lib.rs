//! Textured display-cube generation.
//!
//! Builds a rectangular box with the real-world footprint of an artwork:
//! the front face carries the artwork image as a texture, the remaining
//! five faces are structural and stay untextured. Physical width and
//! height come from the caller's measurements when supplied, otherwise
//! from pixel dimensions at the assumed 300 DPI.

mod generator;
mod geometry;

// Re-exports
pub use generator::{create_cube, CubeGenerator, CubeOptions};
pub use geometry::{cube_mesh, CUBE_FACE_COUNT, CUBE_VERTEX_COUNT};
