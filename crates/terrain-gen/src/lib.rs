//! Depth-map terrain generation.
//!
//! Converts a grayscale artwork photo into an open-bottomed height
//! surface: Gaussian smoothing suppresses sensor and compression noise,
//! min-max normalization maps intensities to [0, 1], and a regular grid
//! triangulation turns the field into a mesh with per-vertex height.
//!
//! The stages form an explicit builder: each function takes the previous
//! stage's output as a required argument, so nothing is recomputed behind
//! the caller's back. [`TerrainPipeline::process`] chains all stages with
//! the documented defaults for the common case.
//!
//! Terrain meshes are deliberately not watertight (there is no bottom or
//! skirt), so the mesh checker's watertightness and winding expectations
//! apply to cube outputs only.

mod depth;
mod grid_mesh;
mod pipeline;

// Re-exports
pub use depth::{create_depth_map, HeightField, DEFAULT_BLUR_SIGMA};
pub use grid_mesh::{generate_mesh, DEFAULT_SCALE_FACTOR};
pub use pipeline::{save_mesh, TerrainOptions, TerrainPipeline};
