//! Post-hoc quality checks for exported meshes.
//!
//! Re-loads an exported OBJ file and verifies it is non-empty,
//! watertight (every edge shared by exactly two faces) and
//! winding-consistent (adjacent faces agree on orientation). Invalid
//! meshes are reported with a descriptive reason, never as an error.
//!
//! These expectations hold for display-cube outputs. Terrain meshes are
//! open-bottomed height surfaces and will correctly report as not
//! watertight; do not gate them on this check.

mod adjacency;
mod validate;

// Re-exports
pub use adjacency::EdgeAdjacency;
pub use validate::{check_mesh, validate_mesh, MeshReport};
