//! Wavefront OBJ import/export.
//!
//! The export side writes the line-based OBJ text format directly:
//! `v x y z` for vertices, `vt u v` for texture coordinates, `f a/ta b/tb
//! c/tc` for textured faces and `f a b c` for untextured ones, plus a
//! companion `.mtl` referencing the texture image as a diffuse map when
//! the mesh carries one. The import side reads the same subset back so
//! exported artifacts can be independently re-checked.

mod reader;
mod writer;

// Re-exports
pub use reader::read_obj;
pub use writer::{write_obj, ARTWORK_MATERIAL, BACKING_MATERIAL};
