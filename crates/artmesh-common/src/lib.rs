//! Shared types for the artmesh image-to-3D pipelines.
//!
//! This crate holds everything the pipeline crates have in common:
//!
//! - The triangle mesh representation ([`TriMesh`]) produced by both the
//!   terrain and cube generators
//! - Physical dimension handling ([`PhysicalDimensions`]) including the
//!   pixel-to-centimeter conversion used when no measured size is supplied
//! - The error taxonomy ([`PipelineError`]) shared across all crates
//! - The [`Diagnostics`] observer used instead of ambient logging calls

pub mod diag;
pub mod dimensions;
pub mod error;
pub mod mesh;
pub mod result;

// Re-exports
pub use diag::{CapturedDiagnostics, Diagnostics, EventLevel, TracingDiagnostics};
pub use dimensions::{PhysicalDimensions, CM_PER_INCH, DEFAULT_DEPTH_CM, DEFAULT_DPI};
pub use error::{PipelineError, Result};
pub use mesh::TriMesh;
pub use result::{CubeResult, TerrainResult};
