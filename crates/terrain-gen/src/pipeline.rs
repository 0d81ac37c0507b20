//! One-shot terrain pipeline chaining all stages.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use artmesh_common::{
    Diagnostics, EventLevel, Result, TerrainResult, TracingDiagnostics, TriMesh,
};
use image_ingest::load_grayscale;

use crate::depth::{create_depth_map, DEFAULT_BLUR_SIGMA};
use crate::grid_mesh::{generate_mesh, DEFAULT_SCALE_FACTOR};

/// Export a terrain mesh as a Wavefront OBJ file.
pub fn save_mesh(mesh: &TriMesh, path: impl AsRef<Path>) -> Result<PathBuf> {
    obj_io::write_obj(mesh, path)
}

/// Parameters for the one-shot pipeline.
#[derive(Debug, Clone, Copy)]
pub struct TerrainOptions {
    /// Gaussian smoothing strength in pixels.
    pub blur_sigma: f32,
    /// Vertical scale applied to normalized heights.
    pub scale_factor: f64,
}

impl Default for TerrainOptions {
    fn default() -> Self {
        Self {
            blur_sigma: DEFAULT_BLUR_SIGMA,
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

/// Convenience runner: load, smooth, triangulate, export.
///
/// The individual stages stay available as free functions for callers
/// that need intermediate results; this type only chains them and
/// reports progress through its [`Diagnostics`] handle.
pub struct TerrainPipeline {
    diag: Arc<dyn Diagnostics>,
}

impl TerrainPipeline {
    /// Create a pipeline that reports through `tracing`.
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(TracingDiagnostics))
    }

    /// Create a pipeline with a caller-supplied observer.
    pub fn with_diagnostics(diag: Arc<dyn Diagnostics>) -> Self {
        Self { diag }
    }

    /// Run all four stages in order and export to `output_path`.
    pub fn process(
        &self,
        image_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
        options: &TerrainOptions,
    ) -> Result<TerrainResult> {
        let image_path = image_path.as_ref();

        let image = load_grayscale(image_path)?;
        self.diag.record_event(
            EventLevel::Info,
            &format!(
                "loaded {} ({}x{} px)",
                image_path.display(),
                image.width,
                image.height
            ),
        );

        let field = create_depth_map(&image, options.blur_sigma);
        let mesh = generate_mesh(&field, options.scale_factor)?;
        let obj_path = save_mesh(&mesh, output_path)?;

        self.diag.record_event(
            EventLevel::Info,
            &format!(
                "exported terrain mesh {} ({} vertices, {} faces)",
                obj_path.display(),
                mesh.vertex_count(),
                mesh.face_count()
            ),
        );

        Ok(TerrainResult {
            obj_path,
            grid_size: (field.width, field.height),
            scale_factor: options.scale_factor,
        })
    }
}

impl Default for TerrainPipeline {
    fn default() -> Self {
        Self::new()
    }
}
