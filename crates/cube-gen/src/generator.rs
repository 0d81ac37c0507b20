//! Cube generation from an artwork image.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use artmesh_common::{
    CubeResult, Diagnostics, EventLevel, PhysicalDimensions, PipelineError, Result,
    TracingDiagnostics, DEFAULT_DEPTH_CM,
};
use image_ingest::image_dimensions;

use crate::geometry::cube_mesh;

/// Parameters for cube generation.
///
/// Measured width/height override the pixel-derived size only when both
/// are present; artworks are physically measured, not inferred, so a
/// lone axis is not trusted.
#[derive(Debug, Clone)]
pub struct CubeOptions {
    /// Measured artwork width in centimeters.
    pub width_cm: Option<f64>,
    /// Measured artwork height in centimeters.
    pub height_cm: Option<f64>,
    /// Cube depth in centimeters.
    pub depth_cm: f64,
    /// Output directory; defaults to the source image's directory.
    pub output_dir: Option<PathBuf>,
    /// Output file stem override; defaults to the source image's stem.
    pub filename: Option<String>,
}

impl Default for CubeOptions {
    fn default() -> Self {
        Self {
            width_cm: None,
            height_cm: None,
            depth_cm: DEFAULT_DEPTH_CM,
            output_dir: None,
            filename: None,
        }
    }
}

impl CubeOptions {
    /// Options with explicit measured dimensions.
    pub fn with_measurements(width_cm: f64, height_cm: f64) -> Self {
        Self {
            width_cm: Some(width_cm),
            height_cm: Some(height_cm),
            ..Self::default()
        }
    }
}

/// Generate a textured display cube; convenience wrapper over
/// [`CubeGenerator`] with `tracing`-backed diagnostics.
pub fn create_cube(image_path: impl AsRef<Path>, options: &CubeOptions) -> Result<CubeResult> {
    CubeGenerator::new().create_cube(image_path, options)
}

/// Display-cube generator.
///
/// Pure per-call: no state survives between invocations, so one
/// generator can serve concurrent batch items.
pub struct CubeGenerator {
    diag: Arc<dyn Diagnostics>,
}

impl CubeGenerator {
    /// Create a generator that reports through `tracing`.
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(TracingDiagnostics))
    }

    /// Create a generator with a caller-supplied observer.
    pub fn with_diagnostics(diag: Arc<dyn Diagnostics>) -> Self {
        Self { diag }
    }

    /// Build and export the display cube for one artwork image.
    ///
    /// Output is `{stem or custom filename}_cube.obj` in the output
    /// directory (created if absent), with a companion `.mtl` and the
    /// texture image placed alongside when exporting away from the
    /// source directory. Failures are recorded through diagnostics and
    /// returned as typed errors, never swallowed.
    pub fn create_cube(
        &self,
        image_path: impl AsRef<Path>,
        options: &CubeOptions,
    ) -> Result<CubeResult> {
        let image_path = image_path.as_ref();
        self.generate(image_path, options).map_err(|e| {
            self.diag.record_event(
                EventLevel::Error,
                &format!("cube generation failed for {}: {}", image_path.display(), e),
            );
            e
        })
    }

    fn generate(&self, image_path: &Path, options: &CubeOptions) -> Result<CubeResult> {
        if !image_path.exists() {
            return Err(PipelineError::MissingFile(image_path.to_path_buf()));
        }

        let (width_px, height_px) = image_dimensions(image_path)?;
        let dims = PhysicalDimensions::resolve(
            options.width_cm,
            options.height_cm,
            options.depth_cm,
            width_px,
            height_px,
        );
        dims.validate()?;

        self.diag.record_event(
            EventLevel::Info,
            &format!(
                "artwork dimensions: {:.1}cm x {:.1}cm x {:.1}cm",
                dims.width_cm, dims.height_cm, dims.depth_cm
            ),
        );

        let source_dir = image_path.parent().unwrap_or_else(|| Path::new("."));
        let output_dir = options
            .output_dir
            .as_deref()
            .unwrap_or(source_dir)
            .to_path_buf();
        fs::create_dir_all(&output_dir)?;

        let stem = match &options.filename {
            Some(name) => name.clone(),
            None => image_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "artwork".to_string()),
        };
        let obj_path = output_dir.join(format!("{}_cube.obj", stem));

        // The MTL references the texture by file name, so the image must
        // sit next to the OBJ when exporting into another directory.
        let texture = self.stage_texture(image_path, source_dir, &output_dir)?;

        let mut mesh = cube_mesh(&dims);
        mesh.texture = Some(texture);
        obj_io::write_obj(&mesh, &obj_path)?;

        Ok(CubeResult {
            obj_path,
            dimensions: dims,
            source_image: image_path.to_path_buf(),
        })
    }

    fn stage_texture(
        &self,
        image_path: &Path,
        source_dir: &Path,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        if output_dir == source_dir {
            return Ok(image_path.to_path_buf());
        }

        let file_name = image_path
            .file_name()
            .ok_or_else(|| PipelineError::MissingFile(image_path.to_path_buf()))?;
        let target = output_dir.join(file_name);
        // Always copy so a stale file with the same name never wins
        fs::copy(image_path, &target)
            .map_err(|e| PipelineError::export(&target, format!("copy texture: {}", e)))?;
        Ok(target)
    }
}

impl Default for CubeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artmesh_common::CapturedDiagnostics;
    use test_utils::{temp_dir, write_corrupt_image, write_rgb_jpeg};

    #[test]
    fn test_dimension_override() {
        let dir = temp_dir();
        let image = write_rgb_jpeg(dir.path(), "art.jpg", 200, 150);

        let result = create_cube(&image, &CubeOptions::with_measurements(50.0, 30.0)).unwrap();
        assert!((result.dimensions.width_cm - 50.0).abs() < f64::EPSILON);
        assert!((result.dimensions.height_cm - 30.0).abs() < f64::EPSILON);
        assert!((result.dimensions.depth_cm - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pixel_derived_dimensions() {
        let dir = temp_dir();
        let image = write_rgb_jpeg(dir.path(), "art.jpg", 200, 150);

        let result = create_cube(&image, &CubeOptions::default()).unwrap();
        // 200 * 2.54 / 300, 150 * 2.54 / 300
        assert!((result.dimensions.width_cm - 16.933).abs() < 0.01);
        assert!((result.dimensions.height_cm - 12.7).abs() < 0.01);
    }

    #[test]
    fn test_output_naming_and_location() {
        let dir = temp_dir();
        let image = write_rgb_jpeg(dir.path(), "painting.jpg", 120, 120);

        // Default: next to the source image, {stem}_cube.obj
        let result = create_cube(&image, &CubeOptions::default()).unwrap();
        assert_eq!(result.obj_path, dir.path().join("painting_cube.obj"));
        assert!(result.obj_path.exists());
        assert!(dir.path().join("painting_cube.mtl").exists());

        // Custom filename into a new directory
        let out = dir.path().join("exports");
        let options = CubeOptions {
            output_dir: Some(out.clone()),
            filename: Some("piece-42".to_string()),
            ..CubeOptions::default()
        };
        let result = create_cube(&image, &options).unwrap();
        assert_eq!(result.obj_path, out.join("piece-42_cube.obj"));
        // Texture staged alongside the OBJ
        assert!(out.join("painting.jpg").exists());
    }

    #[test]
    fn test_staged_texture_replaces_stale_file() {
        let dir = temp_dir();
        let image = write_rgb_jpeg(dir.path(), "art.jpg", 120, 120);

        let out = dir.path().join("exports");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("art.jpg"), b"stale bytes from an earlier run").unwrap();

        let options = CubeOptions {
            output_dir: Some(out.clone()),
            ..CubeOptions::default()
        };
        create_cube(&image, &options).unwrap();

        let staged = fs::read(out.join("art.jpg")).unwrap();
        assert_eq!(staged, fs::read(&image).unwrap());
    }

    #[test]
    fn test_missing_image_is_typed_error() {
        let err = create_cube("/nonexistent/art.jpg", &CubeOptions::default()).unwrap_err();
        assert!(matches!(err, PipelineError::MissingFile(_)));
    }

    #[test]
    fn test_zero_measurement_is_geometry_error() {
        let dir = temp_dir();
        let image = write_rgb_jpeg(dir.path(), "art.jpg", 120, 120);

        let err = create_cube(&image, &CubeOptions::with_measurements(0.0, 30.0)).unwrap_err();
        assert!(matches!(err, PipelineError::Geometry(_)));
    }

    #[test]
    fn test_failures_are_recorded_not_swallowed() {
        let dir = temp_dir();
        let image = write_corrupt_image(dir.path(), "bad.jpg");

        let diag = Arc::new(CapturedDiagnostics::new());
        let err = CubeGenerator::with_diagnostics(diag.clone())
            .create_cube(&image, &CubeOptions::default())
            .unwrap_err();

        assert!(matches!(err, PipelineError::Decode { .. }));
        let errors = diag.messages_at(EventLevel::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("bad.jpg"));
    }
}
