//! OBJ/MTL export.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use artmesh_common::{PipelineError, Result, TriMesh};
use tracing::debug;

/// Material name for textured faces.
pub const ARTWORK_MATERIAL: &str = "artwork";

/// Material name for untextured structural faces.
pub const BACKING_MATERIAL: &str = "backing";

/// Export a mesh as a Wavefront OBJ file.
///
/// When the mesh carries a texture, a companion `.mtl` file is written
/// next to the OBJ, referencing the texture image by file name (the
/// caller is responsible for placing the image alongside the OBJ).
/// Textured faces use the `artwork` material; untextured faces fall back
/// to a neutral `backing` material.
///
/// The parent directory is created if absent. Returns the OBJ path.
pub fn write_obj(mesh: &TriMesh, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();

    if mesh.is_empty() {
        return Err(PipelineError::export(path, "mesh has no geometry"));
    }
    mesh.validate_indices()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| PipelineError::export(path, format!("create directory: {}", e)))?;
        }
    }

    let mtl_path = mesh.texture.as_ref().map(|_| path.with_extension("mtl"));

    let mut out = String::new();
    if let Some(mtl_path) = &mtl_path {
        if let Some(name) = mtl_path.file_name() {
            out.push_str(&format!("mtllib {}\n", name.to_string_lossy()));
        }
    }

    for v in &mesh.vertices {
        out.push_str(&format!("v {:.6} {:.6} {:.6}\n", v[0], v[1], v[2]));
    }
    for uv in &mesh.uvs {
        out.push_str(&format!("vt {:.6} {:.6}\n", uv[0], uv[1]));
    }

    // Emit a usemtl directive only when the material changes, preserving
    // face order. OBJ indices are 1-based.
    let mut current_material: Option<&str> = None;
    for (i, face) in mesh.faces.iter().enumerate() {
        let corners = mesh.face_uvs.get(i).copied().flatten();

        if mtl_path.is_some() {
            let wanted = if corners.is_some() {
                ARTWORK_MATERIAL
            } else {
                BACKING_MATERIAL
            };
            if current_material != Some(wanted) {
                out.push_str(&format!("usemtl {}\n", wanted));
                current_material = Some(wanted);
            }
        }

        match corners {
            Some(uv) => out.push_str(&format!(
                "f {}/{} {}/{} {}/{}\n",
                face[0] + 1,
                uv[0] + 1,
                face[1] + 1,
                uv[1] + 1,
                face[2] + 1,
                uv[2] + 1
            )),
            None => out.push_str(&format!("f {} {} {}\n", face[0] + 1, face[1] + 1, face[2] + 1)),
        }
    }

    fs::write(path, &out).map_err(|e| PipelineError::export(path, e.to_string()))?;

    if let (Some(mtl_path), Some(texture)) = (&mtl_path, &mesh.texture) {
        write_mtl(mtl_path, texture)?;
    }

    debug!(
        "wrote {} ({} vertices, {} faces)",
        path.display(),
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(path.to_path_buf())
}

/// Write the companion material library.
fn write_mtl(path: &Path, texture: &Path) -> Result<()> {
    let texture_name = texture
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| texture.to_string_lossy().into_owned());

    let mut out = Vec::new();
    writeln!(out, "newmtl {}", ARTWORK_MATERIAL)
        .and_then(|_| writeln!(out, "Ka 1.000000 1.000000 1.000000"))
        .and_then(|_| writeln!(out, "Kd 1.000000 1.000000 1.000000"))
        .and_then(|_| writeln!(out, "map_Kd {}", texture_name))
        .and_then(|_| writeln!(out))
        .and_then(|_| writeln!(out, "newmtl {}", BACKING_MATERIAL))
        .and_then(|_| writeln!(out, "Kd 0.800000 0.800000 0.800000"))
        .map_err(|e| PipelineError::export(path, e.to_string()))?;

    fs::write(path, &out).map_err(|e| PipelineError::export(path, e.to_string()))
}
