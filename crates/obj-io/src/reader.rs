//! OBJ import for post-hoc mesh checking.

use std::fs;
use std::path::Path;

use artmesh_common::{PipelineError, Result, TriMesh};

/// Read a Wavefront OBJ file into a [`TriMesh`].
///
/// Supports the subset this workspace exports: `v`, `vt` and `f` records
/// with `a`, `a/t` or `a//n` corner syntax. Polygonal faces are
/// fan-triangulated. Normals, groups and material directives are skipped.
/// Fails with `MissingFile` for an absent path and `Decode` for malformed
/// records.
pub fn read_obj(path: impl AsRef<Path>) -> Result<TriMesh> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PipelineError::MissingFile(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes)
        .map_err(|_| PipelineError::decode(path, "not valid UTF-8 text"))?;
    let mut mesh = TriMesh::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let keyword = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();

        match keyword {
            "v" => {
                let v = parse_floats::<3>(path, line_no, &rest)?;
                mesh.vertices.push(v);
            }
            "vt" => {
                let uv = parse_floats::<2>(path, line_no, &rest)?;
                mesh.uvs.push(uv);
            }
            "f" => {
                if rest.len() < 3 {
                    return Err(malformed(path, line_no, "face with fewer than 3 corners"));
                }
                let corners: Vec<(u32, Option<u32>)> = rest
                    .iter()
                    .map(|c| parse_corner(path, line_no, c))
                    .collect::<Result<_>>()?;

                // Fan triangulation keeps winding for convex polygons
                for i in 1..corners.len() - 1 {
                    let tri = [corners[0], corners[i], corners[i + 1]];
                    mesh.faces.push([tri[0].0, tri[1].0, tri[2].0]);
                    match (tri[0].1, tri[1].1, tri[2].1) {
                        (Some(a), Some(b), Some(c)) => mesh.face_uvs.push(Some([a, b, c])),
                        _ => mesh.face_uvs.push(None),
                    }
                }
            }
            // mtllib/usemtl/o/g/s/vn carry no geometry
            _ => {}
        }
    }

    if mesh.face_uvs.iter().all(Option::is_none) {
        mesh.face_uvs.clear();
    }

    mesh.validate_indices()
        .map_err(|e| PipelineError::decode(path, e.to_string()))?;
    Ok(mesh)
}

fn parse_floats<const N: usize>(path: &Path, line_no: usize, parts: &[&str]) -> Result<[f64; N]> {
    if parts.len() < N {
        return Err(malformed(path, line_no, "too few components"));
    }
    let mut out = [0.0; N];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = parts[i]
            .parse::<f64>()
            .map_err(|_| malformed(path, line_no, "invalid number"))?;
    }
    Ok(out)
}

/// Parse one face corner: `v`, `v/vt`, `v//vn` or `v/vt/vn`.
/// Returns zero-based vertex and optional UV indices.
fn parse_corner(path: &Path, line_no: usize, corner: &str) -> Result<(u32, Option<u32>)> {
    let mut fields = corner.split('/');

    let v = fields
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|&v| v >= 1)
        .ok_or_else(|| malformed(path, line_no, "invalid vertex index"))?;

    let vt = match fields.next() {
        Some("") | None => None,
        Some(s) => Some(
            s.parse::<u32>()
                .ok()
                .filter(|&t| t >= 1)
                .ok_or_else(|| malformed(path, line_no, "invalid UV index"))?,
        ),
    };

    Ok((v - 1, vt.map(|t| t - 1)))
}

fn malformed(path: &Path, line_no: usize, what: &str) -> PipelineError {
    PipelineError::decode(path, format!("line {}: {}", line_no + 1, what))
}
