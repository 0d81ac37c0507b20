//! Triangle mesh representation shared by the terrain and cube generators.

use std::path::PathBuf;

use crate::error::{PipelineError, Result};

/// An indexed triangle mesh with optional per-face-corner UV coordinates
/// and an optional associated texture image.
///
/// Faces index into `vertices`. UV assignment is per face: a face either
/// has no texture coordinates or one UV index per corner, pointing into
/// the shared `uvs` table. The cube generator textures only the front
/// face, so most faces of a cube mesh carry `None`.
#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    /// Vertex positions as (x, y, z) triples.
    pub vertices: Vec<[f64; 3]>,
    /// Triangle faces as vertex index triplets.
    pub faces: Vec<[u32; 3]>,
    /// Shared UV table in texture space (u right, v up).
    pub uvs: Vec<[f64; 2]>,
    /// Per-face UV corner indices into `uvs`; parallel to `faces`.
    /// Empty when the mesh has no texture coordinates at all.
    pub face_uvs: Vec<Option<[u32; 3]>>,
    /// Texture image applied to the textured faces, if any.
    pub texture: Option<PathBuf>,
}

impl TriMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with pre-allocated storage.
    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
            uvs: Vec::new(),
            face_uvs: Vec::new(),
            texture: None,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh has no geometry at all.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Whether any face carries texture coordinates.
    pub fn has_uvs(&self) -> bool {
        self.face_uvs.iter().any(Option::is_some)
    }

    /// Verify that every face and UV index references existing data.
    pub fn validate_indices(&self) -> Result<()> {
        let vertex_count = self.vertices.len() as u32;
        for (i, face) in self.faces.iter().enumerate() {
            for &v in face {
                if v >= vertex_count {
                    return Err(PipelineError::geometry(format!(
                        "face {} references vertex {} but mesh has {} vertices",
                        i, v, vertex_count
                    )));
                }
            }
        }

        if !self.face_uvs.is_empty() && self.face_uvs.len() != self.faces.len() {
            return Err(PipelineError::geometry(format!(
                "face UV table has {} entries for {} faces",
                self.face_uvs.len(),
                self.faces.len()
            )));
        }

        let uv_count = self.uvs.len() as u32;
        for (i, corners) in self.face_uvs.iter().enumerate() {
            if let Some(corners) = corners {
                for &t in corners {
                    if t >= uv_count {
                        return Err(PipelineError::geometry(format!(
                            "face {} references UV {} but mesh has {} UVs",
                            i, t, uv_count
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Axis-aligned bounds as (min, max), or None for an empty mesh.
    pub fn bounds(&self) -> Option<([f64; 3], [f64; 3])> {
        let first = self.vertices.first()?;
        let mut min = *first;
        let mut max = *first;
        for v in &self.vertices {
            for axis in 0..3 {
                min[axis] = min[axis].min(v[axis]);
                max[axis] = max[axis].max(v[axis]);
            }
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> TriMesh {
        TriMesh {
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            faces: vec![[0, 1, 2]],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = TriMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert!(mesh.bounds().is_none());
    }

    #[test]
    fn test_validate_indices_accepts_triangle() {
        assert!(triangle().validate_indices().is_ok());
    }

    #[test]
    fn test_validate_indices_rejects_out_of_range() {
        let mut mesh = triangle();
        mesh.faces.push([0, 1, 3]);
        assert!(mesh.validate_indices().is_err());
    }

    #[test]
    fn test_validate_indices_rejects_bad_uv_table() {
        let mut mesh = triangle();
        mesh.uvs = vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        // One entry for one face is fine
        mesh.face_uvs = vec![Some([0, 1, 2])];
        assert!(mesh.validate_indices().is_ok());

        // UV index past the table is not
        mesh.face_uvs = vec![Some([0, 1, 5])];
        assert!(mesh.validate_indices().is_err());
    }

    #[test]
    fn test_bounds() {
        let mesh = TriMesh {
            vertices: vec![[0.0, -1.0, 2.0], [3.0, 1.0, -2.0]],
            faces: vec![],
            ..Default::default()
        };
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, [0.0, -1.0, -2.0]);
        assert_eq!(max, [3.0, 1.0, 2.0]);
    }
}
