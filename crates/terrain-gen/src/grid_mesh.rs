//! Regular-grid triangulation of a height field.

use artmesh_common::{PipelineError, Result, TriMesh};

use crate::depth::HeightField;

/// Default vertical scale applied to normalized heights.
pub const DEFAULT_SCALE_FACTOR: f64 = 1.0;

/// Triangulate a height field into a regular-grid mesh.
///
/// For an H x W field this produces exactly H*W vertices at integer
/// (x, y) pixel coordinates with z = height * `scale_factor`, and
/// 2*(H-1)*(W-1) triangular faces. Each unit cell (i, j) splits along a
/// fixed diagonal into [v(i,j), v(i,j+1), v(i+1,j)] and
/// [v(i,j+1), v(i+1,j+1), v(i+1,j)], with row-major vertex index i*W + j.
///
/// The surface has no bottom, so the result is intentionally not
/// watertight. Fields narrower than two samples in either axis cannot
/// form a cell and are rejected as a geometry error.
pub fn generate_mesh(field: &HeightField, scale_factor: f64) -> Result<TriMesh> {
    let (width, height) = (field.width, field.height);
    if width < 2 || height < 2 {
        return Err(PipelineError::geometry(format!(
            "height field too small to triangulate: {}x{}",
            width, height
        )));
    }

    let mut mesh = TriMesh::with_capacity(width * height, 2 * (width - 1) * (height - 1));

    for i in 0..height {
        for j in 0..width {
            let z = field.data[i * width + j] as f64 * scale_factor;
            mesh.vertices.push([j as f64, i as f64, z]);
        }
    }

    let w = width as u32;
    for i in 0..(height as u32 - 1) {
        for j in 0..(w - 1) {
            let v0 = i * w + j;
            let v1 = v0 + 1;
            let v2 = (i + 1) * w + j;
            let v3 = v2 + 1;
            mesh.faces.push([v0, v1, v2]);
            mesh.faces.push([v1, v3, v2]);
        }
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::gradient_grid;

    fn field(width: usize, height: usize) -> HeightField {
        HeightField {
            data: gradient_grid(width, height)
                .into_iter()
                .map(|v| v / 255.0)
                .collect(),
            width,
            height,
        }
    }

    #[test]
    fn test_grid_mesh_size_invariant() {
        let mesh = generate_mesh(&field(7, 5), 1.0).unwrap();
        assert_eq!(mesh.vertex_count(), 35);
        assert_eq!(mesh.face_count(), 2 * 6 * 4);
        mesh.validate_indices().unwrap();
    }

    #[test]
    fn test_diagonal_split_indices() {
        // 3x2 field: first cell must split into [0,1,3] and [1,4,3]
        let mesh = generate_mesh(&field(3, 2), 1.0).unwrap();
        assert_eq!(mesh.faces[0], [0, 1, 3]);
        assert_eq!(mesh.faces[1], [1, 4, 3]);
        assert_eq!(mesh.faces[2], [1, 2, 4]);
        assert_eq!(mesh.faces[3], [2, 5, 4]);
    }

    #[test]
    fn test_vertices_at_pixel_coordinates() {
        let mesh = generate_mesh(&field(3, 3), 1.0).unwrap();
        // Row-major: vertex i*W+j sits at (x=j, y=i)
        assert_eq!(mesh.vertices[0][0], 0.0);
        assert_eq!(mesh.vertices[0][1], 0.0);
        assert_eq!(mesh.vertices[5][0], 2.0);
        assert_eq!(mesh.vertices[5][1], 1.0);
    }

    #[test]
    fn test_scale_factor_applies_to_z() {
        let f = HeightField {
            data: vec![0.0, 1.0, 0.5, 0.25],
            width: 2,
            height: 2,
        };
        let mesh = generate_mesh(&f, 4.0).unwrap();
        assert!((mesh.vertices[1][2] - 4.0).abs() < 1e-9);
        assert!((mesh.vertices[3][2] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_field_is_geometry_error() {
        let thin = HeightField {
            data: vec![0.0; 5],
            width: 1,
            height: 5,
        };
        let err = generate_mesh(&thin, 1.0).unwrap_err();
        assert!(matches!(err, PipelineError::Geometry(_)));
    }

    #[test]
    fn test_no_uvs_on_terrain_mesh() {
        let mesh = generate_mesh(&field(4, 4), 1.0).unwrap();
        assert!(!mesh.has_uvs());
        assert!(mesh.texture.is_none());
    }
}
