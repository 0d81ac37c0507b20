//! Fixed cube topology.

use artmesh_common::{PhysicalDimensions, TriMesh};

/// A display cube always has 8 vertices.
pub const CUBE_VERTEX_COUNT: usize = 8;

/// A display cube always has 12 triangular faces (2 per box face).
pub const CUBE_FACE_COUNT: usize = 12;

/// Build the axis-aligned display box for the given dimensions.
///
/// The box spans x in [0, width], y in [0, height], z in [-depth, 0]:
/// the front face lies at z = 0, the back face at z = -depth. Faces are
/// enumerated explicitly (front, back, top, bottom, left, right), each
/// as two triangles with outward-facing winding.
///
/// Only the two front-face triangles receive UV coordinates, mapping the
/// full source image with corners (0,1), (1,1), (1,0), (0,0) in vertex
/// order. The other faces stay untextured; a viewer renders them with
/// the neutral backing material.
pub fn cube_mesh(dims: &PhysicalDimensions) -> TriMesh {
    let w = dims.width_cm;
    let h = dims.height_cm;
    let d = dims.depth_cm;

    let vertices = vec![
        // Front face (textured)
        [0.0, 0.0, 0.0], // 0
        [w, 0.0, 0.0],   // 1
        [w, h, 0.0],     // 2
        [0.0, h, 0.0],   // 3
        // Back face
        [0.0, 0.0, -d], // 4
        [w, 0.0, -d],   // 5
        [w, h, -d],     // 6
        [0.0, h, -d],   // 7
    ];

    let faces = vec![
        // Front
        [0, 1, 2],
        [0, 2, 3],
        // Back
        [5, 4, 7],
        [5, 7, 6],
        // Top
        [3, 2, 6],
        [3, 6, 7],
        // Bottom
        [4, 5, 1],
        [4, 1, 0],
        // Left
        [4, 0, 3],
        [4, 3, 7],
        // Right
        [1, 5, 6],
        [1, 6, 2],
    ];

    let uvs = vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
    let mut face_uvs = vec![None; faces.len()];
    face_uvs[0] = Some([0, 1, 2]);
    face_uvs[1] = Some([0, 2, 3]);

    TriMesh {
        vertices,
        faces,
        uvs,
        face_uvs,
        texture: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> PhysicalDimensions {
        PhysicalDimensions::new(50.0, 30.0, 3.0)
    }

    #[test]
    fn test_cube_topology_invariant() {
        let mesh = cube_mesh(&dims());
        assert_eq!(mesh.vertex_count(), CUBE_VERTEX_COUNT);
        assert_eq!(mesh.face_count(), CUBE_FACE_COUNT);
        mesh.validate_indices().unwrap();
    }

    #[test]
    fn test_cube_spans_expected_box() {
        let mesh = cube_mesh(&dims());
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, [0.0, 0.0, -3.0]);
        assert_eq!(max, [50.0, 30.0, 0.0]);
    }

    #[test]
    fn test_only_front_face_is_textured() {
        let mesh = cube_mesh(&dims());
        let textured: Vec<usize> = mesh
            .face_uvs
            .iter()
            .enumerate()
            .filter_map(|(i, uv)| uv.map(|_| i))
            .collect();
        assert_eq!(textured, vec![0, 1]);
        assert_eq!(mesh.uvs.len(), 4);
    }

    #[test]
    fn test_every_edge_shared_by_two_faces() {
        // Watertight by construction: 18 undirected edges, each with
        // exactly two incident faces.
        use std::collections::HashMap;

        let mesh = cube_mesh(&dims());
        let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
        for face in &mesh.faces {
            for (a, b) in [(face[0], face[1]), (face[1], face[2]), (face[2], face[0])] {
                let key = if a < b { (a, b) } else { (b, a) };
                *edges.entry(key).or_default() += 1;
            }
        }

        assert_eq!(edges.len(), 18);
        assert!(edges.values().all(|&count| count == 2));
    }

    #[test]
    fn test_winding_is_consistent() {
        // Every shared edge must be traversed once in each direction.
        use std::collections::HashMap;

        let mesh = cube_mesh(&dims());
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        for face in &mesh.faces {
            for (a, b) in [(face[0], face[1]), (face[1], face[2]), (face[2], face[0])] {
                *directed.entry((a, b)).or_default() += 1;
            }
        }

        for (&(a, b), &count) in &directed {
            assert_eq!(count, 1, "edge ({a}, {b}) traversed twice in same direction");
            assert_eq!(directed.get(&(b, a)), Some(&1), "edge ({a}, {b}) has no reverse");
        }
    }
}
