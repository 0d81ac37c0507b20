//! Edge adjacency over triangle faces.

use std::collections::HashMap;

/// Edge incidence counts for a triangle mesh.
///
/// Tracks how many faces touch each undirected edge and how often each
/// directed traversal occurs. Watertightness needs the former; winding
/// consistency needs the latter: in a consistently wound mesh every
/// shared edge is traversed once per direction by its two faces.
#[derive(Debug, Clone)]
pub struct EdgeAdjacency {
    /// Faces incident to each undirected edge. Keys have v0 < v1.
    undirected: HashMap<(u32, u32), usize>,
    /// Traversal counts for each directed edge as it appears in faces.
    directed: HashMap<(u32, u32), usize>,
}

impl EdgeAdjacency {
    /// Build adjacency counts from triangle faces.
    pub fn build(faces: &[[u32; 3]]) -> Self {
        let mut undirected: HashMap<(u32, u32), usize> = HashMap::new();
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();

        for face in faces {
            for (a, b) in [(face[0], face[1]), (face[1], face[2]), (face[2], face[0])] {
                let key = if a < b { (a, b) } else { (b, a) };
                *undirected.entry(key).or_default() += 1;
                *directed.entry((a, b)).or_default() += 1;
            }
        }

        Self {
            undirected,
            directed,
        }
    }

    /// Total number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.undirected.len()
    }

    /// Edges with exactly one incident face (holes in the surface).
    pub fn boundary_edge_count(&self) -> usize {
        self.undirected.values().filter(|&&n| n == 1).count()
    }

    /// Edges with more than two incident faces.
    pub fn non_manifold_edge_count(&self) -> usize {
        self.undirected.values().filter(|&&n| n > 2).count()
    }

    /// Whether every edge is shared by exactly two faces.
    pub fn is_watertight(&self) -> bool {
        self.undirected.values().all(|&n| n == 2)
    }

    /// Whether all faces agree on orientation.
    ///
    /// For every edge shared by exactly two faces, the faces must
    /// traverse it in opposite directions. Boundary edges (if any) are
    /// ignored here; watertightness reports them separately.
    pub fn is_winding_consistent(&self) -> bool {
        for (&(a, b), &count) in &self.undirected {
            if count != 2 {
                continue;
            }
            let forward = self.directed.get(&(a, b)).copied().unwrap_or(0);
            let reverse = self.directed.get(&(b, a)).copied().unwrap_or(0);
            if forward != 1 || reverse != 1 {
                return false;
            }
        }
        true
    }
}
