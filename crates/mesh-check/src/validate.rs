//! Mesh validation entry points.

use std::path::Path;

use artmesh_common::{PipelineError, Result, TriMesh};
use serde::{Deserialize, Serialize};

use crate::adjacency::EdgeAdjacency;

/// Outcome of validating a mesh.
///
/// Like image validation, invalidity is a value used as a quality gate,
/// not a failure of the generation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshReport {
    pub valid: bool,
    pub reason: String,
}

impl MeshReport {
    fn ok() -> Self {
        Self {
            valid: true,
            reason: "mesh is valid: watertight, winding-consistent".to_string(),
        }
    }

    fn fail(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: reason.into(),
        }
    }
}

/// Validate an exported mesh file.
///
/// Loads the OBJ and checks non-emptiness, watertightness and winding
/// consistency. A missing file or unparsable data is an invalid report;
/// only unexpected I/O failures propagate as `Err`. Read-only: the file
/// is never modified or re-exported.
pub fn validate_mesh(path: impl AsRef<Path>) -> Result<MeshReport> {
    let path = path.as_ref();

    let mesh = match obj_io::read_obj(path) {
        Ok(mesh) => mesh,
        Err(PipelineError::MissingFile(_)) => {
            return Ok(MeshReport::fail("file does not exist"))
        }
        Err(PipelineError::Decode { message, .. }) => {
            return Ok(MeshReport::fail(format!("failed to parse mesh: {}", message)))
        }
        Err(e) => return Err(e),
    };

    Ok(check_mesh(&mesh))
}

/// Run the topology checks on an in-memory mesh.
pub fn check_mesh(mesh: &TriMesh) -> MeshReport {
    if mesh.is_empty() {
        return MeshReport::fail("mesh is empty");
    }

    let adjacency = EdgeAdjacency::build(&mesh.faces);

    if !adjacency.is_watertight() {
        let boundary = adjacency.boundary_edge_count();
        let non_manifold = adjacency.non_manifold_edge_count();
        return MeshReport::fail(format!(
            "mesh is not watertight: {} boundary edges, {} non-manifold edges",
            boundary, non_manifold
        ));
    }

    if !adjacency.is_winding_consistent() {
        return MeshReport::fail("face winding is inconsistent");
    }

    MeshReport::ok()
}
