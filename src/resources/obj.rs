//! OBJ mesh loading
//!
//! Thin wrapper around `tobj` flattening the first model of an OBJ file
//! into [`MeshData`]. A failed load is an error the caller propagates; the
//! engine never continues with a partially constructed mesh.

use std::path::Path;

use crate::errors::{Result, WhirlError};
use crate::resources::mesh::MeshData;

/// Loads the first model of an OBJ file as planar mesh data.
pub fn load_obj(path: impl AsRef<Path>) -> Result<MeshData> {
    let path = path.as_ref();
    let (models, _materials) = tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS)?;

    let model = models.into_iter().next().ok_or_else(|| {
        WhirlError::MeshLoadFailed(format!("{} contains no models", path.display()))
    })?;
    let mesh = model.mesh;

    let positions = mesh
        .positions
        .chunks_exact(3)
        .map(|p| [p[0], p[1], p[2]])
        .collect();
    let normals = mesh
        .normals
        .chunks_exact(3)
        .map(|n| [n[0], n[1], n[2]])
        .collect();
    let uvs = mesh
        .texcoords
        .chunks_exact(2)
        .map(|t| [t[0], t[1]])
        .collect();

    let data = MeshData {
        positions,
        normals,
        uvs,
        indices: mesh.indices,
    };
    data.validate()?;
    Ok(data)
}
