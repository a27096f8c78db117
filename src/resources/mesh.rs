//! CPU-side mesh data
//!
//! [`MeshData`] is the immutable bundle a drawable object is built from:
//! planar vertex positions, optional normals, optional texture coordinates,
//! and a triangle index list. Validation happens once, before the GPU copy
//! is created; the attribute set available on the GPU is derived once from
//! [`MeshData::capabilities`] and never re-examined per draw.

use bitflags::bitflags;

use crate::errors::{Result, WhirlError};

bitflags! {
    /// Vertex attributes present on a mesh beyond positions.
    ///
    /// Decided at creation time; pipeline variants and vertex buffer
    /// bindings are selected from these flags, so an absent attribute is
    /// never bound.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MeshCapabilities: u32 {
        const NORMALS = 1 << 0;
        const UV      = 1 << 1;
    }
}

/// Immutable triangle mesh data on the CPU.
///
/// `normals` and `uvs` are either empty or hold exactly one entry per
/// position. `indices` is a flat triangle list referencing positions.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Derives the attribute flags from which per-object GPU state is built.
    #[must_use]
    pub fn capabilities(&self) -> MeshCapabilities {
        let mut caps = MeshCapabilities::empty();
        if !self.normals.is_empty() {
            caps |= MeshCapabilities::NORMALS;
        }
        if !self.uvs.is_empty() {
            caps |= MeshCapabilities::UV;
        }
        caps
    }

    /// Checks the structural invariants of the mesh.
    ///
    /// Every index must reference an existing position, the index list must
    /// describe whole triangles, and optional attributes must either be
    /// absent or cover every vertex.
    pub fn validate(&self) -> Result<()> {
        if self.positions.is_empty() {
            return Err(WhirlError::InvalidMesh("mesh has no positions".into()));
        }
        if self.indices.is_empty() {
            return Err(WhirlError::InvalidMesh("mesh has no indices".into()));
        }
        if self.indices.len() % 3 != 0 {
            return Err(WhirlError::InvalidMesh(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }

        let vertex_count = self.positions.len() as u32;
        if let Some(&bad) = self.indices.iter().find(|&&i| i >= vertex_count) {
            return Err(WhirlError::InvalidMesh(format!(
                "index {bad} out of range (vertex count {vertex_count})"
            )));
        }

        if !self.normals.is_empty() && self.normals.len() != self.positions.len() {
            return Err(WhirlError::InvalidMesh(format!(
                "normal count {} does not match position count {}",
                self.normals.len(),
                self.positions.len()
            )));
        }
        if !self.uvs.is_empty() && self.uvs.len() != self.positions.len() {
            return Err(WhirlError::InvalidMesh(format!(
                "uv count {} does not match position count {}",
                self.uvs.len(),
                self.positions.len()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> MeshData {
        MeshData {
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            normals: vec![[0.0, 0.0, 1.0]; 3],
            uvs: vec![],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn valid_triangle_passes() {
        assert!(triangle().validate().is_ok());
    }

    #[test]
    fn out_of_range_index_rejected() {
        let mut mesh = triangle();
        mesh.indices = vec![0, 1, 3];
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn capabilities_reflect_attributes() {
        let mesh = triangle();
        assert_eq!(mesh.capabilities(), MeshCapabilities::NORMALS);

        let mut with_uv = triangle();
        with_uv.uvs = vec![[0.0, 0.0]; 3];
        assert_eq!(
            with_uv.capabilities(),
            MeshCapabilities::NORMALS | MeshCapabilities::UV
        );
    }
}
