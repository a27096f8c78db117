use crate::resources::mesh::MeshData;

pub struct PlaneOptions {
    pub width: f32,
    pub depth: f32,
    pub width_segments: u32,
    pub depth_segments: u32,
}

impl Default for PlaneOptions {
    fn default() -> Self {
        Self {
            width: 1.0,
            depth: 1.0,
            width_segments: 1,
            depth_segments: 1,
        }
    }
}

/// Grid plane in the XZ plane, facing +Y.
#[must_use]
pub fn create_plane(options: &PlaneOptions) -> MeshData {
    let width_segments = options.width_segments.max(1);
    let depth_segments = options.depth_segments.max(1);

    let half_w = options.width / 2.0;
    let half_d = options.depth / 2.0;

    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();
    let mut indices = Vec::new();

    for z in 0..=depth_segments {
        let v_ratio = z as f32 / depth_segments as f32;
        let pz = -half_d + v_ratio * options.depth;
        for x in 0..=width_segments {
            let u_ratio = x as f32 / width_segments as f32;
            let px = -half_w + u_ratio * options.width;

            positions.push([px, 0.0, pz]);
            normals.push([0.0, 1.0, 0.0]);
            uvs.push([u_ratio, v_ratio]);
        }
    }

    let stride = width_segments + 1;
    for z in 0..depth_segments {
        for x in 0..width_segments {
            let v0 = z * stride + x;
            let v1 = v0 + 1;
            let v2 = (z + 1) * stride + x;
            let v3 = v2 + 1;

            // Counter-clockwise when seen from +Y
            indices.extend_from_slice(&[v0, v2, v1]);
            indices.extend_from_slice(&[v1, v2, v3]);
        }
    }

    MeshData {
        positions,
        normals,
        uvs,
        indices,
    }
}
