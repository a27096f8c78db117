use std::f32::consts::PI;

use crate::resources::mesh::MeshData;

pub struct CylinderOptions {
    pub radius: f32,
    pub height: f32,
    pub radial_segments: u32,
}

impl Default for CylinderOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            height: 1.0,
            radial_segments: 32,
        }
    }
}

/// Capped cylinder along the Y axis, centered at the origin.
///
/// Side vertices are duplicated against the caps so each region keeps its
/// own normals.
#[must_use]
pub fn create_cylinder(options: &CylinderOptions) -> MeshData {
    let radius = options.radius;
    let half_h = options.height / 2.0;
    let radial_segments = options.radial_segments.max(3);

    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();
    let mut indices = Vec::new();

    // Side wall: two rings with outward normals
    for ring in 0..2 {
        let py = if ring == 0 { -half_h } else { half_h };
        let v_ratio = ring as f32;
        for x in 0..=radial_segments {
            let u_ratio = x as f32 / radial_segments as f32;
            let phi = u_ratio * 2.0 * PI;
            let (sin_phi, cos_phi) = phi.sin_cos();

            positions.push([radius * cos_phi, py, radius * sin_phi]);
            normals.push([cos_phi, 0.0, sin_phi]);
            uvs.push([u_ratio, 1.0 - v_ratio]);
        }
    }

    let stride = radial_segments + 1;
    for x in 0..radial_segments {
        let v0 = x;
        let v1 = x + 1;
        let v2 = stride + x;
        let v3 = stride + x + 1;

        indices.extend_from_slice(&[v0, v2, v1]);
        indices.extend_from_slice(&[v1, v2, v3]);
    }

    // Caps: center vertex plus a ring, fanned out
    for cap in 0..2 {
        let (py, ny) = if cap == 0 {
            (half_h, 1.0)
        } else {
            (-half_h, -1.0)
        };

        let center_index = positions.len() as u32;
        positions.push([0.0, py, 0.0]);
        normals.push([0.0, ny, 0.0]);
        uvs.push([0.5, 0.5]);

        for x in 0..=radial_segments {
            let u_ratio = x as f32 / radial_segments as f32;
            let phi = u_ratio * 2.0 * PI;
            let (sin_phi, cos_phi) = phi.sin_cos();

            positions.push([radius * cos_phi, py, radius * sin_phi]);
            normals.push([0.0, ny, 0.0]);
            uvs.push([0.5 + cos_phi / 2.0, 0.5 + sin_phi / 2.0]);
        }

        for x in 0..radial_segments {
            let ring0 = center_index + 1 + x;
            let ring1 = center_index + 1 + x + 1;
            if ny > 0.0 {
                indices.extend_from_slice(&[center_index, ring1, ring0]);
            } else {
                indices.extend_from_slice(&[center_index, ring0, ring1]);
            }
        }
    }

    MeshData {
        positions,
        normals,
        uvs,
        indices,
    }
}
