//! Mesh data and primitive generator tests
//!
//! Tests for:
//! - Index and attribute-count validation
//! - Capability flag derivation
//! - Structural sanity of every primitive generator (in-range indices,
//!   unit normals, full attribute coverage)

use whirl::resources::mesh::{MeshCapabilities, MeshData};
use whirl::resources::primitives::{
    BoxOptions, CylinderOptions, PlaneOptions, SphereOptions, create_box, create_cylinder,
    create_plane, create_sphere,
};

// ============================================================================
// Validation
// ============================================================================

fn quad() -> MeshData {
    MeshData {
        positions: vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ],
        normals: vec![[0.0, 0.0, 1.0]; 4],
        uvs: vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

#[test]
fn valid_mesh_passes_validation() {
    assert!(quad().validate().is_ok());
}

#[test]
fn index_out_of_range_is_rejected() {
    let mut mesh = quad();
    mesh.indices[3] = 4;
    assert!(mesh.validate().is_err());
}

#[test]
fn partial_triangle_is_rejected() {
    let mut mesh = quad();
    mesh.indices.pop();
    assert!(mesh.validate().is_err());
}

#[test]
fn mismatched_normal_count_is_rejected() {
    let mut mesh = quad();
    mesh.normals.pop();
    assert!(mesh.validate().is_err());
}

#[test]
fn mismatched_uv_count_is_rejected() {
    let mut mesh = quad();
    mesh.uvs.push([0.5, 0.5]);
    assert!(mesh.validate().is_err());
}

#[test]
fn empty_mesh_is_rejected() {
    assert!(MeshData::default().validate().is_err());
}

#[test]
fn optional_attributes_may_be_absent() {
    let mut mesh = quad();
    mesh.normals.clear();
    mesh.uvs.clear();
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.capabilities(), MeshCapabilities::empty());
}

#[test]
fn capabilities_derived_from_present_attributes() {
    assert_eq!(
        quad().capabilities(),
        MeshCapabilities::NORMALS | MeshCapabilities::UV
    );

    let mut no_uv = quad();
    no_uv.uvs.clear();
    assert_eq!(no_uv.capabilities(), MeshCapabilities::NORMALS);
}

// ============================================================================
// Primitive generators
// ============================================================================

fn assert_structurally_sound(mesh: &MeshData, name: &str) {
    mesh.validate()
        .unwrap_or_else(|e| panic!("{name}: invalid mesh: {e}"));
    assert_eq!(
        mesh.capabilities(),
        MeshCapabilities::NORMALS | MeshCapabilities::UV,
        "{name}: primitives carry full attributes"
    );
    assert!(mesh.triangle_count() > 0, "{name}: no triangles");

    for (i, n) in mesh.normals.iter().enumerate() {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert!(
            (len - 1.0).abs() < 1e-4,
            "{name}: normal {i} not unit length ({len})"
        );
    }

    for uv in &mesh.uvs {
        assert!((-0.001..=1.001).contains(&uv[0]), "{name}: u out of range");
        assert!((-0.001..=1.001).contains(&uv[1]), "{name}: v out of range");
    }
}

#[test]
fn plane_is_structurally_sound() {
    let mesh = create_plane(&PlaneOptions {
        width: 30.0,
        depth: 30.0,
        width_segments: 4,
        depth_segments: 4,
    });
    assert_structurally_sound(&mesh, "plane");
    assert_eq!(mesh.vertex_count(), 25);
    assert_eq!(mesh.triangle_count(), 32);

    // Flat on Y, extents honored
    for p in &mesh.positions {
        assert_eq!(p[1], 0.0);
        assert!(p[0].abs() <= 15.0 && p[2].abs() <= 15.0);
    }
}

#[test]
fn sphere_is_structurally_sound() {
    let options = SphereOptions {
        radius: 2.0,
        width_segments: 16,
        height_segments: 8,
    };
    let mesh = create_sphere(&options);
    assert_structurally_sound(&mesh, "sphere");

    // All vertices on the sphere surface
    for p in &mesh.positions {
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((r - 2.0).abs() < 1e-4, "vertex off the surface: r = {r}");
    }
}

#[test]
fn cylinder_is_structurally_sound() {
    let mesh = create_cylinder(&CylinderOptions {
        radius: 5.0,
        height: 0.5,
        radial_segments: 24,
    });
    assert_structurally_sound(&mesh, "cylinder");

    // Height bounds
    for p in &mesh.positions {
        assert!(p[1].abs() <= 0.25 + 1e-5);
    }
}

#[test]
fn box_is_structurally_sound() {
    let mesh = create_box(&BoxOptions {
        width: 1.4,
        height: 1.6,
        depth: 1.4,
    });
    assert_structurally_sound(&mesh, "box");
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.triangle_count(), 12);
}

// ============================================================================
// Fixed shadow map resolution
// ============================================================================

// The shadow target's size comes from RenderSettings alone; nothing
// derives it from window dimensions.
#[test]
fn shadow_map_size_is_a_static_setting() {
    let settings = whirl::RenderSettings::default();
    assert_eq!(settings.shadow_map_size, 1024);

    let custom = whirl::RenderSettings {
        shadow_map_size: 2048,
        ..Default::default()
    };
    assert_eq!(custom.shadow_map_size, 2048);
}
