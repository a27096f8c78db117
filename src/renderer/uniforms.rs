//! GPU uniform layouts
//!
//! Typed, `repr(C)` mirrors of the WGSL uniform structs. Bind group
//! layouts are created once at pipeline build time, so no name-based
//! lookup ever happens in the per-frame path.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};

use crate::scene::Scene;

/// Per-frame globals for the color pass (WGSL `GlobalUniforms`, group 0
/// binding 0).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GlobalUniforms {
    pub projection_view: Mat4,
    /// `bias_scale * LightProjection * LightView`
    pub shadow_matrix: Mat4,
    pub camera_position: Vec4,
    /// Index 0 is the fixed shadow-casting light, index 1 the orbit light.
    pub light_positions: [Vec4; 2],
    pub light_intensities: [Vec4; 2],
    /// x/y/z: ambient/diffuse/specular gates (0 or 1), w unused.
    pub gates: Vec4,
}

impl GlobalUniforms {
    /// Gathers the frame's global shading inputs from the scene.
    #[must_use]
    pub fn from_scene(scene: &Scene) -> Self {
        let lights = &scene.lights;
        Self {
            projection_view: scene.camera.projection_view(),
            shadow_matrix: lights.shadow_matrix(),
            camera_position: scene.camera.position().extend(1.0),
            light_positions: [
                lights.fixed.position.extend(1.0),
                lights.orbit.world_position().extend(1.0),
            ],
            light_intensities: [lights.fixed.intensity, lights.orbit.intensity],
            gates: scene.state.toggles.gates(),
        }
    }
}

/// Per-frame globals for the shadow pass (WGSL `ShadowUniforms`).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct ShadowUniforms {
    pub light_view_projection: Mat4,
}

/// Per-object uniforms shared by both passes (group 1 binding 0).
///
/// A textured object uploads zeroed reflectance vectors; the texture
/// carries the color instead.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct ObjectUniforms {
    /// `DispositionMatrix * InitialTransform`
    pub model: Mat4,
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    /// x: shininess exponent, y/z/w unused.
    pub params: Vec4,
}
