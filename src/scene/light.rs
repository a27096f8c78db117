//! Lights and the shadow frame state
//!
//! Two lights exist: a fixed point light that casts the shadow, and an
//! orbiting light carried by the carousel rotation. The shadow-casting
//! light's view/projection and the clip-to-texture bias matrix are pure
//! functions of the rig, recomputed each frame but identical while the
//! light stays put.

use glam::{Mat4, Vec3, Vec4};

/// A point light fixed in world space.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: Vec4,
}

impl PointLight {
    #[must_use]
    pub fn new(position: Vec3, intensity: Vec4) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// A light that rides the carousel: its world position is the per-frame
/// disposition applied to a fixed homogeneous offset.
#[derive(Debug, Clone, Copy)]
pub struct OrbitLight {
    pub initial_offset: Vec4,
    pub disposition: Mat4,
    pub intensity: Vec4,
}

impl OrbitLight {
    #[must_use]
    pub fn new(initial_offset: Vec4, intensity: Vec4) -> Self {
        Self {
            initial_offset,
            disposition: Mat4::IDENTITY,
            intensity,
        }
    }

    /// Current world position, recomputed from the disposition every frame.
    #[must_use]
    pub fn world_position(&self) -> Vec3 {
        (self.disposition * self.initial_offset).truncate()
    }
}

/// Frustum constants for the shadow-casting light.
///
/// Fixed values, not fitted to scene bounds.
#[derive(Debug, Clone, Copy)]
pub struct ShadowProjection {
    /// Vertical field of view in radians.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ShadowProjection {
    fn default() -> Self {
        Self {
            fov: std::f32::consts::FRAC_PI_2,
            near: 1.0,
            far: 50.0,
        }
    }
}

/// The scene's light setup: fixed shadow caster plus orbiting light.
#[derive(Debug, Clone, Copy)]
pub struct LightRig {
    pub fixed: PointLight,
    pub orbit: OrbitLight,
    pub shadow: ShadowProjection,
}

impl LightRig {
    #[must_use]
    pub fn new(fixed: PointLight, orbit: OrbitLight) -> Self {
        Self {
            fixed,
            orbit,
            shadow: ShadowProjection::default(),
        }
    }

    /// View matrix from the shadow-casting light toward the origin.
    #[must_use]
    pub fn light_view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.fixed.position, Vec3::ZERO, Vec3::Y)
    }

    /// Projection for the shadow-casting light, square aspect.
    #[must_use]
    pub fn light_projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.shadow.fov, 1.0, self.shadow.near, self.shadow.far)
    }

    /// World space to shadow-map texture space:
    /// `bias_scale * LightProjection * LightView`.
    #[must_use]
    pub fn shadow_matrix(&self) -> Mat4 {
        bias_scale_matrix() * self.light_projection_matrix() * self.light_view_matrix()
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self::new(
            PointLight::new(Vec3::new(5.0, 2.0, 5.0), Vec4::new(0.5, 0.5, 0.5, 1.0)),
            OrbitLight::new(Vec4::new(2.0, 2.0, 5.0, 1.0), Vec4::new(0.5, 0.5, 0.5, 1.0)),
        )
    }
}

/// Constant matrix mapping clip-space x,y from [-1,1] to [0,1] texture
/// coordinates (v flipped). Clip z is already [0,1] in wgpu and passes
/// through unchanged.
#[must_use]
pub fn bias_scale_matrix() -> Mat4 {
    Mat4::from_cols(
        Vec4::new(0.5, 0.0, 0.0, 0.0),
        Vec4::new(0.0, -0.5, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(0.5, 0.5, 0.0, 1.0),
    )
}
