//! Camera
//!
//! A fixed look-at camera with a perspective projection. Both matrices are
//! cached and only recomputed when the view or the aspect ratio changes;
//! there are no interactive controls.

use glam::{Mat4, Vec3};

#[derive(Debug, Clone)]
pub struct Camera {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    eye: Vec3,
    target: Vec3,
    up: Vec3,

    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    /// Creates a perspective camera at the origin looking down -Z.
    ///
    /// `fov` is the vertical field of view in degrees.
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            fov: fov.to_radians(),
            aspect,
            near,
            far,
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
        };
        cam.update_view_matrix();
        cam.update_projection_matrix();
        cam
    }

    /// Places the camera and recomputes the view matrix.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.eye = eye;
        self.target = target;
        self.up = up;
        self.update_view_matrix();
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    fn update_view_matrix(&mut self) {
        self.view_matrix = Mat4::look_at_rh(self.eye, self.target, self.up);
    }

    fn update_projection_matrix(&mut self) {
        // glam's perspective_rh targets the WGPU depth range (0 to 1)
        self.projection_matrix = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.eye
    }

    #[inline]
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    /// Combined `Projection * View`, uploaded once per frame.
    #[must_use]
    pub fn projection_view(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new_perspective(45.0, 1.0, 1.0, 50.0)
    }
}
