//! Scene container
//!
//! Owns the drawable objects (draw order = insertion order, deterministic),
//! the camera, the light rig, the accumulated animation state, and the
//! carousel rig that tells [`Scene::advance`] which objects to animate.

use crate::renderer::object::DrawableObject;
use crate::scene::animation::{self, AnimationStep};
use crate::scene::camera::Camera;
use crate::scene::light::LightRig;
use crate::scene::state::SceneState;

/// Index of a drawable within a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle(pub(crate) usize);

/// Which scene objects the animation clock drives each frame.
///
/// Objects not referenced here keep whatever disposition they were given
/// (identity for static objects like the ground).
#[derive(Debug, Clone, Default)]
pub struct CarouselRig {
    pub carousel: Option<ObjectHandle>,
    /// Bobbing cups; indices 0 and 1 form the up group, the rest the down
    /// group.
    pub cups: Vec<ObjectHandle>,
    /// Visualization sphere riding with the orbit light.
    pub light_marker: Option<ObjectHandle>,
}

pub struct Scene {
    pub objects: Vec<DrawableObject>,
    pub camera: Camera,
    pub lights: LightRig,
    pub state: SceneState,
    pub rig: CarouselRig,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            camera: Camera::default(),
            lights: LightRig::default(),
            state: SceneState::default(),
            rig: CarouselRig::default(),
        }
    }

    pub fn add_object(&mut self, object: DrawableObject) -> ObjectHandle {
        let handle = ObjectHandle(self.objects.len());
        self.objects.push(object);
        handle
    }

    #[must_use]
    pub fn object(&self, handle: ObjectHandle) -> Option<&DrawableObject> {
        self.objects.get(handle.0)
    }

    pub fn object_mut(&mut self, handle: ObjectHandle) -> Option<&mut DrawableObject> {
        self.objects.get_mut(handle.0)
    }

    /// Runs the animation clock and writes the resulting dispositions.
    ///
    /// This is the only writer of `state` and of the rigged objects'
    /// disposition matrices.
    pub fn advance(&mut self, delta_ms: f32) {
        let step = animation::advance(
            self.state.carousel_rotation,
            self.state.y_phase,
            delta_ms,
        );
        self.state.carousel_rotation = step.carousel_rotation;
        self.state.y_phase = step.y_phase;
        self.state.y_motion = step.y_motion;

        self.apply_step(&step);
    }

    fn apply_step(&mut self, step: &AnimationStep) {
        if let Some(handle) = self.rig.carousel
            && let Some(object) = self.objects.get_mut(handle.0)
        {
            object.set_disposition(step.carousel_rotation);
        }

        let cups = self.rig.cups.clone();
        for (index, handle) in cups.into_iter().enumerate() {
            if let Some(object) = self.objects.get_mut(handle.0) {
                object.set_disposition(animation::cup_disposition(step, index));
            }
        }

        // The orbit light rides the rotation but does not bob
        self.lights.orbit.disposition = step.carousel_rotation;
        if let Some(handle) = self.rig.light_marker
            && let Some(object) = self.objects.get_mut(handle.0)
        {
            object.set_disposition(step.carousel_rotation);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
