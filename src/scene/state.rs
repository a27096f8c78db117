//! Per-frame scene state
//!
//! All animation state carried across frames lives in one struct with a
//! single writer ([`Scene::advance`](crate::scene::Scene::advance)) instead
//! of scattered globals.

use glam::{Mat4, Vec4};

/// On/off gates for the three lighting components, driven by keyboard
/// toggles outside the core.
#[derive(Debug, Clone, Copy)]
pub struct LightToggles {
    pub ambient: bool,
    pub diffuse: bool,
    pub specular: bool,
}

impl LightToggles {
    /// The 0/1 scalar gates the fragment stage consumes.
    #[must_use]
    pub fn gates(&self) -> Vec4 {
        Vec4::new(
            f32::from(self.ambient),
            f32::from(self.diffuse),
            f32::from(self.specular),
            0.0,
        )
    }
}

impl Default for LightToggles {
    fn default() -> Self {
        Self {
            ambient: true,
            diffuse: true,
            specular: true,
        }
    }
}

/// Animation state accumulated across frames.
#[derive(Debug, Clone, Copy)]
pub struct SceneState {
    /// Running carousel rotation, accumulated multiplicatively each frame.
    pub carousel_rotation: Mat4,
    /// Accumulated phase of the vertical bob.
    pub y_phase: f32,
    /// `sin(y_phase)`, always in [-1, 1].
    pub y_motion: f32,
    pub toggles: LightToggles,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            carousel_rotation: Mat4::IDENTITY,
            y_phase: 0.0,
            y_motion: 0.0,
            toggles: LightToggles::default(),
        }
    }
}
