//! Animation clock
//!
//! Pure state-transition arithmetic: given the previous accumulated
//! rotation, the previous bob phase, and the elapsed milliseconds since the
//! last frame, produce the new frame's placement matrices. Nothing here can
//! fail and nothing reads the wall clock.
//!
//! The carousel rotation accumulates multiplicatively — each frame's small
//! rotation is composed onto the running matrix rather than rebuilt from an
//! absolute angle. Floating-point drift over very long runs is accepted.

use glam::{Mat4, Vec3};

/// Milliseconds of wall time per radian of carousel rotation.
pub const CAROUSEL_MS_PER_RADIAN: f32 = 1200.0;

/// Milliseconds of wall time per unit of bob phase.
pub const BOB_MS_PER_PHASE_UNIT: f32 = 1000.0;

/// One frame's worth of animation output.
#[derive(Debug, Clone, Copy)]
pub struct AnimationStep {
    /// New accumulated carousel rotation.
    pub carousel_rotation: Mat4,
    /// New accumulated bob phase.
    pub y_phase: f32,
    /// `sin(y_phase)`, bounded to [-1, 1].
    pub y_motion: f32,
    /// Translation by `+y_motion` on Y.
    pub translate_up: Mat4,
    /// Translation by `-y_motion` on Y.
    pub translate_down: Mat4,
}

/// Advances the clock by `delta_ms` milliseconds.
#[must_use]
pub fn advance(prev_rotation: Mat4, prev_phase: f32, delta_ms: f32) -> AnimationStep {
    let rotation_delta = delta_ms / CAROUSEL_MS_PER_RADIAN;
    let carousel_rotation = prev_rotation * Mat4::from_rotation_y(rotation_delta);

    let y_phase = prev_phase + delta_ms / BOB_MS_PER_PHASE_UNIT;
    let y_motion = y_phase.sin();

    AnimationStep {
        carousel_rotation,
        y_phase,
        y_motion,
        translate_up: Mat4::from_translation(Vec3::new(0.0, y_motion, 0.0)),
        translate_down: Mat4::from_translation(Vec3::new(0.0, -y_motion, 0.0)),
    }
}

/// Disposition for the cup at `index`: the first two cups bob up with the
/// carousel rotation, the last two bob down in opposite phase.
#[must_use]
pub fn cup_disposition(step: &AnimationStep, index: usize) -> Mat4 {
    if index < 2 {
        step.translate_up * step.carousel_rotation
    } else {
        step.translate_down * step.carousel_rotation
    }
}
