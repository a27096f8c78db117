//! Animation clock tests
//!
//! Tests for:
//! - Bob motion bounds and phase accumulation
//! - Multiplicative carousel rotation accumulation (no per-frame reset)
//! - Cup group assignment (up group vs. down group)
//! - Exact frame deltas from the clock constants

use glam::{Mat4, Vec3, Vec4};
use whirl::scene::animation::{advance, cup_disposition};
use whirl::scene::state::SceneState;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn mat4_approx(a: Mat4, b: Mat4) -> bool {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .all(|(x, y)| (x - y).abs() < 1e-4)
}

// ============================================================================
// Bob motion
// ============================================================================

#[test]
fn y_motion_stays_bounded() {
    let mut rotation = Mat4::IDENTITY;
    let mut phase = 0.0;

    // Irregular frame times, including zero-length frames
    let deltas = [0.0, 16.7, 33.0, 250.0, 1000.0, 3.0, 9999.0];
    for _ in 0..50 {
        for delta in deltas {
            let step = advance(rotation, phase, delta);
            assert!(
                (-1.0..=1.0).contains(&step.y_motion),
                "y_motion {} out of bounds",
                step.y_motion
            );
            rotation = step.carousel_rotation;
            phase = step.y_phase;
        }
    }
}

#[test]
fn phase_accumulates_per_second() {
    let step = advance(Mat4::IDENTITY, 0.0, 1000.0);
    assert!(approx_eq(step.y_phase, 1.0));
    assert!(approx_eq(step.y_motion, 1.0f32.sin()));
}

#[test]
fn translation_matrices_carry_opposite_offsets() {
    let step = advance(Mat4::IDENTITY, 0.0, 500.0);
    let up = step.translate_up.transform_point3(Vec3::ZERO);
    let down = step.translate_down.transform_point3(Vec3::ZERO);

    assert!(approx_eq(up.y, step.y_motion));
    assert!(approx_eq(down.y, -step.y_motion));
    assert!(approx_eq(up.x, 0.0) && approx_eq(up.z, 0.0));
}

// ============================================================================
// Carousel rotation
// ============================================================================

#[test]
fn delta_1200_ms_rotates_one_radian() {
    let step = advance(Mat4::IDENTITY, 0.0, 1200.0);
    assert!(mat4_approx(step.carousel_rotation, Mat4::from_rotation_y(1.0)));
}

#[test]
fn rotation_accumulates_multiplicatively() {
    // Many small steps must equal one rotation matrix of the summed angle,
    // which rules out any per-frame reset to an absolute angle.
    let mut rotation = Mat4::IDENTITY;
    let mut phase = 0.0;
    let steps = 100;
    let delta = 120.0; // 0.1 rad each

    for _ in 0..steps {
        let step = advance(rotation, phase, delta);
        rotation = step.carousel_rotation;
        phase = step.y_phase;
    }

    let total_angle = steps as f32 * delta / 1200.0;
    assert!(
        mat4_approx(rotation, Mat4::from_rotation_y(total_angle)),
        "accumulated rotation does not match {total_angle} rad"
    );
}

#[test]
fn rotation_angle_never_decreases() {
    // Track the rotation of a probe point around Y; with positive deltas
    // the unwrapped angle must be non-decreasing.
    let mut rotation = Mat4::IDENTITY;
    let mut phase = 0.0;
    let mut previous_angle = 0.0f32;
    let mut accumulated = 0.0f32;

    for _ in 0..200 {
        let step = advance(rotation, phase, 60.0);
        rotation = step.carousel_rotation;
        phase = step.y_phase;

        let probe = rotation.transform_point3(Vec3::X);
        let mut angle = (-probe.z).atan2(probe.x);
        // Unwrap into a monotonically increasing measurement
        while angle < previous_angle - std::f32::consts::PI {
            angle += 2.0 * std::f32::consts::PI;
        }
        accumulated += angle - previous_angle;
        assert!(
            angle >= previous_angle - 1e-4,
            "rotation went backwards: {angle} < {previous_angle}"
        );
        previous_angle = angle;
    }

    assert!(
        (accumulated - 200.0 * 60.0 / 1200.0).abs() < 1e-3,
        "total accumulated angle {accumulated} unexpected"
    );
}

#[test]
fn zero_delta_is_identity_step() {
    let prev = Mat4::from_rotation_y(0.75);
    let step = advance(prev, 2.0, 0.0);
    assert!(mat4_approx(step.carousel_rotation, prev));
    assert!(approx_eq(step.y_phase, 2.0));
}

// ============================================================================
// Assignment policy
// ============================================================================

#[test]
fn cup_groups_split_up_and_down() {
    let step = advance(Mat4::IDENTITY, 0.0, 400.0);

    for index in 0..4 {
        let disposition = cup_disposition(&step, index);
        let expected = if index < 2 {
            step.translate_up * step.carousel_rotation
        } else {
            step.translate_down * step.carousel_rotation
        };
        assert!(
            mat4_approx(disposition, expected),
            "cup {index} got the wrong group"
        );
    }
}

#[test]
fn cup_groups_share_rotation_and_oppose_in_y() {
    let step = advance(Mat4::from_rotation_y(1.3), 0.7, 333.0);

    let up_pos = cup_disposition(&step, 0) * Vec4::new(4.0, 0.0, 0.0, 1.0);
    let down_pos = cup_disposition(&step, 3) * Vec4::new(4.0, 0.0, 0.0, 1.0);

    // Same rotation: identical in X/Z
    assert!(approx_eq(up_pos.x, down_pos.x));
    assert!(approx_eq(up_pos.z, down_pos.z));
    // Opposite bob in Y
    assert!(approx_eq(up_pos.y, -down_pos.y));
    assert!(approx_eq(up_pos.y, step.y_motion));
}

// ============================================================================
// Scene state defaults
// ============================================================================

#[test]
fn scene_state_starts_at_rest() {
    let state = SceneState::default();
    assert_eq!(state.carousel_rotation, Mat4::IDENTITY);
    assert!(approx_eq(state.y_phase, 0.0));
    assert!(approx_eq(state.y_motion, 0.0));
    assert_eq!(state.toggles.gates(), Vec4::new(1.0, 1.0, 1.0, 0.0));
}
