use glam::{Vec2, Vec3};
use render_sandbox::camera::{CameraInput, CameraState, FreeFlyUpdater, VERTICAL_ANGLE_LIMIT};
use render_sandbox::traits::CameraUpdater;

#[cfg(test)]
mod free_fly_tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn forward_input(cursor: Vec2) -> CameraInput {
        CameraInput {
            move_forward: true,
            ..CameraInput::idle(cursor)
        }
    }

    #[test]
    fn test_idle_updates_change_nothing_but_bookkeeping() {
        let mut state = CameraState::new();
        let mut updater = FreeFlyUpdater::new();
        let cursor = Vec2::new(512.0, 384.0);

        let position = state.position;
        let fov = state.field_of_view();

        for _ in 0..10 {
            updater.update(&mut state, &CameraInput::idle(cursor), 0.016);
        }

        assert_eq!(state.position, position, "idle update must not move the camera");
        assert_eq!(state.horizontal_angle, 0.0);
        assert_eq!(state.vertical_angle, 0.0);
        assert_eq!(state.field_of_view(), fov);
    }

    #[test]
    fn test_forward_key_moves_along_initial_forward() {
        // Initial state (0,0,5), zero angles, fov = pi/4; one update with the
        // forward key held for one second at the default speed of 3.0 must
        // travel 3 units along (0,0,-1).
        let mut state = CameraState::new();
        let mut updater = FreeFlyUpdater::new();
        assert_eq!(updater.move_speed, 3.0);

        updater.update(&mut state, &forward_input(Vec2::ZERO), 1.0);

        assert!(
            state.position.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), EPSILON),
            "expected ~(0,0,2), got {:?}",
            state.position
        );
    }

    #[test]
    fn test_translation_is_frame_rate_independent() {
        let cursor = Vec2::new(100.0, 100.0);

        let mut one_step = CameraState::new();
        let mut updater_a = FreeFlyUpdater::new();
        updater_a.update(&mut one_step, &forward_input(cursor), 0.2);

        let mut two_steps = CameraState::new();
        let mut updater_b = FreeFlyUpdater::new();
        updater_b.update(&mut two_steps, &forward_input(cursor), 0.1);
        updater_b.update(&mut two_steps, &forward_input(cursor), 0.1);

        assert!(
            one_step.position.abs_diff_eq(two_steps.position, EPSILON),
            "one 2t step ({:?}) should match two t steps ({:?})",
            one_step.position,
            two_steps.position
        );
    }

    #[test]
    fn test_look_is_frame_rate_independent() {
        let start = Vec2::new(100.0, 100.0);
        let step = Vec2::new(10.0, 0.0);

        // Establish cursor tracking first so both cameras see real deltas
        let mut one_step = CameraState::new();
        let mut updater_a = FreeFlyUpdater::new();
        updater_a.update(&mut one_step, &CameraInput::idle(start), 0.0);
        updater_a.update(&mut one_step, &CameraInput::idle(start + step), 0.2);

        let mut two_steps = CameraState::new();
        let mut updater_b = FreeFlyUpdater::new();
        updater_b.update(&mut two_steps, &CameraInput::idle(start), 0.0);
        updater_b.update(&mut two_steps, &CameraInput::idle(start + step), 0.1);
        updater_b.update(&mut two_steps, &CameraInput::idle(start + step + step), 0.1);

        assert!(
            (one_step.horizontal_angle - two_steps.horizontal_angle).abs() < EPSILON,
            "one 2t step ({}) should match two t steps ({})",
            one_step.horizontal_angle,
            two_steps.horizontal_angle
        );
    }

    #[test]
    fn test_first_update_ignores_cursor_jump() {
        // No previous cursor position is tracked, so even a cursor far from
        // the window origin must not rotate the camera on the first frame.
        let mut state = CameraState::new();
        let mut updater = FreeFlyUpdater::new();

        updater.update(&mut state, &CameraInput::idle(Vec2::new(800.0, 600.0)), 1.0);

        assert_eq!(state.horizontal_angle, 0.0, "first frame must see zero delta");
        assert_eq!(state.vertical_angle, 0.0);
    }

    #[test]
    fn test_vertical_angle_stays_clamped() {
        let mut state = CameraState::new();
        let mut updater = FreeFlyUpdater::new();

        // Drag the cursor down hard for many frames
        let mut cursor = Vec2::ZERO;
        for _ in 0..200 {
            cursor.y += 500.0;
            updater.update(&mut state, &CameraInput::idle(cursor), 0.1);
            assert!(
                state.vertical_angle.abs() <= VERTICAL_ANGLE_LIMIT + 1e-6,
                "vertical angle {} escaped the clamp",
                state.vertical_angle
            );
        }

        // And back up the other way
        for _ in 0..400 {
            cursor.y -= 500.0;
            updater.update(&mut state, &CameraInput::idle(cursor), 0.1);
            assert!(
                state.vertical_angle.abs() <= VERTICAL_ANGLE_LIMIT + 1e-6,
                "vertical angle {} escaped the clamp",
                state.vertical_angle
            );
        }
    }

    #[test]
    fn test_strafe_moves_along_right() {
        let mut state = CameraState::new();
        let mut updater = FreeFlyUpdater::new();

        let input = CameraInput {
            strafe_right: true,
            ..CameraInput::idle(Vec2::ZERO)
        };
        updater.update(&mut state, &input, 1.0);

        // Facing -Z, the strafe direction is +X
        assert!(
            state.position.abs_diff_eq(Vec3::new(3.0, 0.0, 5.0), EPSILON),
            "expected ~(3,0,5), got {:?}",
            state.position
        );
    }

    #[test]
    fn test_opposed_keys_cancel() {
        let mut state = CameraState::new();
        let mut updater = FreeFlyUpdater::new();

        let input = CameraInput {
            move_forward: true,
            move_backward: true,
            ..CameraInput::idle(Vec2::ZERO)
        };
        updater.update(&mut state, &input, 1.0);

        assert!(state.position.abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), EPSILON));
    }

    #[test]
    fn test_zoom_narrows_field_of_view_within_bounds() {
        let mut state = CameraState::new();
        let mut updater = FreeFlyUpdater::new();
        let initial_fov = state.field_of_view();

        let input = CameraInput {
            zoom: 1.0,
            ..CameraInput::idle(Vec2::ZERO)
        };
        updater.update(&mut state, &input, 0.016);
        assert!(state.field_of_view() < initial_fov, "zooming in must narrow the fov");

        // Extreme zoom in both directions never leaves the valid range
        for zoom in [1000.0, -1000.0] {
            let input = CameraInput {
                zoom,
                ..CameraInput::idle(Vec2::ZERO)
            };
            updater.update(&mut state, &input, 0.016);
            assert!(
                state.field_of_view() > 0.0 && state.field_of_view() < std::f32::consts::PI,
                "fov {} left the valid range",
                state.field_of_view()
            );
        }
    }

    #[test]
    fn test_zero_delta_time_freezes_motion() {
        let mut state = CameraState::new();
        let mut updater = FreeFlyUpdater::new();

        updater.update(&mut state, &forward_input(Vec2::ZERO), 0.0);

        assert_eq!(state.position, Vec3::new(0.0, 0.0, 5.0));
    }
}
