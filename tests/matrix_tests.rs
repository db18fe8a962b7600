use glam::{Vec2, Vec3};
use render_sandbox::camera::{
    projection_matrix, view_matrix, CameraInput, CameraState, FreeFlyUpdater,
};
use render_sandbox::traits::CameraUpdater;

#[cfg(test)]
mod matrix_tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_view_maps_eye_to_origin() {
        let state = CameraState::new();
        let view = view_matrix(&state);

        let eye = view.transform_point3(state.position);
        assert!(
            eye.abs_diff_eq(Vec3::ZERO, EPSILON),
            "eye should map to the view-space origin, got {:?}",
            eye
        );
    }

    #[test]
    fn test_view_looks_down_negative_z() {
        let state = CameraState::new();
        let view = view_matrix(&state);

        // A point one unit along forward lands one unit down view-space -Z
        let ahead = view.transform_point3(state.position + state.forward());
        assert!(
            ahead.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPSILON),
            "expected ~(0,0,-1), got {:?}",
            ahead
        );
    }

    #[test]
    fn test_view_agrees_with_updater_orientation() {
        // The view matrix must reuse the same forward derivation the
        // updaters used, whatever pose the last update produced.
        let mut state = CameraState::new();
        let mut updater = FreeFlyUpdater::new();

        updater.update(&mut state, &CameraInput::idle(Vec2::ZERO), 0.0);
        updater.update(&mut state, &CameraInput::idle(Vec2::new(137.0, -61.0)), 0.5);

        let view = view_matrix(&state);
        let ahead = view.transform_point3(state.position + state.forward());
        assert!(
            ahead.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPSILON),
            "matrix and updater disagree on forward: {:?}",
            ahead
        );
    }

    #[test]
    fn test_world_up_stays_up() {
        let state = CameraState::new();
        let view = view_matrix(&state);

        let up = view.transform_vector3(Vec3::Y);
        assert!(up.y > 0.0, "world up flipped in view space: {:?}", up);
        assert!(up.x.abs() < EPSILON);
    }

    #[test]
    fn test_projection_is_finite_for_valid_parameters() {
        let state = CameraState::new();
        let projection = projection_matrix(&state, 4.0 / 3.0, 0.1, 100.0);

        for value in projection.to_cols_array() {
            assert!(value.is_finite(), "projection contains non-finite entries");
        }
    }

    #[test]
    fn test_projection_puts_points_ahead_in_clip_space() {
        let state = CameraState::new();
        let view = view_matrix(&state);
        let projection = projection_matrix(&state, 4.0 / 3.0, 0.1, 100.0);

        // The world origin is 5 units ahead of the default camera
        let clip = projection * view * Vec3::ZERO.extend(1.0);
        assert!(clip.w > 0.0, "point ahead of the camera has w <= 0");
    }

    #[test]
    fn test_fov_stays_valid_under_extreme_zoom() {
        let mut state = CameraState::new();
        let mut updater = FreeFlyUpdater::new();

        for zoom in [f32::MAX / 2.0, -1e10, 1e10] {
            let input = CameraInput {
                zoom,
                ..CameraInput::idle(Vec2::ZERO)
            };
            updater.update(&mut state, &input, 0.016);

            let fov = state.field_of_view();
            assert!(
                fov > 0.0 && fov < std::f32::consts::PI,
                "fov {} outside (0, pi)",
                fov
            );
            // And the projection still accepts it
            let projection = projection_matrix(&state, 1.0, 0.1, 100.0);
            assert!(projection.to_cols_array().iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    #[should_panic(expected = "near plane must be positive")]
    fn test_zero_near_plane_fails_loudly() {
        let state = CameraState::new();
        let _ = projection_matrix(&state, 1.0, 0.0, 100.0);
    }

    #[test]
    #[should_panic(expected = "must be beyond the near plane")]
    fn test_inverted_planes_fail_loudly() {
        let state = CameraState::new();
        let _ = projection_matrix(&state, 1.0, 1.0, 0.5);
    }

    #[test]
    fn test_view_does_not_mutate_state() {
        let state = CameraState::new();
        let before = state.clone();

        let _ = view_matrix(&state);
        let _ = projection_matrix(&state, 1.0, 0.1, 100.0);

        assert_eq!(state.position, before.position);
        assert_eq!(state.horizontal_angle, before.horizontal_angle);
        assert_eq!(state.vertical_angle, before.vertical_angle);
        assert_eq!(state.field_of_view(), before.field_of_view());
    }
}
