use glam::{Mat4, Vec3};

use crate::camera::CameraState;

/// Look-at transform from the camera position along its forward direction,
/// world up Y. Uses the same forward derivation as the updaters, so the
/// matrix agrees with whatever pose the last update produced.
pub fn view_matrix(state: &CameraState) -> Mat4 {
    Mat4::look_at_rh(state.position, state.position + state.forward(), Vec3::Y)
}

/// Perspective transform from the state's field of view.
///
/// `near` must be positive and `far` beyond it; violating either is a caller
/// error and fails loudly rather than degrading the projection.
pub fn projection_matrix(state: &CameraState, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
    assert!(near > 0.0, "near plane must be positive, got {}", near);
    assert!(
        far > near,
        "far plane ({}) must be beyond the near plane ({})",
        far,
        near
    );
    Mat4::perspective_rh(state.field_of_view(), aspect_ratio, near, far)
}
