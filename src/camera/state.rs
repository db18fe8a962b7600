use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Slack kept between the vertical angle and the poles so the forward
/// vector never collapses onto the world up axis.
pub const VERTICAL_ANGLE_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Smallest accepted field of view in radians.
pub const MIN_FIELD_OF_VIEW: f32 = 0.01;
/// Largest accepted field of view in radians.
pub const MAX_FIELD_OF_VIEW: f32 = PI - 0.01;

/// Persistent camera pose, mutated in place once per frame by whichever
/// updater the caller selected. Matrix derivation only reads it.
///
/// Zero angles look down world -Z, so the default state at (0, 0, 5)
/// faces the origin.
#[derive(Debug, Clone)]
pub struct CameraState {
    /// World-space camera position.
    pub position: Vec3,
    /// Look direction azimuth in radians.
    pub horizontal_angle: f32,
    /// Look direction elevation in radians, kept inside the pole limits.
    pub vertical_angle: f32,
    /// Vertical field of view in radians. Private so every mutation goes
    /// through the clamping setter.
    field_of_view: f32,
    /// Cursor position seen by the previous update. `None` until the first
    /// update, which therefore observes a zero mouse delta.
    last_cursor: Option<Vec2>,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            horizontal_angle: 0.0,
            vertical_angle: 0.0,
            field_of_view: FRAC_PI_4,
            last_cursor: None,
        }
    }
}

impl CameraState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unit look direction from the two angles. Both updaters and the view
    /// matrix share this derivation so pose and matrices always agree.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.vertical_angle.cos() * self.horizontal_angle.sin(),
            self.vertical_angle.sin(),
            -(self.vertical_angle.cos() * self.horizontal_angle.cos()),
        )
        .normalize()
    }

    /// Unit strafe direction, orthogonal to forward and world up. The
    /// vertical clamp guarantees the cross product never degenerates.
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    /// Set the field of view, clamped to the valid open range so the
    /// projection can never degenerate.
    pub fn set_field_of_view(&mut self, fov: f32) {
        self.field_of_view = fov.clamp(MIN_FIELD_OF_VIEW, MAX_FIELD_OF_VIEW);
    }

    /// Keep the vertical angle away from the poles.
    pub(crate) fn clamp_vertical_angle(&mut self) {
        self.vertical_angle = self
            .vertical_angle
            .clamp(-VERTICAL_ANGLE_LIMIT, VERTICAL_ANGLE_LIMIT);
    }

    /// Cursor delta since the previous update, updating the bookkeeping as a
    /// side effect. The first call after construction or `reset_tracking`
    /// returns zero.
    pub(crate) fn cursor_delta(&mut self, cursor: Vec2) -> Vec2 {
        let delta = match self.last_cursor {
            Some(last) => cursor - last,
            None => Vec2::ZERO,
        };
        self.last_cursor = Some(cursor);
        delta
    }

    /// Forget the tracked cursor position. Call when switching camera modes
    /// so the next update does not see a spurious large delta.
    pub fn reset_tracking(&mut self) {
        self.last_cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_faces_negative_z() {
        let state = CameraState::new();
        let forward = state.forward();
        assert!(forward.abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert_eq!(state.position, Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn right_is_positive_x_at_default() {
        let state = CameraState::new();
        assert!(state.right().abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn fov_setter_clamps() {
        let mut state = CameraState::new();

        state.set_field_of_view(-1.0);
        assert_eq!(state.field_of_view(), MIN_FIELD_OF_VIEW);

        state.set_field_of_view(10.0);
        assert_eq!(state.field_of_view(), MAX_FIELD_OF_VIEW);
    }

    #[test]
    fn first_cursor_delta_is_zero() {
        let mut state = CameraState::new();

        // No prior cursor position, so no delta even for a far-away cursor
        assert_eq!(state.cursor_delta(Vec2::new(400.0, 300.0)), Vec2::ZERO);
        assert_eq!(state.cursor_delta(Vec2::new(410.0, 295.0)), Vec2::new(10.0, -5.0));
    }

    #[test]
    fn reset_tracking_suppresses_next_delta() {
        let mut state = CameraState::new();
        let _ = state.cursor_delta(Vec2::new(100.0, 100.0));

        state.reset_tracking();
        assert_eq!(state.cursor_delta(Vec2::new(900.0, 900.0)), Vec2::ZERO);
    }
}
