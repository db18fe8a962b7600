use crate::camera::{CameraInput, CameraState};
use crate::traits::CameraUpdater;

pub const DEFAULT_MOVE_SPEED: f32 = 3.0;
pub const DEFAULT_MOUSE_SPEED: f32 = 0.005;
pub const DEFAULT_ZOOM_SPEED: f32 = 0.05;

/// FPS-style navigation: the cursor steers the look direction, WASD
/// translates along it. All motion scales with elapsed time, so the visible
/// speed does not depend on the frame rate.
#[derive(Debug, Clone)]
pub struct FreeFlyUpdater {
    /// Translation speed in world units per second.
    pub move_speed: f32,
    /// Look sensitivity in radians per cursor pixel per second.
    pub mouse_speed: f32,
    /// Field-of-view change in radians per scroll step.
    pub zoom_speed: f32,
}

impl Default for FreeFlyUpdater {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            mouse_speed: DEFAULT_MOUSE_SPEED,
            zoom_speed: DEFAULT_ZOOM_SPEED,
        }
    }
}

impl FreeFlyUpdater {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CameraUpdater for FreeFlyUpdater {
    fn update(&mut self, state: &mut CameraState, input: &CameraInput, delta_time: f32) {
        let delta = state.cursor_delta(input.cursor);

        state.horizontal_angle -= self.mouse_speed * delta_time * delta.x;
        state.vertical_angle -= self.mouse_speed * delta_time * delta.y;
        state.clamp_vertical_angle();

        let forward = state.forward();
        let right = state.right();
        let step = self.move_speed * delta_time;

        if input.move_forward {
            state.position += forward * step;
        }
        if input.move_backward {
            state.position -= forward * step;
        }
        if input.strafe_right {
            state.position += right * step;
        }
        if input.strafe_left {
            state.position -= right * step;
        }

        if input.zoom != 0.0 {
            state.set_field_of_view(state.field_of_view() - input.zoom * self.zoom_speed);
        }
    }
}
