use glam::Vec2;

use crate::traits::{Button, Controller};

/// Everything an updater consumes for one frame: cursor position, the four
/// logical movement keys, and the zoom amount accumulated since the last
/// frame.
///
/// Values must be finite; the updaters do not sanitize NaN cursor positions
/// or deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraInput {
    /// Cursor position in window coordinates.
    pub cursor: Vec2,
    pub move_forward: bool,
    pub move_backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    /// Scroll steps this frame, positive to zoom in.
    pub zoom: f32,
}

impl CameraInput {
    /// Snapshot the movement keys from a controller. Cursor and zoom come
    /// from the windowing adapter and are filled in by the caller.
    pub fn from_controller(controller: &dyn Controller, cursor: Vec2, zoom: f32) -> Self {
        Self {
            cursor,
            move_forward: controller.is_down(Button::Forward),
            move_backward: controller.is_down(Button::Backward),
            strafe_left: controller.is_down(Button::StrafeLeft),
            strafe_right: controller.is_down(Button::StrafeRight),
            zoom,
        }
    }

    /// Input with a cursor position and nothing pressed.
    pub fn idle(cursor: Vec2) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }
}
