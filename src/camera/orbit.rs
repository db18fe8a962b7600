use glam::Vec3;

use crate::camera::free_fly::{DEFAULT_MOUSE_SPEED, DEFAULT_ZOOM_SPEED};
use crate::camera::{CameraInput, CameraState};
use crate::traits::CameraUpdater;

/// Shortest orbit distance the zoom can reach.
const MIN_RADIUS: f32 = 0.1;
/// Orbit distance change per scroll step, as a fraction of the radius.
const RADIUS_ZOOM_RATE: f32 = 0.05;

/// What the scroll wheel drives while orbiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomBehavior {
    /// Scale the orbit distance, clamped to a positive minimum.
    #[default]
    Radius,
    /// Narrow or widen the field of view instead, leaving the radius fixed.
    FieldOfView,
}

/// Orbit navigation: the camera rides a sphere around a fixed target and the
/// cursor steers its azimuth and elevation. The radius never drifts — only
/// the dedicated zoom input may change it, and only in `Radius` mode.
#[derive(Debug, Clone)]
pub struct OrbitUpdater {
    /// World-space point the camera circles and looks at.
    pub target: Vec3,
    /// Look sensitivity in radians per cursor pixel per second.
    pub mouse_speed: f32,
    pub zoom_behavior: ZoomBehavior,
    /// Field-of-view change in radians per scroll step (`FieldOfView` mode).
    pub zoom_speed: f32,
    /// Orbit distance. Derived from the camera position on the first update
    /// when not configured up front.
    radius: Option<f32>,
}

impl OrbitUpdater {
    /// Orbit `target`, deriving the radius from wherever the camera is when
    /// the first update runs.
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            mouse_speed: DEFAULT_MOUSE_SPEED,
            zoom_behavior: ZoomBehavior::default(),
            zoom_speed: DEFAULT_ZOOM_SPEED,
            radius: None,
        }
    }

    /// Orbit `target` at a fixed configured distance.
    pub fn with_radius(target: Vec3, radius: f32) -> Self {
        Self {
            radius: Some(radius.max(MIN_RADIUS)),
            ..Self::new(target)
        }
    }

    /// Current orbit distance, if it has been configured or derived yet.
    pub fn radius(&self) -> Option<f32> {
        self.radius
    }
}

impl CameraUpdater for OrbitUpdater {
    fn update(&mut self, state: &mut CameraState, input: &CameraInput, delta_time: f32) {
        let delta = state.cursor_delta(input.cursor);

        state.horizontal_angle -= self.mouse_speed * delta_time * delta.x;
        state.vertical_angle -= self.mouse_speed * delta_time * delta.y;
        state.clamp_vertical_angle();

        let mut radius = *self
            .radius
            .get_or_insert_with(|| (state.position - self.target).length().max(MIN_RADIUS));

        if input.zoom != 0.0 {
            match self.zoom_behavior {
                ZoomBehavior::Radius => {
                    radius = (radius * (1.0 - input.zoom * RADIUS_ZOOM_RATE)).max(MIN_RADIUS);
                    self.radius = Some(radius);
                }
                ZoomBehavior::FieldOfView => {
                    state.set_field_of_view(state.field_of_view() - input.zoom * self.zoom_speed);
                }
            }
        }

        // The camera sits opposite its look direction, so it always faces
        // the target.
        state.position = self.target - radius * state.forward();
    }
}
