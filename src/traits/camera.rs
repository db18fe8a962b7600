use crate::camera::{CameraInput, CameraState};

/// Camera movement and control abstraction. One implementation per
/// navigation mode; the caller picks exactly one to run each frame.
pub trait CameraUpdater {
    /// Advance the camera state by one frame.
    ///
    /// `delta_time` is elapsed seconds since the previous update and must be
    /// non-negative; input values must be finite. Implementations update the
    /// state's cursor bookkeeping as a side effect.
    fn update(&mut self, state: &mut CameraState, input: &CameraInput, delta_time: f32);
}
