mod free_fly;
mod input;
mod matrices;
mod orbit;
mod state;

pub use free_fly::FreeFlyUpdater;
pub use input::CameraInput;
pub use matrices::{projection_matrix, view_matrix};
pub use orbit::{OrbitUpdater, ZoomBehavior};
pub use state::{CameraState, MAX_FIELD_OF_VIEW, MIN_FIELD_OF_VIEW, VERTICAL_ANGLE_LIMIT};
