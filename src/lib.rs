pub mod camera;
pub mod cli;
pub mod core;
pub mod geometry;
pub mod renderer;
pub mod traits;
pub mod types;
pub mod window;

// Re-export the camera surface; it is what library consumers come for
pub use camera::{
    projection_matrix, view_matrix, CameraInput, CameraState, FreeFlyUpdater, OrbitUpdater,
    ZoomBehavior,
};
pub use traits::CameraUpdater;
