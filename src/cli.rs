// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};

/// Which updater drives the camera. Selected at startup; Tab toggles it at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CameraMode {
    /// FPS-style free flight
    Free,
    /// Orbit around the scene origin
    Orbit,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "render-sandbox")]
#[command(about = "Minimal real-time rendering sandbox", long_about = None)]
pub struct Cli {
    /// Starting camera mode
    #[arg(long = "mode", value_enum, default_value = "free")]
    pub mode: CameraMode,

    /// Disable UI elements and console output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
