use std::sync::Arc;

use clap::Parser;
use glam::{Vec2, Vec3};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window as WinitWindow, WindowId},
};

use render_sandbox::camera::{
    projection_matrix, view_matrix, CameraInput, CameraState, FreeFlyUpdater, OrbitUpdater,
};
use render_sandbox::cli::{CameraMode, Cli};
use render_sandbox::core::{Clock, WinitController};
use render_sandbox::renderer::SandboxRenderer;
use render_sandbox::traits::{Button, CameraUpdater, Controller};
use render_sandbox::window::Window;

// === Constants ===

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 1024;
const INITIAL_WINDOW_HEIGHT: u32 = 768;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

// === Application ===

struct App {
    cli: Cli,
    window: Option<Window>,
    renderer: Option<SandboxRenderer>,
    controller: WinitController,
    clock: Clock,
    state: CameraState,
    mode: CameraMode,
    free_fly: FreeFlyUpdater,
    orbit: OrbitUpdater,
    switch_was_down: bool,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli) -> Self {
        let mode = cli.mode;
        Self {
            cli,
            window: None,
            renderer: None,
            controller: WinitController::new(),
            clock: Clock::new(),
            state: CameraState::new(),
            mode,
            free_fly: FreeFlyUpdater::new(),
            // Both hard-coded meshes sit near the origin, so orbit it
            orbit: OrbitUpdater::new(Vec3::ZERO),
            switch_was_down: false,
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    /// Toggle between free-fly and orbit on the mode key's press edge.
    /// Resetting cursor tracking keeps the first frame after the switch from
    /// seeing a spurious large delta.
    fn handle_mode_switch(&mut self) {
        let switch_down = self.controller.is_down(Button::SwitchMode);
        if switch_down && !self.switch_was_down {
            self.mode = match self.mode {
                CameraMode::Free => CameraMode::Orbit,
                CameraMode::Orbit => CameraMode::Free,
            };
            self.state.reset_tracking();
            log::info!("camera mode switched to {:?}", self.mode);
        }
        self.switch_was_down = switch_down;
    }

    fn redraw(&mut self) {
        let delta = self.clock.tick();
        self.update_fps(delta);
        self.handle_mode_switch();

        let cursor = match self.controller.cursor_position() {
            Some((x, y)) => Vec2::new(x, y),
            None => {
                // Cursor has not entered the window yet; keep the delta zero
                self.state.reset_tracking();
                Vec2::ZERO
            }
        };
        let zoom = self.controller.take_scroll();
        let input = CameraInput::from_controller(&self.controller, cursor, zoom);

        let updater: &mut dyn CameraUpdater = match self.mode {
            CameraMode::Free => &mut self.free_fly,
            CameraMode::Orbit => &mut self.orbit,
        };
        updater.update(&mut self.state, &input, delta);

        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            let view = view_matrix(&self.state);
            let projection =
                projection_matrix(&self.state, renderer.aspect_ratio(), NEAR_PLANE, FAR_PLANE);

            match window.draw(renderer, view, projection, self.fps, !self.cli.no_ui) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.resize(window.inner_size());
                }
                Err(e) => log::warn!("render error: {}", e),
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                WinitWindow::default_attributes()
                    .with_title("Render Sandbox")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(SandboxRenderer::new(window.clone())) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(Window::new(window));
            self.renderer = Some(renderer);
            // Don't count setup time against the first frame
            self.clock.reset();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window.inner(), &event) {
                return; // egui consumed the event
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            event => self.controller.process_event(&event),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli.clone());

    if !cli.no_ui {
        println!(
            "Render Sandbox - Controls: WASD/arrows to move, mouse to look, \
             scroll to zoom, Tab to switch camera mode, Escape to quit"
        );
    }
    event_loop.run_app(&mut app)?;

    Ok(())
}
