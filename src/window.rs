use glam::Mat4;
use std::sync::Arc;
use winit::window::Window as WinitWindow;

use crate::renderer::SandboxRenderer;

/// Wrapper around winit Window with imperative draw API
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    /// Draw a frame using the provided renderer and camera matrices
    pub fn draw(
        &self,
        renderer: &mut SandboxRenderer,
        view: Mat4,
        projection: Mat4,
        fps: f32,
        show_ui: bool,
    ) -> Result<(), wgpu::SurfaceError> {
        renderer.render(&self.inner, view, projection, fps, show_ui)
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    pub fn inner_size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.inner.inner_size()
    }
}
