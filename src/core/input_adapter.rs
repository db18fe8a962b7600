use std::collections::HashSet;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::{Button, Controller};

/// Adapter that bridges winit events to the Controller trait. Tracks
/// pressed logical buttons, the cursor position, and scroll accumulated
/// since the last frame.
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Current cursor position (relative to window)
    cursor_position: Option<(f32, f32)>,
    /// Scroll steps accumulated since the last `take_scroll`
    scroll: f32,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pressed_vec: Vec::new(),
            cursor_position: None,
            scroll: 0.0,
        }
    }

    /// Process a winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        match event.state {
                            ElementState::Pressed => {
                                if self.pressed_keys.insert(button) {
                                    self.pressed_vec.push(button);
                                }
                            }
                            ElementState::Released => {
                                if self.pressed_keys.remove(&button) {
                                    self.pressed_vec.retain(|&b| b != button);
                                }
                            }
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = Some((position.x as f32, position.y as f32));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
            }
            _ => {}
        }
    }

    /// Get current cursor position (if the cursor has entered the window)
    pub fn cursor_position(&self) -> Option<(f32, f32)> {
        self.cursor_position
    }

    /// Drain the scroll accumulated since the previous call.
    /// Call once per frame when assembling camera input.
    pub fn take_scroll(&mut self) -> f32 {
        std::mem::take(&mut self.scroll)
    }

    /// Map winit KeyCode to a logical Button.
    /// WASD and the arrow keys both steer movement.
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW | KeyCode::ArrowUp => Some(Button::Forward),
            KeyCode::KeyS | KeyCode::ArrowDown => Some(Button::Backward),
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(Button::StrafeLeft),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(Button::StrafeRight),
            KeyCode::Tab => Some(Button::SwitchMode),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }
}
