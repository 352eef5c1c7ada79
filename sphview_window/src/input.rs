use indexmap::IndexSet;
use sphview_viz::Vec2;
use winit::{
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

/// Access to keyboard and mouse state, sampled once per frame.
#[derive(Debug)]
pub struct Input {
    prev_keys_down: IndexSet<KeyCode>,
    keys_down: IndexSet<KeyCode>,
    prev_mouse_buttons_down: IndexSet<MouseButton>,
    mouse_buttons_down: IndexSet<MouseButton>,
    mouse_pos: Option<Vec2>,
    mouse_wheel_delta: Vec2,
}

impl Input {
    pub(crate) fn new() -> Self {
        Self {
            prev_keys_down: IndexSet::new(),
            keys_down: IndexSet::new(),
            prev_mouse_buttons_down: IndexSet::new(),
            mouse_buttons_down: IndexSet::new(),
            mouse_pos: None,
            mouse_wheel_delta: Vec2::zero(),
        }
    }

    pub(crate) fn handle_event(&mut self, window: &Window, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => {
                            self.keys_down.insert(key_code);
                        }
                        ElementState::Released => {
                            self.keys_down.swap_remove(&key_code);
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(window.scale_factor());
                self.mouse_pos = Some([logical.x, logical.y].into());
            }
            WindowEvent::MouseWheel { delta, .. } => {
                match *delta {
                    MouseScrollDelta::LineDelta(dx, dy) => {
                        self.mouse_wheel_delta[0] += dx;
                        self.mouse_wheel_delta[1] += dy;
                    }
                    MouseScrollDelta::PixelDelta(physical) => {
                        let logical = physical.to_logical::<f32>(window.scale_factor());
                        let line_size = 30.0;
                        self.mouse_wheel_delta[0] += logical.x / line_size;
                        self.mouse_wheel_delta[1] += logical.y / line_size;
                    }
                };
            }
            WindowEvent::MouseInput { state, button, .. } => match *state {
                ElementState::Pressed => {
                    self.mouse_buttons_down.insert(*button);
                }
                ElementState::Released => {
                    self.mouse_buttons_down.swap_remove(button);
                }
            },
            _ => {}
        }
    }

    pub(crate) fn end_frame(&mut self) {
        self.prev_keys_down = self.keys_down.clone();
        self.prev_mouse_buttons_down = self.mouse_buttons_down.clone();
        self.mouse_wheel_delta = Vec2::zero();
    }

    /// Returns true if the physical key is currently down.
    pub fn key_down(&self, key_code: KeyCode) -> bool {
        self.keys_down.contains(&key_code)
    }

    /// Returns true if the physical key was pressed this frame.
    pub fn key_pressed(&self, key_code: KeyCode) -> bool {
        !self.prev_keys_down.contains(&key_code) && self.keys_down.contains(&key_code)
    }

    /// Returns true if the mouse button is currently down.
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    /// Returns true if the mouse button was pressed this frame.
    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        !self.prev_mouse_buttons_down.contains(&button) && self.mouse_buttons_down.contains(&button)
    }

    /// Returns the current mouse position in logical coordinates, or `None`
    /// if no cursor move events have been received yet.
    pub fn mouse_pos(&self) -> Option<Vec2> {
        self.mouse_pos
    }

    /// Returns the mouse wheel delta from this frame, in lines/rows.
    pub fn mouse_wheel_delta(&self) -> Vec2 {
        self.mouse_wheel_delta
    }
}

/// Helper struct which tracks the state of a left mouse button drag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragState {
    drag_start_pos: Option<Vec2>,
    current_pos: Option<Vec2>,
    prev_pos: Option<Vec2>,
}

impl DragState {
    /// Creates a new `DragState`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the drag state based on the given user input.
    ///
    /// A drag starts when the left button is pressed and ends when it is
    /// released.
    pub fn update(&mut self, input: &Input) {
        if input.mouse_pressed(MouseButton::Left) {
            self.drag_start_pos = input.mouse_pos();
        } else if !input.mouse_down(MouseButton::Left) {
            self.drag_start_pos = None;
        }
        self.prev_pos = self.current_pos;
        self.current_pos = input.mouse_pos();
    }

    /// Returns true if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag_start_pos.is_some()
    }

    /// Returns the amount the mouse has been dragged since the previous frame.
    pub fn drag_delta(&self) -> Vec2 {
        match (self.drag_start_pos, self.prev_pos, self.current_pos) {
            (Some(_), Some(prev_pos), Some(current_pos)) => current_pos - prev_pos,
            _ => Vec2::zero(),
        }
    }
}
