//! Input adapter: winit window events to editor events

use glam::Vec2;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Device-independent input the editor understands
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditorEvent {
    /// Pointer position in normalized device coordinates (-1..1, +y up)
    PointerMoved(Vec2),
    /// Pointer left the window
    PointerLeft,
    /// Primary button released
    Click,
    /// Pointer moved with the primary button held past the threshold (pixels)
    Drag(Vec2),
    /// Step the action selector
    CycleAction(i32),
    /// Multi-select modifier pressed or released
    MultiSelect(bool),
}

/// Tracks pointer and button state and turns raw window events into
/// `EditorEvent`s
pub struct InputState {
    /// Window size in physical pixels
    window_size: Vec2,
    /// Current cursor position in physical pixels
    cursor: Option<Vec2>,
    /// Primary button is down
    pressed: bool,
    /// Where the primary button went down, or the first position seen after
    /// a press made before any cursor movement
    press_origin: Option<Vec2>,
    /// Whether the current press has turned into a drag
    dragging: bool,
    /// Pixels of travel before a press becomes a drag
    drag_threshold: f32,
    /// Multi-select modifier state
    shift: bool,
    /// Events produced since the last drain
    pending: Vec<EditorEvent>,
}

impl InputState {
    /// Create new input state
    pub fn new(width: f32, height: f32, drag_threshold: f32) -> Self {
        Self {
            window_size: Vec2::new(width.max(1.0), height.max(1.0)),
            cursor: None,
            pressed: false,
            press_origin: None,
            dragging: false,
            drag_threshold,
            shift: false,
            pending: Vec::new(),
        }
    }

    /// Process a window event
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Resized(size) => {
                self.set_window_size(size.width as f32, size.height as f32);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => self.on_cursor_left(),
            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                self.on_primary_button(*state == ElementState::Pressed);
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.on_shift(modifiers.state().shift_key());
            }
            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    physical_key: PhysicalKey::Code(key_code),
                    state: ElementState::Pressed,
                    repeat: false,
                    ..
                },
                ..
            } => self.on_key_pressed(*key_code),
            _ => {}
        }
    }

    pub fn set_window_size(&mut self, width: f32, height: f32) {
        self.window_size = Vec2::new(width.max(1.0), height.max(1.0));
    }

    /// Convert a pixel position to normalized device coordinates
    pub fn to_ndc(&self, pixel: Vec2) -> Vec2 {
        Vec2::new(
            pixel.x / self.window_size.x * 2.0 - 1.0,
            -(pixel.y / self.window_size.y * 2.0 - 1.0),
        )
    }

    fn on_cursor_moved(&mut self, x: f32, y: f32) {
        let position = Vec2::new(x, y);
        let last = self.cursor.replace(position);

        if self.pressed && self.press_origin.is_none() {
            self.press_origin = Some(position);
        }
        if let Some(origin) = self.press_origin {
            if !self.dragging && position.distance(origin) > self.drag_threshold {
                self.dragging = true;
            }
            if self.dragging {
                let delta = position - last.unwrap_or(origin);
                self.pending.push(EditorEvent::Drag(delta));
            }
        }

        self.pending.push(EditorEvent::PointerMoved(self.to_ndc(position)));
    }

    fn on_cursor_left(&mut self) {
        self.cursor = None;
        self.pressed = false;
        self.press_origin = None;
        self.dragging = false;
        self.pending.push(EditorEvent::PointerLeft);
    }

    fn on_primary_button(&mut self, pressed: bool) {
        if pressed {
            self.pressed = true;
            self.press_origin = self.cursor;
            self.dragging = false;
        } else if std::mem::take(&mut self.pressed) {
            self.press_origin = None;
            // A release always reports a click; a preceding drag has already
            // armed the editor to swallow it.
            self.dragging = false;
            self.pending.push(EditorEvent::Click);
        }
    }

    fn on_shift(&mut self, held: bool) {
        if held != self.shift {
            self.shift = held;
            self.pending.push(EditorEvent::MultiSelect(held));
        }
    }

    fn on_key_pressed(&mut self, key: KeyCode) {
        match key {
            KeyCode::KeyX => self.pending.push(EditorEvent::CycleAction(1)),
            KeyCode::KeyZ => self.pending.push(EditorEvent::CycleAction(-1)),
            _ => {}
        }
    }

    /// Whether the current press has become a drag
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Take all events produced since the last call
    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.pending)
    }
}
