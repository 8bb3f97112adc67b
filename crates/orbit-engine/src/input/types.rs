/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Mouse wheel delta.
///
/// `Line` corresponds to "scroll lines" style input; `Pixel` is high precision.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

impl MouseWheelDelta {
    /// Vertical delta in line steps; pixel deltas assume 100 px per line.
    pub fn lines_y(self) -> f32 {
        match self {
            MouseWheelDelta::Line { y, .. } => y,
            MouseWheelDelta::Pixel { y, .. } => y / 100.0,
        }
    }
}

/// Pointer move event in logical pixels.
///
/// `dx`/`dy` are relative to the previous known position and zero when the
/// pointer just entered the surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

/// Pointer button event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
}

/// One active touch contact in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

/// Touch movement with every active contact, ordered by start time.
///
/// May be empty when the platform reports a move after the last contact ended.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TouchMoveEvent {
    pub touches: Vec<TouchPoint>,
}

impl TouchMoveEvent {
    pub fn first(&self) -> Option<TouchPoint> {
        self.touches.first().copied()
    }
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),

    MouseWheel { delta: MouseWheelDelta },

    TouchStarted(TouchPoint),
    TouchMoved(TouchMoveEvent),
    TouchEnded { id: u64 },

    /// Two primary-button presses close together in time and space.
    DoubleClick { x: f32, y: f32 },

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),
}
