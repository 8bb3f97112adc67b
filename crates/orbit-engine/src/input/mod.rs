//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `platform::winit` translates window events into `InputEvent`s; `InputState`
//! folds them into current state and synthesizes double-clicks.

mod click;
pub(crate) mod platform;
mod state;
mod types;

pub use click::ClickTracker;
pub use state::InputState;
pub use types::{
    InputEvent,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
    TouchMoveEvent,
    TouchPoint,
};
