use crate::coords::ViewportSize;
use crate::input::InputEvent;

use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called for each translated input event, including synthesized
    /// double-clicks, in arrival order.
    fn on_input(&mut self, window: &WindowCtx<'_>, event: &InputEvent) -> AppControl {
        let _ = (window, event);
        AppControl::Continue
    }

    /// Called after the surface has been resized to `viewport`.
    ///
    /// Degenerate sizes (minimized windows) are not reported.
    fn on_resize(&mut self, window: &WindowCtx<'_>, viewport: ViewportSize) -> AppControl {
        let _ = (window, viewport);
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
