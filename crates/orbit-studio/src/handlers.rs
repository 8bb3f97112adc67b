//! Event handlers.
//!
//! Each handler mutates the shared `AppContext` between frames and never
//! renders; the render loop picks the new state up on its next iteration.

use orbit_engine::coords::ViewportSize;
use orbit_engine::input::{
    InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent, TouchMoveEvent,
};
use orbit_engine::window::WindowMode;

use crate::config::CameraRig;
use crate::context::AppContext;

/// Applies a new surface size to the camera, shader parameters and pointer.
pub fn on_resize(ctx: &mut AppContext, viewport: ViewportSize) {
    ctx.viewport = viewport;
    ctx.scene.camera.set_aspect(viewport.aspect());
    ctx.params.resolution = viewport;
    ctx.pointer.renormalize(viewport);
}

/// Records the pointer and, while dragging, queues an orbit rotation.
pub fn on_pointer_move(ctx: &mut AppContext, ev: &PointerMoveEvent) {
    ctx.pointer.set(ev.x, ev.y, ctx.viewport);
    if ctx.dragging && ctx.camera_rig == CameraRig::Orbit {
        ctx.controls.rotate_by_pixels(ev.dx, ev.dy, ctx.viewport.height);
    }
}

pub fn on_pointer_button(ctx: &mut AppContext, ev: &PointerButtonEvent) {
    if ev.button == MouseButton::Left {
        ctx.dragging = ev.state == MouseButtonState::Pressed;
    }
}

/// Follows the first active touch. An empty touch list changes nothing.
pub fn on_touch_move(ctx: &mut AppContext, ev: &TouchMoveEvent) {
    let Some(first) = ev.first() else { return };
    ctx.pointer.set(first.x, first.y, ctx.viewport);
}

/// Flips the window mode once. Returns the mode to apply to the window.
///
/// `current` is the mode the window reports, which may differ from the
/// context if the platform left full-screen on its own.
pub fn on_double_click(ctx: &mut AppContext, current: WindowMode) -> WindowMode {
    ctx.window_mode = current.toggled();
    ctx.window_mode
}

pub fn on_wheel(ctx: &mut AppContext, lines: f32) {
    if ctx.camera_rig == CameraRig::Orbit && lines != 0.0 {
        ctx.controls.dolly(lines);
    }
}

/// Routes one input event. Returns a window mode change to apply, if any.
pub fn dispatch(ctx: &mut AppContext, event: &InputEvent, current: WindowMode) -> Option<WindowMode> {
    match event {
        InputEvent::PointerMoved(ev) => on_pointer_move(ctx, ev),
        InputEvent::PointerButton(ev) => on_pointer_button(ctx, ev),
        InputEvent::MouseWheel { delta } => on_wheel(ctx, delta.lines_y()),
        InputEvent::TouchMoved(ev) => on_touch_move(ctx, ev),
        InputEvent::TouchStarted(point) => ctx.pointer.set(point.x, point.y, ctx.viewport),
        InputEvent::DoubleClick { .. } => return Some(on_double_click(ctx, current)),
        InputEvent::Focused(false) | InputEvent::PointerLeft => ctx.dragging = false,
        InputEvent::TouchEnded { .. } | InputEvent::Focused(true) => {}
    }
    None
}
