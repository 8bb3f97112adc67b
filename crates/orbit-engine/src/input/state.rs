use std::collections::HashSet;
use std::time::Instant;

use crate::coords::Vec2;

use super::click::ClickTracker;
use super::types::{
    InputEvent,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
    TouchMoveEvent,
    TouchPoint,
};

/// Current input state for the window.
///
/// Holds "is down" information, the pointer position and active touches.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,

    /// Active touch contacts, oldest first.
    pub touches: Vec<TouchPoint>,

    clicks: ClickTracker,
}

impl InputState {
    /// Applies an input event to the current state.
    ///
    /// Returns a synthesized `InputEvent::DoubleClick` when a left press
    /// completes one; the caller delivers it after `ev`.
    pub fn apply_event(&mut self, ev: &InputEvent, now: Instant) -> Option<InputEvent> {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoids stuck buttons when focus changes mid-press.
                    self.buttons_down.clear();
                    self.clicks.reset();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y, .. }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((*x, *y));

                match state {
                    MouseButtonState::Pressed => {
                        self.buttons_down.insert(*button);
                        if *button == MouseButton::Left
                            && self.clicks.press(Vec2::new(*x, *y), now)
                        {
                            return Some(InputEvent::DoubleClick { x: *x, y: *y });
                        }
                    }
                    MouseButtonState::Released => {
                        self.buttons_down.remove(button);
                    }
                }
            }

            InputEvent::TouchStarted(point) => {
                self.touches.retain(|t| t.id != point.id);
                self.touches.push(*point);
            }

            InputEvent::TouchMoved(TouchMoveEvent { touches }) => {
                self.touches.clone_from(touches);
            }

            InputEvent::TouchEnded { id } => {
                self.touches.retain(|t| t.id != *id);
            }

            InputEvent::MouseWheel { .. } | InputEvent::DoubleClick { .. } => {}
        }

        None
    }

    /// Active touches with `point` replacing (or appended as) its contact.
    pub fn touches_with(&self, point: TouchPoint) -> Vec<TouchPoint> {
        let mut touches = self.touches.clone();
        match touches.iter_mut().find(|t| t.id == point.id) {
            Some(t) => *t = point,
            None => touches.push(point),
        }
        touches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn press(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x,
            y,
        })
    }

    fn touch(id: u64, x: f32, y: f32) -> TouchPoint {
        TouchPoint { id, x, y }
    }

    #[test]
    fn pointer_move_overwrites_position() {
        let mut s = InputState::default();
        let now = Instant::now();
        s.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 2.0, dx: 0.0, dy: 0.0 }), now);
        s.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 5.0, y: 6.0, dx: 4.0, dy: 4.0 }), now);
        assert_eq!(s.pointer_pos, Some((5.0, 6.0)));
        s.apply_event(&InputEvent::PointerLeft, now);
        assert_eq!(s.pointer_pos, None);
    }

    #[test]
    fn second_left_press_synthesizes_double_click() {
        let mut s = InputState::default();
        let t0 = Instant::now();
        assert_eq!(s.apply_event(&press(3.0, 3.0), t0), None);
        let derived = s.apply_event(&press(3.0, 3.0), t0 + Duration::from_millis(150));
        assert_eq!(derived, Some(InputEvent::DoubleClick { x: 3.0, y: 3.0 }));
        assert!(s.buttons_down.contains(&MouseButton::Left));
    }

    #[test]
    fn focus_loss_clears_buttons() {
        let mut s = InputState::default();
        let now = Instant::now();
        s.apply_event(&press(0.0, 0.0), now);
        s.apply_event(&InputEvent::Focused(false), now);
        assert!(s.buttons_down.is_empty());
    }

    #[test]
    fn touches_track_start_move_end() {
        let mut s = InputState::default();
        let now = Instant::now();
        s.apply_event(&InputEvent::TouchStarted(touch(1, 0.0, 0.0)), now);
        s.apply_event(&InputEvent::TouchStarted(touch(2, 9.0, 9.0)), now);

        let moved = s.touches_with(touch(1, 4.0, 4.0));
        assert_eq!(moved[0], touch(1, 4.0, 4.0));
        s.apply_event(&InputEvent::TouchMoved(TouchMoveEvent { touches: moved }), now);
        assert_eq!(s.touches.len(), 2);

        s.apply_event(&InputEvent::TouchEnded { id: 1 }, now);
        assert_eq!(s.touches, vec![touch(2, 9.0, 9.0)]);
    }

    #[test]
    fn unknown_touch_is_appended() {
        let s = InputState::default();
        assert_eq!(s.touches_with(touch(7, 1.0, 1.0)), vec![touch(7, 1.0, 1.0)]);
    }
}
