use std::time::{Duration, Instant};

use crate::coords::Vec2;

/// Detects double-clicks from a stream of primary-button presses.
///
/// A press completes a double-click when it lands within `interval` and
/// `slop` logical pixels of the previous press. The pair is then consumed, so
/// a triple click yields one double-click, not two.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    interval: Duration,
    slop: f32,
    last: Option<(Instant, Vec2)>,
}

impl ClickTracker {
    pub fn new(interval: Duration, slop: f32) -> Self {
        Self {
            interval,
            slop,
            last: None,
        }
    }

    /// Registers a press; returns `true` if it completes a double-click.
    pub fn press(&mut self, pos: Vec2, now: Instant) -> bool {
        let is_double = self.last.is_some_and(|(t, p)| {
            now.saturating_duration_since(t) <= self.interval && (pos - p).length() <= self.slop
        });

        self.last = if is_double { None } else { Some((now, pos)) };
        is_double
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(Duration::from_millis(500), 4.0)
    }
}
