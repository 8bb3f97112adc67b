use orbit_engine::coords::ViewportSize;
use orbit_engine::shader::PointerState;

/// Last known pointer or touch position.
///
/// Keeps the raw logical-pixel position (shader consumer) and the position
/// normalized to `[-0.5, 0.5]` against the viewport (cursor-look consumer).
/// Every update overwrites both.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PointerTracker {
    raw: PointerState,
    normalized: (f32, f32),
}

impl PointerTracker {
    pub fn set(&mut self, x: f32, y: f32, viewport: ViewportSize) {
        self.raw = PointerState::new(x, y);
        self.normalized = self.raw.normalized(viewport);
    }

    /// Recomputes the normalized position after a resize.
    pub fn renormalize(&mut self, viewport: ViewportSize) {
        self.normalized = self.raw.normalized(viewport);
    }

    pub fn raw(&self) -> PointerState {
        self.raw
    }

    pub fn normalized(&self) -> (f32, f32) {
        self.normalized
    }
}
