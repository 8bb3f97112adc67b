use crate::coords::ViewportSize;
use crate::paint::Color;

/// Pointer position in logical surface pixels, top-left origin.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Maps the position into `[-0.5, 0.5]` per axis relative to `viewport`.
    pub fn normalized(self, viewport: ViewportSize) -> (f32, f32) {
        (self.x / viewport.width - 0.5, self.y / viewport.height - 0.5)
    }
}

/// Snapshot of fragment-stage inputs for one frame.
///
/// Only `resolution` feeds the default colour law; `elapsed_time`, `pointer`
/// and `tint` are uploaded regardless so alternative laws can use them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShaderParameters {
    /// Seconds since the run started; never decreases.
    pub elapsed_time: f32,
    pub pointer: PointerState,
    pub resolution: ViewportSize,
    pub tint: Color,
}

impl ShaderParameters {
    pub fn new(resolution: ViewportSize, tint: Color) -> Self {
        Self {
            elapsed_time: 0.0,
            pointer: PointerState::default(),
            resolution,
            tint,
        }
    }

    /// Rebuilds the snapshot from current state, keeping `tint`.
    ///
    /// `elapsed_time` only moves forward, even if a caller samples an earlier instant.
    pub fn refresh(&mut self, elapsed_time: f32, pointer: PointerState, resolution: ViewportSize) {
        self.elapsed_time = self.elapsed_time.max(elapsed_time);
        self.pointer = pointer;
        self.resolution = resolution;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_pointer_spans_half_unit() {
        let vp = ViewportSize::new(800.0, 600.0, 1.0, 2.0).unwrap();
        assert_eq!(PointerState::new(0.0, 0.0).normalized(vp), (-0.5, -0.5));
        assert_eq!(PointerState::new(400.0, 300.0).normalized(vp), (0.0, 0.0));
        assert_eq!(PointerState::new(800.0, 600.0).normalized(vp), (0.5, 0.5));
    }

    #[test]
    fn refresh_never_moves_time_backwards() {
        let mut p = ShaderParameters::new(ViewportSize::default(), Color::WHITE);
        p.refresh(2.0, PointerState::new(1.0, 1.0), ViewportSize::default());
        p.refresh(1.0, PointerState::new(2.0, 2.0), ViewportSize::default());
        assert_eq!(p.elapsed_time, 2.0);
        assert_eq!(p.pointer, PointerState::new(2.0, 2.0));
    }
}
