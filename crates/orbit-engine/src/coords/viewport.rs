/// Upper bound on the drawable pixel ratio.
///
/// Fragment cost grows with the square of the ratio; dense displays are
/// rendered at 2x and scaled by the compositor.
pub const DEFAULT_MAX_PIXEL_RATIO: f64 = 2.0;

/// Render-surface size in logical pixels plus the (capped) pixel ratio.
///
/// Invariant: `width > 0`, `height > 0`, `0 < pixel_ratio <= cap`, so
/// `aspect()` is always finite and positive. Constructors return `None`
/// for sizes that would break it (minimized windows report 0x0).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl ViewportSize {
    /// Builds a viewport from logical size and the platform scale factor,
    /// clamping the ratio to `max_pixel_ratio`.
    pub fn new(width: f32, height: f32, scale_factor: f64, max_pixel_ratio: f64) -> Option<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) || !(scale_factor > 0.0) {
            return None;
        }

        let pixel_ratio = scale_factor.min(max_pixel_ratio.max(1.0)) as f32;
        Some(Self {
            width,
            height,
            pixel_ratio,
        })
    }

    /// Builds a viewport from a physical window size.
    pub fn from_physical(
        width: u32,
        height: u32,
        scale_factor: f64,
        max_pixel_ratio: f64,
    ) -> Option<Self> {
        if !(scale_factor > 0.0) {
            return None;
        }
        let w = (width as f64 / scale_factor) as f32;
        let h = (height as f64 / scale_factor) as f32;
        Self::new(w, h, scale_factor, max_pixel_ratio)
    }

    #[inline]
    pub fn aspect(self) -> f32 {
        self.width / self.height
    }

    /// Drawable surface size in physical pixels at the capped ratio.
    #[inline]
    pub fn drawable_size(self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio).round().max(1.0) as u32;
        let h = (self.height * self.pixel_ratio).round().max(1.0) as u32;
        (w, h)
    }

    #[inline]
    pub fn resolution(self) -> [f32; 2] {
        [self.width, self.height]
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            pixel_ratio: 1.0,
        }
    }
}
