use crate::paint::Color;

use super::ShaderParameters;

/// Fragment position in logical pixels, bottom-left origin.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FragCoord {
    pub x: f32,
    pub y: f32,
}

impl FragCoord {
    /// Converts a framebuffer position (drawable pixels, top-left origin, as
    /// `@builtin(position).xy`) to bottom-left logical pixels.
    pub fn from_drawable(x: f32, y: f32, params: &ShaderParameters) -> Self {
        let ratio = params.resolution.pixel_ratio;
        Self {
            x: x / ratio,
            y: params.resolution.height - y / ratio,
        }
    }
}

/// Per-fragment colour function.
///
/// Implementations receive the full parameter snapshot even when they use
/// only part of it.
pub trait ColorLaw {
    fn shade(&self, frag: FragCoord, params: &ShaderParameters) -> Color;
}

/// Linear blend from `bottom` to `top` over the surface height:
/// `bottom * (1 - v) + top * v` with `v = frag.y / resolution.height`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VerticalGradient {
    pub bottom: Color,
    pub top: Color,
}

impl VerticalGradient {
    pub const fn new(bottom: Color, top: Color) -> Self {
        Self { bottom, top }
    }

    /// Colour at normalized height `v` (`0` bottom, `1` top).
    #[inline]
    pub fn at(&self, v: f32) -> Color {
        self.bottom.lerp(self.top, v.clamp(0.0, 1.0))
    }
}

impl Default for VerticalGradient {
    fn default() -> Self {
        Self::new(Color::RED, Color::BLUE)
    }
}

impl ColorLaw for VerticalGradient {
    fn shade(&self, frag: FragCoord, params: &ShaderParameters) -> Color {
        self.at(frag.y / params.resolution.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ViewportSize;

    fn params() -> ShaderParameters {
        let vp = ViewportSize::new(800.0, 600.0, 1.0, 2.0).unwrap();
        ShaderParameters::new(vp, Color::WHITE)
    }

    #[test]
    fn bottom_is_red() {
        assert_eq!(VerticalGradient::default().at(0.0), Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn top_is_blue() {
        assert_eq!(VerticalGradient::default().at(1.0), Color::rgb(0.0, 0.0, 1.0));
    }

    #[test]
    fn middle_is_even_blend() {
        assert_eq!(VerticalGradient::default().at(0.5), Color::rgb(0.5, 0.0, 0.5));
    }

    #[test]
    fn shade_divides_by_vertical_resolution() {
        let g = VerticalGradient::default();
        let p = params();
        assert_eq!(g.shade(FragCoord { x: 10.0, y: 0.0 }, &p), Color::RED);
        assert_eq!(g.shade(FragCoord { x: 10.0, y: 300.0 }, &p), Color::rgb(0.5, 0.0, 0.5));
        assert_eq!(g.shade(FragCoord { x: 790.0, y: 600.0 }, &p), Color::BLUE);
    }

    #[test]
    fn drawable_top_left_maps_to_logical_bottom_left() {
        let vp = ViewportSize::new(800.0, 600.0, 2.0, 2.0).unwrap();
        let p = ShaderParameters::new(vp, Color::WHITE);

        assert_eq!(FragCoord::from_drawable(0.0, 0.0, &p), FragCoord { x: 0.0, y: 600.0 });
        assert_eq!(FragCoord::from_drawable(1600.0, 1200.0, &p), FragCoord { x: 800.0, y: 0.0 });
        assert_eq!(FragCoord::from_drawable(400.0, 600.0, &p), FragCoord { x: 200.0, y: 300.0 });
    }

    #[test]
    fn framebuffer_rows_shade_like_the_gpu() {
        // 2x display: drawable surface is 1600x1200 for a 800x600 window.
        let vp = ViewportSize::new(800.0, 600.0, 2.0, 2.0).unwrap();
        let p = ShaderParameters::new(vp, Color::WHITE);
        let g = VerticalGradient::default();
        let shade = |y: f32| g.shade(FragCoord::from_drawable(100.0, y, &p), &p);

        assert_eq!(shade(0.0), Color::BLUE);
        assert_eq!(shade(600.0), Color::rgb(0.5, 0.0, 0.5));
        assert_eq!(shade(1200.0), Color::RED);
    }

    #[test]
    fn time_and_pointer_do_not_affect_default_law() {
        let g = VerticalGradient::default();
        let mut p = params();
        let frag = FragCoord { x: 0.0, y: 150.0 };
        let before = g.shade(frag, &p);
        p.elapsed_time = 42.0;
        p.pointer = crate::shader::PointerState::new(5.0, 5.0);
        assert_eq!(g.shade(frag, &p), before);
    }
}
