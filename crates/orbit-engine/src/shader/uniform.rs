use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::paint::Color;

use super::{ShaderParameters, VerticalGradient};

/// GPU layout of `Uniforms` in `gradient.wgsl` (uniform address space, 144 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct GradientUniform {
    pub mvp: [[f32; 4]; 4],
    pub color_bottom: [f32; 4],
    pub color_top: [f32; 4],
    pub tint: [f32; 4],
    pub resolution: [f32; 2],
    pub pointer: [f32; 2],
    pub time: f32,
    pub pixel_ratio: f32,
    pub _pad: [f32; 2], // 16-byte alignment
}

impl GradientUniform {
    pub fn new(mvp: Mat4, gradient: &VerticalGradient, params: &ShaderParameters) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
            color_bottom: gradient.bottom.to_array(),
            color_top: gradient.top.to_array(),
            tint: params.tint.to_array(),
            resolution: params.resolution.resolution(),
            pointer: [params.pointer.x, params.pointer.y],
            time: params.elapsed_time,
            pixel_ratio: params.resolution.pixel_ratio,
            _pad: [0.0; 2],
        }
    }
}

/// GPU layout of `Uniforms` in `wireframe.wgsl` (80 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct WireframeUniform {
    pub mvp: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl WireframeUniform {
    pub fn new(mvp: Mat4, color: Color) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
            color: color.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ViewportSize;
    use crate::shader::PointerState;

    #[test]
    fn sizes_match_wgsl_layouts() {
        assert_eq!(std::mem::size_of::<GradientUniform>(), 144);
        assert_eq!(std::mem::size_of::<WireframeUniform>(), 80);
    }

    #[test]
    fn gradient_uniform_carries_every_parameter() {
        let vp = ViewportSize::new(800.0, 600.0, 2.0, 2.0).unwrap();
        let mut params = ShaderParameters::new(vp, Color::rgb(0.2, 0.4, 0.6));
        params.refresh(3.5, PointerState::new(12.0, 34.0), vp);

        let u = GradientUniform::new(Mat4::IDENTITY, &VerticalGradient::default(), &params);
        assert_eq!(u.resolution, [800.0, 600.0]);
        assert_eq!(u.pixel_ratio, 2.0);
        assert_eq!(u.pointer, [12.0, 34.0]);
        assert_eq!(u.time, 3.5);
        assert_eq!(u.tint, [0.2, 0.4, 0.6, 1.0]);
        assert_eq!(u.color_bottom, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(u.color_top, [0.0, 0.0, 1.0, 1.0]);
    }
}
