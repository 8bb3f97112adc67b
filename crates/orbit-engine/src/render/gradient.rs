use crate::scene::{Geometry, Topology};
use crate::shader::GradientUniform;

use super::mesh::{MeshPass, MeshRenderer};
use super::{RenderCtx, RenderTarget};

const PASS: MeshPass = MeshPass {
    label: "orbit gradient",
    shader: include_str!("shaders/gradient.wgsl"),
    topology: Topology::Triangles,
};

/// Draws filled geometry with the screen-space vertical gradient.
///
/// All shader parameters are uploaded each frame, including the ones the
/// default gradient ignores.
pub struct GradientRenderer(MeshRenderer<GradientUniform>);

impl GradientRenderer {
    pub fn new() -> Self {
        Self(MeshRenderer::new(PASS))
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        geometry: Geometry,
        uniform: &GradientUniform,
    ) {
        self.0.render(ctx, target, geometry, uniform);
    }
}

impl Default for GradientRenderer {
    fn default() -> Self {
        Self::new()
    }
}
