use crate::scene::{Geometry, Topology};
use crate::shader::WireframeUniform;

use super::mesh::{MeshPass, MeshRenderer};
use super::{RenderCtx, RenderTarget};

const PASS: MeshPass = MeshPass {
    label: "orbit wireframe",
    shader: include_str!("shaders/wireframe.wgsl"),
    topology: Topology::Lines,
};

/// Draws every triangle edge of a geometry as unlit lines.
pub struct WireframeRenderer(MeshRenderer<WireframeUniform>);

impl WireframeRenderer {
    pub fn new() -> Self {
        Self(MeshRenderer::new(PASS))
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        geometry: Geometry,
        uniform: &WireframeUniform,
    ) {
        self.0.render(ctx, target, geometry, uniform);
    }
}

impl Default for WireframeRenderer {
    fn default() -> Self {
        Self::new()
    }
}
