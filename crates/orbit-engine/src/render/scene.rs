use crate::scene::{Material, Scene};
use crate::shader::{GradientUniform, ShaderParameters, WireframeUniform};

use super::{GradientRenderer, RenderCtx, RenderTarget, WireframeRenderer};

/// Renders a `Scene` by dispatching on the object's material.
#[derive(Default)]
pub struct SceneRenderer {
    gradient: GradientRenderer,
    wireframe: WireframeRenderer,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        scene: &Scene,
        params: &ShaderParameters,
    ) {
        let mvp = scene.model_view_projection();
        let object = &scene.object;

        match &object.material {
            Material::Gradient(gradient) => {
                let uniform = GradientUniform::new(mvp, gradient, params);
                self.gradient.render(ctx, target, object.geometry, &uniform);
            }
            Material::Wireframe { color } => {
                let uniform = WireframeUniform::new(mvp, *color);
                self.wireframe.render(ctx, target, object.geometry, &uniform);
            }
        }
    }
}
