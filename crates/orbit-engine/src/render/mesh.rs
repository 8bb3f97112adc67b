use std::marker::PhantomData;

use bytemuck::Pod;

use crate::scene::{Geometry, MeshData, Topology};

use super::common::{mesh_pipeline, uniform_bind_group_layout, GpuMesh};
use super::{RenderCtx, RenderTarget};

/// Static description of one mesh renderer: labels, WGSL source, topology.
#[derive(Debug, Copy, Clone)]
pub(super) struct MeshPass {
    pub label: &'static str,
    pub shader: &'static str,
    pub topology: Topology,
}

impl MeshPass {
    /// CPU mesh for `geometry` in this pass's topology.
    pub(super) fn mesh(&self, geometry: Geometry) -> MeshData {
        match self.topology {
            Topology::Triangles => geometry.triangles(),
            Topology::Lines => geometry.wireframe(),
        }
    }
}

/// Draws one geometry with a single uniform block of type `U` at binding 0.
///
/// Pipeline, bindings and mesh are created on first use. The pipeline is
/// rebuilt if the surface format changes, the mesh if the geometry does.
pub(super) struct MeshRenderer<U> {
    pass: MeshPass,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    uniform_buffer: Option<wgpu::Buffer>,

    mesh: Option<GpuMesh>,

    _uniform: PhantomData<U>,
}

impl<U: Pod> MeshRenderer<U> {
    pub(super) fn new(pass: MeshPass) -> Self {
        Self {
            pass,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            uniform_buffer: None,
            mesh: None,
            _uniform: PhantomData,
        }
    }

    pub(super) fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        geometry: Geometry,
        uniform: &U,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.ensure_mesh(ctx, geometry);

        let Some(ubo) = self.uniform_buffer.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(uniform));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(mesh) = self.mesh.as_ref() else { return };

        let mut rpass = target.load_pass(self.pass.label);
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, mesh.vbo.slice(..));
        rpass.set_index_buffer(mesh.ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }
        let label = self.pass.label;

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("{label} shader")),
            source: wgpu::ShaderSource::Wgsl(self.pass.shader.into()),
        });

        let bind_group_layout = uniform_bind_group_layout::<U>(
            ctx.device,
            &format!("{label} bgl"),
            wgpu::ShaderStages::VERTEX_FRAGMENT,
        );

        let pipeline = mesh_pipeline(
            ctx,
            &format!("{label} pipeline"),
            &shader,
            &bind_group_layout,
            self.pass.topology,
        );

        log::debug!("{label} pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.uniform_buffer = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.uniform_buffer.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        let label = self.pass.label;

        let uniform_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label} ubo")),
            size: std::mem::size_of::<U>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} bind group")),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        self.uniform_buffer = Some(uniform_buffer);
        self.bind_group = Some(bind_group);
    }

    fn ensure_mesh(&mut self, ctx: &RenderCtx<'_>, geometry: Geometry) {
        if self.mesh.as_ref().is_some_and(|m| m.geometry == geometry) {
            return;
        }
        let label = format!("{} mesh", self.pass.label);
        self.mesh = Some(GpuMesh::upload(ctx, geometry, self.pass.mesh(geometry), &label));
    }
}
