//! Shadow pass
//!
//! Renders the whole scene depth-only from the shadow-casting light's
//! point of view into a fixed-resolution offscreen depth texture. The
//! target never tracks the window size. The pass is recorded into the
//! frame encoder before the color pass, so the FIFO command stream
//! guarantees the depth texture is complete when it is sampled.

use wgpu::util::DeviceExt;

use crate::renderer::object::DrawableObject;
use crate::renderer::pipeline::PipelineSet;
use crate::renderer::uniforms::ShadowUniforms;
use crate::scene::light::LightRig;

pub struct ShadowPass {
    map_size: u32,
    depth_view: wgpu::TextureView,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
}

impl ShadowPass {
    #[must_use]
    pub fn new(device: &wgpu::Device, pipelines: &PipelineSet, map_size: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Shadow Map"),
            size: wgpu::Extent3d {
                width: map_size,
                height: map_size,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let depth_view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Shadow Globals"),
            contents: bytemuck::bytes_of(&ShadowUniforms {
                light_view_projection: glam::Mat4::IDENTITY,
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Shadow Globals BindGroup"),
            layout: &pipelines.shadow_globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        Self {
            map_size,
            depth_view,
            globals_buffer,
            globals_bind_group,
        }
    }

    /// Fixed edge length of the square shadow map.
    #[inline]
    #[must_use]
    pub fn map_size(&self) -> u32 {
        self.map_size
    }

    /// The depth texture the color pass samples.
    #[must_use]
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth_view
    }

    /// Uploads the light's view-projection. Recomputed every frame;
    /// identical as long as the light does not move.
    pub fn prepare(&self, queue: &wgpu::Queue, lights: &LightRig) {
        let uniforms = ShadowUniforms {
            light_view_projection: lights.light_projection_matrix() * lights.light_view_matrix(),
        };
        queue.write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Records the depth-only pass over every object in the scene.
    pub fn record(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        pipelines: &PipelineSet,
        objects: &[DrawableObject],
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Shadow Depth Pass"),
            color_attachments: &[],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        pass.set_pipeline(&pipelines.shadow_pipeline);
        pass.set_bind_group(0, &self.globals_bind_group, &[]);

        for object in objects {
            object.draw_depth_only(&mut pass);
        }
    }
}
