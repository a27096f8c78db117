//! Color pass
//!
//! Renders the visible frame: two-light Phong shading with a shadow test
//! against the shadow pass's depth texture. Objects draw in insertion
//! order — correctness does not depend on it (depth-tested, opaque), but
//! the order is deterministic for reproducible output.

use bytemuck::Zeroable;
use wgpu::util::DeviceExt;

use crate::renderer::object::DrawableObject;
use crate::renderer::pipeline::PipelineSet;
use crate::renderer::uniforms::GlobalUniforms;
use crate::scene::Scene;

pub struct ColorPass {
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    clear_color: wgpu::Color,
}

impl ColorPass {
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        pipelines: &PipelineSet,
        shadow_map: &wgpu::TextureView,
        clear_color: wgpu::Color,
    ) -> Self {
        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Color Globals"),
            contents: bytemuck::bytes_of(&GlobalUniforms::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let shadow_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Shadow Comparison Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            compare: Some(wgpu::CompareFunction::LessEqual),
            ..Default::default()
        });

        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Color Globals BindGroup"),
            layout: &pipelines.globals_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: globals_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(shadow_map),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&shadow_sampler),
                },
            ],
        });

        Self {
            globals_buffer,
            globals_bind_group,
            clear_color,
        }
    }

    /// Uploads the frame's global shading inputs.
    pub fn prepare(&self, queue: &wgpu::Queue, scene: &Scene) {
        let uniforms = GlobalUniforms::from_scene(scene);
        queue.write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Records the shaded pass into the window target.
    pub fn record(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        depth: &wgpu::TextureView,
        pipelines: &PipelineSet,
        objects: &[DrawableObject],
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Color Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth,
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

        pass.set_bind_group(0, &self.globals_bind_group, &[]);

        for object in objects {
            pass.set_pipeline(pipelines.color_pipeline(object.capabilities()));
            object.draw_color(&mut pass);
        }
    }
}
