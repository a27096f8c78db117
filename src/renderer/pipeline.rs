//! Pipelines and bind group layouts
//!
//! Everything the per-frame path needs to bind is resolved here, once, at
//! renderer creation: bind group layouts, the shadow pipeline, and one
//! color pipeline per mesh capability set. The WGSL for the color pass is
//! rendered from a template so each variant only declares the vertex
//! attributes its meshes actually carry.

use std::sync::OnceLock;

use minijinja::Environment;
use minijinja::syntax::SyntaxConfig;
use rustc_hash::FxHashMap;

use crate::renderer::uniforms::{GlobalUniforms, ObjectUniforms, ShadowUniforms};
use crate::resources::mesh::MeshCapabilities;

/// Depth bias applied while rasterizing the shadow map, against self
/// shadowing ("shadow acne").
pub const SHADOW_DEPTH_BIAS: wgpu::DepthBiasState = wgpu::DepthBiasState {
    constant: 2,
    slope_scale: 2.0,
    clamp: 0.0,
};

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const NORMAL_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];
const UV_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![2 => Float32x2];

static SHADER_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Template environment for WGSL generation.
///
/// Block delimiters are `{$ ... $}` so WGSL braces never collide with the
/// template syntax.
fn shader_env() -> &'static Environment<'static> {
    SHADER_ENV.get_or_init(|| {
        let mut env = Environment::new();

        let syntax = SyntaxConfig::builder()
            .block_delimiters("{$", "$}")
            .variable_delimiters("{{", "}}")
            .comment_delimiters("{#", "#}")
            .build()
            .expect("Failed to configure shader template syntax");
        env.set_syntax(syntax);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_template("phong.wgsl", include_str!("shaders/phong.wgsl"))
            .expect("Shader template failed to parse");
        env
    })
}

fn generate_color_shader(caps: MeshCapabilities) -> String {
    let template = shader_env()
        .get_template("phong.wgsl")
        .expect("Shader template not found");
    template
        .render(minijinja::context! {
            has_normals => caps.contains(MeshCapabilities::NORMALS),
            has_uv => caps.contains(MeshCapabilities::UV),
        })
        .expect("Shader render failed")
}

/// Vertex buffer slots for a capability set, in fixed order:
/// positions, then normals, then uvs.
fn vertex_layouts(caps: MeshCapabilities) -> Vec<wgpu::VertexBufferLayout<'static>> {
    let mut layouts = vec![wgpu::VertexBufferLayout {
        array_stride: 12,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }];
    if caps.contains(MeshCapabilities::NORMALS) {
        layouts.push(wgpu::VertexBufferLayout {
            array_stride: 12,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &NORMAL_ATTRS,
        });
    }
    if caps.contains(MeshCapabilities::UV) {
        layouts.push(wgpu::VertexBufferLayout {
            array_stride: 8,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &UV_ATTRS,
        });
    }
    layouts
}

/// All pipelines and shared bind group layouts, built once.
pub struct PipelineSet {
    /// Color pass group 0: globals + shadow map + comparison sampler.
    pub globals_layout: wgpu::BindGroupLayout,
    /// Shadow pass group 0: light view-projection.
    pub shadow_globals_layout: wgpu::BindGroupLayout,
    /// Group 1: per-object uniforms, shared by both passes.
    pub object_layout: wgpu::BindGroupLayout,
    /// Group 2: diffuse texture, textured variants only.
    pub material_layout: wgpu::BindGroupLayout,

    pub shadow_pipeline: wgpu::RenderPipeline,
    color_pipelines: FxHashMap<MeshCapabilities, wgpu::RenderPipeline>,
}

impl PipelineSet {
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
    ) -> Self {
        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Color Globals Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            size_of::<GlobalUniforms>() as u64
                        ),
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Depth,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Comparison),
                    count: None,
                },
            ],
        });

        let shadow_globals_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Shadow Globals Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            size_of::<ShadowUniforms>() as u64
                        ),
                    },
                    count: None,
                }],
            });

        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Object Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(size_of::<ObjectUniforms>() as u64),
                },
                count: None,
            }],
        });

        let material_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Material Texture Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let shadow_pipeline = Self::build_shadow_pipeline(
            device,
            &shadow_globals_layout,
            &object_layout,
            depth_format,
        );

        let mut color_pipelines = FxHashMap::default();
        for caps in [
            MeshCapabilities::empty(),
            MeshCapabilities::NORMALS,
            MeshCapabilities::UV,
            MeshCapabilities::NORMALS | MeshCapabilities::UV,
        ] {
            let pipeline = Self::build_color_pipeline(
                device,
                &globals_layout,
                &object_layout,
                &material_layout,
                color_format,
                depth_format,
                caps,
            );
            color_pipelines.insert(caps, pipeline);
        }

        Self {
            globals_layout,
            shadow_globals_layout,
            object_layout,
            material_layout,
            shadow_pipeline,
            color_pipelines,
        }
    }

    /// Color pipeline for a mesh capability set. Every set is built at
    /// creation, so a miss is a programmer error.
    #[must_use]
    pub fn color_pipeline(&self, caps: MeshCapabilities) -> &wgpu::RenderPipeline {
        self.color_pipelines
            .get(&caps)
            .expect("no color pipeline variant for mesh capabilities")
    }

    fn build_shadow_pipeline(
        device: &wgpu::Device,
        shadow_globals_layout: &wgpu::BindGroupLayout,
        object_layout: &wgpu::BindGroupLayout,
        depth_format: wgpu::TextureFormat,
    ) -> wgpu::RenderPipeline {
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shadow Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/shadow.wgsl").into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Shadow Pipeline Layout"),
            bind_group_layouts: &[shadow_globals_layout, object_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = vertex_layouts(MeshCapabilities::empty());

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shadow Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some("fs_main"),
                targets: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(wgpu::DepthStencilState {
                format: depth_format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: SHADOW_DEPTH_BIAS,
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        })
    }

    fn build_color_pipeline(
        device: &wgpu::Device,
        globals_layout: &wgpu::BindGroupLayout,
        object_layout: &wgpu::BindGroupLayout,
        material_layout: &wgpu::BindGroupLayout,
        color_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        caps: MeshCapabilities,
    ) -> wgpu::RenderPipeline {
        let source = generate_color_shader(caps);
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Phong Shader"),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let mut bind_group_layouts = vec![globals_layout, object_layout];
        if caps.contains(MeshCapabilities::UV) {
            bind_group_layouts.push(material_layout);
        }

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Color Pipeline Layout"),
            bind_group_layouts: &bind_group_layouts,
            push_constant_ranges: &[],
        });

        let vertex_buffers = vertex_layouts(caps);

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Color Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(wgpu::DepthStencilState {
                format: depth_format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_variants_render() {
        for caps in [
            MeshCapabilities::empty(),
            MeshCapabilities::NORMALS,
            MeshCapabilities::UV,
            MeshCapabilities::NORMALS | MeshCapabilities::UV,
        ] {
            let source = generate_color_shader(caps);
            assert!(source.contains("fn vs_main"));
            assert!(source.contains("fn fs_main"));
            assert_eq!(
                source.contains("color_map"),
                caps.contains(MeshCapabilities::UV)
            );
            assert_eq!(
                source.contains("world_normal"),
                caps.contains(MeshCapabilities::NORMALS)
            );
        }
    }

    #[test]
    fn vertex_slot_order_is_stable() {
        let full = vertex_layouts(MeshCapabilities::NORMALS | MeshCapabilities::UV);
        assert_eq!(full.len(), 3);
        assert_eq!(full[0].array_stride, 12);
        assert_eq!(full[1].array_stride, 12);
        assert_eq!(full[2].array_stride, 8);

        let uv_only = vertex_layouts(MeshCapabilities::UV);
        assert_eq!(uv_only.len(), 2);
        assert_eq!(uv_only[1].array_stride, 8);
    }
}
