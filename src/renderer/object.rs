//! Drawable objects
//!
//! A [`DrawableObject`] owns the GPU copy of one mesh, its material, and
//! the two placement matrices: the static `initial_transform` set at scene
//! construction and the per-frame `disposition` written by the animation
//! clock. The effective model matrix is always
//! `disposition * initial_transform`, disposition applied in world space
//! on top of the object's own placement.
//!
//! All GPU buffers are created once here and released when the object is
//! dropped.

use glam::{Mat4, Vec4};
use wgpu::util::DeviceExt;

use crate::errors::{Result, WhirlError};
use crate::renderer::pipeline::PipelineSet;
use crate::renderer::uniforms::ObjectUniforms;
use crate::resources::material::{FlatMaterial, MaterialSpec};
use crate::resources::mesh::{MeshCapabilities, MeshData};
use crate::resources::texture::TextureData;

/// GPU-resident geometry: planar vertex buffers plus the index buffer.
struct GpuMesh {
    position_buffer: wgpu::Buffer,
    normal_buffer: Option<wgpu::Buffer>,
    uv_buffer: Option<wgpu::Buffer>,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    capabilities: MeshCapabilities,
}

impl GpuMesh {
    /// Uploads the attribute set in `capabilities`; attributes the object
    /// will never bind are not uploaded at all.
    fn upload(device: &wgpu::Device, mesh: &MeshData, capabilities: MeshCapabilities) -> Self {
        let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Positions"),
            contents: bytemuck::cast_slice(&mesh.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let normal_buffer = capabilities.contains(MeshCapabilities::NORMALS).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Normals"),
                contents: bytemuck::cast_slice(&mesh.normals),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        let uv_buffer = capabilities.contains(MeshCapabilities::UV).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh UVs"),
                contents: bytemuck::cast_slice(&mesh.uvs),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Indices"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            position_buffer,
            normal_buffer,
            uv_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            capabilities,
        }
    }
}

/// One renderable object: mesh, material, and placement.
pub struct DrawableObject {
    mesh: GpuMesh,
    material: FlatMaterial,

    uniform_buffer: wgpu::Buffer,
    object_bind_group: wgpu::BindGroup,
    /// Present only for textured objects.
    material_bind_group: Option<wgpu::BindGroup>,

    initial_transform: Mat4,
    disposition: Mat4,
}

impl DrawableObject {
    /// Validates the mesh and uploads geometry, material, and uniform
    /// storage to the GPU.
    ///
    /// The attribute set is fixed here: normals when the mesh carries
    /// them, texture coordinates only when the material actually samples
    /// them. A textured material requires the mesh to carry texture
    /// coordinates.
    pub fn create(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        mesh: &MeshData,
        material: MaterialSpec,
        pipelines: &PipelineSet,
    ) -> Result<Self> {
        mesh.validate()?;

        let mut capabilities = mesh.capabilities();
        if matches!(material, MaterialSpec::Flat(_)) {
            // Flat-colored objects never sample a texture
            capabilities -= MeshCapabilities::UV;
        }
        let gpu_mesh = GpuMesh::upload(device, mesh, capabilities);

        let (flat, material_bind_group) = match material {
            MaterialSpec::Flat(flat) => (flat, None),
            MaterialSpec::Textured(texture) => {
                if !capabilities.contains(MeshCapabilities::UV) {
                    return Err(WhirlError::InvalidMesh(
                        "textured material requires a mesh with uv coordinates".into(),
                    ));
                }
                let bind_group =
                    Self::create_material_bind_group(device, queue, &texture, pipelines);
                // Zeroed vectors mark the texture as the color source
                (FlatMaterial::zeroed(), Some(bind_group))
            }
        };

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Object Uniforms"),
            size: size_of::<ObjectUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let object_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Object BindGroup"),
            layout: &pipelines.object_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            mesh: gpu_mesh,
            material: flat,
            uniform_buffer,
            object_bind_group,
            material_bind_group,
            initial_transform: Mat4::IDENTITY,
            disposition: Mat4::IDENTITY,
        })
    }

    fn create_material_bind_group(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        texture: &TextureData,
        pipelines: &PipelineSet,
    ) -> wgpu::BindGroup {
        let size = wgpu::Extent3d {
            width: texture.width,
            height: texture.height,
            depth_or_array_layers: 1,
        };
        let gpu_texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Diffuse Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &gpu_texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &texture.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(texture.width * 4),
                rows_per_image: Some(texture.height),
            },
            size,
        );

        let view = gpu_texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Diffuse Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Material BindGroup"),
            layout: &pipelines.material_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        })
    }

    /// Static placement, set once at scene construction.
    pub fn set_initial_transform(&mut self, matrix: Mat4) {
        self.initial_transform = matrix;
    }

    /// Per-frame animated placement, overwritten by the animation clock.
    pub fn set_disposition(&mut self, matrix: Mat4) {
        self.disposition = matrix;
    }

    #[inline]
    #[must_use]
    pub fn initial_transform(&self) -> Mat4 {
        self.initial_transform
    }

    #[inline]
    #[must_use]
    pub fn disposition(&self) -> Mat4 {
        self.disposition
    }

    /// Effective placement: `disposition * initial_transform`.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        self.disposition * self.initial_transform
    }

    #[inline]
    #[must_use]
    pub fn capabilities(&self) -> MeshCapabilities {
        self.mesh.capabilities
    }

    /// Uploads this frame's model matrix and material vectors.
    pub(crate) fn write_frame_uniforms(&self, queue: &wgpu::Queue) {
        let uniforms = ObjectUniforms {
            model: self.model_matrix(),
            ambient: self.material.ambient,
            diffuse: self.material.diffuse,
            specular: self.material.specular,
            params: Vec4::new(self.material.shininess, 0.0, 0.0, 0.0),
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Binds geometry and per-object state for the color pass and issues
    /// the indexed draw. Attribute slots beyond positions are bound only
    /// when the mesh carries them.
    pub(crate) fn draw_color(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_bind_group(1, &self.object_bind_group, &[]);
        if let Some(material) = &self.material_bind_group {
            pass.set_bind_group(2, material, &[]);
        }

        pass.set_vertex_buffer(0, self.position_slice());
        let mut slot = 1;
        if let Some(normals) = &self.mesh.normal_buffer {
            pass.set_vertex_buffer(slot, normals.slice(..));
            slot += 1;
        }
        if let Some(uvs) = &self.mesh.uv_buffer {
            pass.set_vertex_buffer(slot, uvs.slice(..));
        }

        self.draw_indexed(pass);
    }

    /// Binds positions and the model matrix only; used by the shadow pass.
    pub(crate) fn draw_depth_only(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_bind_group(1, &self.object_bind_group, &[]);
        pass.set_vertex_buffer(0, self.position_slice());
        self.draw_indexed(pass);
    }

    fn position_slice(&self) -> wgpu::BufferSlice<'_> {
        self.mesh.position_buffer.slice(..)
    }

    fn draw_indexed(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_index_buffer(self.mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.mesh.index_count, 0, 0..1);
    }
}
