//! Renderer
//!
//! Owns the GPU context, the pipeline set, and the two passes. One call to
//! [`Renderer::render`] produces a frame: upload uniforms, record the
//! shadow pass, record the color pass, submit, present. Everything happens
//! on the calling thread in one command stream — the shadow map is always
//! complete before the color pass samples it.

pub mod color;
pub mod context;
pub mod object;
pub mod pipeline;
pub mod settings;
pub mod shadow;
pub mod uniforms;

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use crate::errors::Result;
use crate::resources::material::MaterialSpec;
use crate::resources::mesh::MeshData;
use crate::scene::Scene;

use self::color::ColorPass;
use self::context::WgpuContext;
use self::object::DrawableObject;
use self::pipeline::PipelineSet;
use self::settings::RenderSettings;
use self::shadow::ShadowPass;

pub struct Renderer {
    ctx: WgpuContext,
    pipelines: PipelineSet,
    shadow: ShadowPass,
    color: ColorPass,
}

impl Renderer {
    /// Initializes the GPU and builds every pipeline and pass target.
    pub async fn new<W>(
        window: W,
        settings: RenderSettings,
        width: u32,
        height: u32,
    ) -> Result<Self>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        let ctx = WgpuContext::new(window, &settings, width, height).await?;
        let pipelines = PipelineSet::new(&ctx.device, ctx.color_format(), ctx.depth_format);
        let shadow = ShadowPass::new(&ctx.device, &pipelines, settings.shadow_map_size);
        let color = ColorPass::new(
            &ctx.device,
            &pipelines,
            shadow.depth_view(),
            settings.clear_color,
        );

        Ok(Self {
            ctx,
            pipelines,
            shadow,
            color,
        })
    }

    /// Creates a drawable object owned by the caller.
    pub fn create_object(&self, mesh: &MeshData, material: MaterialSpec) -> Result<DrawableObject> {
        DrawableObject::create(&self.ctx.device, &self.ctx.queue, mesh, material, &self.pipelines)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.ctx.resize(width, height);
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.ctx.size()
    }

    /// Shadow map resolution; fixed at creation, unaffected by resizes.
    #[inline]
    #[must_use]
    pub fn shadow_map_size(&self) -> u32 {
        self.shadow.map_size()
    }

    /// Renders one frame of the scene.
    pub fn render(&mut self, scene: &Scene) {
        let (width, height) = self.ctx.size();
        if width == 0 || height == 0 {
            return;
        }

        let output = match self.ctx.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = self.ctx.size();
                self.ctx.resize(w, h);
                return;
            }
            Err(e) => {
                log::error!("Failed to acquire frame: {e:?}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Upload this frame's uniforms
        self.shadow.prepare(&self.ctx.queue, &scene.lights);
        self.color.prepare(&self.ctx.queue, scene);
        for object in &scene.objects {
            object.write_frame_uniforms(&self.ctx.queue);
        }

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        // Shadow pass first; the color pass reads its output
        self.shadow.record(&mut encoder, &self.pipelines, &scene.objects);
        self.color.record(
            &mut encoder,
            &view,
            &self.ctx.depth_texture_view,
            &self.pipelines,
            &scene.objects,
        );

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}
