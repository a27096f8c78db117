//! Engine Core Module
//!
//! [`Engine`] sequences one displayed frame: tick the timer, run the
//! animation clock over the scene, then hand the scene to the renderer
//! (shadow pass → color pass → present). It owns no window — the app
//! shell drives it.

use crate::app::input::Input;
use crate::errors::Result;
use crate::renderer::Renderer;
use crate::renderer::object::DrawableObject;
use crate::resources::material::MaterialSpec;
use crate::resources::mesh::MeshData;
use crate::scene::Scene;
use crate::utils::Timer;

/// Per-frame timing information passed to user update callbacks.
#[derive(Debug, Clone, Copy)]
pub struct FrameState {
    /// Total elapsed time since the application started (in seconds).
    pub time: f32,
    /// Delta time since the last frame (in seconds).
    pub dt: f32,
    /// Total number of frames rendered since startup.
    pub frame_count: u64,
}

pub struct Engine {
    pub renderer: Renderer,
    pub scene: Scene,
    pub input: Input,

    timer: Timer,
    exit_requested: bool,
}

impl Engine {
    #[must_use]
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            scene: Scene::new(),
            input: Input::new(),
            timer: Timer::new(),
            exit_requested: false,
        }
    }

    /// Creates a drawable object for the scene.
    pub fn create_object(&self, mesh: &MeshData, material: MaterialSpec) -> Result<DrawableObject> {
        self.renderer.create_object(mesh, material)
    }

    /// Advances the clock and the scene animation. Called once per frame
    /// before the user update callback.
    pub fn begin_frame(&mut self) -> FrameState {
        self.timer.tick();
        self.scene.advance(self.timer.delta_ms());

        FrameState {
            time: self.timer.elapsed.as_secs_f32(),
            dt: self.timer.dt_seconds(),
            frame_count: self.timer.frame_count,
        }
    }

    /// Renders the current scene state.
    pub fn render(&mut self) {
        self.renderer.render(&self.scene);
    }

    /// Handles window resize: surface, depth buffer, and camera aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
        if width > 0 && height > 0 {
            self.scene.camera.set_aspect(width as f32 / height as f32);
        }
    }

    /// Asks the app shell to leave the event loop after this frame.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    #[inline]
    #[must_use]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}
