//! Application shell
//!
//! Winit event loop plumbing around [`Engine`]. The GPU is initialized
//! when the event loop delivers the window, then the user handler builds
//! the scene. Each redraw runs one frame: clock → user update → render.

pub mod input;

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::engine::{Engine, FrameState};
use crate::errors::Result;
use crate::renderer::Renderer;
use crate::renderer::settings::RenderSettings;

use self::input::translate_key;

/// User-side application callbacks.
///
/// `init` runs once after the GPU is ready; `update` runs every frame
/// before rendering.
pub trait AppHandler: Sized + 'static {
    fn init(engine: &mut Engine, window: &Arc<Window>) -> Self;
    fn update(&mut self, engine: &mut Engine, window: &Arc<Window>, frame: &FrameState);
}

/// Application builder and entry point.
pub struct App {
    title: String,
    settings: RenderSettings,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "Whirl Engine".into(),
            settings: RenderSettings::default(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Runs the event loop until exit.
    pub fn run<H: AppHandler>(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut runner: AppRunner<H> = AppRunner {
            title: self.title,
            settings: self.settings,
            window: None,
            engine: None,
            handler: None,
        };
        event_loop.run_app(&mut runner)?;
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

struct AppRunner<H: AppHandler> {
    title: String,
    settings: RenderSettings,
    window: Option<Arc<Window>>,
    engine: Option<Engine>,
    handler: Option<H>,
}

impl<H: AppHandler> ApplicationHandler for AppRunner<H> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(800.0, 800.0));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        log::info!("Initializing renderer backend...");
        let size = window.inner_size();
        let renderer = match pollster::block_on(Renderer::new(
            window.clone(),
            self.settings.clone(),
            size.width.max(1),
            size.height.max(1),
        )) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Fatal renderer error: {e}");
                event_loop.exit();
                return;
            }
        };

        let mut engine = Engine::new(renderer);
        if size.height > 0 {
            engine
                .scene
                .camera
                .set_aspect(size.width as f32 / size.height as f32);
        }

        let handler = H::init(&mut engine, &window);
        self.engine = Some(engine);
        self.handler = Some(handler);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                engine.resize(size.width, size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !event.repeat
                    && let Some(key) = translate_key(event.physical_key)
                {
                    engine.input.inject_key(key, event.state.is_pressed());
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(window) = self.window.clone() else {
                    return;
                };
                let frame = engine.begin_frame();
                if let Some(handler) = self.handler.as_mut() {
                    handler.update(engine, &window, &frame);
                }
                if engine.exit_requested() {
                    event_loop.exit();
                    return;
                }
                engine.render();
                engine.input.start_frame();
                window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
