#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod app;
pub mod engine;
pub mod errors;
pub mod renderer;
pub mod resources;
pub mod scene;
pub mod utils;

pub use app::{App, AppHandler};
pub use app::input::{Input, Key};
pub use engine::{Engine, FrameState};
pub use errors::{Result, WhirlError};
pub use renderer::Renderer;
pub use renderer::object::DrawableObject;
pub use renderer::settings::RenderSettings;
pub use resources::{FlatMaterial, MaterialSpec, MeshCapabilities, MeshData, TextureData};
pub use resources::primitives::*;
pub use scene::{Camera, LightRig, ObjectHandle, OrbitLight, PointLight, Scene};
