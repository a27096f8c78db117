pub mod animation;
pub mod camera;
pub mod light;
pub mod scene;
pub mod state;

pub use camera::Camera;
pub use light::{LightRig, OrbitLight, PointLight, ShadowProjection};
pub use scene::{CarouselRig, ObjectHandle, Scene};
pub use state::{LightToggles, SceneState};
