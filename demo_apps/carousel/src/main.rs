//! Carousel demo
//!
//! A rotating carousel with four bobbing cups on a textured ground plane,
//! lit by a fixed shadow-casting light and a second light orbiting with
//! the platform (visualized as a small sphere).
//!
//! Keys:
//! - `a` / `d` / `s` — toggle the ambient / diffuse / specular terms
//! - `r`|`1`, `g`|`2`, `b`|`3` — toggle the fixed light's color channels
//! - `c` / Escape — quit

use std::sync::Arc;

use glam::{Mat4, Vec3, Vec4};
use winit::window::Window;

use whirl::{
    App, AppHandler, BoxOptions, Camera, CylinderOptions, Engine, FrameState, Key, MaterialSpec,
    OrbitLight, PlaneOptions, PointLight, RenderSettings, SphereOptions, TextureData, create_box,
    create_cylinder, create_plane, create_sphere,
};

const LIGHT_INTENSITY: Vec4 = Vec4::new(0.5, 0.5, 0.5, 1.0);

struct CarouselDemo;

impl CarouselDemo {
    fn build_scene(engine: &mut Engine) -> whirl::Result<()> {
        let scene = &mut engine.scene;

        scene.camera = Camera::new_perspective(45.0, 1.0, 1.0, 50.0);
        scene
            .camera
            .look_at(Vec3::new(0.0, 5.0, 20.0), Vec3::ZERO, Vec3::new(0.0, 1.0, -1.0));

        scene.lights.fixed = PointLight::new(Vec3::new(5.0, 2.0, 5.0), LIGHT_INTENSITY);
        scene.lights.orbit = OrbitLight::new(Vec4::new(2.0, 2.0, 5.0, 1.0), LIGHT_INTENSITY);

        let carousel_material =
            MaterialSpec::flat(Vec4::new(0.4, 0.1, 0.65, 1.0), Vec4::new(0.4, 0.1, 0.65, 1.0), Vec4::ONE);
        let cup_material =
            MaterialSpec::flat(Vec4::new(0.4, 0.5, 0.1, 1.0), Vec4::new(0.4, 0.5, 0.1, 1.0), Vec4::ONE);
        let light_material = MaterialSpec::flat(Vec4::ONE, Vec4::ONE, Vec4::ONE);

        // Ground: textured plane below the carousel
        let ground_texture =
            TextureData::checkerboard(256, 8, [200, 170, 130, 255], [120, 90, 60, 255]);
        let ground_mesh = create_plane(&PlaneOptions {
            width: 30.0,
            depth: 30.0,
            ..Default::default()
        });
        let mut ground =
            engine.create_object(&ground_mesh, MaterialSpec::textured(ground_texture))?;
        ground.set_initial_transform(Mat4::from_translation(Vec3::new(0.0, -3.5, 0.0)));
        engine.scene.add_object(ground);

        // Carousel: platform disc plus a center column
        let platform_mesh = create_cylinder(&CylinderOptions {
            radius: 5.0,
            height: 0.5,
            radial_segments: 48,
        });
        let mut platform = engine.create_object(&platform_mesh, carousel_material.clone())?;
        platform.set_initial_transform(Mat4::from_translation(Vec3::new(0.0, -1.5, 0.0)));
        let platform_handle = engine.scene.add_object(platform);
        engine.scene.rig.carousel = Some(platform_handle);

        // Cups at the four compass points
        let cup_mesh = create_box(&BoxOptions {
            width: 1.4,
            height: 1.6,
            depth: 1.4,
        });
        let cup_offsets = [
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(-4.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 4.0),
            Vec3::new(0.0, 0.0, -4.0),
        ];
        for offset in cup_offsets {
            let mut cup = engine.create_object(&cup_mesh, cup_material.clone())?;
            cup.set_initial_transform(Mat4::from_translation(offset));
            let handle = engine.scene.add_object(cup);
            engine.scene.rig.cups.push(handle);
        }

        // Marker sphere riding with the orbit light
        let marker_mesh = create_sphere(&SphereOptions {
            radius: 0.3,
            ..Default::default()
        });
        let mut marker = engine.create_object(&marker_mesh, light_material)?;
        marker.set_initial_transform(Mat4::from_translation(Vec3::new(2.0, 2.0, 5.0)));
        let marker_handle = engine.scene.add_object(marker);
        engine.scene.rig.light_marker = Some(marker_handle);

        Ok(())
    }

    /// Flips one channel of the fixed light between off and its base level.
    fn toggle_channel(intensity: &mut Vec4, channel: usize) {
        intensity[channel] = if intensity[channel] > 0.0 {
            0.0
        } else {
            LIGHT_INTENSITY[channel]
        };
    }
}

impl AppHandler for CarouselDemo {
    fn init(engine: &mut Engine, _window: &Arc<Window>) -> Self {
        if let Err(e) = Self::build_scene(engine) {
            log::error!("Failed to build scene: {e}");
            engine.request_exit();
        }
        Self
    }

    fn update(&mut self, engine: &mut Engine, _window: &Arc<Window>, _frame: &FrameState) {
        if engine.input.just_pressed(Key::A) {
            engine.scene.state.toggles.ambient = !engine.scene.state.toggles.ambient;
        }
        if engine.input.just_pressed(Key::D) {
            engine.scene.state.toggles.diffuse = !engine.scene.state.toggles.diffuse;
        }
        if engine.input.just_pressed(Key::S) {
            engine.scene.state.toggles.specular = !engine.scene.state.toggles.specular;
        }

        if engine.input.just_pressed(Key::R) || engine.input.just_pressed(Key::Key1) {
            Self::toggle_channel(&mut engine.scene.lights.fixed.intensity, 0);
        }
        if engine.input.just_pressed(Key::G) || engine.input.just_pressed(Key::Key2) {
            Self::toggle_channel(&mut engine.scene.lights.fixed.intensity, 1);
        }
        if engine.input.just_pressed(Key::B) || engine.input.just_pressed(Key::Key3) {
            Self::toggle_channel(&mut engine.scene.lights.fixed.intensity, 2);
        }

        if engine.input.just_pressed(Key::C) || engine.input.just_pressed(Key::Escape) {
            engine.request_exit();
        }
    }
}

fn main() -> whirl::Result<()> {
    env_logger::init();
    App::new()
        .with_title("Carousel")
        .with_settings(RenderSettings {
            vsync: true,
            ..Default::default()
        })
        .run::<CarouselDemo>()
}
