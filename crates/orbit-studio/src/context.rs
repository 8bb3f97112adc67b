use glam::Vec3;

use orbit_engine::camera::{CursorLook, OrbitConfig, OrbitControls, PerspectiveCamera};
use orbit_engine::coords::ViewportSize;
use orbit_engine::paint::Color;
use orbit_engine::scene::{Geometry, Material, Scene, SceneObject};
use orbit_engine::shader::{ShaderParameters, VerticalGradient};
use orbit_engine::time::Clock;
use orbit_engine::window::WindowMode;

use crate::config::{CameraRig, StudioConfig, Variant};
use crate::pointer::PointerTracker;

const FOV_Y_DEG: f32 = 75.0;

/// Side length of the gradient plane; at distance 1 it overfills the view.
const PLANE_SIZE: f32 = 4.0;

/// Everything event handlers and the render loop share.
///
/// Mutated by handlers between frames and read by the loop once per frame.
#[derive(Debug)]
pub struct AppContext {
    pub viewport: ViewportSize,
    pub pointer: PointerTracker,
    pub params: ShaderParameters,
    pub scene: Scene,

    pub camera_rig: CameraRig,
    pub controls: OrbitControls,
    pub cursor_look: CursorLook,

    /// Object spin around Y in radians per second.
    pub spin_speed: f32,

    pub clock: Clock,
    pub window_mode: WindowMode,

    /// Primary button held; pointer motion orbits while set.
    pub dragging: bool,
}

impl AppContext {
    pub fn new(config: &StudioConfig, viewport: ViewportSize, clock: Clock) -> Self {
        let scene = build_scene(config.variant, viewport.aspect());
        let controls = OrbitControls::new(
            OrbitConfig {
                enable_damping: config.damping,
                ..OrbitConfig::default()
            },
            Vec3::ZERO,
        );

        log::info!(
            "studio: {:?} variant, {:?} camera, damping {}",
            config.variant,
            config.camera_rig,
            if config.damping { "on" } else { "off" }
        );

        Self {
            viewport,
            pointer: PointerTracker::default(),
            params: ShaderParameters::new(viewport, config.tint),
            scene,
            camera_rig: config.camera_rig,
            controls,
            cursor_look: CursorLook::default(),
            spin_speed: config.spin_speed,
            clock,
            window_mode: WindowMode::Windowed,
            dragging: false,
        }
    }
}

fn build_scene(variant: Variant, aspect: f32) -> Scene {
    match variant {
        Variant::Plane => {
            let object = SceneObject::new(
                Geometry::Plane { width: PLANE_SIZE, height: PLANE_SIZE },
                Material::Gradient(VerticalGradient::default()),
            );
            let camera = PerspectiveCamera::new(FOV_Y_DEG, aspect)
                .with_position(Vec3::new(0.0, 0.0, 1.0))
                .with_target(Vec3::ZERO);
            Scene::new(object, camera)
        }
        Variant::Box => {
            let object = SceneObject::new(
                Geometry::unit_box(),
                Material::Wireframe { color: Color::YELLOW },
            );
            let camera = PerspectiveCamera::new(FOV_Y_DEG, aspect)
                .with_position(Vec3::new(0.0, 1.0, 5.0))
                .with_target(Vec3::ZERO);
            Scene::new(object, camera)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_variant_fills_the_view() {
        let ctx = AppContext::new(&StudioConfig::default(), ViewportSize::default(), Clock::new());
        assert!(matches!(ctx.scene.object.material, Material::Gradient(_)));
        assert_eq!(ctx.scene.camera.position, Vec3::new(0.0, 0.0, 1.0));

        let half_visible = (FOV_Y_DEG.to_radians() / 2.0).tan() * ctx.scene.camera.aspect;
        assert!(PLANE_SIZE / 2.0 > half_visible);
    }

    #[test]
    fn box_variant_is_a_yellow_wireframe() {
        let cfg = StudioConfig { variant: Variant::Box, ..Default::default() };
        let ctx = AppContext::new(&cfg, ViewportSize::default(), Clock::new());
        assert_eq!(ctx.scene.object.geometry, Geometry::unit_box());
        assert_eq!(ctx.scene.object.material, Material::Wireframe { color: Color::YELLOW });
        assert_eq!(ctx.scene.camera.position, Vec3::new(0.0, 1.0, 5.0));
    }

    #[test]
    fn damping_flag_reaches_controls() {
        let cfg = StudioConfig { damping: false, ..Default::default() };
        let ctx = AppContext::new(&cfg, ViewportSize::default(), Clock::new());
        assert!(!ctx.controls.config.enable_damping);
    }
}
