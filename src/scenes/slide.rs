use glam::Vec3;

use crate::anim::{lerp, Easing};
use crate::frame::FrameInfo;
use crate::models::{default_camera, default_ground, default_light, default_sphere_texture};
use crate::scene::Scene;
use crate::traits::SceneProvider;
use crate::types::Sphere;

const X_START: f32 = -10.0;
const X_END: f32 = 10.0;
const EASING: Easing = Easing::QuadraticOut;

/// Sphere gliding from left to right with a quadratic ease-out, covering
/// most of the distance early and coasting to a stop at the right edge.
pub struct SlideScene;

impl SlideScene {
    pub fn new() -> Self {
        Self
    }

    /// Sphere center at a given frame
    pub fn position(step: u32, total: u32) -> Vec3 {
        let t = EASING.evaluate(step as f32 / total as f32);
        Vec3::new(lerp(X_START, X_END, t), 0.0, 0.0)
    }
}

impl Default for SlideScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneProvider for SlideScene {
    fn frame(&mut self, frame: FrameInfo) -> Scene {
        let sphere = Sphere::new(
            Self::position(frame.number, frame.total),
            1.0,
            default_sphere_texture(),
        );

        Scene::new(
            default_camera(),
            vec![
                sphere.into(),
                default_ground().into(),
                default_light().into(),
            ],
        )
    }

    fn name(&self) -> &str {
        "slide"
    }
}
