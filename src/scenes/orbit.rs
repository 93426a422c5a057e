use glam::Vec3;

use crate::anim::{orbit, orbit_angle};
use crate::frame::FrameInfo;
use crate::models::{checkered_ground, default_light, purple_style};
use crate::scene::Scene;
use crate::scenes::common::legend;
use crate::traits::SceneProvider;
use crate::types::{Camera, Cylinder, Sphere};

const RADIUS: f32 = 25.0;
const HEIGHT: f32 = 8.0;
/// Start the circle in front of the scene
const PHASE: f32 = -std::f32::consts::FRAC_PI_2;

/// Camera circling a static cylinder-and-sphere arrangement over a checkered
/// ground, completing one full orbit per animation.
pub struct OrbitScene;

impl OrbitScene {
    pub fn new() -> Self {
        Self
    }

    /// Camera location at a given frame
    pub fn camera_location(step: u32, total: u32) -> Vec3 {
        let angle = orbit_angle(step, total, PHASE);
        orbit(Vec3::new(0.0, HEIGHT, 0.0), RADIUS, angle)
    }
}

impl Default for OrbitScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneProvider for OrbitScene {
    fn frame(&mut self, frame: FrameInfo) -> Scene {
        let camera = Camera::new(
            Self::camera_location(frame.number, frame.total),
            Vec3::ZERO,
        );

        let style = purple_style();
        let mut objects = vec![
            checkered_ground().into(),
            default_light().into(),
            Cylinder::new(
                Vec3::new(-6.0, -1.0, 4.0),
                Vec3::new(-6.0, 7.0, 4.0),
                3.0,
                style.clone(),
            )
            .into(),
            Sphere::new(Vec3::new(6.0, 2.0, -2.0), 3.0, style).into(),
        ];
        objects.extend(legend(Vec3::new(-15.0, 0.0, 0.0), 5.0));

        Scene::new(camera, objects)
    }

    fn name(&self) -> &str {
        "orbit"
    }
}
