use glam::Vec3;

use crate::anim::{frame_in_loop, loop_index};
use crate::frame::FrameInfo;
use crate::models::{default_camera, default_ground, default_light, default_sphere_texture};
use crate::scene::Scene;
use crate::traits::SceneProvider;
use crate::types::Sphere;

const LOOPS: f32 = 5.0;
const X_START: f32 = -10.0;
const X_PER_LOOP: f32 = 4.0;
const Y_LOW: f32 = -4.0;
const Y_HIGH: f32 = 4.0;

/// Bouncing sphere: rises while drifting right, then drops straight down,
/// five bounces across the animation. Both coordinates are piecewise-linear
/// functions of the frame index with no jump at loop boundaries.
pub struct BounceScene;

impl BounceScene {
    pub fn new() -> Self {
        Self
    }

    /// Sphere center at a given frame
    pub fn position(step: u32, total: u32) -> Vec3 {
        let frames_per_loop = total as f32 / LOOPS;
        let half = frames_per_loop / 2.0;
        let loop_no = loop_index(step, frames_per_loop) as f32;
        let fil = frame_in_loop(step, frames_per_loop);

        let (x, y) = if fil <= half {
            // rising: drift right while climbing
            (
                X_START + loop_no * X_PER_LOOP + fil * (X_PER_LOOP / half),
                Y_LOW + fil * ((Y_HIGH - Y_LOW) / half),
            )
        } else {
            // falling: hold x, drop straight down
            (
                X_START + (loop_no + 1.0) * X_PER_LOOP,
                Y_HIGH - (fil - half) * ((Y_HIGH - Y_LOW) / half),
            )
        };
        Vec3::new(x, y, 0.0)
    }
}

impl Default for BounceScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneProvider for BounceScene {
    fn frame(&mut self, frame: FrameInfo) -> Scene {
        let sphere = Sphere::new(
            Self::position(frame.number, frame.total),
            0.5,
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
        "bounce"
    }
}
