use glam::Vec3;

use crate::frame::FrameInfo;
use crate::models::purple_style;
use crate::scene::Scene;
use crate::scenes::common::legend;
use crate::traits::SceneProvider;
use crate::types::{BoxShape, Camera, Cone, LightSource, Pigment, Sphere, Texture};

/// Static composition: a sphere boxed in on four sides with cones pointing
/// outward through the gaps, plus the coordinate legend.
pub struct ComposedScene;

impl ComposedScene {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ComposedScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneProvider for ComposedScene {
    fn frame(&mut self, _frame: FrameInfo) -> Scene {
        let camera = Camera::new(Vec3::new(0.0, 4.0, -40.0), Vec3::new(0.0, 2.0, -5.0));
        let light = LightSource::new(Vec3::new(2.0, 8.0, -5.0), 5.0);

        let box_style = purple_style();
        let ball_style = Texture::new(Pigment::filtered([0.8, 0.0, 1.0], 0.7));

        let mut objects = vec![
            light.into(),
            Sphere::new(Vec3::new(0.0, 2.0, 0.0), 3.0, ball_style).into(),
            // four walls around the sphere
            BoxShape::new(
                Vec3::new(3.0, -2.0, -3.0),
                Vec3::new(5.0, 6.0, 4.0),
                box_style.clone(),
            )
            .into(),
            BoxShape::new(
                Vec3::new(-5.0, -2.0, -3.0),
                Vec3::new(-3.0, 6.0, 4.0),
                box_style.clone(),
            )
            .into(),
            BoxShape::new(
                Vec3::new(-5.0, 6.0, -3.0),
                Vec3::new(5.0, 8.0, 4.0),
                box_style.clone(),
            )
            .into(),
            BoxShape::new(
                Vec3::new(-5.0, -4.0, -3.0),
                Vec3::new(5.0, -2.0, 4.0),
                box_style.clone(),
            )
            .into(),
            // cones escaping through the gaps
            Cone::new(
                Vec3::new(0.0, 8.0, 0.0),
                3.0,
                Vec3::new(0.0, 12.0, 0.0),
                0.0,
                box_style.clone(),
            )
            .into(),
            Cone::new(
                Vec3::new(0.0, -4.0, 0.0),
                3.0,
                Vec3::new(0.0, -8.0, 0.0),
                0.0,
                box_style.clone(),
            )
            .into(),
            Cone::new(
                Vec3::new(-5.0, 2.0, 0.0),
                3.0,
                Vec3::new(-11.0, 2.0, 0.0),
                0.0,
                box_style.clone(),
            )
            .into(),
            Cone::new(
                Vec3::new(5.0, 2.0, 0.0),
                3.0,
                Vec3::new(11.0, 2.0, 0.0),
                0.0,
                box_style,
            )
            .into(),
        ];
        objects.extend(legend(Vec3::new(-15.0, 0.0, 0.0), 5.0));

        Scene::with_includes(camera, objects, &["colors.inc"])
    }

    fn name(&self) -> &str {
        "composed"
    }
}
