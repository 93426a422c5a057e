use glam::Vec3;

use crate::frame::FrameInfo;
use crate::scene::Scene;
use crate::scenes::common::legend;
use crate::traits::SceneProvider;
use crate::types::{Camera, LightSource};

/// Static axis-legend scene: the coordinate legend alone under a bright
/// light, used to verify orientation before animating anything.
pub struct AxesScene;

impl AxesScene {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AxesScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneProvider for AxesScene {
    fn frame(&mut self, _frame: FrameInfo) -> Scene {
        let camera = Camera::new(Vec3::new(-5.0, 8.0, -20.0), Vec3::new(-5.0, 0.0, -5.0));
        let light = LightSource::new(Vec3::new(2.0, 8.0, -5.0), 5.0);

        let mut objects = vec![light.into()];
        objects.extend(legend(Vec3::new(-15.0, 0.0, 0.0), 5.0));

        Scene::new(camera, objects)
    }

    fn name(&self) -> &str {
        "axes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameRange;

    #[test]
    fn test_axes_scene_is_static() {
        let mut scene = AxesScene::new();
        let range = FrameRange::new(80, 20.0);
        let first = scene.frame(range.frame(0));
        let later = scene.frame(range.frame(57));
        assert_eq!(first, later);
        // one light plus the six legend parts
        assert_eq!(first.object_count(), 7);
    }
}
