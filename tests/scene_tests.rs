use glam::Vec3;
use povanim::config::Settings;
use povanim::frame::FrameRange;
use povanim::scenes::{AxesScene, BounceScene, ComposedScene, OrbitScene, SlideScene, WaveformScene};
use povanim::sdl::scene_to_sdl;
use povanim::traits::SceneProvider;
use povanim::types::SceneObject;

#[cfg(test)]
mod scene_tests {
    use super::*;

    fn providers() -> Vec<Box<dyn SceneProvider>> {
        vec![
            Box::new(AxesScene::new()),
            Box::new(ComposedScene::new()),
            Box::new(BounceScene::new()),
            Box::new(WaveformScene::new()),
            Box::new(SlideScene::new()),
            Box::new(OrbitScene::new()),
        ]
    }

    #[test]
    fn test_every_scene_has_a_light() {
        let settings = Settings::default();
        let range = FrameRange::new(settings.n_frames(), settings.frame_rate);
        for mut provider in providers() {
            let scene = provider.frame(range.frame(0));
            let lights = scene
                .objects
                .iter()
                .filter(|o| matches!(o, SceneObject::Light(_)))
                .count();
            assert!(lights >= 1, "scene '{}' is unlit", provider.name());
        }
    }

    #[test]
    fn test_every_scene_emits_valid_sdl() {
        let range = FrameRange::new(80, 20.0);
        for mut provider in providers() {
            let scene = provider.frame(range.frame(17));
            let sdl = scene_to_sdl(&scene);
            assert!(sdl.contains("camera {"), "'{}' missing camera", provider.name());
            // one block per object
            let blocks = sdl.matches("{\n").count();
            assert!(
                blocks > scene.object_count(),
                "'{}' emitted too few blocks",
                provider.name()
            );
            assert_eq!(
                sdl.matches('{').count(),
                sdl.matches('}').count(),
                "'{}' has unbalanced braces",
                provider.name()
            );
        }
    }

    #[test]
    fn test_scenes_are_pure_functions_of_the_frame() {
        let range = FrameRange::new(80, 20.0);
        for mut provider in providers() {
            let a = provider.frame(range.frame(33));
            let b = provider.frame(range.frame(33));
            assert_eq!(a, b, "'{}' is not reproducible", provider.name());
        }
    }

    #[test]
    fn test_scene_round_trips_through_json() {
        let mut provider = ComposedScene::new();
        let scene = provider.frame(FrameRange::new(1, 20.0).frame(0));
        let json = serde_json::to_string(&scene).unwrap();
        let parsed: povanim::Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(scene, parsed);
    }

    #[test]
    fn test_orbit_camera_always_looks_at_origin() {
        let mut provider = OrbitScene::new();
        let range = FrameRange::new(80, 20.0);
        for step in [0, 13, 40, 79] {
            let scene = provider.frame(range.frame(step));
            assert_eq!(scene.camera.look_at, Vec3::ZERO);
        }
    }
}
