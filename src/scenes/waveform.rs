use glam::Vec3;

use crate::anim::{linear_sweep, triangle_wave};
use crate::frame::FrameInfo;
use crate::models::{default_camera, default_ground, default_light, purple_style};
use crate::scene::Scene;
use crate::traits::SceneProvider;
use crate::types::BoxShape;

const LOOPS: f32 = 5.0;
const X_START: f32 = -10.0;
const X_END: f32 = 10.0;
const Y_LOW: f32 = 0.0;
/// Nominal vertical extent; the climb rate is spread over the whole loop,
/// so the wave tops out at half of this
const Y_EXTENT: f32 = 4.0;
const BOX_SIZE: f32 = 2.0;

/// Box sweeping left to right across the whole animation while its height
/// follows a five-loop triangle wave.
pub struct WaveformScene;

impl WaveformScene {
    pub fn new() -> Self {
        Self
    }

    /// Lower-front corner of the box at a given frame
    pub fn position(step: u32, total: u32) -> Vec3 {
        let x = linear_sweep(X_START, X_END, step, total);
        let y = triangle_wave(Y_LOW, Y_LOW + Y_EXTENT / 2.0, step, total as f32 / LOOPS);
        Vec3::new(x, y, 0.0)
    }
}

impl Default for WaveformScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneProvider for WaveformScene {
    fn frame(&mut self, frame: FrameInfo) -> Scene {
        let corner = Self::position(frame.number, frame.total);
        let shape = BoxShape::new(
            corner,
            corner + Vec3::splat(BOX_SIZE),
            purple_style(),
        );

        Scene::new(
            default_camera(),
            vec![
                shape.into(),
                default_ground().into(),
                default_light().into(),
            ],
        )
    }

    fn name(&self) -> &str {
        "waveform"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOTAL: u32 = 80;

    #[test]
    fn test_sweeps_left_to_right() {
        assert_eq!(WaveformScene::position(0, TOTAL).x, X_START);
        assert!((WaveformScene::position(TOTAL, TOTAL).x - X_END).abs() < 1e-5);
    }

    #[test]
    fn test_five_wave_peaks() {
        // loops of 16 frames peak at 8, 24, 40, ...
        for peak in [8, 24, 40, 56, 72] {
            let p = WaveformScene::position(peak, TOTAL);
            assert!((p.y - Y_EXTENT / 2.0).abs() < 1e-5, "no peak at {}", peak);
        }
    }

    #[test]
    fn test_wave_tops_out_at_half_extent() {
        // the per-frame climb covers the full extent only across a whole
        // loop, so the rising half stops at 2.0
        let top = (0..TOTAL)
            .map(|step| WaveformScene::position(step, TOTAL).y)
            .fold(f32::MIN, f32::max);
        assert!((top - 2.0).abs() < 1e-5, "wave peaked at {}", top);
    }

    #[test]
    fn test_wave_is_continuous() {
        let y_per_frame = Y_EXTENT / 16.0;
        for step in 0..TOTAL - 1 {
            let a = WaveformScene::position(step, TOTAL);
            let b = WaveformScene::position(step + 1, TOTAL);
            assert!(
                (b.y - a.y).abs() <= y_per_frame + 1e-5,
                "y jump at {}: {} -> {}",
                step,
                a.y,
                b.y
            );
        }
    }
}
