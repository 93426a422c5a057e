use povanim::frame::FrameRange;
use povanim::scenes::{BounceScene, OrbitScene, SplitScene, WaveformScene};

#[cfg(test)]
mod formula_tests {
    use super::*;

    const TOTAL: u32 = 80;

    #[test]
    fn test_bounce_height_is_continuous_across_loops() {
        // 5 loops of 16 frames; the y increment per frame is 1.0
        for step in 0..TOTAL - 1 {
            let a = BounceScene::position(step, TOTAL);
            let b = BounceScene::position(step + 1, TOTAL);
            assert!(
                (b.y - a.y).abs() <= 1.0 + 1e-5,
                "bounce y discontinuity at frame {}",
                step
            );
        }
    }

    #[test]
    fn test_bounce_covers_five_strides() {
        let last = BounceScene::position(TOTAL - 1, TOTAL);
        assert!(last.x > 5.0, "sphere never reached the right side: {}", last.x);
    }

    #[test]
    fn test_waveform_x_is_monotonic() {
        for step in 0..TOTAL - 1 {
            let a = WaveformScene::position(step, TOTAL);
            let b = WaveformScene::position(step + 1, TOTAL);
            assert!(b.x > a.x, "x not monotonic at frame {}", step);
        }
    }

    #[test]
    fn test_orbit_radius_constant_for_odd_frame_counts() {
        // totals that do not divide evenly by the loop count still stay on circle
        for total in [60, 77, 80, 100] {
            for step in 0..total {
                let p = OrbitScene::camera_location(step, total);
                let r = (p.x * p.x + p.z * p.z).sqrt();
                assert!(
                    (r - 25.0).abs() < 1e-2,
                    "radius {} at step {}/{}",
                    r,
                    step,
                    total
                );
            }
        }
    }

    #[test]
    fn test_split_offset_is_monotonic_nondecreasing() {
        for step in 0..TOTAL - 1 {
            let a = SplitScene::split_offset(step, TOTAL);
            let b = SplitScene::split_offset(step + 1, TOTAL);
            assert!(b >= a, "offset decreased at frame {}", step);
        }
    }

    #[test]
    fn test_frame_times_match_frame_rate() {
        let frames: Vec<_> = FrameRange::new(40, 10.0).collect();
        assert_eq!(frames.len(), 40);
        assert!((frames[39].time - 3.9).abs() < 1e-5);
    }
}
