//! Closed-form motion helpers shared by the scene catalog.
//!
//! Every function is a pure function of the frame index and the animation
//! totals; scene providers call these instead of accumulating state, so any
//! frame can be rendered in isolation.

use glam::Vec3;

/// Linear interpolation between two scalars
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Value sweeping linearly from `start` to `end` across the whole animation
#[inline]
pub fn linear_sweep(start: f32, end: f32, step: u32, total: u32) -> f32 {
    lerp(start, end, step as f32 / total as f32)
}

/// Orbit angle after `step` of `total` frames, starting at `phase`.
/// Sweeps a full circle over the animation.
#[inline]
pub fn orbit_angle(step: u32, total: u32, phase: f32) -> f32 {
    phase + std::f32::consts::TAU * step as f32 / total as f32
}

/// Point on a horizontal circle of `radius` around `center` at `angle`.
/// The z component runs clockwise when seen from above, matching a camera
/// that starts in front of the scene and circles to the right.
#[inline]
pub fn orbit(center: Vec3, radius: f32, angle: f32) -> Vec3 {
    Vec3::new(
        center.x + radius * angle.cos(),
        center.y,
        center.z - radius * angle.sin(),
    )
}

/// Triangle wave between `lo` and `hi` with period `frames_per_loop`.
///
/// Rises for the first half of each loop, falls for the second, and is
/// continuous at loop boundaries: the value at the end of one loop equals
/// the value at the start of the next.
pub fn triangle_wave(lo: f32, hi: f32, step: u32, frames_per_loop: f32) -> f32 {
    let half = frames_per_loop / 2.0;
    let step_in_loop = step as f32 % frames_per_loop;
    if step_in_loop <= half {
        lerp(lo, hi, step_in_loop / half)
    } else {
        lerp(hi, lo, (step_in_loop - half) / half)
    }
}

/// Zero-based index of the loop the frame falls in
#[inline]
pub fn loop_index(step: u32, frames_per_loop: f32) -> u32 {
    (step as f32 / frames_per_loop) as u32
}

/// Frame offset within the current loop
#[inline]
pub fn frame_in_loop(step: u32, frames_per_loop: f32) -> f32 {
    step as f32 % frames_per_loop
}

/// Easing curves for smooth motion variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    QuadraticIn,
    QuadraticOut,
}

impl Easing {
    /// Evaluate the curve at `t`; input is clamped to [0, 1]
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticIn => t * t,
            Easing::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
        }
    }
}
