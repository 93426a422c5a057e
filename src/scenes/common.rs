use glam::Vec3;

use crate::models::purple_style;
use crate::types::{Cone, Cylinder, SceneObject};

/// Coordinate legend: three labeled axes drawn as cylinders with cone tips,
/// starting at `origin` and extending `length` units along +X, +Y and +Z.
pub fn legend(origin: Vec3, length: f32) -> Vec<SceneObject> {
    let style = purple_style();
    let axes = [Vec3::X, Vec3::Y, Vec3::Z];

    let mut objects = Vec::with_capacity(axes.len() * 2);
    for axis in axes {
        let shaft_end = origin + axis * length;
        let tip_end = origin + axis * (length + 1.0);
        objects.push(Cylinder::new(origin, shaft_end, 0.1, style.clone()).into());
        objects.push(Cone::new(shaft_end, 0.5, tip_end, 0.0, style.clone()).into());
    }
    objects
}
