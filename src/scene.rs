use serde::{Deserialize, Serialize};

use crate::types::{Camera, SceneObject};

/// Immutable description of a single frame: one camera, the objects visible
/// in that frame, and any POV-Ray include files the objects rely on.
///
/// A `Scene` is built fresh by a scene provider for every frame and consumed
/// by the render pipeline; nothing is retained between frames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub camera: Camera,
    pub objects: Vec<SceneObject>,
    pub included: Vec<String>,
}

impl Scene {
    pub fn new(camera: Camera, objects: Vec<SceneObject>) -> Self {
        Self {
            camera,
            objects,
            included: Vec::new(),
        }
    }

    pub fn with_includes(camera: Camera, objects: Vec<SceneObject>, included: &[&str]) -> Self {
        Self {
            camera,
            objects,
            included: included.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}
