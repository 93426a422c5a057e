//! Predefined cameras, lights, grounds and textures shared by the scene
//! catalog, so individual scenes only spell out what makes them different.

use glam::Vec3;

use crate::types::{Camera, Finish, LightSource, Pigment, Plane, Texture};

/// Camera slightly above and behind the origin, the catalog default
pub fn default_camera() -> Camera {
    Camera::new(Vec3::new(0.0, 8.0, -26.0), Vec3::new(0.0, 2.0, -5.0))
}

/// Plain white key light
pub fn default_light() -> LightSource {
    LightSource::new(Vec3::new(2.0, 4.0, -3.0), 1.0)
}

/// Matte gray ground plane at y = -1
pub fn default_ground() -> Plane {
    Plane::new(
        Vec3::Y,
        -1.0,
        Texture::with_finish(
            Pigment::solid([0.5, 0.5, 0.5]),
            Finish::phong(0.1).with_ambient(0.2).with_diffuse(0.8),
        ),
    )
}

/// Black and white checkered ground plane at y = -1
pub fn checkered_ground() -> Plane {
    Plane::new(
        Vec3::Y,
        -1.0,
        Texture::new(Pigment::checker([1.0, 1.0, 1.0], [0.2, 0.2, 0.2])),
    )
}

/// Shiny red sphere texture used by the motion demos
pub fn default_sphere_texture() -> Texture {
    Texture::with_finish(
        Pigment::solid([0.9, 0.05, 0.05]),
        Finish::phong(0.8).with_reflection(0.2),
    )
}

/// Semi-transparent purple shared by most of the catalog's shapes
pub fn purple_style() -> Texture {
    Texture::with_finish(
        Pigment::filtered([0.8, 0.0, 1.0], 0.7),
        Finish::phong(0.6).with_reflection(0.4),
    )
}
