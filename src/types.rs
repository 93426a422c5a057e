use glam::Vec3;
use serde::{Deserialize, Serialize};

/// RGB color with components in [0, 1]
pub type Color = [f32; 3];

/// Surface color description for a primitive
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Pigment {
    /// Solid color with optional transparency filter
    Solid { color: Color, filter: f32 },
    /// Two-color checker pattern (used for ground planes)
    Checker { a: Color, b: Color },
}

impl Pigment {
    pub const fn solid(color: Color) -> Self {
        Pigment::Solid { color, filter: 0.0 }
    }

    pub const fn filtered(color: Color, filter: f32) -> Self {
        Pigment::Solid { color, filter }
    }

    pub const fn checker(a: Color, b: Color) -> Self {
        Pigment::Checker { a, b }
    }
}

/// Highlight/reflection parameters; fields are only emitted when set
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Finish {
    pub phong: Option<f32>,
    pub reflection: Option<f32>,
    pub ambient: Option<f32>,
    pub diffuse: Option<f32>,
}

impl Finish {
    pub const fn phong(phong: f32) -> Self {
        Self {
            phong: Some(phong),
            reflection: None,
            ambient: None,
            diffuse: None,
        }
    }

    pub const fn with_reflection(mut self, reflection: f32) -> Self {
        self.reflection = Some(reflection);
        self
    }

    pub const fn with_ambient(mut self, ambient: f32) -> Self {
        self.ambient = Some(ambient);
        self
    }

    pub const fn with_diffuse(mut self, diffuse: f32) -> Self {
        self.diffuse = Some(diffuse);
        self
    }
}

/// Complete surface styling attached to a primitive
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Texture {
    pub pigment: Pigment,
    pub finish: Option<Finish>,
}

impl Texture {
    pub const fn new(pigment: Pigment) -> Self {
        Self {
            pigment,
            finish: None,
        }
    }

    pub const fn with_finish(pigment: Pigment, finish: Finish) -> Self {
        Self {
            pigment,
            finish: Some(finish),
        }
    }
}

/// Perspective camera: position plus the point it looks at
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub location: Vec3,
    pub look_at: Vec3,
}

impl Camera {
    pub const fn new(location: Vec3, look_at: Vec3) -> Self {
        Self { location, look_at }
    }
}

/// Point light with an RGB color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightSource {
    pub location: Vec3,
    pub color: Color,
}

impl LightSource {
    /// White light scaled by a brightness factor
    pub const fn new(location: Vec3, brightness: f32) -> Self {
        Self {
            location,
            color: [brightness, brightness, brightness],
        }
    }

    pub const fn colored(location: Vec3, color: Color) -> Self {
        Self { location, color }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub texture: Texture,
}

impl Sphere {
    pub const fn new(center: Vec3, radius: f32, texture: Texture) -> Self {
        Self {
            center,
            radius,
            texture,
        }
    }
}

/// Axis-aligned box between two corners
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    pub min: Vec3,
    pub max: Vec3,
    pub texture: Texture,
}

impl BoxShape {
    pub const fn new(min: Vec3, max: Vec3, texture: Texture) -> Self {
        Self { min, max, texture }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Capped cylinder from base point to cap point
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    pub base: Vec3,
    pub cap: Vec3,
    pub radius: f32,
    pub texture: Texture,
}

impl Cylinder {
    pub const fn new(base: Vec3, cap: Vec3, radius: f32, texture: Texture) -> Self {
        Self {
            base,
            cap,
            radius,
            texture,
        }
    }
}

/// Cone between two circles; a zero cap radius makes an arrow tip
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cone {
    pub base: Vec3,
    pub base_radius: f32,
    pub cap: Vec3,
    pub cap_radius: f32,
    pub texture: Texture,
}

impl Cone {
    pub const fn new(
        base: Vec3,
        base_radius: f32,
        cap: Vec3,
        cap_radius: f32,
        texture: Texture,
    ) -> Self {
        Self {
            base,
            base_radius,
            cap,
            cap_radius,
            texture,
        }
    }
}

/// Infinite plane given by normal and distance from origin
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
    pub texture: Texture,
}

impl Plane {
    pub const fn new(normal: Vec3, distance: f32, texture: Texture) -> Self {
        Self {
            normal,
            distance,
            texture,
        }
    }
}

/// Anything that can appear in a scene's object list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SceneObject {
    Sphere(Sphere),
    Box(BoxShape),
    Cylinder(Cylinder),
    Cone(Cone),
    Plane(Plane),
    Light(LightSource),
}

impl From<Sphere> for SceneObject {
    fn from(s: Sphere) -> Self {
        SceneObject::Sphere(s)
    }
}

impl From<BoxShape> for SceneObject {
    fn from(b: BoxShape) -> Self {
        SceneObject::Box(b)
    }
}

impl From<Cylinder> for SceneObject {
    fn from(c: Cylinder) -> Self {
        SceneObject::Cylinder(c)
    }
}

impl From<Cone> for SceneObject {
    fn from(c: Cone) -> Self {
        SceneObject::Cone(c)
    }
}

impl From<Plane> for SceneObject {
    fn from(p: Plane) -> Self {
        SceneObject::Plane(p)
    }
}

impl From<LightSource> for SceneObject {
    fn from(l: LightSource) -> Self {
        SceneObject::Light(l)
    }
}
