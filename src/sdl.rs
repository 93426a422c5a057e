//! POV-Ray Scene Description Language emission.
//!
//! Translates the in-memory scene model into the `.pov` text the external
//! renderer consumes. Emission is the only place the POV-Ray syntax lives;
//! scene providers never format text themselves.

use std::fmt::Write;

use glam::Vec3;

use crate::scene::Scene;
use crate::types::{
    BoxShape, Camera, Color, Cone, Cylinder, Finish, LightSource, Pigment, Plane, SceneObject,
    Sphere, Texture,
};

/// Render a `Scene` as a complete `.pov` document.
pub fn scene_to_sdl(scene: &Scene) -> String {
    let mut out = String::new();
    for include in &scene.included {
        let _ = writeln!(out, "#include \"{}\"", include);
    }
    if !scene.included.is_empty() {
        out.push('\n');
    }
    write_camera(&mut out, &scene.camera);
    for object in &scene.objects {
        write_object(&mut out, object);
    }
    out
}

fn write_camera(out: &mut String, camera: &Camera) {
    let _ = writeln!(
        out,
        "camera {{\n  location {}\n  look_at {}\n}}",
        vec3(camera.location),
        vec3(camera.look_at)
    );
}

fn write_object(out: &mut String, object: &SceneObject) {
    match object {
        SceneObject::Sphere(s) => write_sphere(out, s),
        SceneObject::Box(b) => write_box(out, b),
        SceneObject::Cylinder(c) => write_cylinder(out, c),
        SceneObject::Cone(c) => write_cone(out, c),
        SceneObject::Plane(p) => write_plane(out, p),
        SceneObject::Light(l) => write_light(out, l),
    }
}

fn write_light(out: &mut String, light: &LightSource) {
    let _ = writeln!(
        out,
        "light_source {{\n  {} color rgb {}\n}}",
        vec3(light.location),
        color(light.color)
    );
}

fn write_sphere(out: &mut String, sphere: &Sphere) {
    let _ = writeln!(
        out,
        "sphere {{\n  {}, {}{}\n}}",
        vec3(sphere.center),
        num(sphere.radius),
        texture(&sphere.texture)
    );
}

fn write_box(out: &mut String, b: &BoxShape) {
    let _ = writeln!(
        out,
        "box {{\n  {}, {}{}\n}}",
        vec3(b.min),
        vec3(b.max),
        texture(&b.texture)
    );
}

fn write_cylinder(out: &mut String, c: &Cylinder) {
    let _ = writeln!(
        out,
        "cylinder {{\n  {}, {}, {}{}\n}}",
        vec3(c.base),
        vec3(c.cap),
        num(c.radius),
        texture(&c.texture)
    );
}

fn write_cone(out: &mut String, c: &Cone) {
    let _ = writeln!(
        out,
        "cone {{\n  {}, {}, {}, {}{}\n}}",
        vec3(c.base),
        num(c.base_radius),
        vec3(c.cap),
        num(c.cap_radius),
        texture(&c.texture)
    );
}

fn write_plane(out: &mut String, p: &Plane) {
    let _ = writeln!(
        out,
        "plane {{\n  {}, {}{}\n}}",
        vec3(p.normal),
        num(p.distance),
        texture(&p.texture)
    );
}

fn texture(t: &Texture) -> String {
    let mut s = String::new();
    s.push_str("\n  texture {\n");
    s.push_str(&pigment(&t.pigment));
    if let Some(f) = &t.finish {
        s.push_str(&finish(f));
    }
    s.push_str("  }");
    s
}

fn pigment(p: &Pigment) -> String {
    match p {
        Pigment::Solid { color: c, filter } => {
            if *filter > 0.0 {
                format!(
                    "    pigment {{ color rgbf <{}, {}, {}, {}> }}\n",
                    num(c[0]),
                    num(c[1]),
                    num(c[2]),
                    num(*filter)
                )
            } else {
                format!("    pigment {{ color rgb {} }}\n", color(*c))
            }
        }
        Pigment::Checker { a, b } => format!(
            "    pigment {{ checker color rgb {} color rgb {} }}\n",
            color(*a),
            color(*b)
        ),
    }
}

fn finish(f: &Finish) -> String {
    let mut parts = Vec::new();
    if let Some(v) = f.ambient {
        parts.push(format!("ambient {}", num(v)));
    }
    if let Some(v) = f.diffuse {
        parts.push(format!("diffuse {}", num(v)));
    }
    if let Some(v) = f.phong {
        parts.push(format!("phong {}", num(v)));
    }
    if let Some(v) = f.reflection {
        parts.push(format!("reflection {}", num(v)));
    }
    format!("    finish {{ {} }}\n", parts.join(" "))
}

fn vec3(v: Vec3) -> String {
    format!("<{}, {}, {}>", num(v.x), num(v.y), num(v.z))
}

fn color(c: Color) -> String {
    format!("<{}, {}, {}>", num(c[0]), num(c[1]), num(c[2]))
}

/// Shortest decimal form that still round-trips the f32
fn num(v: f32) -> String {
    let mut s = format!("{}", v);
    if !s.contains('.') && !s.contains('e') && !s.contains("inf") && !s.contains("NaN") {
        s.push_str(".0");
    }
    s
}
