//! Recursive Whitted-style shading with hard shadows.

use glint_core::{Finish, Light, Primitive, Scene};
use glint_math::{reflect, with_opaque_alpha, Color4, Ray, Vec3};

use crate::hittable::{intersect, TriangleHit};
use crate::renderer::{RenderConfig, ShadingMode};

/// Shades rays against a scene that stays immutable for the whole pass.
///
/// Borrowing both scene and config makes `Shader` `Send + Sync`, so one
/// instance is shared by every bucket of a parallel render.
#[derive(Debug, Clone, Copy)]
pub struct Shader<'a> {
    scene: &'a Scene,
    config: &'a RenderConfig,
}

impl<'a> Shader<'a> {
    pub fn new(scene: &'a Scene, config: &'a RenderConfig) -> Self {
        Self { scene, config }
    }

    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    /// Color seen along `ray` with `bounces` levels of recursion left.
    ///
    /// Out of budget or a miss gives the background color. Otherwise the
    /// surface gets ambient light plus, for every light it can see, a
    /// diffuse term and (for specular finishes) either a reflection or a
    /// highlight. The diffuse term is not clamped, so a light behind the
    /// surface darkens it.
    pub fn trace(&self, ray: &Ray, bounces: u32) -> Color4 {
        if bounces == 0 {
            return self.config.background;
        }

        let hit = intersect(self.scene, ray, self.config.intersection_epsilon);
        let Some(primitive) = hit.primitive.filter(|_| hit.distance.is_finite()) else {
            return self.config.background;
        };

        let point = ray.at(hit.distance);
        let object_color = surface_color(primitive, hit.triangle);
        let normal = surface_normal(primitive, point, hit.triangle);
        let finish = primitive.finish();

        let mut color = self.config.ambient_light * object_color;
        let mut reflected: Option<Color4> = None;

        for light in self.scene.lights() {
            if !self.is_visible(point, light.position) {
                continue;
            }

            let to_light = (light.position - point).normalize();
            color += object_color * (light.color * to_light.dot(normal));

            if !finish.is_specular() {
                continue;
            }
            match self.config.shading_mode {
                ShadingMode::Reflective => {
                    let mirror = *reflected.get_or_insert_with(|| {
                        let bounce = Ray::new(point, reflect(ray.direction, normal));
                        self.trace(&bounce, bounces - 1)
                    });
                    color += (mirror * finish.specularity).clamp(Color4::ZERO, Color4::ONE);
                }
                ShadingMode::BlinnPhong => {
                    let to_camera = (ray.origin - point).normalize();
                    color += highlight(light, finish, to_light, to_camera, normal);
                }
            }
        }

        with_opaque_alpha(color)
    }

    /// Whether nothing blocks the segment from `point` to `light_position`.
    ///
    /// Hits within epsilon of either end do not count as blockers.
    pub fn is_visible(&self, point: Vec3, light_position: Vec3) -> bool {
        let eps = self.config.intersection_epsilon;
        let expected = (light_position - point).length();
        let shadow_ray = Ray::toward(point, light_position);

        let distance = intersect(self.scene, &shadow_ray, eps).distance;
        distance > expected - eps || distance < eps
    }
}

/// Flat color, or the interpolated vertex color for meshes.
fn surface_color(primitive: &Primitive, triangle: Option<TriangleHit>) -> Color4 {
    match primitive {
        Primitive::Sphere(sphere) => sphere.color,
        Primitive::Plane(plane) => plane.color,
        Primitive::Mesh(mesh) => triangle.map_or(Color4::W, |t| {
            mesh.interpolate_color(t.index, t.barycentric)
        }),
    }
}

fn surface_normal(primitive: &Primitive, point: Vec3, triangle: Option<TriangleHit>) -> Vec3 {
    match primitive {
        Primitive::Sphere(sphere) => (point - sphere.center).normalize(),
        Primitive::Plane(plane) => plane.normal,
        Primitive::Mesh(mesh) => {
            triangle.map_or(Vec3::ZERO, |t| mesh.triangle_normals()[t.index])
        }
    }
}

/// Blinn-Phong specular term for one light.
fn highlight(
    light: &Light,
    finish: &Finish,
    to_light: Vec3,
    to_camera: Vec3,
    normal: Vec3,
) -> Color4 {
    let half = (to_light + to_camera).normalize();
    let m = half.dot(normal).clamp(0.0, 1.0).powf(finish.gloss);
    light.color * Color4::new(m, m, m, 1.0)
}
