//! Hittable trait and nearest-hit resolution across a scene.

use glint_core::{Primitive, Scene};
use glint_math::{Interval, Ray};

/// Which triangle of a mesh was hit, and where inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Index into the mesh's triangle list
    pub index: usize,
    /// Barycentric weights (alpha, beta, gamma), each in [0, 1], summing to 1
    pub barycentric: [f32; 3],
}

/// Candidate hit reported by a single primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Ray parameter of the hit. May be negative, tiny or non-finite;
    /// the scene-level pass filters those out.
    pub distance: f32,
    /// Set only for mesh hits
    pub triangle: Option<TriangleHit>,
}

impl SurfaceHit {
    pub fn at(distance: f32) -> Self {
        Self {
            distance,
            triangle: None,
        }
    }
}

/// Trait for primitives that can be hit by rays.
pub trait Hittable {
    /// Report where `ray` meets this object, if anywhere.
    ///
    /// `epsilon` is the self-intersection threshold; implementations that
    /// pick between several candidates (meshes) use it to skip hits at the
    /// ray's own origin.
    fn hit(&self, ray: &Ray, epsilon: f32) -> Option<SurfaceHit>;
}

impl Hittable for Primitive {
    fn hit(&self, ray: &Ray, epsilon: f32) -> Option<SurfaceHit> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray, epsilon),
            Primitive::Plane(plane) => plane.hit(ray, epsilon),
            Primitive::Mesh(mesh) => mesh.hit(ray, epsilon),
        }
    }
}

/// Nearest accepted hit of a ray against a scene.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// `+inf` on a miss
    pub distance: f32,
    pub primitive: Option<&'a Primitive>,
    pub triangle: Option<TriangleHit>,
}

impl<'a> Intersection<'a> {
    pub fn miss() -> Self {
        Self {
            distance: f32::INFINITY,
            primitive: None,
            triangle: None,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.primitive.is_some() && self.distance.is_finite()
    }
}

/// Find the closest hit strictly farther than `epsilon` along `ray`.
///
/// Non-finite candidates never win. Ties keep the earlier primitive.
pub fn intersect<'a>(scene: &'a Scene, ray: &Ray, epsilon: f32) -> Intersection<'a> {
    let accepted = Interval::beyond(epsilon);
    let mut closest = Intersection::miss();

    for primitive in scene.primitives() {
        let Some(hit) = primitive.hit(ray, epsilon) else {
            continue;
        };
        if accepted.surrounds(hit.distance) && hit.distance < closest.distance {
            closest = Intersection {
                distance: hit.distance,
                primitive: Some(primitive),
                triangle: hit.triangle,
            };
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Plane, Sphere};
    use glint_math::{Camera, Color4, Vec3};

    const EPS: f32 = 0.001;

    fn scene() -> Scene {
        let camera = Camera::new(Vec3::new(0.0, 0.0, -5.0), 16, 16);
        let mut scene = Scene::new("hits", camera);
        scene
            .add(Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0, Color4::ONE))
            .unwrap();
        scene
            .add(Sphere::new(Vec3::ZERO, 1.0, Color4::ONE))
            .unwrap();
        scene
            .add(Plane::new(Vec3::Y, -1.0, Color4::ONE))
            .unwrap();
        scene
    }

    #[test]
    fn test_nearest_wins_regardless_of_order() {
        let scene = scene();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);

        let hit = intersect(&scene, &ray, EPS);
        assert!(hit.is_hit());
        assert!((hit.distance - 4.0).abs() < 1e-6);
        assert!(std::ptr::eq(
            hit.primitive.unwrap(),
            &scene.primitives()[1]
        ));
        assert!(hit.triangle.is_none());
    }

    #[test]
    fn test_miss_is_infinite() {
        let scene = scene();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Y);

        let hit = intersect(&scene, &ray, EPS);
        assert!(!hit.is_hit());
        assert!(hit.primitive.is_none());
        assert_eq!(hit.distance, f32::INFINITY);
    }

    #[test]
    fn test_hits_behind_origin_are_ignored() {
        let scene = scene();
        // Floor is below and behind; ray goes up.
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(!intersect(&scene, &ray, EPS).is_hit());
    }

    #[test]
    fn test_epsilon_excludes_self_hit() {
        let scene = scene();
        // Start exactly on the floor and head into it.
        let ray = Ray::new(Vec3::new(5.0, -1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(!intersect(&scene, &ray, EPS).is_hit());
    }

    #[test]
    fn test_nan_direction_is_a_miss() {
        let scene = scene();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO.normalize());
        assert!(!intersect(&scene, &ray, EPS).is_hit());
    }
}
