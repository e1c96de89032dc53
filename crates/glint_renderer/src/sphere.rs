//! Ray-sphere intersection (quadratic equation).

use glint_core::Sphere;
use glint_math::Ray;

use crate::hittable::{Hittable, SurfaceHit};

impl Hittable for Sphere {
    /// Solve `a·t² + b·t + c = 0` and return the nearer root.
    ///
    /// If either root is negative the sphere is treated as missed: it is
    /// behind the ray or the ray starts inside it.
    fn hit(&self, ray: &Ray, _epsilon: f32) -> Option<SurfaceHit> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let near = (-b - sqrtd) / (2.0 * a);
        let far = (-b + sqrtd) / (2.0 * a);

        if near < 0.0 || far < 0.0 {
            return None;
        }

        Some(SurfaceHit::at(near.min(far)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::{Color4, Vec3};

    fn unit_sphere() -> Sphere {
        Sphere::new(Vec3::ZERO, 1.0, Color4::ONE)
    }

    #[test]
    fn test_sphere_hit_distance() {
        let sphere = Sphere::new(Vec3::ZERO, 1.5, Color4::ONE);

        for d in [2.0_f32, 5.0, 12.5] {
            let ray = Ray::toward(Vec3::new(0.0, 0.0, -d), Vec3::ZERO);
            let hit = sphere.hit(&ray, 0.001).unwrap();
            assert!((hit.distance - (d - 1.5)).abs() < 1e-6, "d={d}: {}", hit.distance);
            assert!(hit.triangle.is_none());
        }
    }

    #[test]
    fn test_sphere_miss() {
        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(unit_sphere().hit(&ray, 0.001).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(unit_sphere().hit(&ray, 0.001).is_none());
    }

    #[test]
    fn test_origin_inside_is_a_miss() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.25), Vec3::Z);
        assert!(unit_sphere().hit(&ray, 0.001).is_none());
    }

    #[test]
    fn test_grazing_ray() {
        let ray = Ray::new(Vec3::new(1.0, 0.0, -3.0), Vec3::Z);
        let hit = unit_sphere().hit(&ray, 0.001).unwrap();
        assert!((hit.distance - 3.0).abs() < 1e-6);
    }
}
