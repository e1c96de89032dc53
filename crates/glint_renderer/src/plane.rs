//! Ray-plane intersection (closed-form).

use glint_core::Plane;
use glint_math::{Ray, Vec3};

use crate::hittable::{Hittable, SurfaceHit};

/// Ray parameter where `ray` crosses the plane `dot(p, normal) = offset`.
///
/// A ray parallel to the plane divides by zero and comes back as ±inf or
/// NaN; callers treat any non-finite value as a miss.
#[inline]
pub fn plane_distance(ray: &Ray, normal: Vec3, offset: f32) -> f32 {
    (offset - ray.origin.dot(normal)) / ray.direction.dot(normal)
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, _epsilon: f32) -> Option<SurfaceHit> {
        let t = plane_distance(ray, self.normal, self.offset);
        t.is_finite().then(|| SurfaceHit::at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Color4;

    fn floor() -> Plane {
        Plane::new(Vec3::Y, -1.0, Color4::ONE)
    }

    #[test]
    fn test_ray_plane_perpendicular() {
        let ray = Ray::new(Vec3::new(3.0, 4.0, 10.0), Vec3::NEG_Y);
        let hit = floor().hit(&ray, 0.001).unwrap();
        assert!((hit.distance - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_ray_plane_oblique() {
        let ray = Ray::toward(Vec3::new(0.0, 1.0, 0.0), Vec3::new(2.0, -1.0, 0.0));
        let hit = floor().hit(&ray, 0.001).unwrap();
        assert!((hit.distance - 8.0_f32.sqrt()).abs() < 1e-5);
        assert!((ray.at(hit.distance).y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_parallel_ray_misses() {
        for origin in [Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.0, -1.0, 0.0)] {
            for direction in [Vec3::X, Vec3::Z, Vec3::new(1.0, 0.0, 1.0).normalize()] {
                let ray = Ray::new(origin, direction);
                assert_eq!(ray.direction.dot(Vec3::Y), 0.0);
                assert!(floor().hit(&ray, 0.001).is_none());
            }
        }
    }

    #[test]
    fn test_hit_behind_is_reported_negative() {
        // Filtering happens at scene level.
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        let hit = floor().hit(&ray, 0.001).unwrap();
        assert_eq!(hit.distance, -1.0);
    }
}
