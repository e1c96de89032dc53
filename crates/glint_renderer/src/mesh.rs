//! Ray-mesh intersection.
//!
//! Each triangle is tested as a plane through its precomputed normal, then
//! the hit point is kept only if its barycentric weights all lie in [0, 1].

use glint_core::Mesh;
use glint_math::{barycentric, Interval, Ray};

use crate::hittable::{Hittable, SurfaceHit, TriangleHit};
use crate::plane::plane_distance;

impl Hittable for Mesh {
    fn hit(&self, ray: &Ray, epsilon: f32) -> Option<SurfaceHit> {
        let mut closest: Option<SurfaceHit> = None;

        for (index, &normal) in self.triangle_normals().iter().enumerate() {
            let vertices = self.triangle_vertices(index);
            let t = plane_distance(ray, normal, normal.dot(vertices[2]));

            // parallel, degenerate or too close
            if !t.is_finite() || t < epsilon {
                continue;
            }
            if closest.is_some_and(|c| c.distance <= t) {
                continue;
            }

            let weights = barycentric(vertices, ray.at(t));
            if !weights.iter().all(|&w| Interval::UNIT.contains(w)) {
                continue;
            }

            closest = Some(SurfaceHit {
                distance: t,
                triangle: Some(TriangleHit {
                    index,
                    barycentric: weights,
                }),
            });
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::demo::color_cube;
    use glint_math::{Color4, Vec3};

    fn quad_at(z: f32) -> Mesh {
        Mesh::new(
            vec![
                Vec3::new(-1.0, -1.0, z),
                Vec3::new(1.0, -1.0, z),
                Vec3::new(1.0, 1.0, z),
                Vec3::new(-1.0, 1.0, z),
            ],
            vec![
                Color4::new(1.0, 0.0, 0.0, 1.0),
                Color4::new(0.0, 1.0, 0.0, 1.0),
                Color4::new(0.0, 0.0, 1.0, 1.0),
                Color4::new(1.0, 1.0, 1.0, 1.0),
            ],
            vec![[0, 1, 3], [1, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn test_triangle_hit() {
        let mesh = quad_at(-1.0);
        let ray = Ray::new(Vec3::new(-0.5, -0.5, -3.0), Vec3::Z);

        let hit = mesh.hit(&ray, 0.001).unwrap();
        assert!((hit.distance - 2.0).abs() < 1e-6);

        let tri = hit.triangle.unwrap();
        assert_eq!(tri.index, 0);
        let [a, b, c] = tri.barycentric;
        assert!((a + b + c - 1.0).abs() < 1e-6);
        assert!(tri.barycentric.iter().all(|w| (0.0..=1.0).contains(w)));
        // (-0.5, -0.5) = 0.5 * v0 + 0.25 * v1 + 0.25 * v3
        assert!((a - 0.5).abs() < 1e-6);
        assert!((b - 0.25).abs() < 1e-6);
        assert!((c - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_second_triangle() {
        let mesh = quad_at(0.0);
        let ray = Ray::new(Vec3::new(0.5, 0.5, -3.0), Vec3::Z);

        let tri = mesh.hit(&ray, 0.001).unwrap().triangle.unwrap();
        assert_eq!(tri.index, 1);
    }

    #[test]
    fn test_triangle_miss() {
        let mesh = quad_at(-1.0);

        // Outside the quad
        let ray = Ray::new(Vec3::new(2.0, 0.0, -3.0), Vec3::Z);
        assert!(mesh.hit(&ray, 0.001).is_none());

        // Pointing away
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::NEG_Z);
        assert!(mesh.hit(&ray, 0.001).is_none());

        // Parallel to the quad
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::X);
        assert!(mesh.hit(&ray, 0.001).is_none());
    }

    #[test]
    fn test_back_face_is_hit() {
        // No culling: the quad is hit from behind too.
        let mesh = quad_at(-1.0);
        let ray = Ray::new(Vec3::new(0.1, 0.2, 3.0), Vec3::NEG_Z);
        let hit = mesh.hit(&ray, 0.001).unwrap();
        assert!((hit.distance - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_nearest_face_of_cube() {
        let cube = color_cube(Vec3::ZERO, 1.0).unwrap();
        let ray = Ray::new(Vec3::new(0.1, 0.2, -3.0), Vec3::Z);

        let hit = cube.hit(&ray, 0.001).unwrap();
        assert!((hit.distance - 2.5).abs() < 1e-5);
        let normal = cube.triangle_normals()[hit.triangle.unwrap().index];
        assert!((normal - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_epsilon_skips_origin_face() {
        let cube = color_cube(Vec3::ZERO, 1.0).unwrap();
        // Start on the front face, heading inward: the far face is next.
        let ray = Ray::new(Vec3::new(0.1, 0.2, -0.5), Vec3::Z);
        let hit = cube.hit(&ray, 0.001).unwrap();
        assert!((hit.distance - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_triangle_never_hits() {
        let mesh = Mesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::X * 2.0],
            vec![Color4::ONE; 3],
            vec![[0, 1, 2]],
        )
        .unwrap();
        let ray = Ray::new(Vec3::new(0.5, 0.0, -1.0), Vec3::Z);
        assert!(mesh.hit(&ray, 0.001).is_none());
    }
}
