//! Built-in scenes for the CLI, examples and tests.

use glint_math::{Camera, Color4, Vec3};

use crate::light::Light;
use crate::mesh::Mesh;
use crate::primitive::{Finish, Plane, Sphere};
use crate::scene::{Scene, SceneResult};

/// Axis-aligned cube of edge `size` centered at `center`.
///
/// Four vertices per face so faces stay flat-shaded; each vertex is colored
/// by its position inside the cube (an RGB cube). Faces are wound
/// counter-clockwise seen from outside, so every normal points outward.
pub fn color_cube(center: Vec3, size: f32) -> SceneResult<Mesh> {
    let half = size / 2.0;
    let faces: [(Vec3, Vec3); 6] = [
        (Vec3::NEG_Z, Vec3::Y),
        (Vec3::Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Y),
        (Vec3::X, Vec3::Y),
        (Vec3::Y, Vec3::Z),
        (Vec3::NEG_Y, Vec3::NEG_Z),
    ];

    let mut positions = Vec::with_capacity(24);
    let mut colors = Vec::with_capacity(24);
    let mut triangles = Vec::with_capacity(12);

    for (normal, up) in faces {
        // Viewer looks along -normal; right follows the camera convention.
        let right = up.cross(-normal);
        let base = positions.len() as u32;
        for (sx, sy) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let local = (normal + right * sx + up * sy) * half;
            positions.push(center + local);
            colors.push((local / size + Vec3::splat(0.5)).extend(1.0));
        }
        // bottom-left, bottom-right, top-left / bottom-right, top-right, top-left
        triangles.push([base, base + 1, base + 3]);
        triangles.push([base + 1, base + 2, base + 3]);
    }

    Mesh::new(positions, colors, triangles)
}

/// Gray mirror floor, color cube, small green mirror sphere, two white lights.
pub fn showcase_scene(width: u32, height: u32) -> SceneResult<Scene> {
    let camera = Camera::new(Vec3::new(1.0, 0.0, -1.5), width, height).with_clip(0.0, 5.0);
    let mut scene = Scene::new("showcase", camera);

    scene.add(
        Plane::new(Vec3::Y, -1.0, Color4::new(0.3, 0.3, 0.3, 1.0))
            .with_finish(Finish::specular(0.6)),
    )?;
    scene.add(color_cube(Vec3::ZERO, 1.0)?.with_finish(Finish::specular(0.6)))?;
    scene.add(
        Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.25, Color4::new(0.0, 1.0, 0.0, 1.0))
            .with_finish(Finish::specular(1.0)),
    )?;

    scene.add_light(Light::white(Vec3::new(0.0, 1.0, -1.0)));
    scene.add_light(Light::white(Vec3::new(0.0, 1.0, 1.0)));

    Ok(scene)
}

/// Green sphere resting on a gray floor, lit from above the camera.
pub fn sphere_on_plane_scene(width: u32, height: u32) -> SceneResult<Scene> {
    let camera = Camera::new(Vec3::new(0.0, 0.75, -2.0), width, height);
    let mut scene = Scene::new("sphere_on_plane", camera);

    scene.add(
        Sphere::new(Vec3::ZERO, 1.0, Color4::new(0.0, 1.0, 0.0, 1.0))
            .with_finish(Finish::specular(0.3)),
    )?;
    scene.add(Plane::new(Vec3::Y, -1.0, Color4::new(0.3, 0.3, 0.3, 1.0)))?;
    scene.add_light(Light::white(Vec3::new(0.0, 2.0, -2.0)));

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Primitive;

    #[test]
    fn test_color_cube_normals_point_outward() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let cube = color_cube(center, 2.0).unwrap();

        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
        for (i, normal) in cube.triangle_normals().iter().enumerate() {
            let [a, b, c] = cube.triangle_vertices(i);
            let face_center = (a + b + c) / 3.0;
            assert!((normal.length() - 1.0).abs() < 1e-5);
            assert!(normal.dot(face_center - center) > 0.0, "triangle {i} faces inward");
        }
    }

    #[test]
    fn test_color_cube_colors_in_range() {
        let cube = color_cube(Vec3::ZERO, 1.0).unwrap();
        for color in cube.colors() {
            assert!(color.truncate().min_element() >= 0.0);
            assert!(color.truncate().max_element() <= 1.0);
            assert_eq!(color.w, 1.0);
        }
    }

    #[test]
    fn test_showcase_scene() {
        let scene = showcase_scene(1280, 720).unwrap();

        assert_eq!(scene.primitive_count(), 3);
        assert_eq!(scene.light_count(), 2);
        assert_eq!(scene.total_triangle_count(), 12);
        assert!(matches!(scene.primitives()[1], Primitive::Mesh(_)));
    }
}
