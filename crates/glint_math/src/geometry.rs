//! Triangle and reflection helpers shared by the mesh builder and the intersector.

use crate::Vec3;

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}

/// Unnormalized cross product of a triangle's edges, `(c - a) × (b - a)`.
///
/// Vertex order matters: counter-clockwise from bottom to top. The length is
/// twice the triangle's area.
#[inline]
pub fn triangle_cross(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (c - a).cross(b - a)
}

/// Unit face normal of a triangle. Zero-area triangles yield NaN.
#[inline]
pub fn triangle_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    triangle_cross(a, b, c).normalize()
}

/// Barycentric coordinates `[alpha, beta, gamma]` of `p` in triangle `[a, b, c]`.
///
/// `p` must be coplanar with the triangle. Each weight is a signed sub-triangle
/// area over the full area, so a point outside the triangle gets at least one
/// weight outside [0, 1]. Zero-area triangles yield NaN weights.
pub fn barycentric([a, b, c]: [Vec3; 3], p: Vec3) -> [f32; 3] {
    let cross = triangle_cross(a, b, c);
    let n = cross.normalize();
    let area = cross.length() / 2.0;

    let area_bcp = n.dot(triangle_cross(b, c, p)) / 2.0;
    let area_apc = n.dot(triangle_cross(a, p, c)) / 2.0;
    let area_abp = n.dot(triangle_cross(a, b, p)) / 2.0;

    [area_bcp / area, area_apc / area, area_abp / area]
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRI: [Vec3; 3] = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];

    #[test]
    fn test_reflect() {
        let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));

        // Head-on reflection reverses the ray.
        let r = reflect(Vec3::Z, -Vec3::Z);
        assert_eq!(r, -Vec3::Z);
    }

    #[test]
    fn test_triangle_normal_winding() {
        let [a, b, c] = TRI;
        assert!((triangle_normal(a, b, c) - Vec3::NEG_Z).length() < 1e-6);
        assert!((triangle_normal(a, c, b) - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_barycentric_inside() {
        let [alpha, beta, gamma] = barycentric(TRI, Vec3::new(0.25, 0.25, 0.0));

        assert!((alpha - 0.5).abs() < 1e-6);
        assert!((beta - 0.25).abs() < 1e-6);
        assert!((gamma - 0.25).abs() < 1e-6);
        assert!((alpha + beta + gamma - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_barycentric_reconstructs_point() {
        let p = Vec3::new(0.1, 0.6, 0.0);
        let w = barycentric(TRI, p);
        let rebuilt = TRI[0] * w[0] + TRI[1] * w[1] + TRI[2] * w[2];

        assert!(w.iter().all(|x| (0.0..=1.0).contains(x)));
        assert!((w[0] + w[1] + w[2] - 1.0).abs() < 1e-6);
        assert!((rebuilt - p).length() < 1e-6);
    }

    #[test]
    fn test_barycentric_outside() {
        for p in [
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-0.5, 0.25, 0.0),
            Vec3::new(0.25, -0.5, 0.0),
        ] {
            let w = barycentric(TRI, p);
            assert!(
                w.iter().any(|x| !(0.0..=1.0).contains(x)),
                "{p:?} gave {w:?}"
            );
        }
    }

    #[test]
    fn test_barycentric_degenerate_is_nan() {
        let line = [Vec3::ZERO, Vec3::X, Vec3::X * 2.0];
        let w = barycentric(line, Vec3::X);
        assert!(w.iter().all(|x| x.is_nan()));
    }
}
