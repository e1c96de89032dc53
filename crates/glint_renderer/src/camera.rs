//! Pixel-to-ray mapping for a fixed camera frame.

use glint_math::{Camera, Ray, Vec3};

/// Camera frame and pixel scale cached for one render pass.
///
/// The view volume is 2 units tall and `2 * aspect` units wide at unit
/// distance along `forward`; row 0 is the top of the image.
#[derive(Debug, Clone, Copy)]
pub struct ViewPlane {
    origin: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    half_width: f32,
    half_height: f32,
    x_scale: f32,
    y_scale: f32,
}

impl ViewPlane {
    /// Build the view plane for a `width` x `height` buffer.
    ///
    /// The aspect ratio comes from the camera's own screen size, not from
    /// the buffer, so a camera may drive a buffer of different dimensions.
    pub fn new(camera: &Camera, width: u32, height: u32) -> Self {
        let half_width = width as f32 / 2.0;
        let half_height = height as f32 / 2.0;
        Self {
            origin: camera.position(),
            forward: camera.forward(),
            right: camera.right(),
            up: camera.up(),
            half_width,
            half_height,
            x_scale: camera.aspect_ratio() / half_width,
            y_scale: 1.0 / half_height,
        }
    }

    /// Primary ray through pixel (`col`, `row`).
    pub fn get_ray(&self, col: u32, row: u32) -> Ray {
        let x = (col as f32 - self.half_width) * self.x_scale;
        let y = -(row as f32 - self.half_height) * self.y_scale;
        let direction = (self.forward + self.right * x + self.up * y).normalize();
        Ray::new(self.origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, -2.0), 200, 100)
    }

    #[test]
    fn test_center_pixel_looks_forward() {
        let cam = camera();
        let view = ViewPlane::new(&cam, 200, 100);
        let ray = view.get_ray(100, 50);

        assert_eq!(ray.origin, cam.position());
        assert!((ray.direction - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_top_left_pixel() {
        let view = ViewPlane::new(&camera(), 200, 100);
        let ray = view.get_ray(0, 0);

        // x = -aspect, y = +1 before normalizing; right = cross(Y, Z) = +X
        let expected = Vec3::new(-2.0, 1.0, 1.0).normalize();
        assert!((ray.direction - expected).length() < 1e-6);
    }

    #[test]
    fn test_rows_go_down() {
        let view = ViewPlane::new(&camera(), 200, 100);
        let top = view.get_ray(100, 10);
        let bottom = view.get_ray(100, 90);
        assert!(top.direction.y > 0.0);
        assert!(bottom.direction.y < 0.0);
        assert!((top.direction.y + bottom.direction.y).abs() < 1e-6);
    }

    #[test]
    fn test_directions_are_unit() {
        let view = ViewPlane::new(&camera(), 200, 100);
        for (col, row) in [(0, 0), (199, 0), (0, 99), (199, 99), (37, 61)] {
            let d = view.get_ray(col, row).direction;
            assert!((d.length() - 1.0).abs() < 1e-5);
        }
    }
}
