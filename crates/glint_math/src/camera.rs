use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::spherical::{cartesian_to_lat_lng, lat_lng_to_cartesian, Orbit};
use crate::UP;

/// Smallest orbit radius the controls will move the camera to.
const MIN_ORBIT_RADIUS: f32 = 0.1;

/// Look-at camera for raytracing.
///
/// Stores only the eye, the target and the screen size; the view frame is
/// derived on demand. The frame is `right = UP × forward` and
/// `up = forward × right`, left unnormalized, so it is orthogonal but only
/// unit-length when `forward` is horizontal. Looking straight up or down
/// collapses the frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    #[serde(default)]
    pub target: Vec3,
    pub screen_width: u32,
    pub screen_height: u32,
    #[serde(default = "default_near")]
    pub near: f32,
    #[serde(default = "default_far")]
    pub far: f32,
}

fn default_near() -> f32 {
    0.01
}

fn default_far() -> f32 {
    5.0
}

impl Camera {
    /// Create a camera at `position` looking at the origin.
    pub fn new(position: Vec3, screen_width: u32, screen_height: u32) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
            screen_width,
            screen_height,
            near: default_near(),
            far: default_far(),
        }
    }

    /// Set the point the camera looks at.
    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    /// Set near and far clip distances.
    pub fn with_clip(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Unit vector from the eye toward the target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    pub fn right(&self) -> Vec3 {
        UP.cross(self.forward())
    }

    pub fn up(&self) -> Vec3 {
        self.forward().cross(self.right())
    }

    /// Screen width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.screen_width as f32 / self.screen_height as f32
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Update screen size (e.g., when the output buffer is resized).
    pub fn set_screen_size(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    pub fn move_to(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn move_by(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Translate eye and target together.
    pub fn pan_by(&mut self, delta: Vec3) {
        self.position += delta;
        self.target += delta;
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Eye position in spherical coordinates around the target.
    pub fn orbit(&self) -> Orbit {
        cartesian_to_lat_lng(self.position - self.target)
    }

    /// Orbit around the target.
    ///
    /// Latitude is clamped to the poles and the radius never drops below 0.1.
    /// Positive `longitude` swings the eye clockwise seen from above.
    pub fn orbit_by(&mut self, latitude: f32, longitude: f32, radius: f32) {
        let current = self.orbit();
        self.set_orbit(Orbit {
            radius: (current.radius + radius).max(MIN_ORBIT_RADIUS),
            latitude: (current.latitude + latitude).clamp(-FRAC_PI_2, FRAC_PI_2),
            longitude: current.longitude - longitude,
        });
    }

    /// Divide the orbit radius by `factor`; factors above 1 move closer.
    pub fn zoom_by(&mut self, factor: f32) {
        let current = self.orbit();
        self.set_orbit(Orbit {
            radius: (current.radius / factor).max(MIN_ORBIT_RADIUS),
            ..current
        });
    }

    fn set_orbit(&mut self, orbit: Orbit) {
        self.position = self.target + lat_lng_to_cartesian(orbit);
    }
}
