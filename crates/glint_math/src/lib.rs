// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod camera;
mod color;
mod geometry;
mod interval;
mod ray;
mod spherical;

pub use camera::Camera;
pub use color::{clamp_01, to_rgba8, with_opaque_alpha, Color4};
pub use geometry::{barycentric, reflect, triangle_cross, triangle_normal};
pub use interval::Interval;
pub use ray::Ray;
pub use spherical::{cartesian_to_lat_lng, lat_lng_to_cartesian, normalize_angle, Orbit};

/// World up axis used to build camera frames.
pub const UP: Vec3 = Vec3::Y;
