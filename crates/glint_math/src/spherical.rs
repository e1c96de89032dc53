//! Cartesian <-> spherical conversion for orbit controls.
//!
//! Latitude is measured from the XZ plane toward +Y. Longitude is measured
//! around +Y starting from -Z, increasing toward +X.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::Vec3;

/// Spherical position relative to an orbit center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub radius: f32,
    /// Radians in [-π/2, π/2]
    pub latitude: f32,
    /// Radians in [0, 2π)
    pub longitude: f32,
}

/// Wrap an angle into [0, 2π).
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Convert an offset vector to spherical coordinates.
///
/// A zero vector yields NaN angles.
pub fn cartesian_to_lat_lng(v: Vec3) -> Orbit {
    let radius = v.length();
    Orbit {
        radius,
        latitude: FRAC_PI_2 - (v.y / radius).clamp(-1.0, 1.0).acos(),
        longitude: normalize_angle(v.x.atan2(-v.z)),
    }
}

/// Convert spherical coordinates back to an offset vector.
pub fn lat_lng_to_cartesian(orbit: Orbit) -> Vec3 {
    let Orbit {
        radius,
        latitude,
        longitude,
    } = orbit;
    Vec3::new(
        radius * latitude.cos() * longitude.sin(),
        radius * latitude.sin(),
        -radius * latitude.cos() * longitude.cos(),
    )
}
