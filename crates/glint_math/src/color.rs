//! RGBA color helpers.
//!
//! Colors are plain `Vec4`s so the vector operators apply elementwise,
//! alpha included. Alpha is only pinned to 1 where the shader says so.

use crate::{Interval, Vec4};

/// Linear RGBA color (R, G, B, A), nominally in [0, 1].
pub type Color4 = Vec4;

/// Return `color` with alpha forced to 1.
#[inline]
pub fn with_opaque_alpha(color: Color4) -> Color4 {
    color.truncate().extend(1.0)
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    Interval::UNIT.clamp(x)
}

/// Convert a color to 8-bit RGBA with `floor(clamp01(c) * 255)` per channel.
///
/// NaN channels map to 0.
pub fn to_rgba8(color: Color4) -> [u8; 4] {
    let quantize = |c: f32| {
        if c.is_nan() {
            0
        } else {
            (clamp_01(c) * 255.0).floor() as u8
        }
    };
    [
        quantize(color.x),
        quantize(color.y),
        quantize(color.z),
        quantize(color.w),
    ]
}
