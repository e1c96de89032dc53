use glint_math::{Color4, Vec3};
use serde::{Deserialize, Serialize};

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    #[serde(default)]
    pub position: Vec3,
    #[serde(default = "white")]
    pub color: Color4,
}

fn white() -> Color4 {
    Color4::ONE
}

impl Light {
    pub fn new(position: Vec3, color: Color4) -> Self {
        Self { position, color }
    }

    /// A white light at `position`.
    pub fn white(position: Vec3) -> Self {
        Self::new(position, white())
    }
}
