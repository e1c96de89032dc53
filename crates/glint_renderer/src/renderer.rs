//! Render configuration and the single-threaded render pass.
//!
//! One primary ray per pixel, no anti-aliasing. Colors are clamped and
//! quantized to 8-bit RGBA on write; row 0 is the top of the image.

use std::time::Instant;

use glint_core::Scene;
use glint_math::{to_rgba8, Color4};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::ViewPlane;
use crate::shader::Shader;

/// Errors that can occur when starting a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid render config: {0}")]
    InvalidConfig(String),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// How specular surfaces are shaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShadingMode {
    /// Recursive mirror reflection, bounded by `max_bounces`
    #[default]
    Reflective,
    /// Non-recursive Blinn-Phong highlight using the surface gloss exponent
    BlinnPhong,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Bounce budget for primary rays. 0 renders pure background.
    pub max_bounces: u32,
    /// Hits closer than this are ignored (self-intersection guard)
    pub intersection_epsilon: f32,
    /// Color returned by rays that hit nothing
    pub background: Color4,
    /// Multiplied with the surface color at every hit
    pub ambient_light: Color4,
    pub shading_mode: ShadingMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_bounces: 3,
            intersection_epsilon: 0.001,
            background: Color4::new(0.1, 0.1, 0.1, 1.0),
            ambient_light: Color4::new(0.0, 0.0, 0.0, 1.0),
            shading_mode: ShadingMode::Reflective,
        }
    }
}

impl RenderConfig {
    pub fn with_max_bounces(mut self, max_bounces: u32) -> Self {
        self.max_bounces = max_bounces;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.intersection_epsilon = epsilon;
        self
    }

    pub fn with_background(mut self, background: Color4) -> Self {
        self.background = background;
        self
    }

    pub fn with_ambient_light(mut self, ambient_light: Color4) -> Self {
        self.ambient_light = ambient_light;
        self
    }

    pub fn with_shading_mode(mut self, shading_mode: ShadingMode) -> Self {
        self.shading_mode = shading_mode;
        self
    }

    /// Reject settings the tracer cannot work with.
    pub fn validate(&self) -> RenderResult<()> {
        let eps = self.intersection_epsilon;
        if !eps.is_finite() || eps <= 0.0 {
            return Err(RenderError::InvalidConfig(format!(
                "intersection_epsilon must be positive and finite, got {eps}"
            )));
        }
        Ok(())
    }
}

/// Check dimensions and config before a pass.
///
/// The RGBA byte count must fit in a `u32`.
pub(crate) fn check_pass(width: u32, height: u32, config: &RenderConfig) -> RenderResult<()> {
    let byte_count = width.checked_mul(height).and_then(|n| n.checked_mul(4));
    if width == 0 || height == 0 || byte_count.is_none() {
        return Err(RenderError::InvalidDimensions { width, height });
    }
    config.validate()
}

/// Trace the primary ray of pixel (`col`, `row`).
#[inline]
pub fn render_pixel(shader: &Shader, view: &ViewPlane, col: u32, row: u32) -> Color4 {
    let ray = view.get_ray(col, row);
    shader.trace(&ray, shader.config().max_bounces)
}

/// Row-major 8-bit RGBA render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 4]>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 4]; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y) from a linear color.
    pub fn set(&mut self, x: u32, y: u32, color: Color4) {
        let index = self.index(x, y);
        self.pixels[index] = to_rgba8(color);
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Raw bytes, 4 per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Owned copy of the raw bytes (for saving or handing to a display).
    pub fn to_rgba(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

/// Render `scene` into a new `width` x `height` buffer on the calling thread.
pub fn render(
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> RenderResult<ImageBuffer> {
    check_pass(width, height, config)?;

    log::info!(
        "Rendering '{}' at {}x{} ({:?}, {} bounces)",
        scene.name,
        width,
        height,
        config.shading_mode,
        config.max_bounces
    );
    let start = Instant::now();

    let shader = Shader::new(scene, config);
    let view = ViewPlane::new(scene.camera(), width, height);
    let mut image = ImageBuffer::new(width, height);

    for row in 0..height {
        for col in 0..width {
            image.set(col, row, render_pixel(&shader, &view, col, row));
        }
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
    Ok(image)
}
