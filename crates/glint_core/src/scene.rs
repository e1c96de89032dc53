//! Scene container: primitives, lights and the active camera.
//!
//! A scene is plain data. It is mutated only between render passes and
//! shared read-only with every worker during a pass.

use glint_math::Camera;
use thiserror::Error;

use crate::light::Light;
use crate::primitive::Primitive;

/// Errors raised while building or loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown primitive kind: {0:?}")]
    UnknownPrimitiveKind(String),

    #[error("Triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    TriangleIndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("Mesh has {positions} positions but {colors} colors")]
    ColorCountMismatch { positions: usize, colors: usize },

    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("Sphere center must be finite, got {0:?}")]
    InvalidCenter([f32; 3]),

    #[error("Plane normal must be non-zero and finite, got {0:?}")]
    InvalidNormal([f32; 3]),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// An ordered list of primitives and lights seen through one camera.
///
/// Order is preserved so traversal is deterministic; it never changes
/// which hit is nearest.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Scene name (usually from filename)
    pub name: String,

    primitives: Vec<Primitive>,

    lights: Vec<Light>,

    camera: Camera,
}

impl Scene {
    /// Create an empty scene viewed through `camera`.
    pub fn new(name: impl Into<String>, camera: Camera) -> Self {
        Self {
            name: name.into(),
            primitives: Vec::new(),
            lights: Vec::new(),
            camera,
        }
    }

    /// Validate and append a primitive, returning its index.
    pub fn add(&mut self, primitive: impl Into<Primitive>) -> SceneResult<usize> {
        let primitive = primitive.into();
        primitive.validate()?;
        let id = self.primitives.len();
        self.primitives.push(primitive);
        Ok(id)
    }

    /// Append a light, returning its index.
    pub fn add_light(&mut self, light: Light) -> usize {
        let id = self.lights.len();
        self.lights.push(light);
        id
    }

    /// Remove and return the primitive at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<Primitive> {
        (index < self.primitives.len()).then(|| self.primitives.remove(index))
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access for controls between passes.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Get primitive count.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Get total triangle count across all meshes.
    pub fn total_triangle_count(&self) -> usize {
        self.primitives
            .iter()
            .map(|p| match p {
                Primitive::Mesh(mesh) => mesh.triangle_count(),
                Primitive::Sphere(_) | Primitive::Plane(_) => 0,
            })
            .sum()
    }
}
