//! Renderable primitives.
//!
//! The set of primitive kinds is closed: every consumer matches on
//! [`Primitive`] exhaustively, so adding a kind is a compile error until
//! the intersector and shader handle it.

use glint_math::{Color4, Vec3};
use serde::{Deserialize, Serialize};

use crate::mesh::Mesh;
use crate::scene::{SceneError, SceneResult};

/// Surface response shared by every primitive kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Finish {
    /// Weight of the mirror-reflected color; 0 disables highlights entirely
    pub specularity: f32,

    /// Blinn-Phong exponent, only read in highlight shading mode
    pub gloss: f32,
}

impl Default for Finish {
    fn default() -> Self {
        Self {
            specularity: 0.0,
            gloss: 32.0,
        }
    }
}

impl Finish {
    /// A finish with the given specularity and the default gloss.
    pub fn specular(specularity: f32) -> Self {
        Self {
            specularity,
            ..Default::default()
        }
    }

    pub fn with_gloss(mut self, gloss: f32) -> Self {
        self.gloss = gloss;
        self
    }

    pub fn is_specular(&self) -> bool {
        self.specularity > 0.0
    }
}

/// A sphere with a flat color.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub color: Color4,
    pub finish: Finish,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, color: Color4) -> Self {
        Self {
            center,
            radius,
            color,
            finish: Finish::default(),
        }
    }

    pub fn with_finish(mut self, finish: Finish) -> Self {
        self.finish = finish;
        self
    }
}

/// An infinite plane `dot(p, normal) = offset` with a flat color.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Unit normal
    pub normal: Vec3,
    pub offset: f32,
    pub color: Color4,
    pub finish: Finish,
}

impl Plane {
    /// Create the plane `dot(p, normal) = offset`.
    ///
    /// A non-unit normal is normalized and the offset scaled with it, so the
    /// plane stays where the equation puts it.
    pub fn new(normal: Vec3, offset: f32, color: Color4) -> Self {
        let length = normal.length();
        Self {
            normal: normal / length,
            offset: offset / length,
            color,
            finish: Finish::default(),
        }
    }

    pub fn with_finish(mut self, finish: Finish) -> Self {
        self.finish = finish;
        self
    }
}

/// Any object the renderer can hit.
#[derive(Debug, Clone)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
    Mesh(Mesh),
}

impl Primitive {
    pub fn finish(&self) -> &Finish {
        match self {
            Primitive::Sphere(sphere) => &sphere.finish,
            Primitive::Plane(plane) => &plane.finish,
            Primitive::Mesh(mesh) => &mesh.finish,
        }
    }

    /// Lowercase kind name, as used in scene files.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Plane(_) => "plane",
            Primitive::Mesh(_) => "mesh",
        }
    }

    /// Reject geometry that can never be hit sensibly.
    ///
    /// Meshes validate themselves on construction.
    pub fn validate(&self) -> SceneResult<()> {
        match self {
            Primitive::Sphere(sphere) => {
                if !(sphere.radius.is_finite() && sphere.radius > 0.0) {
                    return Err(SceneError::InvalidRadius(sphere.radius));
                }
                if !sphere.center.is_finite() {
                    return Err(SceneError::InvalidCenter(sphere.center.to_array()));
                }
            }
            Primitive::Plane(plane) => {
                if !plane.normal.is_finite() || !plane.offset.is_finite() {
                    return Err(SceneError::InvalidNormal(plane.normal.to_array()));
                }
            }
            Primitive::Mesh(_) => {}
        }
        Ok(())
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

impl From<Mesh> for Primitive {
    fn from(mesh: Mesh) -> Self {
        Primitive::Mesh(mesh)
    }
}
