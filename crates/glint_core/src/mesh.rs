//! Triangle mesh with per-vertex colors.
//!
//! Face normals are computed once here from the vertex winding and stored
//! alongside the triangles; the renderer never recomputes them per ray.

use glint_math::{triangle_normal, Color4, Vec3};

use crate::primitive::Finish;
use crate::scene::{SceneError, SceneResult};

/// A mesh of indexed triangles, flat-shaded, with colors interpolated
/// across each face.
#[derive(Clone, Debug)]
pub struct Mesh {
    positions: Vec<Vec3>,

    /// One color per vertex
    colors: Vec<Color4>,

    /// Vertex index triples, counter-clockwise from bottom to top
    triangles: Vec<[u32; 3]>,

    /// Unit face normal per triangle (NaN for zero-area triangles)
    triangle_normals: Vec<Vec3>,

    pub finish: Finish,
}

impl Mesh {
    /// Build a mesh, validating indices and precomputing face normals.
    pub fn new(
        positions: Vec<Vec3>,
        colors: Vec<Color4>,
        triangles: Vec<[u32; 3]>,
    ) -> SceneResult<Self> {
        if colors.len() != positions.len() {
            return Err(SceneError::ColorCountMismatch {
                positions: positions.len(),
                colors: colors.len(),
            });
        }

        for (triangle, indices) in triangles.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= positions.len()) {
                return Err(SceneError::TriangleIndexOutOfRange {
                    triangle,
                    index,
                    vertex_count: positions.len(),
                });
            }
        }

        let triangle_normals: Vec<Vec3> = triangles
            .iter()
            .map(|&[a, b, c]| {
                triangle_normal(
                    positions[a as usize],
                    positions[b as usize],
                    positions[c as usize],
                )
            })
            .collect();

        let degenerate = triangle_normals.iter().filter(|n| !n.is_finite()).count();
        if degenerate > 0 {
            log::warn!(
                "Mesh has {} zero-area triangle(s) out of {}; they will never be hit",
                degenerate,
                triangles.len()
            );
        }
        log::debug!(
            "Precomputed {} face normals for {} vertices",
            triangle_normals.len(),
            positions.len()
        );

        Ok(Self {
            positions,
            colors,
            triangles,
            triangle_normals,
            finish: Finish::default(),
        })
    }

    pub fn with_finish(mut self, finish: Finish) -> Self {
        self.finish = finish;
        self
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Color4] {
        &self.colors
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    pub fn triangle_normals(&self) -> &[Vec3] {
        &self.triangle_normals
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Corner positions of triangle `index`.
    ///
    /// Panics if `index` is out of range.
    pub fn triangle_vertices(&self, index: usize) -> [Vec3; 3] {
        self.triangles[index].map(|i| self.positions[i as usize])
    }

    /// Blend the corner colors of triangle `index` with barycentric weights.
    ///
    /// RGB only; the result is always opaque.
    pub fn interpolate_color(&self, index: usize, weights: [f32; 3]) -> Color4 {
        let rgb = self.triangles[index]
            .iter()
            .zip(weights)
            .fold(Vec3::ZERO, |acc, (&i, w)| {
                acc + self.colors[i as usize].truncate() * w
            });
        rgb.extend(1.0)
    }
}
