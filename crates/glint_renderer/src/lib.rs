//! Glint Renderer - CPU Whitted-style raytracing
//!
//! One primary ray per pixel, nearest-hit resolution over spheres, planes
//! and vertex-colored triangle meshes, hard shadows from point lights and
//! recursive mirror reflection bounded by a bounce budget.
//!
//! [`render`] runs a pass on the calling thread; [`render_buckets`] splits
//! the image into buckets for rayon and can be superseded through a
//! [`RenderSession`].

mod bucket;
mod camera;
mod hittable;
mod mesh;
mod plane;
mod renderer;
mod session;
mod shader;
mod sphere;

pub use bucket::{
    generate_buckets, render_bucket, render_buckets, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::ViewPlane;
pub use hittable::{intersect, Hittable, Intersection, SurfaceHit, TriangleHit};
pub use plane::plane_distance;
pub use renderer::{
    render, render_pixel, ImageBuffer, RenderConfig, RenderError, RenderResult, ShadingMode,
};
pub use session::{RenderSession, RenderTicket};
pub use shader::Shader;

/// Re-export common math types from glint_math
pub use glint_math::{Color4, Ray, Vec3};
