//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that rayon renders independently.
//! Every bucket writes only its own pixels, so the result matches the
//! single-threaded pass exactly.

use std::time::Instant;

use glint_core::Scene;
use glint_math::Color4;
use rayon::prelude::*;

use crate::camera::ViewPlane;
use crate::renderer::{check_pass, render_pixel, ImageBuffer, RenderConfig, RenderResult};
use crate::session::RenderTicket;
use crate::shader::Shader;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets for an image, sorted center-out.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();

    for y in (0..height).step_by(bucket_size as usize) {
        for x in (0..width).step_by(bucket_size as usize) {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, buckets.len()));
        }
    }

    sort_spiral(&mut buckets, width, height);

    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from image center.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let distance = |b: &Bucket| {
        let bx = b.x as f32 + b.width as f32 / 2.0;
        let by = b.y as f32 + b.height as f32 / 2.0;
        (bx - center_x).powi(2) + (by - center_y).powi(2)
    };

    buckets.sort_by(|a, b| {
        distance(a)
            .partial_cmp(&distance(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Render a single bucket.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(bucket: &Bucket, shader: &Shader, view: &ViewPlane) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let color = render_pixel(shader, view, bucket.x + local_x, bucket.y + local_y);
            pixels.push(color);
        }
    }

    BucketResult::new(*bucket, pixels)
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color4>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color4>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy this bucket's pixels into their place in `image`.
    pub fn write_to(&self, image: &mut ImageBuffer) {
        let b = &self.bucket;
        for (i, color) in self.pixels.iter().enumerate() {
            let i = i as u32;
            image.set(b.x + i % b.width, b.y + i / b.width, *color);
        }
    }
}

/// Render `scene` on the rayon pool, one bucket per task.
///
/// Returns `Ok(None)` if `ticket` is superseded before every bucket is
/// done; buckets not yet started are skipped.
pub fn render_buckets(
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
    ticket: &RenderTicket,
) -> RenderResult<Option<ImageBuffer>> {
    check_pass(width, height, config)?;

    let buckets = generate_buckets(width, height, DEFAULT_BUCKET_SIZE);
    log::info!(
        "Rendering '{}' at {}x{} ({:?}, {} bounces) in {} buckets",
        scene.name,
        width,
        height,
        config.shading_mode,
        config.max_bounces,
        buckets.len()
    );
    let start = Instant::now();

    let shader = Shader::new(scene, config);
    let view = ViewPlane::new(scene.camera(), width, height);

    let results: Option<Vec<BucketResult>> = buckets
        .par_iter()
        .map(|bucket| {
            ticket
                .is_current()
                .then(|| render_bucket(bucket, &shader, &view))
        })
        .collect();

    let Some(results) = results.filter(|_| ticket.is_current()) else {
        log::debug!("Discarding superseded pass {}", ticket.generation());
        return Ok(None);
    };

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        result.write_to(&mut image);
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
    Ok(Some(image))
}
