//! Image rendering.
//!
//! One primary ray per pixel through its center, traced to the scene's
//! maximum depth. Buckets are traced in parallel and stitched into an
//! [`ImageBuffer`] of linear HDR radiance once they have all finished.

use prism_math::{Color, Interval};
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::Scene;

/// Row-major image of linear colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Copy a traced bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        for ((x, y), color) in result.bucket.pixels().zip(&result.pixels) {
            self.set(x, y, *color);
        }
    }

    /// Quantize to 8-bit RGB for encoding.
    ///
    /// Expects display values in [0, 1], i.e. after post-processing.
    pub fn to_rgb8(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(color_to_rgb(self.get(x, y)))
        })
    }
}

/// Convert a display color to 8 bits per channel, `round(c * 255)`.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let quantize = |c: f64| (Interval::UNIT.clamp(c) * 255.0).round() as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Trace the primary ray of pixel (x, y).
pub fn render_pixel(scene: &Scene, x: u32, y: u32) -> Color {
    let ray = scene.camera.get_ray(x, y);
    scene.trace_ray(&ray, scene.max_depth)
}

/// Render the scene with the default bucket size.
pub fn render(scene: &Scene) -> ImageBuffer {
    render_with_buckets(scene, DEFAULT_BUCKET_SIZE)
}

/// Render the scene, tracing `bucket_size` square buckets in parallel.
pub fn render_with_buckets(scene: &Scene, bucket_size: u32) -> ImageBuffer {
    let width = scene.camera.image_width;
    let height = scene.camera.image_height;
    let buckets = generate_buckets(width, height, bucket_size);

    log::info!(
        "Rendering {}x{} ({} buckets, max depth {})",
        width,
        height,
        buckets.len(),
        scene.max_depth
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let result = render_bucket(bucket, scene);
            log::debug!(
                "Bucket {}/{} done ({}x{} at {},{})",
                bucket.index + 1,
                buckets.len(),
                bucket.width,
                bucket.height,
                bucket.x,
                bucket.y
            );
            result
        })
        .collect();

    let mut image = ImageBuffer::new(width, height);
    let mut failed = 0;
    for result in &results {
        image.write_bucket(result);
        failed += result.failed;
    }

    if failed > 0 {
        log::warn!(
            "{} pixel(s) produced non-finite radiance and were set to the background",
            failed
        );
    }
    log::info!("Render complete");

    image
}
