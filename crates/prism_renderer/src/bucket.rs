//! Bucket-based tile rendering.
//!
//! The image is split into rectangular buckets that are traced
//! independently, so rayon can spread them across threads.

use prism_math::Color;

use crate::renderer::render_pixel;
use crate::Scene;

/// Default bucket edge length in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// A rectangular region of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Top-left corner
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position in render order
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

    /// Global pixel coordinates covered by the bucket, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.y..self.y + self.height)
            .flat_map(move |y| (self.x..self.x + self.width).map(move |x| (x, y)))
    }
}

/// Split an image into buckets, ordered from the center outwards.
///
/// Edge buckets are cropped to the image. A bucket size of 0 is treated as 1.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let size = bucket_size.max(1);
    let mut buckets = Vec::new();

    for y in (0..height).step_by(size as usize) {
        for x in (0..width).step_by(size as usize) {
            let bw = size.min(width - x);
            let bh = size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, buckets.len()));
        }
    }

    sort_spiral(&mut buckets, width, height);
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by the distance of their center to the image center.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;
    let distance = |b: &Bucket| {
        let bx = b.x as f64 + b.width as f64 / 2.0;
        let by = b.y as f64 + b.height as f64 / 2.0;
        (bx - center_x).powi(2) + (by - center_y).powi(2)
    };

    // Stable sort: equidistant buckets keep scanline order
    buckets.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
}

/// Pixels of one traced bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    /// Row-major within the bucket
    pub pixels: Vec<Color>,
    /// Pixels whose traced color was not finite, replaced by the background
    pub failed: usize,
}

/// Trace every pixel of a bucket.
///
/// A pixel whose color comes out NaN or infinite is written as the scene
/// background and counted in [`BucketResult::failed`].
pub fn render_bucket(bucket: &Bucket, scene: &Scene) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);
    let mut failed = 0;

    for (x, y) in bucket.pixels() {
        let color = render_pixel(scene, x, y);
        if color.is_finite() {
            pixels.push(color);
        } else {
            failed += 1;
            pixels.push(scene.background);
        }
    }

    BucketResult {
        bucket: *bucket,
        pixels,
        failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 30, 64);
        assert_eq!(buckets.len(), 2);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 30);
        assert!(buckets.iter().all(|b| b.height == 30));
    }

    #[test]
    fn test_buckets_cover_every_pixel_once() {
        let (width, height) = (37, 23);
        let mut seen = vec![0u32; (width * height) as usize];
        for bucket in generate_buckets(width, height, 8) {
            for (x, y) in bucket.pixels() {
                seen[(y * width + x) as usize] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn test_spiral_order() {
        let buckets = generate_buckets(192, 192, 64);
        assert_eq!(buckets.len(), 9);

        // The center bucket comes first
        assert_eq!((buckets[0].x, buckets[0].y), (64, 64));
        assert!(buckets.iter().enumerate().all(|(i, b)| b.index == i));
    }

    #[test]
    fn test_zero_bucket_size() {
        let buckets = generate_buckets(3, 2, 0);
        assert_eq!(buckets.len(), 6);
    }

    #[test]
    fn test_empty_image() {
        assert!(generate_buckets(0, 0, 64).is_empty());
    }
}
