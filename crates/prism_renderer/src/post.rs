//! Post-processing: Reinhard tone mapping followed by gamma correction.
//!
//! Both passes rewrite the image in place and must run in that order, after
//! every pixel has been traced.

use prism_math::Color;
use rayon::prelude::*;

use crate::ImageBuffer;

/// Reinhard operator for a single channel: `c / (1 + c)`.
#[inline]
pub fn reinhard(c: f64) -> f64 {
    c / (1.0 + c)
}

/// Gamma-encode a single channel.
///
/// The input is clamped to [0, 1] first; NaN maps to 0.
#[inline]
pub fn gamma_encode(c: f64, gamma: f64) -> f64 {
    let c = if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) };
    c.powf(1.0 / gamma)
}

/// Map HDR radiance into [0, 1) in place.
///
/// Negative channels are clamped to 0 first, and infinite ones map to 1.
pub fn tone_map(image: &mut ImageBuffer) {
    image.pixels.par_iter_mut().for_each(|c| {
        *c = c.max(Color::ZERO);
        *c = Color::new(tone(c.x), tone(c.y), tone(c.z));
    });
}

fn tone(c: f64) -> f64 {
    if c.is_infinite() {
        1.0
    } else {
        reinhard(c)
    }
}

/// Apply display gamma in place.
pub fn gamma_correct(image: &mut ImageBuffer, gamma: f64) {
    image.pixels.par_iter_mut().for_each(|c| {
        *c = Color::new(
            gamma_encode(c.x, gamma),
            gamma_encode(c.y, gamma),
            gamma_encode(c.z, gamma),
        );
    });
}

/// Tone map, then gamma correct.
pub fn postprocess(image: &mut ImageBuffer, gamma: f64) {
    tone_map(image);
    gamma_correct(image, gamma);
}
