//! Prism Renderer - CPU Whitted ray tracing
//!
//! A recursive ray tracer for spheres and triangles lit by point lights:
//! Phong shading with hard shadows, mirror reflection and refraction with
//! total internal reflection, followed by Reinhard tone mapping and gamma
//! correction.
//!
//! # Example
//!
//! ```ignore
//! use prism_renderer::{postprocess, render, Scene};
//!
//! let description = prism_core::load_scene("scenes/spheres.json")?;
//! let scene = Scene::from_description(&description)?;
//! let mut image = render(&scene);
//! postprocess(&mut image, scene.gamma);
//! image.to_rgb8().save("out.png")?;
//! ```

mod bucket;
mod camera;
mod hittable;
mod post;
mod renderer;
mod scene;
mod sphere;
mod triangle;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use hittable::{HitRecord, Intersectable, Primitive};
pub use post::{gamma_correct, gamma_encode, postprocess, reinhard, tone_map};
pub use renderer::{color_to_rgb, render, render_pixel, render_with_buckets, ImageBuffer};
pub use scene::Scene;
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export the math types used throughout the public API
pub use prism_math::{Color, Interval, Ray, Vector3};
