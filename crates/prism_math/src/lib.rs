//! Prism math - vector algebra and ray primitives for the tracer.
//!
//! Vectors are glam's double precision `DVec3`, exposed as [`Vector3`]. The
//! fallible and ray-specific operations glam does not provide live in
//! [`Vec3Ext`], [`reflect`], [`refract`] and [`solve_quadratic`].

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod quadratic;
mod ray;
mod transform;
mod vector;

pub use interval::Interval;
pub use quadratic::solve_quadratic;
pub use ray::{reflect, refract, Ray};
pub use transform::{look_at, CameraBasis};
pub use vector::{Color, MathError, Vec3Ext, Vector3, NORMALIZE_EPSILON};
