//! Errors for invalid scene input.

use prism_math::MathError;
use thiserror::Error;

/// A scene that cannot be rendered.
///
/// These are raised while the scene is being built, never mid-render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("domain error: {0}")]
    Math(#[from] MathError),

    #[error("sphere radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("material coefficient `{name}` must be within [0, 1], got {value}")]
    CoefficientOutOfRange { name: &'static str, value: f64 },

    #[error("index of refraction must be positive, got {0}")]
    InvalidIor(f64),

    #[error("shininess must be a non-negative number, got {0}")]
    InvalidShininess(f64),

    #[error("`{name}` must have finite, non-negative channels")]
    InvalidColor { name: &'static str },

    #[error("`{name}` must be finite")]
    NonFiniteVector { name: &'static str },

    #[error("image resolution must be non-zero, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("gamma must be positive, got {0}")]
    InvalidGamma(f64),

    #[error("field of view must be within (0, 180) degrees, got {0}")]
    InvalidFov(f64),

    #[error("epsilon must be positive, got {0}")]
    InvalidEpsilon(f64),

    #[error("unknown material `{0}`")]
    UnknownMaterial(String),

    #[error("invalid mesh: {0}")]
    InvalidMesh(String),
}
