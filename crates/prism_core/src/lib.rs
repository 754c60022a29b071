//! Prism Core - scene description types, validation and scene files.
//!
//! This crate provides:
//!
//! - **Scene description**: `SceneDescription`, `Material`, `PointLight`,
//!   `CameraOptions`, `RenderSettings`, `Mesh`
//! - **Validation**: every invalid input is rejected with a [`SceneError`]
//!   before the renderer traces a single ray
//! - **Scene files**: JSON loading via serde
//!
//! # Example
//!
//! ```ignore
//! use prism_core::load_scene;
//!
//! let scene = load_scene("scenes/spheres.json")?;
//! println!("Loaded {} primitives, {} lights",
//!     scene.primitives.len(),
//!     scene.lights.len());
//! ```

pub mod error;
pub mod loader;
pub mod mesh;
pub mod scene;

// Re-export commonly used types
pub use error::SceneError;
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use mesh::Mesh;
pub use scene::{
    check_color, CameraOptions, Material, MaterialRef, PointLight, PrimitiveDesc,
    RenderSettings, SceneDescription,
};
