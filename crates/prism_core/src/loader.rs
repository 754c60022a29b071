//! Scene file loading.
//!
//! Scene files are JSON documents mapping onto [`SceneDescription`]. Every
//! section has a default, so the smallest valid file is `{}`: an empty scene
//! that renders the background.

use std::path::Path;

use thiserror::Error;

use crate::error::SceneError;
use crate::scene::SceneDescription;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(#[from] SceneError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and validate a JSON scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;

    log::info!("Loading scene from {}", path.display());
    load_scene_from_str(&contents)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(contents: &str) -> LoadResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(contents)?;
    scene.validate()?;

    log::info!(
        "Loaded scene: {} primitives, {} lights, {} named materials",
        scene.primitives.len(),
        scene.lights.len(),
        scene.materials.len()
    );
    Ok(scene)
}
