use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use prism_renderer::{postprocess, render_with_buckets, Scene};

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    // RUST_LOG still applies per module on top of the chosen level
    env_logger::Builder::from_default_env()
        .filter_level(args.debug_level.into())
        .init();

    log::info!("Starting Prism");

    let mut description = prism_core::load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;
    args.apply_overrides(&mut description.settings);

    let scene = Scene::from_description(&description).context("Invalid scene")?;

    let start = Instant::now();
    let mut image = render_with_buckets(&scene, args.bucket_size);
    postprocess(&mut image, scene.gamma);
    log::info!("Rendered in {:.2?}", start.elapsed());

    image
        .to_rgb8()
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}
