use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use prism_core::RenderSettings;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "prism")]
#[command(about = "Render a JSON scene with a recursive Whitted ray tracer")]
pub struct Args {
    /// Scene file (JSON)
    pub scene: PathBuf,

    /// Output image path (PNG)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Image width in pixels, overrides the scene file
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels, overrides the scene file
    #[arg(long)]
    pub height: Option<u32>,

    /// Maximum recursion depth, overrides the scene file
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Display gamma, overrides the scene file
    #[arg(long)]
    pub gamma: Option<f64>,

    /// Bucket edge length in pixels
    #[arg(long, default_value_t = prism_renderer::DEFAULT_BUCKET_SIZE)]
    pub bucket_size: u32,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,
}

impl Args {
    /// Apply the command line overrides on top of the scene file's settings.
    pub fn apply_overrides(&self, settings: &mut RenderSettings) {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
        if let Some(gamma) = self.gamma {
            settings.gamma = gamma;
        }
    }
}
