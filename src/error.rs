//! Error types for loading, configuration, display and pipeline runs.

use std::path::PathBuf;

use pixel_transform::TransformError;
use thiserror::Error;

/// Failure to turn an image file into a pixel array.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Decoded samples do not form an image: {0}")]
    Shape(#[from] TransformError),
}

/// Failure to read the YAML configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid display size: {width}x{height}")]
    DisplaySize { width: u32, height: u32 },
}

/// Failure while presenting an image in the viewer window.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("Event loop error: {0}")]
    EventLoop(String),

    #[error("Failed to create window: {0}")]
    Window(String),

    #[error("Surface error: {0}")]
    Surface(String),
}

impl From<winit::error::EventLoopError> for DisplayError {
    fn from(e: winit::error::EventLoopError) -> Self {
        DisplayError::EventLoop(e.to_string())
    }
}

impl From<winit::error::OsError> for DisplayError {
    fn from(e: winit::error::OsError) -> Self {
        DisplayError::Window(e.to_string())
    }
}

impl From<softbuffer::SoftBufferError> for DisplayError {
    fn from(e: softbuffer::SoftBufferError) -> Self {
        DisplayError::Surface(e.to_string())
    }
}

/// Any failure of a pipeline run. The run either completes or aborts here.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),
}
