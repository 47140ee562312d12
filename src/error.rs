use std::path::PathBuf;

use thiserror::Error;

use crate::id_generator::ElementId;

/// Errors from in-place edits of the element store
#[derive(Debug, Error, PartialEq)]
pub enum DrawingError {
    #[error("No element with id {0}")]
    UnknownElement(ElementId),

    #[error("A pencil path needs at least one point")]
    EmptyPath,
}

/// Errors that can occur while exporting the canvas as an image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("There is no canvas to export")]
    NoSurface,

    #[error("Canvas image has invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Download failed: {0}")]
    Download(String),
}

/// Errors that can occur while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type DrawingResult<T> = Result<T, DrawingError>;
pub type ExportResult<T> = Result<T, ExportError>;
