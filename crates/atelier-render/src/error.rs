//! Error types for document rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while rendering a certificate or marksheet.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The base template image could not be read or decoded.
    #[error("template `{path}` could not be loaded: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The font file was missing or not a valid font.
    #[error("font `{path}` could not be loaded")]
    Font { path: PathBuf },

    /// Encoding the composed image to PNG failed.
    #[error("failed to encode rendered document: {0}")]
    Encode(#[from] image::ImageError),

    /// Writing the rendered file to the output directory failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The blocking render task panicked or was cancelled.
    #[error("render task failed: {0}")]
    Task(String),
}
