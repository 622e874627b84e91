//! Error types for the wireframe renderer

use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the renderer's boundaries.
///
/// Traversal itself never fails: degenerate geometry is painted as nothing.
/// Only decoding scenes, encoding/writing output, and worker handoff can
/// surface errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to decode a scene tree from its serialized form
    #[error("Scene decode failed: {0}")]
    SceneError(String),

    /// Failed to encode the finished canvas as an image
    #[error("Image encoding failed: {0}")]
    EncodeError(String),

    /// I/O failure while persisting output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The render worker went away before completing a request
    #[error("Render worker canceled: {0}")]
    Canceled(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SceneError(err.to_string())
    }
}
