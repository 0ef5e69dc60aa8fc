use std::io;

use thiserror::Error;

/// Fault raised by an entity while answering a single face query.
#[derive(Debug, Error)]
pub enum FaceError {
    #[error("texture `{key}` is not defined")]
    UndefinedTexture { key: String },
    #[error("{0}")]
    Failed(String),
    /// The face answered, but its texture could not be named.
    #[error(transparent)]
    Icon(#[from] IconError),
}

/// Fault raised while reading a texture reference.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("texture `{0}` has no icon name")]
    Unnamed(String),
    #[error("{0}")]
    Failed(String),
}

/// Fault that aborts a whole registry scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("registry unavailable: {0}")]
    Unavailable(String),
    #[error("`{0}` is not registered")]
    Unregistered(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode export: {0}")]
    Json(#[from] serde_json::Error),
}
