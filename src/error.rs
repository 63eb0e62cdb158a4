//! Error types for atlas generation.

use thiserror::Error;

/// Result type alias using AtlasError.
pub type Result<T> = std::result::Result<T, AtlasError>;

/// Main error type for sprite atlas generation.
#[derive(Error, Debug)]
pub enum AtlasError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode a source image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Failed to serialize the atlas document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid generator configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Source sheet dimensions do not fit the expected grid.
    #[error("Malformed sheet: {0}")]
    MalformedSheet(String),

    /// No frames were extracted from any input.
    #[error("No frames extracted from input")]
    NoFrames,

    /// Two sources produced the same animation or frame name.
    #[error("Frame name collision: {0}")]
    FrameCollision(String),

    /// Failed to encode the packed atlas as PNG.
    #[error("Encode error: {0}")]
    Encode(String),
}
