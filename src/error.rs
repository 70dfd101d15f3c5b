//! Error types for dominant color extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting dominant colors from an image.
#[derive(Error, Debug)]
pub enum Error {
    /// No decoder for the input's image format is compiled into this build.
    #[error("no decoder available for the image format")]
    CapabilityUnavailable(#[source] image::error::UnsupportedError),

    /// The image could not be read or decoded.
    #[error("failed to load image {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
