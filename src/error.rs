//! Error types for the logo-text-crop crate.

use std::path::PathBuf;

/// Errors that can occur while extracting the text region of a logo.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input image does not exist.
    #[error("input image not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error occurred while decoding or encoding an image.
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
