//! # Error Types
//!
//! Every failure the codec, the image I/O layer and the file pipelines can report.
//! The binary wraps these in `anyhow` at the CLI boundary.

use std::path::PathBuf;
use std::str::Utf8Error;

use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, StegoError>;

/// Failure to split a reconstructed frame into filename and content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FramingError {
    #[error("file name separator not found")]
    MissingSeparator,

    #[error("file name is not valid UTF-8: {0}")]
    InvalidFilename(#[from] Utf8Error),
}

#[derive(Debug, Error)]
pub enum StegoError {
    /// The secret file does not exist.
    #[error("secret file '{}' not found", .0.display())]
    SourceNotFound(PathBuf),

    /// Only PNG and BMP keep every sample bit intact.
    #[error("unsupported image format for '{}': only .png and .bmp are accepted", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("secret file is too big: need {required} bits but only {available} are available")]
    CapacityExceeded { required: usize, available: usize },

    #[error("end marker not found, no hidden data in this image")]
    MarkerNotFound,

    #[error("hidden data is corrupted: {0}")]
    CorruptPayload(#[from] FramingError),

    /// The file name cannot be carried by a frame.
    #[error("invalid file name '{0}'")]
    InvalidFilename(String),

    /// The revealed file name would escape the output directory.
    #[error("refusing to write revealed file with unsafe name '{0}'")]
    UnsafeFilename(String),

    #[error("{samples} samples do not match a {width}x{height}x{channels} image")]
    InvalidShape {
        samples: usize,
        width: u32,
        height: u32,
        channels: u8,
    },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
