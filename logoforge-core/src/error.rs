//! Error types for logoforge

use thiserror::Error;

/// Main error type for logoforge operations
///
/// Degraded-but-supported outcomes (source too small to trace, no loops
/// found, no outer shapes) are expressed as `None` returns at the call site,
/// not as errors; every variant here is a genuine failure.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("geometry error: {0}")]
    Geometry(String),

    #[error("render error: {0}")]
    Render(String),
}

/// Result type alias for logoforge operations
pub type Result<T> = std::result::Result<T, Error>;
