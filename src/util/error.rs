//! Error types for spotmatch.

use thiserror::Error;

/// Result alias for spotmatch operations.
pub type SpotMatchResult<T> = std::result::Result<T, SpotMatchError>;

/// Errors that can occur when running spotmatch algorithms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpotMatchError {
    /// An image was created or requested with a zero dimension.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// A pixel buffer is too short for the declared dimensions.
    #[error("pixel buffer too small: needed {needed} bytes, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A row stride is smaller than the image width.
    #[error("stride {stride} is smaller than width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// Two images that must share dimensions do not.
    #[error("image sizes differ: {width_a}x{height_a} vs {width_b}x{height_b}")]
    SizeMismatch {
        width_a: usize,
        height_a: usize,
        width_b: usize,
        height_b: usize,
    },
    /// The anchor position list is empty.
    #[error("position list is empty")]
    EmptyPositions,
    /// The rotation sweep was configured with zero samples.
    #[error("rotation sample count must be at least 1")]
    InvalidSampleCount,
    /// Reading or decoding an image file failed.
    #[cfg(feature = "image-io")]
    #[error("image io failed: {reason}")]
    ImageIo { reason: String },
}
