//! Error type for the transform layer.

use thiserror::Error;

/// Invalid arguments passed to a transform.
///
/// Transforms never partially apply: when one of these is returned the
/// input image is untouched and no output exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Quantization depth outside `1..=256`
    #[error("invalid quantization depth {0} (expected 1..=256)")]
    InvalidDepth(i64),

    /// Axis index outside `-3..=2`
    #[error("invalid axis {0} for a 3-dimensional image")]
    InvalidAxis(isize),

    /// Sample buffer length does not match the requested shape
    #[error("sample buffer of length {len} does not fit shape {height}x{width}x{channels}")]
    Shape {
        height: usize,
        width: usize,
        channels: usize,
        len: usize,
    },
}
