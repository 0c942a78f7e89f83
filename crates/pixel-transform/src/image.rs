//! Image array type and axis selection.
//!
//! An [`Image`] is a `(height, width, channels)` array of samples in
//! red-green-blue channel order. Loaded images hold `u8` samples; quantized
//! images widen to `i32` so the multiply-back step never overflows.

use crate::error::TransformError;
use ndarray::Array3;

/// Number of channels in an RGB image.
pub const CHANNELS: usize = 3;

/// A `(height, width, channels)` sample array.
pub type Image<T> = Array3<T>;

/// Build an RGB image from interleaved row-major samples.
///
/// `samples` must hold exactly `height * width * 3` values laid out as
/// `r, g, b, r, g, b, ...` scanline by scanline.
pub fn from_rgb_samples<T>(
    height: usize,
    width: usize,
    samples: Vec<T>,
) -> Result<Image<T>, TransformError> {
    let len = samples.len();
    Array3::from_shape_vec((height, width, CHANNELS), samples).map_err(|_| {
        TransformError::Shape {
            height,
            width,
            channels: CHANNELS,
            len,
        }
    })
}

/// The array dimension a sort runs along.
///
/// Defaults to [`Axis::Channel`], the last axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Axis 0: each `(column, channel)` lane is sorted top to bottom.
    Height,
    /// Axis 1: each `(row, channel)` lane is sorted left to right.
    Width,
    /// Axis 2: the channel values of every pixel are sorted.
    #[default]
    Channel,
}

impl Axis {
    /// Resolve an axis index, counting from the end when negative.
    ///
    /// `0`, `1`, `2` select height, width and channel; `-1`, `-2`, `-3`
    /// select channel, width and height.
    pub fn from_index(index: isize) -> Result<Self, TransformError> {
        match index {
            0 | -3 => Ok(Axis::Height),
            1 | -2 => Ok(Axis::Width),
            2 | -1 => Ok(Axis::Channel),
            _ => Err(TransformError::InvalidAxis(index)),
        }
    }

    /// Non-negative array dimension index.
    pub fn index(self) -> usize {
        match self {
            Axis::Height => 0,
            Axis::Width => 1,
            Axis::Channel => 2,
        }
    }
}

impl From<Axis> for ndarray::Axis {
    fn from(axis: Axis) -> Self {
        ndarray::Axis(axis.index())
    }
}
