//! Color depth reduction by floor bucketing.
//!
//! Every sample `v` becomes `trunc(v / depth) * depth`. The division is real
//! division followed by truncation toward zero, so values are always moved
//! down to the start of their bucket, never rounded to the nearest one.
//!
//! ```text
//! depth = 64:   0..=63 -> 0   64..=127 -> 64   128..=191 -> 128   192..=255 -> 192
//! depth = 3:    254 -> 252    255 -> 255
//! ```

use crate::error::TransformError;
use crate::image::Image;

/// Quantization bucket width, validated to `1..=256`.
///
/// A depth of 1 leaves images unchanged; 256 collapses every 8-bit sample
/// to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Depth(i32);

impl Depth {
    /// Smallest valid depth (no reduction).
    pub const MIN: i64 = 1;
    /// Largest valid depth (everything collapses to 0).
    pub const MAX: i64 = 256;

    /// Validate a depth value.
    pub fn new(value: i64) -> Result<Self, TransformError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as i32))
        } else {
            Err(TransformError::InvalidDepth(value))
        }
    }

    /// The bucket width.
    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for Depth {
    type Error = TransformError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Reduce the number of distinct values per channel.
///
/// Returns a new `i32` image of the same shape. The input is not modified.
pub fn quantize<T>(image: &Image<T>, depth: Depth) -> Image<i32>
where
    T: Copy + Into<i32>,
{
    let d = depth.get();
    image.mapv(|v| quantize_sample(v.into(), d))
}

#[inline]
fn quantize_sample(value: i32, depth: i32) -> i32 {
    (value as f64 / depth as f64).trunc() as i32 * depth
}
