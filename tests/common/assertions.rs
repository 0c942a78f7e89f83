//! Assertion helpers for tests.

use pixel_transform::Image;
use pretty_assertions::assert_eq;

/// Assert an image has the given `(height, width, channels)` shape and
/// interleaved samples
pub fn assert_image<T>(image: &Image<T>, shape: (usize, usize, usize), samples: &[T])
where
    T: Copy + PartialEq + std::fmt::Debug,
{
    assert_eq!(image.dim(), shape, "Unexpected image shape");
    let actual: Vec<T> = image.iter().copied().collect();
    assert_eq!(actual, samples, "Unexpected samples");
}
