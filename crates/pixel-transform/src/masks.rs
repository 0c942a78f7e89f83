//! Grouping of samples by distinct value.
//!
//! Groups are flat: they record how many times each value occurs, not where.
//! Only their count is used, as a diagnostic.

use crate::image::Image;

/// Group every sample of `image` by value.
///
/// One group is returned per distinct scalar sample value (across all
/// positions and channels), in ascending value order. Each group holds
/// every sample equal to that value.
pub fn get_masks<T>(image: &Image<T>) -> Vec<Vec<T>>
where
    T: Ord + Copy,
{
    let mut samples: Vec<T> = image.iter().copied().collect();
    samples.sort_unstable();
    samples.chunk_by(|a, b| a == b).map(<[T]>::to_vec).collect()
}
