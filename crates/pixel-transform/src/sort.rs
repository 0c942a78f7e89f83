//! Stable sorting of samples along one image axis.
//!
//! Every 1-D lane along the chosen axis is sorted independently; indices on
//! the other two axes are left alone. Lanes are sorted with the standard
//! library's stable sort, so equal keys keep their original relative order.

use crate::image::{Axis, Image};

/// Sort sample values along `axis`, defaulting to the channel axis.
///
/// Returns a new image of the same shape.
///
/// # Example
///
/// ```
/// use pixel_transform::{sort_image, Axis};
///
/// let image = ndarray::array![[[30u8, 10, 20]]];
/// let sorted = sort_image(&image, Some(Axis::Channel));
/// assert_eq!(sorted, ndarray::array![[[10u8, 20, 30]]]);
/// ```
pub fn sort_image<T>(image: &Image<T>, axis: Option<Axis>) -> Image<T>
where
    T: Ord + Copy,
{
    sort_image_by_key(image, axis, |&v| v)
}

/// Sort each lane along `axis` by a derived key.
///
/// Lanes are sorted with a stable sort, so samples whose keys compare equal
/// stay in their original order.
pub fn sort_image_by_key<T, K, F>(image: &Image<T>, axis: Option<Axis>, mut key: F) -> Image<T>
where
    T: Copy,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let axis: ndarray::Axis = axis.unwrap_or_default().into();
    let mut sorted = image.clone();

    // reused across lanes
    let mut scratch = Vec::with_capacity(image.len_of(axis));
    for mut lane in sorted.lanes_mut(axis) {
        scratch.extend(lane.iter().copied());
        scratch.sort_by_key(&mut key);
        for (dst, src) in lane.iter_mut().zip(scratch.drain(..)) {
            *dst = src;
        }
    }

    sorted
}
