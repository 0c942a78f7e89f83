//! pixel-transform: pure array transforms for pixel sorting
//!
//! Images are `(height, width, channels)` arrays in red-green-blue order
//! (see [`Image`]). Three transforms operate on them, none with side effects:
//!
//! - [`quantize`]: floor-bucket every sample to a multiple of a [`Depth`]
//! - [`sort_image`]: stable-sort samples along one [`Axis`]
//! - [`get_masks`]: group samples by distinct value (diagnostic)
//!
//! ```
//! use pixel_transform::{quantize, sort_image, Axis, Depth};
//!
//! let image = ndarray::array![
//!     [[10u8, 200, 10], [50, 50, 50]],
//!     [[10, 10, 10], [200, 10, 10]]
//! ];
//!
//! let quantized = quantize(&image, Depth::new(64).unwrap());
//! assert_eq!(quantized[[0, 0, 1]], 192);
//!
//! let sorted = sort_image(&quantized, Some(Axis::Height));
//! assert_eq!(sorted.dim(), (2, 2, 3));
//! ```
//!
//! # Shape invariant
//!
//! Both `quantize` and `sort_image` return an array with exactly the input
//! shape. Sorting only permutes values inside each lane of the chosen axis,
//! so channel order and the set of values in every lane are preserved.

pub mod error;
pub mod image;
pub mod masks;
pub mod quantize;
pub mod sort;


pub use error::TransformError;
pub use image::{from_rgb_samples, Axis, Image, CHANNELS};
pub use masks::get_masks;
pub use quantize::{quantize, Depth};
pub use sort::{sort_image, sort_image_by_key};
