//! pixsort - pixel sorting viewer
//!
//! Loads an image, optionally quantizes it, sorts its samples along one axis
//! and shows the result. The pure transforms live in the `pixel-transform`
//! crate; this crate adds file loading, configuration and the viewer window.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
