pub mod loader;
pub mod pipeline;

pub use loader::{decode_image, load_image};
pub use pipeline::{SortPipeline, SortResult};
