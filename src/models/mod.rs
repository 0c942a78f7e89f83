pub mod config;
pub mod display_size;

pub use config::{ConfigOverrides, PipelineConfig};
pub use display_size::DisplaySize;
