use std::path::Path;

use pixel_transform::{get_masks, quantize, sort_image, Axis, Depth, Image, TransformError};

use crate::error::PipelineError;
use crate::models::PipelineConfig;
use crate::services::loader::load_image;

/// Result from running the sort pipeline
#[derive(Debug)]
pub struct SortResult {
    /// Sorted (and possibly quantized) samples, shape of the input image
    pub image: Image<i32>,
    /// Number of distinct sample values, when mask reporting is enabled
    pub mask_count: Option<usize>,
}

/// Pipeline that runs load → [quantize] → sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortPipeline {
    depth: Option<Depth>,
    axis: Axis,
    report_masks: bool,
}

impl SortPipeline {
    pub fn new(depth: Option<Depth>, axis: Axis) -> Self {
        Self {
            depth,
            axis,
            report_masks: false,
        }
    }

    /// Enable the distinct-value diagnostic
    pub fn report_masks(mut self, enabled: bool) -> Self {
        self.report_masks = enabled;
        self
    }

    /// Validate depth and axis from configuration
    pub fn from_config(config: &PipelineConfig) -> Result<Self, TransformError> {
        let depth = config.depth.map(Depth::new).transpose()?;
        let axis = Axis::from_index(config.axis)?;
        Ok(Self::new(depth, axis).report_masks(config.report_masks))
    }

    /// Validate configuration, then load and transform the configured input
    pub fn run_config(config: &PipelineConfig) -> Result<SortResult, PipelineError> {
        Self::from_config(config)?.load_and_run(&config.input)
    }

    /// Load an image file and run the transforms on it
    pub fn load_and_run(&self, path: &Path) -> Result<SortResult, PipelineError> {
        let image = load_image(path)?;
        Ok(self.run(&image))
    }

    /// Run the transforms on an already loaded image
    pub fn run(&self, image: &Image<u8>) -> SortResult {
        let widened = match self.depth {
            Some(depth) => {
                let quantized = quantize(image, depth);
                tracing::debug!(depth = depth.get(), "Quantized image");
                quantized
            }
            None => image.mapv(i32::from),
        };

        let sorted = sort_image(&widened, Some(self.axis));
        tracing::debug!(axis = self.axis.index(), "Sorted image");

        let mask_count = self.report_masks.then(|| get_masks(&sorted).len());

        SortResult {
            image: sorted,
            mask_count,
        }
    }
}
