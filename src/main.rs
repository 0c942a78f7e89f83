use anyhow::Context as _;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixsort::models::{ConfigOverrides, PipelineConfig};
use pixsort::rendering;
use pixsort::services::SortPipeline;

#[derive(Parser)]
#[command(name = "pixsort")]
#[command(about = "Sort the pixels of an image along one axis and display the result")]
struct Cli {
    /// Image to load (default: lena.png)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Quantization depth in 1..=256 (default: no quantization)
    #[arg(short, long)]
    depth: Option<i64>,

    /// Sort axis: 0 height, 1 width, 2 channel; negative counts from the end (default: 0)
    #[arg(short, long, allow_negative_numbers = true)]
    axis: Option<isize>,

    /// Log the number of distinct sample values
    #[arg(long)]
    masks: bool,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Viewer width in pixels (default: 1200)
    #[arg(long)]
    width: Option<u32>,

    /// Viewer height in pixels (default: 800)
    #[arg(long)]
    height: Option<u32>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            input: self.input.clone(),
            depth: self.depth,
            axis: self.axis,
            width: self.width,
            height: self.height,
            report_masks: self.masks,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixsort=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let mut config = match &cli.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    config.apply(cli.overrides())?;

    let result = SortPipeline::run_config(&config)
        .with_context(|| format!("Failed to process {}", config.input.display()))?;

    let (height, width, _) = result.image.dim();
    tracing::info!(
        input = %config.input.display(),
        width,
        height,
        depth = ?config.depth,
        axis = config.axis,
        "Sorted image"
    );
    if let Some(count) = result.mask_count {
        tracing::info!(count, "Distinct sample values");
    }

    rendering::show_image(&result.image, config.display).context("Image viewer failed")?;
    Ok(())
}
