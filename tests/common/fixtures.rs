//! Test fixtures: sample images and image file writers.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Interleaved RGB samples of the 2x2 example image
pub const EXAMPLE_RGB: [u8; 12] = [10, 200, 10, 50, 50, 50, 10, 10, 10, 200, 10, 10];

/// Encode an 8-bit PNG into `dir/name` and return its path
pub fn write_png(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    color_type: png::ColorType,
    data: &[u8],
) -> PathBuf {
    write_png_with(dir, name, width, height, color_type, png::BitDepth::Eight, None, data)
}

/// Encode a PNG with explicit bit depth and optional palette
#[allow(clippy::too_many_arguments)]
pub fn write_png_with(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    palette: Option<Vec<u8>>,
    data: &[u8],
) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("create fixture file");
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(color_type);
    encoder.set_depth(bit_depth);
    if let Some(palette) = palette {
        encoder.set_palette(palette);
    }
    let mut writer = encoder.write_header().expect("write PNG header");
    writer.write_image_data(data).expect("write PNG data");
    writer.finish().expect("finish PNG");
    path
}

/// Write the 2x2 example image as an RGB PNG
pub fn example_png(dir: &Path) -> PathBuf {
    write_png(dir, "example.png", 2, 2, png::ColorType::Rgb, &EXAMPLE_RGB)
}

/// Encode RGB samples into `dir/name`, format chosen by the extension
pub fn write_encoded(dir: &Path, name: &str, width: u32, height: u32, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::from_raw(width, height, data.to_vec())
        .expect("sample count matches dimensions")
        .save(&path)
        .expect("encode fixture");
    path
}
