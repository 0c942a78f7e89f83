//! Image file decoding into RGB pixel arrays.
//!
//! The container format is detected from the file contents, so PNG, JPEG,
//! BMP, TIFF, WebP and the other formats the `image` crate decodes all load
//! the same way. Every layout ends up as 8-bit RGB: alpha is dropped, gray is
//! replicated into three channels, 16-bit samples are scaled to 8 bits.

use std::io::{BufRead, Seek};
use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use pixel_transform::{from_rgb_samples, Image};

use crate::error::LoadError;

/// Read an image file into an RGB array of shape `(height, width, 3)`.
pub fn load_image(path: &Path) -> Result<Image<u8>, LoadError> {
    let reader = ImageReader::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let image = decode_reader(reader, path)?;
    let (height, width, _) = image.dim();
    tracing::debug!(path = %path.display(), width, height, "Loaded image");
    Ok(image)
}

/// Decode in-memory image data into an RGB array. `path` is only used for
/// error reports.
pub fn decode_image<R: BufRead + Seek>(reader: R, path: &Path) -> Result<Image<u8>, LoadError> {
    decode_reader(ImageReader::new(reader), path)
}

fn decode_reader<R: BufRead + Seek>(
    reader: ImageReader<R>,
    path: &Path,
) -> Result<Image<u8>, LoadError> {
    // content sniffing wins over the file extension
    let reader = reader.with_guessed_format().map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = reader.decode().map_err(|err| decode_error(err, path))?;
    to_rgb_image(decoded)
}

fn decode_error(err: ImageError, path: &Path) -> LoadError {
    match err {
        ImageError::IoError(source) => LoadError::Open {
            path: path.to_path_buf(),
            source,
        },
        source => LoadError::Decode {
            path: path.to_path_buf(),
            source,
        },
    }
}

fn to_rgb_image(decoded: DynamicImage) -> Result<Image<u8>, LoadError> {
    let rgb = decoded.into_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(from_rgb_samples(
        height as usize,
        width as usize,
        rgb.into_raw(),
    )?)
}
