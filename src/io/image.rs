//! Image loading, artifact writing and raster post-processing

use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use image::imageops;
use std::path::Path;

/// Normalized 3×3 sharpening kernel applied after cropping (center-weighted,
/// sums to one so overall brightness is preserved)
const SHARPEN_KERNEL: [f32; 9] = [
    -0.125, -0.125, -0.125, -0.125, 2.0, -0.125, -0.125, -0.125, -0.125,
];

/// Load a raster image from disk as RGB
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or not a decodable
/// image format.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Write a textual artifact to disk, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if directory creation or the write itself fails.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(path, contents).map_err(|e| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "write artifact",
        source: e,
    })
}

/// Crop the bottom margin off a raster and sharpen the result
///
/// Trims `crop_margin` pixel rows from the bottom edge (keeping at least one
/// row), applies the sharpening kernel, and writes the derivative to
/// `output`.
///
/// # Errors
///
/// Returns an error if the input raster cannot be loaded or the derivative
/// cannot be saved.
pub fn crop_and_sharpen(input: &Path, output: &Path, crop_margin: u32) -> Result<()> {
    let img = load_image(input)?;
    let (width, height) = img.dimensions();
    let kept_rows = height.saturating_sub(crop_margin).max(1);

    let cropped = imageops::crop_imm(&img, 0, 0, width, kept_rows).to_image();
    let sharpened = imageops::filter3x3(&cropped, &SHARPEN_KERNEL);

    sharpened.save(output).map_err(|e| MosaicError::ImageExport {
        path: output.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
