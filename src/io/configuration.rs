//! Pipeline constants and runtime configuration defaults

use image::Rgb;

/// Default hexagon center-to-corner radius in pixels
pub const DEFAULT_TILE_SIZE: f64 = 7.5;

/// Default number of pixel rows trimmed from the bottom of the finished
/// raster, hiding the half-hexagon seam
pub const DEFAULT_CROP_MARGIN: u32 = 10;

/// Fill color for tiles whose sample region contains no valid pixels
pub const FALLBACK_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Suffix added to derived output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";

/// Raster file extensions accepted when scanning a directory target
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

/// Threshold for switching the progress display to batch mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
