//! Pipeline orchestration from source image to output artifacts

use crate::grid::HexGrid;
use crate::io::configuration::{DEFAULT_CROP_MARGIN, DEFAULT_TILE_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{crop_and_sharpen, load_image, write_text};
use crate::io::raster::rasterize_to_png;
use crate::render::SvgDocument;
use crate::render::preview::html_preview;
use crate::sampling::average_color;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Tunable parameters of a mosaic run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Hexagon center-to-corner radius in pixels
    pub tile_size: f64,
    /// Pixel rows trimmed from the bottom of the finished raster
    pub crop_margin: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            crop_margin: DEFAULT_CROP_MARGIN,
        }
    }
}

/// Destination paths for the artifacts of one run
///
/// The vector document is always produced; the remaining artifacts are
/// produced only when a path is given. The cropped derivative requires the
/// raster it is derived from.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// Vector document (SVG) destination
    pub vector: PathBuf,
    /// Optional rasterized PNG destination
    pub raster: Option<PathBuf>,
    /// Optional cropped-and-sharpened PNG destination
    pub cropped: Option<PathBuf>,
    /// Optional HTML preview page destination
    pub preview: Option<PathBuf>,
}

/// Outcome of a completed pipeline run
#[derive(Debug, Clone, Copy)]
pub struct PipelineSummary {
    /// Number of tiles rendered into the vector document
    pub tile_count: usize,
    /// Canvas dimensions of the vector document in pixels
    pub canvas: (u32, u32),
}

/// Build the vector document for an image: the core tiling/sampling chain
///
/// Tiles are enumerated lazily in traversal order and serialized as soon as
/// their fill color is known, so only one tile is held at a time.
///
/// # Errors
///
/// Returns an error if `tile_size` fails grid validation.
pub fn build_document(image: &RgbImage, tile_size: f64) -> Result<SvgDocument> {
    let (width, height) = image.dimensions();
    let grid = HexGrid::new(width, height, tile_size)?;
    let mut document = SvgDocument::new(width, height);

    for tile in grid.tiles() {
        let (x0, y0, x1, y1) = tile.sample_region();
        let fill = average_color(image, x0, y0, x1, y1);
        document.push_tile(&tile, fill);
    }

    Ok(document)
}

/// One-shot mosaic pipeline with validated configuration
#[derive(Debug, Clone)]
pub struct MosaicPipeline {
    config: PipelineConfig,
}

impl MosaicPipeline {
    /// Create a pipeline, validating the configuration up front
    ///
    /// # Errors
    ///
    /// Returns an error if the tile size is not a positive finite number.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        if !config.tile_size.is_finite() || config.tile_size <= 0.0 {
            return Err(invalid_parameter(
                "tile_size",
                &config.tile_size,
                &"tile size must be a positive finite number",
            ));
        }

        Ok(Self { config })
    }

    /// Run the full pipeline for one input image
    ///
    /// The vector document is written before any downstream conversion, so a
    /// rasterization failure never loses the primary artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be loaded, the grid rejects the
    /// tile size, or any artifact cannot be written.
    pub fn process(&self, input: &Path, outputs: &OutputPaths) -> Result<PipelineSummary> {
        let image = load_image(input)?;
        let (width, height) = image.dimensions();

        let document = build_document(&image, self.config.tile_size)?;
        let tile_count = document.polygon_count();
        let svg = document.finish();

        write_text(&outputs.vector, &svg)?;

        if let Some(preview_path) = &outputs.preview {
            let svg_file_name = outputs
                .vector
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();
            write_text(preview_path, &html_preview(&svg_file_name))?;
        }

        if let Some(raster_path) = &outputs.raster {
            rasterize_to_png(&svg, width, height, raster_path)?;

            if let Some(cropped_path) = &outputs.cropped {
                crop_and_sharpen(raster_path, cropped_path, self.config.crop_margin)?;
            }
        }

        Ok(PipelineSummary {
            tile_count,
            canvas: (width, height),
        })
    }
}
