//! Hexagonal mosaic rendering from raster images
//!
//! The pipeline samples the average color of a source image under a flat-top
//! hexagonal grid and emits the result as a scalable vector document, with
//! optional re-rasterization and post-processing of the raster.

#![forbid(unsafe_code)]

/// Pure vertex computation for hexagons, half-hexagons and rectangles
pub mod geometry;
/// Hexagonal grid planning over a rectangular image plane
pub mod grid;
/// Input/output operations and error handling
pub mod io;
/// Sequential mosaic pipeline orchestration
pub mod pipeline;
/// Vector document assembly
pub mod render;
/// Mean-color sampling over image regions
pub mod sampling;

pub use io::error::{MosaicError, Result};
