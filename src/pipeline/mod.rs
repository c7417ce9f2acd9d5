//! Sequential mosaic pipeline
//!
//! A strict one-way pass: image load → grid enumeration → per-tile sampling
//! → document assembly → optional rasterization → optional raster
//! post-processing. Configuration is passed explicitly; there is no global
//! state.

/// Pipeline configuration, orchestration and artifact writing
pub mod executor;

pub use executor::{MosaicPipeline, OutputPaths, PipelineConfig, PipelineSummary, build_document};
