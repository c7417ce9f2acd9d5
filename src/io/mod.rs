//! Input/output operations and error handling
//!
//! Everything outside the core tiling/sampling/rendering chain lives here:
//! command-line parsing, configuration defaults, the error type, image
//! loading and post-processing, vector-to-raster conversion, and progress
//! display.

/// Command-line interface and batch file processing
pub mod cli;
/// Defaults and fixed policy constants
pub mod configuration;
/// Error types for all pipeline operations
pub mod error;
/// Image loading, export and raster post-processing
pub mod image;
/// Progress display for batch runs
pub mod progress;
/// Vector-to-raster conversion
pub mod raster;
