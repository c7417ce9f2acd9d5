//! Color sampling over the source image
//!
//! The sampler reduces a rectangular pixel region to its arithmetic mean
//! color. Out-of-range regions are clamped rather than rejected, so the
//! sampler is total over all integer coordinates.

/// Mean color computation with clamping and fallback
pub mod average;

pub use average::average_color;
