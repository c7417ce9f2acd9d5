//! Vector output assembly
//!
//! Tiles are serialized one at a time into an append-only SVG document; the
//! document is immutable once finished. A small HTML wrapper is available
//! for previewing the vector artifact in a browser.

/// HTML preview page embedding the vector document
pub mod preview;
/// SVG polygon document construction
pub mod svg;

pub use svg::SvgDocument;
