//! Vector-to-raster conversion via resvg

use crate::io::error::{MosaicError, Result};
use resvg::usvg;
use std::path::Path;
use tiny_skia::Pixmap;

/// Rasterize an SVG document string to a PNG file at the given dimensions
///
/// The pixmap is cleared to white before rendering so transparent areas of
/// the vector document match the mosaic's fallback color.
///
/// # Errors
///
/// Returns an error if the document fails to parse, the pixmap cannot be
/// allocated, or the PNG cannot be encoded and written.
pub fn rasterize_to_png(svg: &str, width: u32, height: u32, path: &Path) -> Result<()> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| MosaicError::Rasterize {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| MosaicError::Rasterize {
        path: path.to_path_buf(),
        reason: format!("could not allocate a {width}x{height} pixmap"),
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap.save_png(path).map_err(|e| MosaicError::Rasterize {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(())
}
