//! Append-only SVG document of filled polygons
//!
//! Coordinates are written with two decimal places, which round-trips
//! through vector rasterizers without visible distortion. Polygons carry a
//! flat `rgb()` fill and no stroke.

use crate::geometry::Point;
use crate::grid::Tile;
use image::Rgb;

/// An SVG document under construction
///
/// Polygons appear in insertion order, which the pipeline keeps equal to the
/// grid traversal order so output is reproducible byte for byte.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    body: String,
    polygons: usize,
}

impl SvgDocument {
    /// Start a document with a canvas of the given pixel dimensions
    ///
    /// The canvas is declared at the source image's dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            polygons: 0,
        }
    }

    /// Append one tile as a filled polygon
    pub fn push_tile(&mut self, tile: &Tile, fill: Rgb<u8>) {
        self.push_polygon(&tile.corners(), fill);
    }

    /// Append a filled polygon with the given vertices
    pub fn push_polygon(&mut self, points: &[Point], fill: Rgb<u8>) {
        let coordinates = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        let Rgb([r, g, b]) = fill;

        self.body
            .push_str(&format!("<polygon points=\"{coordinates}\" fill=\"rgb({r},{g},{b})\" />\n"));
        self.polygons += 1;
    }

    /// Number of polygons appended so far
    pub const fn polygon_count(&self) -> usize {
        self.polygons
    }

    /// Declared canvas dimensions in pixels
    pub const fn canvas(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Serialize the document, consuming the builder
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n{}</svg>",
            self.width, self.height, self.body
        )
    }
}
