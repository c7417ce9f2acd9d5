//! Tile descriptors for the mosaic
//!
//! A tile is one polygon of the output: either a full flat-top hexagon or a
//! triangular half-hexagon patch along the bottom image edge. Tiles are
//! produced lazily by the planner and immediately serialized, so no tile
//! collection is ever held in memory.

use crate::geometry::{Point, SQRT_3, half_hexagon_corners, hexagon_corners, rectangle_corners};

/// Shape of a single mosaic tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// Regular flat-top hexagon anchored at its center
    Full,
    /// Half-hexagon closing the bottom boundary, anchored at its bottom-left
    /// vertex on the `y = height` edge
    HalfBottom,
}

/// One tile of the mosaic prior to color sampling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// Shape of this tile
    pub kind: TileKind,
    /// Anchor point (center for full hexagons, bottom-left vertex for
    /// half-hexagons)
    pub anchor: Point,
    /// Center-to-corner radius of the hexagon
    pub size: f64,
}

impl Tile {
    /// Polygon vertices of this tile in rendering order
    pub fn corners(&self) -> Vec<Point> {
        match self.kind {
            TileKind::Full => hexagon_corners(self.anchor, self.size).to_vec(),
            TileKind::HalfBottom => half_hexagon_corners(self.anchor, self.size).to_vec(),
        }
    }

    /// Pixel rectangle whose mean color fills this tile
    ///
    /// Returns `(x0, y0, x1, y1)` bounds of a half-open rectangle in image
    /// coordinates, floored to integers. Full hexagons sample their bounding
    /// rectangle; half-hexagons sample the strip directly above their base
    /// edge. Bounds may extend past the image; the sampler clamps them.
    pub fn sample_region(&self) -> (i64, i64, i64, i64) {
        let half_height = self.size * SQRT_3 / 2.0;
        let Point { x, y } = self.anchor;

        match self.kind {
            TileKind::Full => {
                let [top_left, _, bottom_right, _] =
                    rectangle_corners(self.anchor, 2.0 * self.size, SQRT_3 * self.size);
                (
                    top_left.x.floor() as i64,
                    top_left.y.floor() as i64,
                    bottom_right.x.floor() as i64,
                    bottom_right.y.floor() as i64,
                )
            }
            TileKind::HalfBottom => (
                x.floor() as i64,
                (y - half_height).floor() as i64,
                self.size.mul_add(2.0, x).floor() as i64,
                y.floor() as i64,
            ),
        }
    }
}
