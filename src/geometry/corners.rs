//! Vertex coordinates for hexagons, half-hexagons and sampling rectangles
//!
//! The mosaic uses flat-top hexagons: vertex `i` sits at angle `60°·i` from
//! the center at distance `size`, so the leftmost and rightmost vertices lie
//! on the horizontal axis through the center.

/// Square root of three, the aspect constant of flat-top hexagon geometry
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A point in image space
///
/// Coordinates follow the raster convention: `x` grows rightward and `y`
/// grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate in pixels
    pub x: f64,
    /// Vertical coordinate in pixels
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Corners of a flat-top hexagon inscribed in a circle of radius `size`
///
/// Vertices are emitted in a fixed rotational order starting at the
/// right-middle vertex, which keeps polygon output deterministic and
/// non-self-intersecting.
pub fn hexagon_corners(center: Point, size: f64) -> [Point; 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f64).to_radians();
        Point::new(
            size.mul_add(angle.cos(), center.x),
            size.mul_add(angle.sin(), center.y),
        )
    })
}

/// Corners of an axis-aligned rectangle centered on `center`
///
/// Used only as the bounding-box approximation of a hexagon when deriving
/// its color sample region.
pub const fn rectangle_corners(center: Point, width: f64, height: f64) -> [Point; 4] {
    let half_w = width / 2.0;
    let half_h = height / 2.0;

    [
        Point::new(center.x - half_w, center.y - half_h),
        Point::new(center.x + half_w, center.y - half_h),
        Point::new(center.x + half_w, center.y + half_h),
        Point::new(center.x - half_w, center.y + half_h),
    ]
}

/// Corners of the triangular half-hexagon patch closing the bottom edge
///
/// The patch is anchored at its bottom-left vertex and spans two sizes
/// horizontally with its apex one half-height below the anchor row.
pub const fn half_hexagon_corners(anchor: Point, size: f64) -> [Point; 3] {
    let rise = size * SQRT_3 / 2.0;

    [
        anchor,
        Point::new(anchor.x + size, anchor.y + rise),
        Point::new(anchor.x + 2.0 * size, anchor.y),
    ]
}
