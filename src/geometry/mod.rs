//! Pure geometry for mosaic tile shapes
//!
//! All functions here are total: they perform plain arithmetic on real-valued
//! coordinates and never fail. Shape validity (positive, finite sizes) is the
//! caller's responsibility and is enforced at the grid planning layer.

/// Corner computation for the tile shapes used by the mosaic
pub mod corners;

pub use corners::{Point, SQRT_3, half_hexagon_corners, hexagon_corners, rectangle_corners};
