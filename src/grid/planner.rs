//! Lattice enumeration covering a rectangular image with hexagonal tiles
//!
//! The planner walks a brick-offset lattice: columns advance by `1.5·size`,
//! rows by `√3·size`, and every odd-indexed column is shifted down by
//! `0.75·size` so the hexagons interlock. The lattice starts one step
//! outside the top-left corner and ends one step past the bottom-right one,
//! which guarantees edge coverage despite integer step truncation. A row of
//! half-hexagons along `y = height` closes the bottom boundary.

use crate::geometry::{Point, SQRT_3};
use crate::grid::tiles::{Tile, TileKind};
use crate::io::error::{Result, invalid_parameter};

/// Horizontal advance between columns, as a multiple of the hexagon size
pub const HORIZONTAL_STEP_FACTOR: f64 = 1.5;

/// Vertical displacement of odd columns, as a multiple of the hexagon size
pub const ROW_OFFSET_FACTOR: f64 = 0.75;

/// Planner for a hexagonal grid covering an image of fixed dimensions
#[derive(Debug, Clone)]
pub struct HexGrid {
    width: u32,
    height: u32,
    size: f64,
    horizontal_step: i64,
    vertical_step: i64,
}

impl HexGrid {
    /// Create a planner for an image of `width × height` pixels tiled with
    /// hexagons of the given center-to-corner radius
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is not a positive finite number, or is so
    /// small that an integer-truncated grid step would collapse to zero.
    pub fn new(width: u32, height: u32, size: f64) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(invalid_parameter(
                "size",
                &size,
                &"hexagon size must be a positive finite number",
            ));
        }

        let horizontal_step = (HORIZONTAL_STEP_FACTOR * size) as i64;
        let vertical_step = (SQRT_3 * size) as i64;
        if horizontal_step < 1 || vertical_step < 1 {
            return Err(invalid_parameter(
                "size",
                &size,
                &"hexagon size truncates to a zero-length grid step",
            ));
        }

        Ok(Self {
            width,
            height,
            size,
            horizontal_step,
            vertical_step,
        })
    }

    /// Image width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Hexagon center-to-corner radius
    pub const fn size(&self) -> f64 {
        self.size
    }

    /// Lazily enumerate every tile of the mosaic in traversal order
    ///
    /// Traversal is row-major over the main lattice (all columns of a row
    /// before the next row), followed by the bottom half-hexagon row, so the
    /// sequence is deterministic for fixed inputs. The iterator is finite
    /// and restartable.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + use<> {
        let size = self.size;
        let horizontal_step = self.horizontal_step;
        let vertical_step = self.vertical_step;
        let width = i64::from(self.width);
        let height = i64::from(self.height);

        let lattice = (-vertical_step..height + vertical_step)
            .step_by(vertical_step as usize)
            .flat_map(move |row| {
                (-horizontal_step..width + horizontal_step)
                    .step_by(horizontal_step as usize)
                    .map(move |col| {
                        // Floor-division column parity keeps the leading
                        // (negative) column aligned with the offset pattern.
                        let odd_column = col.div_euclid(horizontal_step).rem_euclid(2) == 1;
                        let shift = if odd_column { ROW_OFFSET_FACTOR * size } else { 0.0 };

                        Tile {
                            kind: TileKind::Full,
                            anchor: Point::new(col as f64, row as f64 + shift),
                            size,
                        }
                    })
            });

        let boundary = (0..width).step_by(horizontal_step as usize).map(move |col| Tile {
            kind: TileKind::HalfBottom,
            anchor: Point::new(col as f64, height as f64),
            size,
        });

        lattice.chain(boundary)
    }

    /// Total number of tiles the planner will emit
    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }
}
