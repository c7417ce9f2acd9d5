//! Validates lattice enumeration, traversal order and coverage guarantees

use hexmosaic::geometry::Point;
use hexmosaic::grid::{HexGrid, Tile, TileKind};
use std::collections::HashSet;

#[test]
fn test_rejects_invalid_sizes() {
    for bad_size in [0.0, -1.0, f64::NAN, f64::INFINITY, 0.5] {
        assert!(HexGrid::new(100, 100, bad_size).is_err());
    }
}

#[test]
fn test_accepts_fractional_sizes() {
    assert!(HexGrid::new(100, 100, 7.5).is_ok());
    assert!(HexGrid::new(100, 100, 1.0).is_ok());
}

#[test]
fn test_emits_at_least_one_tile() -> hexmosaic::Result<()> {
    let grid = HexGrid::new(1, 1, 7.5)?;
    assert!(grid.tile_count() >= 1);
    Ok(())
}

#[test]
fn test_traversal_starts_outside_top_left() -> hexmosaic::Result<()> {
    let grid = HexGrid::new(40, 30, 7.5)?;
    let Some(first) = grid.tiles().next() else {
        unreachable!("grid always emits tiles")
    };

    // Steps truncate to 11 horizontally and 12 vertically for size 7.5.
    // The leading column has odd parity, so it carries the row offset.
    assert_eq!(first.kind, TileKind::Full);
    assert_eq!(first.anchor, Point::new(-11.0, -12.0 + 0.75 * 7.5));
    Ok(())
}

#[test]
fn test_odd_columns_are_shifted() -> hexmosaic::Result<()> {
    let grid = HexGrid::new(60, 40, 7.5)?;
    let shift = 0.75 * 7.5;

    // Rows sit at multiples of the truncated vertical step (12 for size
    // 7.5); odd columns are displaced by exactly 0.75 * size from them.
    for tile in grid.tiles().filter(|t| t.kind == TileKind::Full) {
        let column_index = (tile.anchor.x as i64).div_euclid(11);
        let expected_shift = if column_index.rem_euclid(2) == 1 { shift } else { 0.0 };
        let base_row = (tile.anchor.y - expected_shift) / 12.0;
        assert!((base_row - base_row.round()).abs() < 1e-9);
    }
    Ok(())
}

#[test]
fn test_row_major_traversal_order() -> hexmosaic::Result<()> {
    let grid = HexGrid::new(40, 30, 7.5)?;
    let full_tiles: Vec<Tile> = grid.tiles().filter(|t| t.kind == TileKind::Full).collect();

    // Within a row the x coordinate strictly increases; across rows the
    // unshifted base y never decreases.
    let mut previous_x = f64::NEG_INFINITY;
    let mut previous_base_y = f64::NEG_INFINITY;
    for tile in &full_tiles {
        let base_y = if (tile.anchor.x as i64).div_euclid(11).rem_euclid(2) == 1 {
            tile.anchor.y - 0.75 * 7.5
        } else {
            tile.anchor.y
        };

        if (base_y - previous_base_y).abs() < 1e-9 {
            assert!(tile.anchor.x > previous_x);
        } else {
            assert!(base_y > previous_base_y);
        }
        previous_x = tile.anchor.x;
        previous_base_y = base_y;
    }
    Ok(())
}

#[test]
fn test_bottom_boundary_half_tiles() -> hexmosaic::Result<()> {
    let grid = HexGrid::new(40, 30, 7.5)?;
    let half_tiles: Vec<Tile> = grid
        .tiles()
        .filter(|t| t.kind == TileKind::HalfBottom)
        .collect();

    assert!(!half_tiles.is_empty());
    for (index, tile) in half_tiles.iter().enumerate() {
        assert!((tile.anchor.y - 30.0).abs() < 1e-9);
        assert!((tile.anchor.x - 11.0 * index as f64).abs() < 1e-9);
        assert!(tile.anchor.x < 40.0);
    }
    Ok(())
}

#[test]
fn test_half_tiles_follow_all_full_tiles() -> hexmosaic::Result<()> {
    let grid = HexGrid::new(40, 30, 7.5)?;
    let mut seen_half = false;

    for tile in grid.tiles() {
        match tile.kind {
            TileKind::Full => assert!(!seen_half),
            TileKind::HalfBottom => seen_half = true,
        }
    }
    assert!(seen_half);
    Ok(())
}

#[test]
fn test_sample_regions_cover_every_pixel() -> hexmosaic::Result<()> {
    let width = 40_i64;
    let height = 30_i64;
    let grid = HexGrid::new(40, 30, 7.5)?;

    let mut uncovered: HashSet<(i64, i64)> = (0..width)
        .flat_map(|x| (0..height).map(move |y| (x, y)))
        .collect();

    for tile in grid.tiles() {
        let (x0, y0, x1, y1) = tile.sample_region();
        for x in x0.clamp(0, width)..x1.clamp(0, width) {
            for y in y0.clamp(0, height)..y1.clamp(0, height) {
                uncovered.remove(&(x, y));
            }
        }
    }

    assert!(uncovered.is_empty());
    Ok(())
}

#[test]
fn test_iteration_is_restartable_and_deterministic() -> hexmosaic::Result<()> {
    let grid = HexGrid::new(64, 48, 10.0)?;
    let first_pass: Vec<Tile> = grid.tiles().collect();
    let second_pass: Vec<Tile> = grid.tiles().collect();

    assert_eq!(first_pass, second_pass);
    assert_eq!(first_pass.len(), grid.tile_count());
    Ok(())
}
