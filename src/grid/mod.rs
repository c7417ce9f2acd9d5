//! Hexagonal grid planning
//!
//! This module contains the tiling layer of the pipeline:
//! - Enumeration of tile anchors covering a rectangular image plane
//! - Tile descriptors carrying shape, anchor and size
//! - Derivation of each tile's color sample region

/// Lattice enumeration over the image plane
pub mod planner;
/// Tile descriptors and sample-region derivation
pub mod tiles;

pub use planner::HexGrid;
pub use tiles::{Tile, TileKind};
