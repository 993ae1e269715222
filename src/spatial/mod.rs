//! Puzzle data model and grid geometry
//!
//! This module contains the spatial side of the solver:
//! - Edge symbols and their matching rule
//! - Tiles and the catalog that owns them
//! - Rotated placements and neighbor lookup
//! - Grid indexing and solution layout

/// Square grid indexing and solution views
pub mod grid;
/// Tiles turned to a fixed rotation
pub mod placement;
/// Edge symbols and the matching rule
pub mod symbol;
/// Tile definitions and catalogs
pub mod tiles;

pub use grid::SolutionGrid;
pub use placement::PlacedTile;
pub use tiles::{Tile, TileCatalog};
