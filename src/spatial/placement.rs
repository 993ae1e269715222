//! Tiles with a fixed rotation, as they sit in a candidate or solved grid
//!
//! Turning a tile by `r` steps makes side `s` show the edge that was at raw
//! position `s + r`. Neighbor lookup inverts that relation: a raw edge at
//! position `e` lands on side `m` when the rotation is `e - m`.

use crate::algorithm::pool::TilePool;
use crate::spatial::symbol::EdgeSymbol;
use crate::spatial::tiles::Tile;
use std::hash::{Hash, Hasher};

/// A catalog tile turned by a whole number of side steps
///
/// Equality and hashing use the tile's id and the rotation only.
#[derive(Debug, Clone, Copy)]
pub struct PlacedTile<'a> {
    tile: &'a Tile,
    rotation: usize,
}

/// Display data for a placed tile, formatted by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileLabel {
    /// One-based tile id
    pub tile_id: usize,
    /// Rotation in side steps
    pub rotation: usize,
    /// Rotation in degrees, clockwise
    pub degrees: usize,
}

impl<'a> PlacedTile<'a> {
    /// Place `tile` turned by `rotation` steps, normalized modulo its side count
    pub fn new(tile: &'a Tile, rotation: usize) -> Self {
        Self {
            tile,
            rotation: rotation % tile.sides(),
        }
    }

    /// The underlying catalog tile
    pub const fn tile(&self) -> &'a Tile {
        self.tile
    }

    /// Rotation in side steps, always below the side count
    pub const fn rotation(&self) -> usize {
        self.rotation
    }

    /// Number of sides of the underlying tile
    pub fn sides(&self) -> usize {
        self.tile.sides()
    }

    /// Edge currently facing `side`
    pub fn edge_at(&self, side: usize) -> &'a EdgeSymbol {
        self.tile.edge_at(side, self.rotation)
    }

    /// Edges in clockwise order from the top, after rotation
    pub fn rotated_edges(&self) -> impl Iterator<Item = &'a EdgeSymbol> + use<'a> {
        let placed = *self;
        (0..placed.sides()).map(move |side| placed.edge_at(side))
    }

    /// Rotation in degrees, one full turn split evenly across the sides
    pub fn degrees(&self) -> usize {
        self.rotation * 360 / self.sides()
    }

    /// Identity and rotation data for renderers
    pub fn label(&self) -> TileLabel {
        TileLabel {
            tile_id: self.tile.id(),
            rotation: self.rotation,
            degrees: self.degrees(),
        }
    }

    /// Placements from `pool` that can sit against this tile's `side`
    ///
    /// The neighbor must show the complementary half on the side facing back,
    /// `side + N/2`. Every raw edge of a pool tile that matches yields the one
    /// rotation bringing that edge onto the facing side, so a tile can appear
    /// several times with different rotations. Order follows the pool, then
    /// ascending raw edge position.
    pub fn find_valid_neighbors<'p>(
        self,
        side: usize,
        pool: &'p TilePool<'a>,
    ) -> impl Iterator<Item = PlacedTile<'a>> + use<'a, 'p> {
        let sides = self.sides();
        let wanted = self.edge_at(side);
        let match_side = (side + sides / 2) % sides;

        pool.iter().flat_map(move |tile| {
            tile.edges()
                .iter()
                .enumerate()
                .filter(move |(_, edge)| edge.matches(wanted))
                .map(move |(raw_side, _)| Self::new(tile, raw_side + sides - match_side))
        })
    }
}

impl PartialEq for PlacedTile<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.tile.id() == other.tile.id() && self.rotation == other.rotation
    }
}

impl Eq for PlacedTile<'_> {}

impl Hash for PlacedTile<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tile.id().hash(state);
        self.rotation.hash(state);
    }
}
