//! Pools of tiles not yet placed in a search branch
//!
//! A pool is a membership bitset over a borrowed catalog. Removing a tile
//! produces a new pool, so sibling branches of the search never see each
//! other's tentative choices.

use crate::algorithm::bitset::TileBitset;
use crate::spatial::tiles::{Tile, TileCatalog};

/// Tiles still available in the current search branch
#[derive(Clone, Debug)]
pub struct TilePool<'a> {
    catalog: &'a TileCatalog,
    members: TileBitset,
}

impl<'a> TilePool<'a> {
    /// Pool containing every tile of the catalog
    pub fn full(catalog: &'a TileCatalog) -> Self {
        Self {
            catalog,
            members: TileBitset::all(catalog.len()),
        }
    }

    /// Pool containing only the given tiles
    pub fn from_tiles<'t>(catalog: &'a TileCatalog, tiles: impl IntoIterator<Item = &'t Tile>) -> Self {
        let mut members = TileBitset::new(catalog.len());
        for tile in tiles {
            members.insert(tile.index());
        }
        Self { catalog, members }
    }

    /// The catalog this pool draws from
    pub const fn catalog(&self) -> &'a TileCatalog {
        self.catalog
    }

    /// Number of sides of every tile in the pool
    pub const fn sides(&self) -> usize {
        self.catalog.sides()
    }

    /// Test if a tile is still available
    pub fn contains(&self, tile: &Tile) -> bool {
        self.members.contains(tile.index())
    }

    /// Number of available tiles
    pub fn len(&self) -> usize {
        self.members.count()
    }

    /// Test if every tile has been used
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// New pool without `tile`; this pool is left untouched
    #[must_use]
    pub fn without(&self, tile: &Tile) -> Self {
        Self {
            catalog: self.catalog,
            members: self.members.without(tile.index()),
        }
    }

    /// New pool without any of `tiles`
    #[must_use]
    pub fn without_all<'t>(&self, tiles: impl IntoIterator<Item = &'t Tile>) -> Self {
        let mut members = self.members.clone();
        for tile in tiles {
            members.remove(tile.index());
        }
        Self {
            catalog: self.catalog,
            members,
        }
    }

    /// Available tiles in catalog presentation order
    pub fn iter(&self) -> impl Iterator<Item = &'a Tile> + '_ {
        self.catalog
            .tiles()
            .iter()
            .filter(|tile| self.members.contains(tile.index()))
    }
}
