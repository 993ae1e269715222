//! Tile definitions and the catalog that owns them
//!
//! A tile is an ordered ring of edge symbols, listed clockwise from the top.
//! The catalog assigns each tile a stable index in input order and checks that
//! every tile has the same number of sides. Tiles are never modified after the
//! catalog is built; placements borrow them.

use crate::algorithm::bitset::TileBitset;
use crate::algorithm::pool::TilePool;
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::spatial::symbol::{EdgeSymbol, SymbolKind};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// A physical tile: an index and its edges in clockwise order from the top
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    index: usize,
    edges: Vec<EdgeSymbol>,
}

impl Tile {
    /// Create a tile from already parsed edges
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::DegenerateTile` if `edges` is empty
    pub fn new(index: usize, edges: Vec<EdgeSymbol>) -> Result<Self> {
        if edges.is_empty() {
            return Err(PuzzleError::DegenerateTile { tile: index + 1 });
        }
        Ok(Self { index, edges })
    }

    /// Create a tile from raw `kind_half` tokens
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::MalformedSymbol` for the first unparsable token,
    /// or `PuzzleError::DegenerateTile` if there are no tokens
    pub fn parse<S: AsRef<str>>(index: usize, tokens: impl IntoIterator<Item = S>) -> Result<Self> {
        let edges = tokens
            .into_iter()
            .map(|token| EdgeSymbol::parse(token.as_ref().trim()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(index, edges)
    }

    /// Zero-based position in the original catalog input
    pub const fn index(&self) -> usize {
        self.index
    }

    /// One-based identity shown to users
    pub const fn id(&self) -> usize {
        self.index + 1
    }

    /// Edges in clockwise order from the top, unrotated
    pub fn edges(&self) -> &[EdgeSymbol] {
        &self.edges
    }

    /// Number of sides
    pub fn sides(&self) -> usize {
        self.edges.len()
    }

    /// Edge shown at `side` when the tile is turned by `rotation` steps
    // Edges are non-empty by construction and the index is reduced modulo their count
    #[allow(clippy::indexing_slicing)]
    pub fn edge_at(&self, side: usize, rotation: usize) -> &EdgeSymbol {
        &self.edges[(side + rotation) % self.edges.len()]
    }
}

/// The full set of tiles for one puzzle
///
/// Tiles keep the index they were given at construction even if the catalog
/// is later reordered, so ids stay stable across shuffles.
#[derive(Debug, Clone)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
    sides: usize,
}

impl TileCatalog {
    /// Build a catalog from already constructed tiles
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::MismatchedSides` if the tiles do not all have the
    /// same number of sides, or `PuzzleError::InvalidParameter` if the tile
    /// indices are not exactly `0..tiles.len()` in some order
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        let sides = tiles.first().map_or(0, Tile::sides);

        if let Some(odd) = tiles.iter().find(|tile| tile.sides() != sides) {
            return Err(PuzzleError::MismatchedSides {
                tile: odd.id(),
                expected: sides,
                found: odd.sides(),
            });
        }

        let mut seen = TileBitset::new(tiles.len());
        for tile in &tiles {
            if tile.index() >= tiles.len() || seen.contains(tile.index()) {
                return Err(invalid_parameter(
                    "tile index",
                    &tile.index(),
                    &"indices must be unique and below the tile count",
                ));
            }
            seen.insert(tile.index());
        }

        Ok(Self { tiles, sides })
    }

    /// Build a catalog from per-tile lists of raw edge tokens
    ///
    /// Indices are assigned by input order, so the first list becomes tile 1.
    ///
    /// # Errors
    ///
    /// Returns the first `MalformedSymbol`, `DegenerateTile` or
    /// `MismatchedSides` error encountered
    pub fn from_tokens<T, S>(tiles: impl IntoIterator<Item = T>) -> Result<Self>
    where
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tiles = tiles
            .into_iter()
            .enumerate()
            .map(|(index, tokens)| Tile::parse(index, tokens))
            .collect::<Result<Vec<_>>>()?;
        Self::new(tiles)
    }

    /// Tiles in presentation order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Test if the catalog holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of sides shared by every tile (0 for an empty catalog)
    pub const fn sides(&self) -> usize {
        self.sides
    }

    /// Look up a tile by its one-based display id
    pub fn tile(&self, id: usize) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id() == id)
    }

    /// Pool holding every tile of the catalog
    pub fn pool(&self) -> TilePool<'_> {
        TilePool::full(self)
    }

    /// Distinct symbol kinds in order of first appearance
    pub fn kinds(&self) -> Vec<&SymbolKind> {
        let mut seen = HashSet::new();
        self.tiles
            .iter()
            .flat_map(|tile| tile.edges().iter().map(EdgeSymbol::kind))
            .filter(|kind| seen.insert(*kind))
            .collect()
    }

    /// Copy of this catalog presented in a random order
    ///
    /// Tile ids are preserved; only iteration order changes, which changes the
    /// order in which the search discovers solutions.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.shuffle(rng);
        Self {
            tiles,
            sides: self.sides,
        }
    }
}
