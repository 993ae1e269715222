//! Tile catalog sources: the built-in deck, catalog files and placement labels
//!
//! A catalog file lists one tile per line as edge tokens in clockwise order
//! from the top. Tokens are separated by whitespace or commas, and `#` starts
//! a comment:
//!
//! ```text
//! # dancer, hair, bug, flower
//! dancer_a, hair_a, bug_a, flower_b
//! bug_b dancer_a hair_b flower_b
//! ```

use crate::io::configuration::CATALOG_COMMENT;
use crate::io::error::{ErrorContext, PuzzleError, Result, WithContext, invalid_placement};
use crate::spatial::placement::PlacedTile;
use crate::spatial::tiles::{Tile, TileCatalog};
use std::path::Path;

/// The nine cards of the dancer/hair/bug/flower puzzle
pub const BUILTIN_TILES: [[&str; 4]; 9] = [
    ["dancer_a", "hair_a", "bug_a", "flower_b"],
    ["bug_b", "dancer_a", "hair_b", "flower_b"],
    ["dancer_a", "hair_a", "flower_a", "bug_a"],
    ["flower_b", "hair_a", "dancer_a", "bug_a"],
    ["hair_b", "dancer_a", "bug_b", "flower_a"],
    ["dancer_b", "hair_a", "bug_a", "dancer_a"],
    ["dancer_b", "bug_a", "bug_b", "flower_a"],
    ["hair_a", "bug_b", "flower_a", "hair_b"],
    ["flower_a", "dancer_b", "flower_a", "hair_b"],
];

/// Catalog of the built-in deck
///
/// # Errors
///
/// Never fails for the shipped deck; the signature matches other catalog
/// sources
pub fn builtin_catalog() -> Result<TileCatalog> {
    TileCatalog::from_tokens(BUILTIN_TILES)
}

/// Parse catalog text
///
/// Blank and comment-only lines are skipped; tile indices count tile lines only.
///
/// # Errors
///
/// Returns `PuzzleError::Catalog` carrying the line number of the first
/// malformed or degenerate tile, or wrapping a side count mismatch
pub fn parse_catalog(text: &str) -> Result<TileCatalog> {
    let mut tiles = Vec::new();

    for (line_index, raw_line) in text.lines().enumerate() {
        let content = raw_line
            .split_once(CATALOG_COMMENT)
            .map_or(raw_line, |(before, _)| before);

        let tokens: Vec<&str> = content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        if tokens.is_empty() {
            continue;
        }

        let tile = Tile::parse(tiles.len(), tokens).with_line(line_index + 1)?;
        tiles.push(tile);
    }

    TileCatalog::new(tiles).with_context(ErrorContext::default())
}

/// Read and parse a catalog file
///
/// # Errors
///
/// Returns `PuzzleError::FileSystem` if the file cannot be read, or a
/// `PuzzleError::Catalog` naming the file for content errors
pub fn load_catalog(path: &Path) -> Result<TileCatalog> {
    let text = std::fs::read_to_string(path).map_err(|e| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "read catalog",
        source: e,
    })?;

    parse_catalog(&text).with_context(ErrorContext {
        path: Some(path.to_path_buf()),
        line: None,
    })
}

/// Resolve a short label such as `3@90°` against a catalog
///
/// The degree sign is optional, and a bare id means no rotation. Angles must
/// be a whole number of side steps; full turns wrap around.
///
/// # Errors
///
/// Returns `PuzzleError::InvalidPlacement` if the id or angle is not a
/// number, no tile has that id, or the angle is not a rotation step
pub fn parse_placement<'a>(label: &str, catalog: &'a TileCatalog) -> Result<PlacedTile<'a>> {
    let trimmed = label.trim();
    let (id_text, degrees_text) = trimmed.split_once('@').unwrap_or((trimmed, "0"));

    let id: usize = id_text
        .trim()
        .parse()
        .map_err(|e| invalid_placement(label, &format!("tile id: {e}")))?;
    let degrees: usize = degrees_text
        .trim()
        .trim_end_matches('°')
        .parse()
        .map_err(|e| invalid_placement(label, &format!("angle: {e}")))?;

    let tile = catalog
        .tile(id)
        .ok_or_else(|| invalid_placement(label, &format!("no tile with id {id}")))?;

    let step = 360 / tile.sides();
    if step == 0 || degrees % step != 0 {
        return Err(invalid_placement(
            label,
            &format!("angle must be a multiple of {step}°"),
        ));
    }

    Ok(PlacedTile::new(tile, degrees / step))
}

/// Resolve a sequence of short labels, in order
///
/// # Errors
///
/// Returns the first `PuzzleError::InvalidPlacement` encountered
pub fn parse_prefix<'a, S: AsRef<str>>(
    labels: &[S],
    catalog: &'a TileCatalog,
) -> Result<Vec<PlacedTile<'a>>> {
    labels
        .iter()
        .map(|label| parse_placement(label.as_ref(), catalog))
        .collect()
}
