//! Candidate generation for the next grid cell
//!
//! Cells are filled in reading order, so a new cell is constrained by at most
//! two placed neighbors: the cell above it and the cell to its left.

use crate::algorithm::pool::TilePool;
use crate::spatial::grid::{GridSides, linear_to_rc, rc_to_linear};
use crate::spatial::placement::PlacedTile;
use std::collections::HashSet;

/// Placements that fit both below `above` and to the right of `left`
///
/// A candidate qualifies only if both neighbors admit the same tile with the
/// same rotation. Results keep the order produced by the `above` constraint.
pub fn corner_candidates<'a>(
    above: PlacedTile<'a>,
    left: PlacedTile<'a>,
    pool: &TilePool<'a>,
    sides: GridSides,
) -> Vec<PlacedTile<'a>> {
    let from_left: HashSet<PlacedTile<'a>> =
        left.find_valid_neighbors(sides.right, pool).collect();

    above
        .find_valid_neighbors(sides.bottom, pool)
        .filter(|candidate| from_left.contains(candidate))
        .collect()
}

/// Every placement from `remaining` that may go into the next empty cell
///
/// The next cell is at linear position `chosen.len()`. The top-left cell is
/// unconstrained, the rest of the first row only sees its left neighbor, the
/// rest of the first column only sees the cell above, and every other cell
/// must satisfy both.
pub fn next_cell_candidates<'a>(
    chosen: &[PlacedTile<'a>],
    remaining: &TilePool<'a>,
    width: usize,
    sides: GridSides,
) -> Vec<PlacedTile<'a>> {
    let (row, col) = linear_to_rc(chosen.len(), width);
    let above = row
        .checked_sub(1)
        .and_then(|up| chosen.get(rc_to_linear(up, col, width)))
        .copied();
    let left = col
        .checked_sub(1)
        .and_then(|back| chosen.get(rc_to_linear(row, back, width)))
        .copied();

    match (above, left) {
        (None, None) => remaining
            .iter()
            .flat_map(|tile| (0..tile.sides()).map(move |rotation| PlacedTile::new(tile, rotation)))
            .collect(),
        (None, Some(left)) => left.find_valid_neighbors(sides.right, remaining).collect(),
        (Some(above), None) => above.find_valid_neighbors(sides.bottom, remaining).collect(),
        (Some(above), Some(left)) => corner_candidates(above, left, remaining, sides),
    }
}
