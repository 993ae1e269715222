//! Square grid indexing and views over finished placements
//!
//! Placements fill the grid left to right, top to bottom. This module maps
//! between that linear order and (row, column) coordinates, fixes which tile
//! side faces each grid direction, and checks finished grids for mismatches.

use crate::io::error::{PuzzleError, Result, invalid_target};
use crate::spatial::placement::PlacedTile;
use ndarray::Array2;

/// Convert a linear placement position to (row, column)
///
/// A zero width has no columns, so every position maps onto row 0.
pub const fn linear_to_rc(pos: usize, width: usize) -> (usize, usize) {
    if width == 0 {
        return (0, pos);
    }
    (pos / width, pos % width)
}

/// Convert (row, column) to a linear placement position
pub const fn rc_to_linear(row: usize, col: usize, width: usize) -> usize {
    row * width + col
}

/// Side length of the square grid holding `target` cells
///
/// # Errors
///
/// Returns `PuzzleError::InvalidTargetSize` if `target` is not a perfect square
pub fn grid_width(target: usize) -> Result<usize> {
    let width = target.isqrt();
    if width * width == target {
        Ok(width)
    } else {
        Err(invalid_target(target, &"cell count must be a perfect square"))
    }
}

/// Which tile side faces each grid direction
///
/// Sides are numbered clockwise from the top, so for `N` sides the right,
/// bottom and left facings sit a quarter, half and three quarters of the way
/// round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSides {
    /// Side facing up
    pub top: usize,
    /// Side facing right
    pub right: usize,
    /// Side facing down
    pub bottom: usize,
    /// Side facing left
    pub left: usize,
}

impl GridSides {
    /// Facings of ordinary four-sided tiles
    pub const SQUARE: Self = Self {
        top: 0,
        right: 1,
        bottom: 2,
        left: 3,
    };

    /// Facings for tiles with `sides` edges
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::UnsupportedSideCount` unless `sides` is a
    /// positive multiple of four
    pub const fn for_sides(sides: usize) -> Result<Self> {
        if sides == 0 || sides % 4 != 0 {
            return Err(PuzzleError::UnsupportedSideCount { sides });
        }
        let quarter = sides / 4;
        Ok(Self {
            top: 0,
            right: quarter,
            bottom: 2 * quarter,
            left: 3 * quarter,
        })
    }
}

/// A pair of grid-adjacent cells whose touching edges do not match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Linear position of the upper or left cell
    pub first: usize,
    /// Linear position of the lower or right cell
    pub second: usize,
}

/// List every adjacent pair in a (possibly partial) placement that breaks the
/// matching rule
///
/// Only cells already present in `placements` are compared. A zero width
/// grid has no adjacent cells.
pub fn find_mismatches(
    placements: &[PlacedTile<'_>],
    width: usize,
    sides: GridSides,
) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    if width == 0 {
        return mismatches;
    }

    for (pos, cell) in placements.iter().enumerate() {
        let (row, col) = linear_to_rc(pos, width);

        if col + 1 < width {
            let right = rc_to_linear(row, col + 1, width);
            if let Some(neighbor) = placements.get(right) {
                if !cell.edge_at(sides.right).matches(neighbor.edge_at(sides.left)) {
                    mismatches.push(Mismatch {
                        first: pos,
                        second: right,
                    });
                }
            }
        }

        let below = rc_to_linear(row + 1, col, width);
        if let Some(neighbor) = placements.get(below) {
            if !cell.edge_at(sides.bottom).matches(neighbor.edge_at(sides.top)) {
                mismatches.push(Mismatch {
                    first: pos,
                    second: below,
                });
            }
        }
    }

    mismatches
}

/// A complete placement laid out as a 2D array for renderers
#[derive(Debug, Clone)]
pub struct SolutionGrid<'a> {
    cells: Array2<PlacedTile<'a>>,
    sides: GridSides,
}

impl<'a> SolutionGrid<'a> {
    /// Lay out a full placement sequence as a `width` x `width` grid
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::InvalidTargetSize` if the placement does not fill
    /// a square grid, or `PuzzleError::UnsupportedSideCount` if its tiles
    /// cannot be laid out on one with more than one cell
    pub fn from_placements(placements: &[PlacedTile<'a>]) -> Result<Self> {
        let width = grid_width(placements.len())?;
        // A lone cell has no neighbors, so any side count fits
        let sides = match placements.first() {
            Some(first) if width > 1 => GridSides::for_sides(first.sides())?,
            _ => GridSides::SQUARE,
        };

        let cells = Array2::from_shape_vec((width, width), placements.to_vec())
            .map_err(|e| invalid_target(placements.len(), &e))?;

        Ok(Self { cells, sides })
    }

    /// Number of rows (and columns)
    pub fn width(&self) -> usize {
        self.cells.nrows()
    }

    /// Tile facing conventions of this grid
    pub const fn sides(&self) -> GridSides {
        self.sides
    }

    /// Placed tile at (row, column)
    pub fn get(&self, row: usize, col: usize) -> Option<&PlacedTile<'a>> {
        self.cells.get([row, col])
    }

    /// Rows of placed tiles, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = Vec<PlacedTile<'a>>> + '_ {
        self.cells.rows().into_iter().map(|row| row.to_vec())
    }

    /// Placed tiles back in linear placement order
    pub fn to_placements(&self) -> Vec<PlacedTile<'a>> {
        self.cells.iter().copied().collect()
    }

    /// Test if every adjacent pair of cells matches
    pub fn is_consistent(&self) -> bool {
        find_mismatches(&self.to_placements(), self.width(), self.sides).is_empty()
    }
}
