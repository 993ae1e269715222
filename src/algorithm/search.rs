//! Depth-first enumeration of complete grids
//!
//! The search keeps its recursion on an explicit stack so that solutions can
//! be handed out one at a time through `Iterator::next`. Each stack frame owns
//! the pool left in its branch along with the candidates not yet tried for
//! its cell. Dropping the iterator abandons the remaining search.

use crate::algorithm::constraints::next_cell_candidates;
use crate::algorithm::pool::TilePool;
use crate::io::error::{Result, invalid_target};
use crate::spatial::grid::{GridSides, grid_width};
use crate::spatial::placement::PlacedTile;
use std::iter::FusedIterator;

/// An ordered fill of the grid, left to right and top to bottom
pub type Placement<'a> = Vec<PlacedTile<'a>>;

/// Counters describing how much of the search space has been visited
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates placed into a cell, including ones later backtracked
    pub placements_tried: usize,
    /// Partial grids with no candidate for their next cell
    pub dead_ends: usize,
    /// Complete grids produced
    pub solutions: usize,
}

struct Frame<'a> {
    remaining: TilePool<'a>,
    candidates: std::vec::IntoIter<PlacedTile<'a>>,
}

/// Lazy sequence of solutions, computed on demand
///
/// Each call to `next` resumes the depth-first search where the previous
/// solution was found. The sequence cannot be rewound; start a new search to
/// enumerate again.
pub struct Solutions<'a> {
    target: usize,
    width: usize,
    sides: GridSides,
    fixed: usize,
    chosen: Placement<'a>,
    stack: Vec<Frame<'a>>,
    pending: Option<Placement<'a>>,
    stats: SearchStats,
}

impl<'a> Solutions<'a> {
    /// Prepare a search extending `chosen` with tiles from `remaining`
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::InvalidTargetSize` if `target` is not a perfect
    /// square, is shorter than `chosen`, or cannot be reached with the tiles
    /// available, and `PuzzleError::UnsupportedSideCount` if adjacency is
    /// needed for tiles whose sides cannot face four directions
    pub fn new(chosen: Placement<'a>, remaining: TilePool<'a>, target: usize) -> Result<Self> {
        let width = grid_width(target)?;

        if chosen.len() > target {
            return Err(invalid_target(
                target,
                &format!("{} cells are already placed", chosen.len()),
            ));
        }

        let available = chosen.len() + remaining.len();
        if available < target {
            return Err(invalid_target(
                target,
                &format!("only {available} tiles are available"),
            ));
        }

        // Facings only matter once a cell has a neighbor
        let sides = if target > 1 {
            GridSides::for_sides(remaining.sides())?
        } else {
            GridSides::SQUARE
        };

        log::debug!(
            "Starting search for {target} cells ({width}x{width}) with {} fixed and {} available",
            chosen.len(),
            remaining.len()
        );

        let mut solutions = Self {
            target,
            width,
            sides,
            fixed: chosen.len(),
            chosen,
            stack: Vec::new(),
            pending: None,
            stats: SearchStats::default(),
        };

        if solutions.chosen.len() == target {
            solutions.pending = Some(solutions.chosen.clone());
        } else {
            solutions.push_frame(remaining);
        }

        Ok(solutions)
    }

    /// Search progress so far
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Side length of the grid being filled
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of cells in a complete solution
    pub const fn target(&self) -> usize {
        self.target
    }

    fn push_frame(&mut self, remaining: TilePool<'a>) {
        let candidates = next_cell_candidates(&self.chosen, &remaining, self.width, self.sides);

        if candidates.is_empty() {
            self.stats.dead_ends += 1;
            log::trace!("Dead end after {} cells", self.chosen.len());
            return;
        }

        self.stack.push(Frame {
            remaining,
            candidates: candidates.into_iter(),
        });
    }
}

impl<'a> Iterator for Solutions<'a> {
    type Item = Placement<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(solution) = self.pending.take() {
            self.stats.solutions += 1;
            return Some(solution);
        }

        loop {
            let depth = self.stack.len().checked_sub(1)?;
            let frame = self.stack.last_mut()?;

            let Some(candidate) = frame.candidates.next() else {
                self.stack.pop();
                continue;
            };
            let remaining = frame.remaining.without(candidate.tile());

            // The frame at `depth` owns cell `fixed + depth`; drop deeper choices
            self.chosen.truncate(self.fixed + depth);
            self.chosen.push(candidate);
            self.stats.placements_tried += 1;

            if self.chosen.len() == self.target {
                self.stats.solutions += 1;
                log::debug!(
                    "Found solution {} after {} placements",
                    self.stats.solutions,
                    self.stats.placements_tried
                );
                return Some(self.chosen.clone());
            }

            self.push_frame(remaining);
        }
    }
}

impl FusedIterator for Solutions<'_> {}

/// Enumerate every way to extend `chosen` to `target` cells using tiles from
/// `remaining`
///
/// # Errors
///
/// Returns the validation errors of `Solutions::new`; the search itself never
/// fails and an empty sequence simply means there is no solution
pub fn find_valid_set<'a>(
    chosen: Placement<'a>,
    remaining: TilePool<'a>,
    target: usize,
) -> Result<Solutions<'a>> {
    Solutions::new(chosen, remaining, target)
}

/// Enumerate completions of a fixed prefix drawn from `full_pool`
///
/// Tiles used by the prefix are removed from the pool before searching. The
/// prefix itself is not checked against the matching rule: an inconsistent
/// prefix still constrains the next cells through its edges.
///
/// # Errors
///
/// Returns the validation errors of `Solutions::new`
pub fn find_remaining<'a>(
    chosen: Placement<'a>,
    full_pool: &TilePool<'a>,
    target: usize,
) -> Result<Solutions<'a>> {
    let remaining = full_pool.without_all(chosen.iter().map(PlacedTile::tile));
    Solutions::new(chosen, remaining, target)
}
