//! Backtracking solver for edge-matching tile puzzles
//!
//! A fixed pool of square tiles, each edge carrying half of a symbol, is laid
//! out on a square grid so that every pair of touching edges shows the two
//! halves of the same symbol. Tiles may be turned by any multiple of 90°.

#![forbid(unsafe_code)]

/// Candidate generation and backtracking search
pub mod algorithm;
/// Catalog loading, rendering, command line and error handling
pub mod io;
/// Symbols, tiles, placements and grid geometry
pub mod spatial;

pub use algorithm::search::{Placement, SearchStats, Solutions, find_remaining, find_valid_set};
pub use io::error::{PuzzleError, Result};
