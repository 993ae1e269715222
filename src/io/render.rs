//! Plain-text rendering of placed tiles and solved grids
//!
//! Each tile is drawn as a square box with double-line borders. The symbol
//! facing each direction is centered in that border, and the interior shows
//! the tile id and rotation.

use crate::io::configuration::{HORIZONTAL_BORDER, MIN_CELL_SIZE, VERTICAL_BORDER};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{GridSides, SolutionGrid};
use crate::spatial::placement::{PlacedTile, TileLabel};
use std::collections::HashMap;

/// Short form of a label, e.g. `3@90°`
pub fn short_label(label: TileLabel) -> String {
    format!("{}@{}°", label.tile_id, label.degrees)
}

/// Full description of a placed tile with its edges after rotation
pub fn full_label(tile: PlacedTile<'_>) -> String {
    let edges: Vec<String> = tile.rotated_edges().map(ToString::to_string).collect();
    format!("Tile {}: {}", short_label(tile.label()), edges.join(","))
}

/// Space-separated short labels of a whole placement
pub fn placement_labels(placement: &[PlacedTile<'_>]) -> String {
    placement
        .iter()
        .map(|tile| short_label(tile.label()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Center `text` in `width` cells using `fill`, truncating if it does not fit
///
/// Odd padding goes to the right.
fn center_fill(text: &str, width: usize, fill: char) -> Vec<char> {
    let chars: Vec<char> = text.chars().take(width).collect();
    let padding = width - chars.len();
    let left = padding / 2;

    std::iter::repeat_n(fill, left)
        .chain(chars)
        .chain(std::iter::repeat_n(fill, padding - left))
        .collect()
}

#[derive(Debug, Clone)]
struct CellBorders {
    top: String,
    right: Vec<char>,
    bottom: String,
    left: Vec<char>,
}

/// Box-drawing renderer with a per-placement border cache
///
/// Borders depend on both the tile and its rotation, so the cache is keyed by
/// `(tile id, rotation)`.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    cell_size: usize,
    borders: HashMap<(usize, usize), CellBorders>,
}

impl TextRenderer {
    /// Create a renderer drawing tiles `cell_size` characters across
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::InvalidParameter` if `cell_size` is too small to
    /// hold the borders and both caption lines
    pub fn new(cell_size: usize) -> Result<Self> {
        if cell_size < MIN_CELL_SIZE {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &format!("must be at least {MIN_CELL_SIZE}"),
            ));
        }

        Ok(Self {
            cell_size,
            borders: HashMap::new(),
        })
    }

    /// Side length of a rendered tile in characters
    pub const fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// Number of distinct placements whose borders are cached
    pub fn cached(&self) -> usize {
        self.borders.len()
    }

    fn borders(&mut self, tile: PlacedTile<'_>, sides: GridSides) -> &CellBorders {
        let pad = self.cell_size - 2;
        self.borders
            .entry((tile.tile().id(), tile.rotation()))
            .or_insert_with(|| {
                let text = |side: usize, fill: char| {
                    center_fill(&tile.edge_at(side).to_string(), pad, fill)
                };
                CellBorders {
                    top: text(sides.top, HORIZONTAL_BORDER).into_iter().collect(),
                    right: text(sides.right, VERTICAL_BORDER),
                    bottom: text(sides.bottom, HORIZONTAL_BORDER).into_iter().collect(),
                    left: text(sides.left, VERTICAL_BORDER),
                }
            })
    }

    /// One text line of a tile box, `line` counting from the top border
    pub fn render_line(&mut self, tile: PlacedTile<'_>, sides: GridSides, line: usize) -> String {
        let pad = self.cell_size - 2;
        let last = self.cell_size - 1;
        let borders = self.borders(tile, sides);

        if line == 0 {
            return format!("╔{}╗", borders.top);
        }
        if line >= last {
            return format!("╚{}╝", borders.bottom);
        }

        let inner = line - 1;
        let center = pad / 2;
        let caption = if inner == center {
            format!("Tile {}", tile.tile().id())
        } else if inner == center + 1 {
            format!("Rot {}°", tile.degrees())
        } else {
            String::new()
        };

        let left = borders.left.get(inner).copied().unwrap_or(VERTICAL_BORDER);
        let right = borders.right.get(inner).copied().unwrap_or(VERTICAL_BORDER);
        let middle: String = center_fill(&caption, pad, ' ').into_iter().collect();
        format!("{left}{middle}{right}")
    }

    /// Render a single tile as a multi-line string
    pub fn render_tile(&mut self, tile: PlacedTile<'_>, sides: GridSides) -> String {
        (0..self.cell_size)
            .map(|line| self.render_line(tile, sides, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render a solved grid, rows of tile boxes side by side
    pub fn render_grid(&mut self, grid: &SolutionGrid<'_>) -> String {
        let sides = grid.sides();
        let mut output = String::new();

        for row in grid.rows() {
            for line in 0..self.cell_size {
                for tile in &row {
                    output.push_str(&self.render_line(*tile, sides, line));
                }
                output.push('\n');
            }
        }

        output
    }

    /// Render a partial placement of a `width`-wide grid
    ///
    /// Rows are filled in reading order; a short last row is drawn as far as
    /// it goes.
    pub fn render_partial(
        &mut self,
        placement: &[PlacedTile<'_>],
        width: usize,
        sides: GridSides,
    ) -> String {
        let mut output = String::new();

        for row in placement.chunks(width.max(1)) {
            for line in 0..self.cell_size {
                for tile in row {
                    output.push_str(&self.render_line(*tile, sides, line));
                }
                output.push('\n');
            }
        }

        output
    }
}
