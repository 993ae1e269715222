//! PNG export of solved grids
//!
//! Every cell is split into one wedge per tile side. A wedge takes the color
//! assigned to its symbol kind, darkened for the B half, so matching edges
//! read as one light and one dark wedge of the same hue.

use crate::io::configuration::{GRID_LINE_COLOR, HALF_B_SHADE_PERCENT, SYMBOL_PALETTE};
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::spatial::grid::SolutionGrid;
use crate::spatial::symbol::{EdgeSymbol, HalfLabel, SymbolKind};
use crate::spatial::tiles::TileCatalog;
use image::{Rgba, RgbaImage};
use std::collections::HashMap;
use std::f64::consts::TAU;
use std::path::Path;

/// Fixed assignment of colors to symbol kinds
#[derive(Debug, Clone, Default)]
pub struct KindPalette {
    colors: HashMap<SymbolKind, [u8; 4]>,
}

impl KindPalette {
    /// Assign palette colors to the catalog's kinds in order of first appearance
    ///
    /// Colors repeat once the palette runs out.
    pub fn from_catalog(catalog: &TileCatalog) -> Self {
        let colors = catalog
            .kinds()
            .into_iter()
            .zip(SYMBOL_PALETTE.iter().cycle())
            .map(|(kind, color)| (kind.clone(), *color))
            .collect();
        Self { colors }
    }

    /// Color of an edge, shaded by its half
    pub fn color_of(&self, edge: &EdgeSymbol) -> [u8; 4] {
        let base = self
            .colors
            .get(edge.kind())
            .copied()
            .unwrap_or(GRID_LINE_COLOR);

        match edge.half() {
            HalfLabel::A => base,
            HalfLabel::B => shade(base),
        }
    }
}

fn shade(color: [u8; 4]) -> [u8; 4] {
    let scale = |channel: u8| (u32::from(channel) * HALF_B_SHADE_PERCENT / 100) as u8;
    [scale(color[0]), scale(color[1]), scale(color[2]), color[3]]
}

/// Side of an `sides`-gon cell nearest to the offset (dx, dy) from its center
///
/// Angles are measured clockwise from straight up, matching the side numbering.
fn wedge_at(dx: f64, dy: f64, sides: usize) -> usize {
    let angle = dx.atan2(-dy).rem_euclid(TAU);
    let step = TAU / sides as f64;
    ((angle / step).round() as usize) % sides
}

/// Draw a solved grid as an RGBA image
///
/// # Errors
///
/// Returns `PuzzleError::InvalidParameter` if `cell_pixels` is too small to
/// draw a cell
pub fn render_solution(
    grid: &SolutionGrid<'_>,
    palette: &KindPalette,
    cell_pixels: u32,
) -> Result<RgbaImage> {
    if cell_pixels < 3 {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &"cells need at least 3 pixels",
        ));
    }

    let width = grid.width() as u32;
    let mut img = RgbaImage::from_pixel(
        width * cell_pixels,
        width * cell_pixels,
        Rgba(GRID_LINE_COLOR),
    );
    let half = f64::from(cell_pixels) / 2.0;

    for row in 0..grid.width() {
        for col in 0..grid.width() {
            let Some(tile) = grid.get(row, col) else {
                continue;
            };
            let origin_x = col as u32 * cell_pixels;
            let origin_y = row as u32 * cell_pixels;

            // Outermost ring of each cell is left as grid line
            for y in 1..cell_pixels - 1 {
                for x in 1..cell_pixels - 1 {
                    let dx = f64::from(x) + 0.5 - half;
                    let dy = f64::from(y) + 0.5 - half;
                    let side = wedge_at(dx, dy, tile.sides());
                    let color = palette.color_of(tile.edge_at(side));
                    img.put_pixel(origin_x + x, origin_y + y, Rgba(color));
                }
            }
        }
    }

    Ok(img)
}

/// Export a solved grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `cell_pixels` is too small to draw a cell
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_solution_png(
    grid: &SolutionGrid<'_>,
    palette: &KindPalette,
    output_path: &Path,
    cell_pixels: u32,
) -> Result<()> {
    let img = render_solution(grid, palette, cell_pixels)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
