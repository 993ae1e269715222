//! Command-line interface for solving one or many tile catalogs

use crate::algorithm::search::{Solutions, find_remaining, find_valid_set};
use crate::io::catalog::{builtin_catalog, load_catalog, parse_prefix};
use crate::io::configuration::{
    BUILTIN_CATALOG_NAME, CATALOG_EXTENSION, DEFAULT_CELL_SIZE, DEFAULT_SEED, DEFAULT_TARGET,
    OUTPUT_SUFFIX, PNG_CELL_PIXELS,
};
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::io::image::{KindPalette, export_solution_png};
use crate::io::progress::ProgressManager;
use crate::io::render::{TextRenderer, placement_labels};
use crate::spatial::grid::{GridSides, SolutionGrid, find_mismatches, grid_width};
use crate::spatial::placement::PlacedTile;
use crate::spatial::tiles::TileCatalog;
use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;
use std::path::PathBuf;

/// How each solution is written to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderMode {
    /// Box drawing of the whole grid
    Grid,
    /// One line of short labels per solution
    Labels,
    /// Only the final count
    None,
}

#[derive(Parser)]
#[command(name = "edgematch")]
#[command(
    author,
    version,
    about = "Find every edge-matching arrangement of a set of rotatable tiles"
)]
/// Command-line arguments for the solver
// Independent on/off switches for output features
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Catalog file, or a directory of `.tiles` catalogs (built-in deck if omitted)
    #[arg(value_name = "CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Number of cells to fill; must be a perfect square
    #[arg(short, long, default_value_t = DEFAULT_TARGET)]
    pub target: usize,

    /// Stop after this many solutions per catalog
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Fixed leading placements to complete, e.g. `1@90°,7@270°`
    #[arg(short, long, value_delimiter = ',', value_name = "LABELS")]
    pub complete: Vec<String>,

    /// Present the tiles to the search in a seeded random order
    #[arg(long)]
    pub shuffle: bool,

    /// Random seed used by --shuffle
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// How to print each solution
    #[arg(short, long, value_enum, default_value_t = RenderMode::Grid)]
    pub render: RenderMode,

    /// Width of a rendered tile in characters
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: usize,

    /// Write each solution as a PNG image
    #[arg(short, long)]
    pub png: bool,

    /// Directory for PNG output (defaults to the catalog's directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log search details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter used unless `RUST_LOG` overrides it
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Where a catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The deck shipped with the solver
    Builtin,
    /// A catalog file on disk
    File(PathBuf),
}

impl CatalogSource {
    /// Short name used in output and generated file names
    pub fn name(&self) -> String {
        match self {
            Self::Builtin => BUILTIN_CATALOG_NAME.to_string(),
            Self::File(path) => path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        }
    }

    /// Load the catalog
    ///
    /// # Errors
    ///
    /// Returns catalog parsing or file system errors
    pub fn load(&self) -> Result<TileCatalog> {
        match self {
            Self::Builtin => builtin_catalog(),
            Self::File(path) => load_catalog(path),
        }
    }
}

/// Searches every requested catalog and writes the solutions out
pub struct CatalogProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl CatalogProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process catalogs according to CLI arguments, returning the total
    /// number of solutions written
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid, a catalog cannot be loaded
    /// or searched, or output cannot be written
    pub fn process<W: Write>(&mut self, out: &mut W) -> Result<usize> {
        let sources = self.collect_catalogs()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(sources.len());
        }

        let mut total = 0;
        for source in &sources {
            total += self.process_catalog(source, out)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(total)
    }

    /// Resolve the catalog argument into the list of catalogs to search
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or a directory cannot be read
    pub fn collect_catalogs(&self) -> Result<Vec<CatalogSource>> {
        let Some(target) = &self.cli.catalog else {
            return Ok(vec![CatalogSource::Builtin]);
        };

        if target.is_file() {
            Ok(vec![CatalogSource::File(target.clone())])
        } else if target.is_dir() {
            let read_error = |e| PuzzleError::FileSystem {
                path: target.clone(),
                operation: "list catalogs",
                source: e,
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(CATALOG_EXTENSION) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files.into_iter().map(CatalogSource::File).collect())
        } else {
            Err(invalid_parameter(
                "catalog",
                &target.display(),
                &"must be a catalog file or a directory",
            ))
        }
    }

    fn process_catalog<W: Write>(&mut self, source: &CatalogSource, out: &mut W) -> Result<usize> {
        let name = source.name();
        let mut catalog = source.load()?;

        if self.cli.shuffle {
            let mut rng = StdRng::seed_from_u64(self.cli.seed);
            catalog = catalog.shuffled(&mut rng);
        }

        let pool = catalog.pool();
        let solutions = if self.cli.complete.is_empty() {
            find_valid_set(Vec::new(), pool, self.cli.target)?
        } else {
            let prefix = parse_prefix(&self.cli.complete, &catalog)?;
            warn_if_inconsistent(&prefix, &catalog, self.cli.target);
            find_remaining(prefix, &pool, self.cli.target)?
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_catalog(&name);
        }

        let count = self.write_solutions(solutions, source, &catalog, out)?;

        writeln!(out, "{name}: {count} solution(s)").map_err(output_error)?;
        Ok(count)
    }

    fn write_solutions<W: Write>(
        &mut self,
        mut solutions: Solutions<'_>,
        source: &CatalogSource,
        catalog: &TileCatalog,
        out: &mut W,
    ) -> Result<usize> {
        let mut renderer = TextRenderer::new(self.cli.cell_size)?;
        let palette = KindPalette::from_catalog(catalog);
        let limit = self.cli.limit.unwrap_or(usize::MAX);
        let name = source.name();
        let mut count = 0;

        while count < limit {
            let Some(solution) = solutions.next() else {
                break;
            };
            count += 1;

            let grid = SolutionGrid::from_placements(&solution)?;
            let text = match self.cli.render {
                RenderMode::Grid => Some(format!(
                    "Solution {count} ({name}):\n{}",
                    renderer.render_grid(&grid)
                )),
                RenderMode::Labels => Some(format!(
                    "Solution {count}: {}",
                    placement_labels(&solution)
                )),
                RenderMode::None => None,
            };

            if let Some(text) = text {
                let written = match self.progress_manager {
                    Some(ref pm) => pm.suspend(|| writeln!(out, "{text}")),
                    None => writeln!(out, "{text}"),
                };
                written.map_err(output_error)?;
            }

            if self.cli.png {
                let path = self.png_path(source, count);
                export_solution_png(&grid, &palette, &path, PNG_CELL_PIXELS)?;
            }

            if let Some(ref pm) = self.progress_manager {
                pm.update(solutions.stats());
            }
        }

        log::debug!("{name}: search stopped with {:?}", solutions.stats());
        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_catalog(solutions.stats());
        }

        Ok(count)
    }

    /// Output path for the `index`-th solution image of a catalog
    pub fn png_path(&self, source: &CatalogSource, index: usize) -> PathBuf {
        let file_name = format!("{}{OUTPUT_SUFFIX}_{index}.png", source.name());

        let directory = match (&self.cli.output, source) {
            (Some(dir), _) => Some(dir.as_path()),
            (None, CatalogSource::File(path)) => path.parent(),
            (None, CatalogSource::Builtin) => None,
        };

        directory.map_or_else(|| PathBuf::from(&file_name), |dir| dir.join(&file_name))
    }
}

fn output_error(err: std::io::Error) -> PuzzleError {
    PuzzleError::FileSystem {
        path: PathBuf::from("<output>"),
        operation: "write solutions",
        source: err,
    }
}

/// Log a warning if a completion prefix already breaks the matching rule
///
/// The search does not reject such prefixes; it only extends them.
fn warn_if_inconsistent(prefix: &[PlacedTile<'_>], catalog: &TileCatalog, target: usize) {
    let (Ok(width), Ok(sides)) = (grid_width(target), GridSides::for_sides(catalog.sides())) else {
        return;
    };

    for mismatch in find_mismatches(prefix, width, sides) {
        log::warn!(
            "Prefix cells {} and {} do not match; completions will not be valid solutions",
            mismatch.first + 1,
            mismatch.second + 1
        );
    }
}

