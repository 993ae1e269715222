//! Solver constants and runtime configuration defaults

/// Default number of cells in a solution (a 3x3 grid)
pub const DEFAULT_TARGET: usize = 9;

/// Fixed seed for reproducible pool shuffling
pub const DEFAULT_SEED: u64 = 42;

/// Separator between symbol kind and half label in an edge token
pub const SYMBOL_SEPARATOR: char = '_';

/// Starts a comment in catalog files
pub const CATALOG_COMMENT: char = '#';

/// File extension of catalogs picked up when a directory is processed
pub const CATALOG_EXTENSION: &str = "tiles";

/// Name used for the built-in deck in output and file names
pub const BUILTIN_CATALOG_NAME: &str = "builtin";

// Text rendering
/// Default side length of a rendered tile in characters
pub const DEFAULT_CELL_SIZE: usize = 12;
/// Smallest tile box that still fits both caption lines
pub const MIN_CELL_SIZE: usize = 4;
/// Fill character of top and bottom borders
pub const HORIZONTAL_BORDER: char = '═';
/// Fill character of left and right borders
pub const VERTICAL_BORDER: char = '║';

// PNG rendering
/// Edge length of one grid cell in pixels
pub const PNG_CELL_PIXELS: u32 = 64;
/// Color of the lines separating cells
pub const GRID_LINE_COLOR: [u8; 4] = [24, 24, 24, 255];
/// Colors assigned to symbol kinds in order of first appearance
pub const SYMBOL_PALETTE: [[u8; 4]; 8] = [
    [230, 159, 0, 255],
    [86, 180, 233, 255],
    [0, 158, 115, 255],
    [240, 228, 66, 255],
    [0, 114, 178, 255],
    [213, 94, 0, 255],
    [204, 121, 167, 255],
    [153, 153, 153, 255],
];
/// Brightness multiplier (in percent) applied to the B half of a symbol
pub const HALF_B_SHADE_PERCENT: u32 = 60;

// Output settings
/// Suffix added to exported solution file names
pub const OUTPUT_SUFFIX: &str = "_solution";

// Progress display settings
/// Threshold for adding an overall bar across catalogs
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 1;
/// Spinner redraw interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 120;
