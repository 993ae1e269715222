/// Built-in deck, catalog files and placement labels
pub mod catalog;
/// Command-line arguments and batch catalog processing
pub mod cli;
/// Compile-time defaults for search, rendering and output
pub mod configuration;
/// Error types and catalog location context
pub mod error;
/// PNG export of solved grids
pub mod image;
/// Terminal progress display during searches
pub mod progress;
/// Box-drawing text output and placement labels
pub mod render;
