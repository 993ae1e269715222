//! CLI entry point for the edge-matching tile solver

use clap::Parser;
use edgematch::io::cli::{CatalogProcessor, Cli};

fn main() -> edgematch::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let mut processor = CatalogProcessor::new(cli);
    let stdout = std::io::stdout();
    processor.process(&mut stdout.lock())?;
    Ok(())
}
