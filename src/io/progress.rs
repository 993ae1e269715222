//! Search progress display with an overall bar for catalog batches

use crate::algorithm::search::SearchStats;
use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_TICK_MS};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix}: {msg} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Catalogs: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

fn stats_message(stats: SearchStats) -> String {
    format!(
        "{} solutions, {} placements tried, {} dead ends",
        stats.solutions, stats.placements_tried, stats.dead_ends
    )
}

/// Coordinates progress display while catalogs are searched
///
/// A spinner tracks the catalog being searched; when more catalogs than
/// `MAX_INDIVIDUAL_PROGRESS_BARS` are processed an overall bar is added.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    search_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            search_bar: None,
        }
    }

    /// Set up the overall bar for a batch of catalogs
    pub fn initialize(&mut self, catalog_count: usize) {
        if catalog_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(catalog_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Start a spinner for the catalog about to be searched
    pub fn start_catalog(&mut self, name: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(SPINNER_STYLE.clone());
        spinner.set_prefix(name.to_string());
        spinner.set_message(stats_message(SearchStats::default()));
        spinner.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));

        if let Some(old) = self.search_bar.replace(self.multi_progress.add(spinner)) {
            old.finish_and_clear();
        }
    }

    /// Report search counters for the current catalog
    pub fn update(&self, stats: SearchStats) {
        if let Some(ref spinner) = self.search_bar {
            spinner.set_message(stats_message(stats));
        }
    }

    /// Mark the current catalog as finished
    pub fn complete_catalog(&mut self, stats: SearchStats) {
        if let Some(spinner) = self.search_bar.take() {
            spinner.finish_with_message(stats_message(stats));
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Run `f` with the bars hidden so it can write to the terminal cleanly
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.multi_progress.suspend(f)
    }

    /// Clean up all progress displays
    pub fn finish(&mut self) {
        if let Some(spinner) = self.search_bar.take() {
            spinner.finish_and_clear();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All catalogs processed");
        }
        let _ = self.multi_progress.clear();
    }
}
