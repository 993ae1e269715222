//! Tests for command-line parsing and catalog processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use edgematch::PuzzleError;
    use edgematch::io::catalog::BUILTIN_TILES;
    use edgematch::io::cli::{CatalogProcessor, CatalogSource, Cli, RenderMode};
    use edgematch::io::configuration::{DEFAULT_CELL_SIZE, DEFAULT_SEED, DEFAULT_TARGET};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const FIRST_SOLUTION: &str = "1@90° 7@270° 3@90° 5@270° 8@90° 2@0° 9@90° 4@90° 6@90°";

    fn run(args: &[&str]) -> (usize, String) {
        let cli = Cli::parse_from(std::iter::once("program").chain(args.iter().copied()));
        let mut out = Vec::new();
        let total = CatalogProcessor::new(cli).process(&mut out).unwrap();
        (total, String::from_utf8(out).unwrap())
    }

    fn builtin_text() -> String {
        BUILTIN_TILES
            .iter()
            .map(|tile| tile.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests CLI parsing with no arguments uses the built-in deck and defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.catalog, None);
        assert_eq!(cli.target, DEFAULT_TARGET);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.cell_size, DEFAULT_CELL_SIZE);
        assert_eq!(cli.render, RenderMode::Grid);
        assert_eq!(cli.limit, None);
        assert!(cli.complete.is_empty());
        assert!(!cli.shuffle && !cli.png && !cli.quiet && !cli.verbose);
    }

    // Tests CLI parsing with all available arguments
    // Verified by dropping the comma delimiter from --complete
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "decks",
            "-t",
            "4",
            "-l",
            "2",
            "-c",
            "1@90°,7@270°",
            "--shuffle",
            "-s",
            "7",
            "-r",
            "labels",
            "--cell-size",
            "8",
            "-p",
            "-o",
            "out",
            "-q",
            "-v",
        ]);

        assert_eq!(cli.catalog, Some(PathBuf::from("decks")));
        assert_eq!(cli.target, 4);
        assert_eq!(cli.limit, Some(2));
        assert_eq!(cli.complete, vec!["1@90°", "7@270°"]);
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.render, RenderMode::Labels);
        assert_eq!(cli.cell_size, 8);
        assert_eq!(cli.output, Some(PathBuf::from("out")));
        assert!(cli.shuffle && cli.png && cli.quiet && cli.verbose);
    }

    // Tests progress display and log level follow the flags
    // Verified by inverting quiet flag logic
    #[test]
    fn test_progress_and_log_filter() {
        let cli = Cli::parse_from(["program"]);
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_filter(), "warn");

        let cli = Cli::parse_from(["program", "--quiet", "--verbose"]);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_filter(), "debug");
    }

    // Tests the built-in deck yields its four solutions as labels
    // Verified by resetting the solution counter per line
    #[test]
    fn test_process_builtin_labels() {
        let (total, output) = run(&["-q", "-r", "labels"]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(total, 4);
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines.first().copied(),
            Some(format!("Solution 1: {FIRST_SOLUTION}").as_str())
        );
        assert_eq!(lines.last().copied(), Some("builtin: 4 solution(s)"));
    }

    // Tests grid rendering prefixes each drawing with its number and catalog
    // Verified by omitting the catalog name from the heading
    #[test]
    fn test_process_builtin_grid() {
        let (total, output) = run(&["-q", "-t", "1", "-l", "1", "--cell-size", "6"]);

        assert_eq!(total, 1);
        assert!(output.starts_with("Solution 1 (builtin):\n╔"));
        // Heading, six tile lines, a blank separator and the count
        assert_eq!(output.lines().count(), 9);
    }

    // Tests the limit stops the search early
    // Verified by applying the limit after the search finishes
    #[test]
    fn test_process_limit() {
        let (total, output) = run(&["-q", "-r", "labels", "-t", "4", "-l", "2"]);

        assert_eq!(total, 2);
        assert!(output.ends_with("builtin: 2 solution(s)\n"));
    }

    // Tests a fixed prefix is completed rather than searched from scratch
    // Verified by ignoring the --complete argument
    #[test]
    fn test_process_complete() {
        let prefix = FIRST_SOLUTION.split(' ').take(8).collect::<Vec<_>>().join(",");
        let (total, output) = run(&["-q", "-r", "labels", "-c", prefix.as_str()]);

        assert_eq!(total, 1);
        assert!(output.contains(&format!("Solution 1: {FIRST_SOLUTION}")));
    }

    // Tests shuffling changes presentation order but not the solution set
    // Verified by shuffling after the search
    #[test]
    fn test_process_shuffle() {
        let (total, output) = run(&["-q", "-r", "none", "--shuffle", "-s", "11"]);

        assert_eq!(total, 4);
        assert_eq!(output, "builtin: 4 solution(s)\n");
    }

    // Tests a directory is searched catalog by catalog in name order
    // Verified by skipping the extension filter
    #[test]
    fn test_process_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("b.tiles"), builtin_text()).unwrap();
        std::fs::write(temp_dir.path().join("a.tiles"), "x_a y_a z_a w_a\n").unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "not a catalog").unwrap();

        let dir = temp_dir.path().to_string_lossy().to_string();
        let (total, output) = run(&[dir.as_str(), "-q", "-r", "none", "-t", "1"]);

        assert_eq!(total, 4 + 36);
        assert_eq!(output, "a: 4 solution(s)\nb: 36 solution(s)\n");
    }

    // Tests single-cell searches accept tiles whose side count is not a multiple of four
    // Verified by laying out every solution with quarter-turn facings
    #[test]
    fn test_process_three_sided_single_cells() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tri.tiles");
        std::fs::write(&path, "x_a y_a z_a\nx_b y_b z_b\n").unwrap();
        let file = path.to_string_lossy().to_string();

        let (total, output) = run(&[file.as_str(), "-q", "-t", "1", "-r", "labels"]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(total, 6);
        assert_eq!(
            lines,
            vec![
                "Solution 1: 1@0°",
                "Solution 2: 1@120°",
                "Solution 3: 1@240°",
                "Solution 4: 2@0°",
                "Solution 5: 2@120°",
                "Solution 6: 2@240°",
                "tri: 6 solution(s)",
            ]
        );

        let (total, output) = run(&[file.as_str(), "-q", "-t", "1", "-l", "1"]);
        assert_eq!(total, 1);
        assert!(output.starts_with("Solution 1 (tri):\n╔"));
    }

    // Tests catalog collection for files, directories and missing paths
    // Verified by treating missing paths as empty directories
    #[test]
    fn test_collect_catalogs() {
        let processor = CatalogProcessor::new(Cli::parse_from(["program", "-q"]));
        assert_eq!(
            processor.collect_catalogs().unwrap(),
            vec![CatalogSource::Builtin]
        );

        let missing = CatalogProcessor::new(Cli::parse_from([
            "program",
            "-q",
            "/nonexistent/decks",
        ]));
        assert!(matches!(
            missing.collect_catalogs(),
            Err(PuzzleError::InvalidParameter {
                parameter: "catalog",
                ..
            })
        ));
    }

    // Tests invalid targets and labels surface as errors
    // Verified by clamping the target to the nearest square
    #[test]
    fn test_process_errors() {
        let cli = Cli::parse_from(["program", "-q", "-t", "5"]);
        let mut out = Vec::new();
        assert!(matches!(
            CatalogProcessor::new(cli).process(&mut out),
            Err(PuzzleError::InvalidTargetSize { target: 5, .. })
        ));

        let cli = Cli::parse_from(["program", "-q", "-c", "1@45°"]);
        assert!(matches!(
            CatalogProcessor::new(cli).process(&mut out),
            Err(PuzzleError::InvalidPlacement { .. })
        ));
    }

    // Tests PNG paths prefer the output directory, then the catalog's directory
    // Verified by ignoring the output directory
    #[test]
    fn test_png_path() {
        let source = CatalogSource::File(PathBuf::from("/decks/octo.tiles"));
        assert_eq!(source.name(), "octo");
        assert_eq!(CatalogSource::Builtin.name(), "builtin");

        let with_output =
            CatalogProcessor::new(Cli::parse_from(["program", "-q", "-o", "/out"]));
        assert_eq!(
            with_output.png_path(&source, 3),
            PathBuf::from("/out/octo_solution_3.png")
        );

        let without = CatalogProcessor::new(Cli::parse_from(["program", "-q"]));
        assert_eq!(
            without.png_path(&source, 3),
            PathBuf::from("/decks/octo_solution_3.png")
        );
        assert_eq!(
            without.png_path(&CatalogSource::Builtin, 1),
            PathBuf::from("builtin_solution_1.png")
        );
    }

    // Tests PNG export writes one image per solution
    // Verified by disabling the export call
    #[test]
    fn test_process_png_export() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().to_string_lossy().to_string();

        let (total, _) = run(&[
            "-q",
            "-r",
            "none",
            "-t",
            "4",
            "-l",
            "2",
            "-p",
            "-o",
            out_dir.as_str(),
        ]);

        assert_eq!(total, 2);
        assert!(temp_dir.path().join("builtin_solution_1.png").exists());
        assert!(temp_dir.path().join("builtin_solution_2.png").exists());
        assert!(!temp_dir.path().join("builtin_solution_3.png").exists());
    }
}
