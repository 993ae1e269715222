//! Tests for the lazy depth-first solution search

#[cfg(test)]
mod tests {
    use edgematch::algorithm::search::{Solutions, find_remaining, find_valid_set};
    use edgematch::io::catalog::{builtin_catalog, parse_prefix};
    use edgematch::io::render::placement_labels;
    use edgematch::spatial::tiles::TileCatalog;
    use edgematch::{Placement, PuzzleError};

    const FIRST_SOLUTION: &str = "1@90° 7@270° 3@90° 5@270° 8@90° 2@0° 9@90° 4@90° 6@90°";

    fn all_solutions(catalog: &TileCatalog, target: usize) -> Vec<Placement<'_>> {
        find_valid_set(Vec::new(), catalog.pool(), target)
            .unwrap()
            .collect()
    }

    // Tests solution counts on the built-in deck for each square size
    // Verified by skipping the corner constraint for interior cells
    #[test]
    fn test_builtin_counts() {
        let catalog = builtin_catalog().unwrap();

        assert_eq!(all_solutions(&catalog, 1).len(), 36);
        assert_eq!(all_solutions(&catalog, 4).len(), 228);
        assert_eq!(all_solutions(&catalog, 9).len(), 4);
    }

    // Tests a zero target yields the single empty placement
    // Verified by pushing a search frame for an already complete grid
    #[test]
    fn test_zero_target() {
        let catalog = builtin_catalog().unwrap();
        let solutions = all_solutions(&catalog, 0);

        assert_eq!(solutions.len(), 1);
        assert!(solutions.iter().all(Vec::is_empty));
    }

    // Tests the first full solution follows catalog and rotation order
    // Verified by trying rotations in descending order
    #[test]
    fn test_first_solution_order() {
        let catalog = builtin_catalog().unwrap();
        let first = find_valid_set(Vec::new(), catalog.pool(), 9)
            .unwrap()
            .next()
            .unwrap();

        assert_eq!(placement_labels(&first), FIRST_SOLUTION);
    }

    // Tests repeated searches produce identical sequences
    // Verified by iterating the pool through a hash set
    #[test]
    fn test_deterministic_order() {
        let catalog = builtin_catalog().unwrap();
        let labels = |target| -> Vec<String> {
            all_solutions(&catalog, target)
                .iter()
                .map(|solution| placement_labels(solution))
                .collect()
        };

        assert_eq!(labels(4), labels(4));
        assert_eq!(labels(9), labels(9));
    }

    // Tests solutions are produced on demand
    // Verified by collecting every solution before yielding the first
    #[test]
    fn test_lazy_enumeration() {
        let catalog = builtin_catalog().unwrap();
        let mut solutions = find_valid_set(Vec::new(), catalog.pool(), 9).unwrap();

        assert!(solutions.next().is_some());
        assert_eq!(solutions.stats().solutions, 1);

        let rest = solutions.by_ref().count();
        assert_eq!(rest, 3);

        let stats = solutions.stats();
        assert_eq!(stats.solutions, 4);
        assert!(stats.placements_tried >= 36);
        assert!(stats.dead_ends > 0);
        assert!(solutions.next().is_none());
        assert!(solutions.next().is_none());
    }

    // Tests a non-square target is rejected before searching
    // Verified by rounding the width down
    #[test]
    fn test_non_square_target() {
        let catalog = builtin_catalog().unwrap();
        let result = find_valid_set(Vec::new(), catalog.pool(), 8);

        assert!(matches!(
            result,
            Err(PuzzleError::InvalidTargetSize { target: 8, .. })
        ));
    }

    // Tests a target needing more tiles than exist is rejected
    // Verified by removing the availability check
    #[test]
    fn test_not_enough_tiles() {
        let catalog = builtin_catalog().unwrap();
        let result = find_valid_set(Vec::new(), catalog.pool(), 16);

        assert!(matches!(
            result,
            Err(PuzzleError::InvalidTargetSize { target: 16, .. })
        ));
    }

    // Tests a prefix already longer than the target is rejected
    // Verified by truncating the prefix to the target
    #[test]
    fn test_prefix_longer_than_target() {
        let catalog = builtin_catalog().unwrap();
        let prefix = parse_prefix(&["1@90°", "7@270°"], &catalog).unwrap();

        let result = find_remaining(prefix, &catalog.pool(), 1);
        assert!(matches!(
            result,
            Err(PuzzleError::InvalidTargetSize { target: 1, .. })
        ));
    }

    // Tests tiles that cannot face four directions only work for single cells
    // Verified by requiring a multiple of four even for one cell
    #[test]
    fn test_unsupported_side_count() {
        let catalog = TileCatalog::from_tokens([
            ["a_a", "b_a", "c_a"],
            ["a_b", "b_b", "c_b"],
            ["a_a", "b_b", "c_a"],
            ["a_b", "b_a", "c_b"],
        ])
        .unwrap();

        let singles = find_valid_set(Vec::new(), catalog.pool(), 1).unwrap().count();
        assert_eq!(singles, 12);

        assert!(matches!(
            find_valid_set(Vec::new(), catalog.pool(), 4),
            Err(PuzzleError::UnsupportedSideCount { sides: 3 })
        ));
    }

    // Tests completing eight known cells finds the one matching ninth
    // Verified by leaving prefix tiles in the pool
    #[test]
    fn test_find_remaining_single_completion() {
        let catalog = builtin_catalog().unwrap();
        let labels: Vec<&str> = FIRST_SOLUTION.split(' ').take(8).collect();
        let prefix = parse_prefix(&labels, &catalog).unwrap();

        let completions: Vec<Placement<'_>> = find_remaining(prefix, &catalog.pool(), 9)
            .unwrap()
            .collect();

        assert_eq!(completions.len(), 1);
        assert_eq!(
            completions.first().map(|c| placement_labels(c)).as_deref(),
            Some(FIRST_SOLUTION)
        );
    }

    // Tests a complete prefix is returned as its own only completion
    // Verified by searching past a full grid
    #[test]
    fn test_complete_prefix() {
        let catalog = builtin_catalog().unwrap();
        let labels: Vec<&str> = FIRST_SOLUTION.split(' ').collect();
        let prefix = parse_prefix(&labels, &catalog).unwrap();

        let mut solutions = find_remaining(prefix.clone(), &catalog.pool(), 9).unwrap();
        assert_eq!(solutions.next(), Some(prefix));
        assert!(solutions.next().is_none());
    }

    // Tests the search reports its grid shape
    // Verified by storing the target as the width
    #[test]
    fn test_shape_accessors() {
        let catalog = builtin_catalog().unwrap();
        let solutions = Solutions::new(Vec::new(), catalog.pool(), 4).unwrap();

        assert_eq!(solutions.width(), 2);
        assert_eq!(solutions.target(), 4);
        assert_eq!(solutions.stats(), Default::default());
    }
}
