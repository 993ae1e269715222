//! Tests for solver configuration constants

#[cfg(test)]
mod tests {
    use edgematch::io::configuration::{
        CATALOG_COMMENT, CATALOG_EXTENSION, DEFAULT_CELL_SIZE, DEFAULT_TARGET, GRID_LINE_COLOR,
        HALF_B_SHADE_PERCENT, MIN_CELL_SIZE, OUTPUT_SUFFIX, PNG_CELL_PIXELS, SYMBOL_PALETTE,
        SYMBOL_SEPARATOR,
    };

    // Tests the default target is a full 3x3 grid
    // Verified by changing the default to a non-square count
    #[test]
    fn test_default_target_is_square() {
        let width = DEFAULT_TARGET.isqrt();
        assert_eq!(width * width, DEFAULT_TARGET);
        assert_eq!(DEFAULT_TARGET, 9);
    }

    // Tests cell sizes leave room for borders and both caption lines
    // Verified by lowering the minimum cell size
    #[test]
    fn test_cell_size_bounds() {
        assert_eq!(DEFAULT_CELL_SIZE, 12);
        assert_eq!(MIN_CELL_SIZE, 4);
        assert_eq!(PNG_CELL_PIXELS, 64);
    }

    // Tests catalog syntax characters do not collide
    // Verified by using the separator as comment marker
    #[test]
    fn test_catalog_syntax() {
        assert_ne!(SYMBOL_SEPARATOR, CATALOG_COMMENT);
        assert_eq!(CATALOG_EXTENSION, "tiles");
        assert!(OUTPUT_SUFFIX.starts_with('_'));
    }

    // Tests palette colors are opaque, distinct and differ from grid lines
    // Verified by duplicating a palette entry
    #[test]
    fn test_palette() {
        for (i, color) in SYMBOL_PALETTE.iter().enumerate() {
            assert_eq!(color.get(3), Some(&255));
            assert_ne!(*color, GRID_LINE_COLOR);
            assert!(!SYMBOL_PALETTE.iter().skip(i + 1).any(|other| other == color));
        }
        assert_eq!(HALF_B_SHADE_PERCENT, 60);
    }
}
