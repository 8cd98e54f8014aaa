//! Seed pattern definitions
//!
//! Each pattern is a fixed list of (row, col) coordinates that are set alive on
//! a freshly created grid.

use crate::grid::Grid;
use crate::types::Pattern;

/// Glider in its spawn phase (travels toward the bottom-right corner)
const GLIDER: [(usize, usize); 5] = [(0, 0), (2, 0), (2, 1), (1, 2), (1, 1)];

/// T-tetromino
const TETRIS: [(usize, usize); 4] = [(4, 4), (5, 3), (5, 4), (5, 5)];

/// Get the live cells of a pattern
pub fn pattern_cells(pattern: Pattern) -> &'static [(usize, usize)] {
    match pattern {
        Pattern::Glider => &GLIDER,
        Pattern::Tetris => &TETRIS,
    }
}

/// Stamp `pattern` onto `grid`.
///
/// Cells that fall outside a small grid are skipped. Returns the number of
/// cells that were actually placed.
pub fn apply_pattern(grid: &mut Grid, pattern: Pattern) -> usize {
    pattern_cells(pattern)
        .iter()
        .filter(|&&(row, col)| grid.set(row, col, true))
        .count()
}

/// Stamp a pattern given by name.
///
/// Unknown names leave the grid untouched and return `None`.
pub fn apply_named_pattern(grid: &mut Grid, name: &str) -> Option<Pattern> {
    let pattern = name.parse::<Pattern>().ok()?;
    apply_pattern(grid, pattern);
    Some(pattern)
}

/// Create an all-dead `size` × `size` grid seeded with `pattern`
pub fn seeded(size: usize, pattern: Pattern) -> Grid {
    let mut grid = Grid::new(size);
    apply_pattern(&mut grid, pattern);
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_fits_default_grid() {
        for pattern in Pattern::ALL {
            let mut grid = Grid::new(crate::types::DEFAULT_GRID_SIZE);
            let placed = apply_pattern(&mut grid, pattern);
            assert_eq!(placed, pattern_cells(pattern).len(), "{pattern}");
            assert_eq!(grid.population(), placed);
        }
    }

    #[test]
    fn test_small_grid_clips_pattern() {
        let mut grid = Grid::new(5);
        // Tetris sits on rows 4 and 5; only (4, 4) fits.
        assert_eq!(apply_pattern(&mut grid, Pattern::Tetris), 1);
        assert!(grid.is_alive(4, 4));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_named_pattern_unknown_is_noop() {
        let mut grid = Grid::new(10);
        assert_eq!(apply_named_pattern(&mut grid, "h"), None);
        assert_eq!(apply_named_pattern(&mut grid, "blinker"), None);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_named_pattern_known() {
        let mut grid = Grid::new(10);
        assert_eq!(
            apply_named_pattern(&mut grid, "glider"),
            Some(Pattern::Glider)
        );
        assert_eq!(grid, seeded(10, Pattern::Glider));
    }
}
