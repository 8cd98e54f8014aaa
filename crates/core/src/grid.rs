//! Grid module - the bounded Life universe
//!
//! The grid is an N×N square of cells stored as a flat row-major vector.
//! Coordinates: (row, col) where both range over 0..N. There is no wraparound:
//! positions outside the square simply do not exist.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Cell, LifeError};

/// Relative positions of the eight cells surrounding (row, col)
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Character used for a live cell in the text form
pub const ALIVE_CHAR: char = '#';

/// Character used for a dead cell in the text form
pub const DEAD_CHAR: char = '.';

/// A square grid of cells, row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid of `size` × `size` cells
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// Every row must have exactly as many cells as there are rows.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, LifeError> {
        let size = rows.len();
        if size == 0 {
            return Err(LifeError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(LifeError::RaggedRow {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self { size, cells })
    }

    /// Parse the text form: one line per row, `#` alive and `.` dead.
    ///
    /// Blank lines and surrounding indentation are ignored, which keeps
    /// fixtures in tests readable.
    ///
    /// ```
    /// use tui_life_core::Grid;
    ///
    /// let grid = Grid::from_ascii(
    ///     "
    ///     .#.
    ///     .#.
    ///     .#.
    ///     ",
    /// )
    /// .unwrap();
    /// assert_eq!(grid.size(), 3);
    /// assert!(grid.is_alive(1, 1));
    /// assert_eq!(grid.population(), 3);
    /// ```
    pub fn from_ascii(text: &str) -> Result<Self, LifeError> {
        let mut rows = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = rows.len();
            let mut values = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    ALIVE_CHAR => values.push(true),
                    DEAD_CHAR => values.push(false),
                    _ => return Err(LifeError::InvalidCell { row, col, ch }),
                }
            }
            rows.push(values);
        }
        Self::from_rows(rows)
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Get cell at (row, col).
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col).
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, alive: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = alive;
                true
            }
            None => false,
        }
    }

    /// True when (row, col) is inside the grid and alive
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // `chunks_exact(0)` panics, and a zero-sized grid has no rows anyway.
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Iterate over the coordinates of every live cell, row by row
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(idx, _)| (idx / size, idx % size))
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// True when no cell is alive
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// In-bounds positions around (row, col), at most 8.
    pub fn neighbors(&self, row: usize, col: usize) -> ArrayVec<(usize, usize), 8> {
        let mut out = ArrayVec::new();
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if r < self.size && c < self.size {
                out.push((r, c));
            }
        }
        out
    }

    /// Count live neighbors of (row, col); see [`count_neighbors`].
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        count_neighbors(self, row, col)
    }

    /// Write the next generation of `self` into `next`.
    ///
    /// `next` is resized to match when needed, so a scratch grid can be reused
    /// across generations without reallocating.
    pub fn step_into(&self, next: &mut Grid) {
        if next.size != self.size {
            *next = Grid::new(self.size);
        }
        for row in 0..self.size {
            for col in 0..self.size {
                let idx = row * self.size + col;
                next.cells[idx] = next_state(self.cells[idx], count_neighbors(self, row, col));
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                let ch = if alive { ALIVE_CHAR } else { DEAD_CHAR };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Count the live cells among the up-to-8 in-bounds neighbors of (row, col).
///
/// Positions outside the grid are skipped, so a corner cell only ever looks at
/// 3 candidates and an edge cell at 5.
pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    grid.neighbors(row, col)
        .into_iter()
        .filter(|&(r, c)| grid.is_alive(r, c))
        .count() as u8
}

/// Life rule for a single cell (B3/S23).
#[inline]
pub fn next_state(alive: Cell, neighbors: u8) -> Cell {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Compute the next generation of `grid`.
///
/// Every cell is evaluated against the same snapshot; the result is a new grid.
pub fn step(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.size());
    grid.step_into(&mut next);
    next
}
