//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the Game of Life rules and the seed patterns.
//! It has **zero dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: the same seed always evolves the same way
//! - **Testable**: every rule can be checked on literal grids
//! - **Portable**: usable from the terminal frontend, tests and benches alike
//!
//! # Module Structure
//!
//! - [`grid`]: bounded N×N grid, neighbor counting and the step function
//! - [`patterns`]: coordinates of the seed patterns and the loader
//!
//! # Rules
//!
//! - The grid is bounded: cells outside it do not exist (no wraparound)
//! - A live cell with 2 or 3 live neighbors survives, otherwise it dies
//! - A dead cell with exactly 3 live neighbors is born
//! - All cells update at once, from the same previous generation
//!
//! # Example
//!
//! ```
//! use tui_life_core::{seeded, step};
//! use tui_life_types::Pattern;
//!
//! let grid = seeded(10, Pattern::Glider);
//! let next = step(&grid);
//! assert_eq!(next.population(), 5);
//! ```

pub mod grid;
pub mod patterns;

pub use tui_life_types as types;

// Re-export commonly used items for convenience
pub use grid::{count_neighbors, next_state, step, Grid};
pub use patterns::{apply_named_pattern, apply_pattern, pattern_cells, seeded};
