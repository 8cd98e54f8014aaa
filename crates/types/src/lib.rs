//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, so they can be used by the simulation
//! core, the terminal layer and tests alike.
//!
//! # Grid Dimensions
//!
//! The grid is square and bounded (no wraparound):
//!
//! - **Default size**: 10 × 10 cells
//! - **Coordinates**: `(row, col)`, both in `0..size`, row-major
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GENERATION_MS` | 1000 | Pause between two displayed generations |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{Pattern, DEFAULT_GRID_SIZE};
//!
//! let glider: Pattern = "glider".parse().unwrap();
//! assert_eq!(glider, Pattern::Glider);
//! assert_eq!(glider.as_str(), "glider");
//!
//! assert!("blinker".parse::<Pattern>().is_err());
//! assert_eq!(DEFAULT_GRID_SIZE, 10);
//! ```

use std::fmt;
use std::str::FromStr;

/// Default grid side length (10 × 10 cells)
pub const DEFAULT_GRID_SIZE: usize = 10;

/// Upper bound accepted for a configured grid side length
pub const MAX_GRID_SIZE: usize = 512;

/// Default pause between generations in milliseconds
pub const DEFAULT_GENERATION_MS: u64 = 1000;

/// Prompt shown while waiting for a pattern name
pub const PROMPT_TEXT: &str = "Type which automaton to display ('h' for help): ";

/// Input that asks for the list of available patterns
pub const HELP_COMMAND: &str = "h";

/// Line printed in answer to [`HELP_COMMAND`]
pub const HELP_TEXT: &str = "Automata available: glider, tetris.";

/// Diagnostic printed when the terminal cannot render colors
pub const UNSUPPORTED_TERMINAL_TEXT: &str = "Your terminal does not support color";

/// A cell on the grid: `true` is alive, `false` is dead
pub type Cell = bool;

/// Seed patterns that can be stamped onto an empty grid
///
/// - **Glider**: five cells that translate one cell diagonally every 4 generations
/// - **Tetris**: a T-tetromino that grows into a traffic light oscillator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Glider,
    Tetris,
}

impl Pattern {
    /// Every pattern in catalog order
    pub const ALL: [Pattern; 2] = [Pattern::Glider, Pattern::Tetris];

    /// Convert to the lowercase name used at the prompt
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_types::Pattern;
    ///
    /// assert_eq!(Pattern::Glider.as_str(), "glider");
    /// assert_eq!(Pattern::Tetris.as_str(), "tetris");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Glider => "glider",
            Pattern::Tetris => "tetris",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = LifeError;

    /// Parse a pattern name. Only the exact lowercase name matches.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "glider" => Ok(Pattern::Glider),
            "tetris" => Ok(Pattern::Tetris),
            _ => Err(LifeError::UnknownPattern(s.to_string())),
        }
    }
}

/// Terminal-independent input actions
///
/// The input layer maps raw key events into these; the engine decides what each
/// one means in the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// A printable character was typed
    Insert(char),
    /// Delete the last typed character
    Backspace,
    /// Enter was pressed
    Submit,
    /// Leave the program (Ctrl-C, Esc, F1)
    Quit,
    /// The terminal was resized; the next frame must be a full redraw
    Resize,
    /// Any other key press
    Other,
}

/// Errors raised by the simulation and the terminal layer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifeError {
    /// The terminal reports fewer colors than needed to draw live cells
    #[error("Your terminal does not support color ({colors} colors available)")]
    UnsupportedTerminal { colors: u16 },

    /// The name does not match any pattern in the catalog
    #[error("unknown pattern name: {0:?}")]
    UnknownPattern(String),

    /// A row in a textual grid has a different length than the grid side
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A textual grid contains a character other than `#` or `.`
    #[error("invalid cell {ch:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, ch: char },

    /// A textual grid has no rows
    #[error("grid has no rows")]
    EmptyGrid,
}
