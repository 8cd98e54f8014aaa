//! Terminal rendering module.
//!
//! A small rendering layer for the Life terminal frontend. Views draw into a
//! plain framebuffer which the renderer flushes to the terminal, so everything
//! except the final flush can be unit-tested.
//!
//! - [`fb`]: styled character framebuffer
//! - [`grid_view`]: grid plus status line, two columns per cell
//! - [`prompt_view`]: scrolling pattern prompt
//! - [`renderer`]: diffing crossterm renderer and the color-support check

pub mod fb;
pub mod grid_view;
pub mod prompt_view;
pub mod renderer;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use grid_view::{GridView, RunStatus, Viewport};
pub use prompt_view::PromptView;
pub use renderer::{
    detect_color_count, encode_diff_into, encode_full_into, ensure_color_support, ColorMode,
    TerminalRenderer, MIN_COLORS,
};
