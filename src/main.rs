//! Terminal Game of Life runner (default binary).
//!
//! Asks for a seed pattern, then shows one generation per interval until the
//! user quits. Rendering goes through a framebuffer-based crossterm renderer.

mod logging;
mod terminal;

use anyhow::Result;
use tracing::info;

use tui_life::engine::{RunConfig, Runner};
use tui_life::term::{detect_color_count, ensure_color_support};

use crate::terminal::TerminalFrontend;

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    // Exits with status 1 and the diagnostic before touching the screen.
    let colors = detect_color_count();
    let mode = ensure_color_support(colors)?;
    info!(colors, ?mode, ?config, "starting");

    let mut frontend = TerminalFrontend::new(mode);
    frontend.enter()?;

    let result = Runner::new(config).run(&mut frontend);

    // Always try to restore terminal state.
    logging::report_restore(frontend.exit());
    result.map(|_| ())
}
