//! GridView: maps a Life grid into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Grid;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::Pattern;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Status shown under the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    pub pattern: Pattern,
    pub generation: u64,
}

/// Draws the grid anchored at the top-left corner, one status line below.
pub struct GridView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
}

impl Default for GridView {
    fn default() -> Self {
        // Two columns per cell keeps cells roughly square in most fonts.
        Self { cell_w: 2 }
    }
}

impl GridView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        grid: &Grid,
        status: Option<RunStatus>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        for (row, cells) in grid.rows().enumerate() {
            let Ok(y) = u16::try_from(row) else { break };
            if y >= viewport.height {
                break;
            }
            for (col, &alive) in cells.iter().enumerate() {
                if !alive {
                    continue;
                }
                let Some(x) = u16::try_from(col)
                    .ok()
                    .and_then(|c| c.checked_mul(self.cell_w))
                else {
                    break;
                };
                fb.fill_rect(x, y, self.cell_w, 1, ' ', CellStyle::LIVE);
            }
        }

        if let Some(status) = status {
            let y = u16::try_from(grid.size()).unwrap_or(u16::MAX);
            let line = format!(
                "generation {} | {} | {} alive | q to quit",
                status.generation,
                status.pattern,
                grid.population()
            );
            fb.put_str(0, y, &line, CellStyle::TEXT.with_bold(true));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        grid: &Grid,
        status: Option<RunStatus>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, status, viewport, &mut fb);
        fb
    }
}
