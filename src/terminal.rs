//! Crossterm-backed [`Frontend`].

use std::time::Duration;

use anyhow::Result;
use crossterm::event;

use tui_life::engine::{Frontend, Screen};
use tui_life::input::handle_event;
use tui_life::term::{
    ColorMode, FrameBuffer, GridView, PromptView, RunStatus, TerminalRenderer, Viewport,
};
use tui_life::types::InputAction;

pub struct TerminalFrontend {
    renderer: TerminalRenderer,
    fb: FrameBuffer,
    grid_view: GridView,
    prompt_view: PromptView,
}

impl TerminalFrontend {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            renderer: TerminalRenderer::new(mode),
            fb: FrameBuffer::new(0, 0),
            grid_view: GridView::default(),
            prompt_view: PromptView,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Frontend for TerminalFrontend {
    fn show(&mut self, screen: Screen<'_>) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        match screen {
            Screen::Prompt { transcript, input } => {
                self.prompt_view
                    .render_into(transcript, input, viewport, &mut self.fb);
            }
            Screen::Running {
                grid,
                pattern,
                generation,
            } => {
                let status = RunStatus {
                    pattern,
                    generation,
                };
                self.grid_view
                    .render_into(grid, Some(status), viewport, &mut self.fb);
            }
        }
        self.renderer.draw_swap(&mut self.fb)
    }

    fn wait(&mut self, timeout: Option<Duration>) -> Result<Option<InputAction>> {
        loop {
            if let Some(timeout) = timeout {
                if !event::poll(timeout)? {
                    return Ok(None);
                }
            }

            let Some(action) = handle_event(&event::read()?) else {
                // Releases, mouse and focus events: keep waiting. A timed wait
                // returns so the caller can recompute what is left.
                if timeout.is_some() {
                    return Ok(Some(InputAction::Other));
                }
                continue;
            };
            if action == InputAction::Resize {
                self.renderer.invalidate();
            }
            return Ok(Some(action));
        }
    }
}
