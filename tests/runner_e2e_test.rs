//! End-to-end runs of the engine with a headless frontend that renders every
//! frame through the real terminal views.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;

use tui_life::core::seeded;
use tui_life::engine::{ExitReason, Frontend, Pacing, RunConfig, Runner, Screen};
use tui_life::term::{CellStyle, FrameBuffer, GridView, PromptView, RunStatus, Viewport};
use tui_life::types::{InputAction, Pattern, HELP_TEXT, PROMPT_TEXT};

const VIEWPORT: Viewport = Viewport {
    width: 60,
    height: 16,
};

struct Headless {
    script: VecDeque<Option<InputAction>>,
    frames: Vec<FrameBuffer>,
    timeouts: Vec<Option<Duration>>,
}

impl Headless {
    fn new(script: Vec<Option<InputAction>>) -> Self {
        Self {
            script: script.into(),
            frames: Vec::new(),
            timeouts: Vec::new(),
        }
    }

    fn last_frame(&self) -> &FrameBuffer {
        self.frames.last().expect("at least one frame")
    }
}

impl Frontend for Headless {
    fn show(&mut self, screen: Screen<'_>) -> Result<()> {
        let fb = match screen {
            Screen::Prompt { transcript, input } => PromptView.render(transcript, input, VIEWPORT),
            Screen::Running {
                grid,
                pattern,
                generation,
            } => GridView::default().render(
                grid,
                Some(RunStatus {
                    pattern,
                    generation,
                }),
                VIEWPORT,
            ),
        };
        self.frames.push(fb);
        Ok(())
    }

    fn wait(&mut self, timeout: Option<Duration>) -> Result<Option<InputAction>> {
        self.timeouts.push(timeout);
        Ok(self.script.pop_front().unwrap_or(Some(InputAction::Quit)))
    }
}

fn typed(text: &str) -> Vec<Option<InputAction>> {
    text.chars()
        .map(|ch| Some(InputAction::Insert(ch)))
        .chain([Some(InputAction::Submit)])
        .collect()
}

fn live_cells_in(fb: &FrameBuffer, size: u16) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for row in 0..size {
        for col in 0..size {
            if fb.get(col * 2, row).is_some_and(|c| c.style == CellStyle::LIVE) {
                cells.push((row as usize, col as usize));
            }
        }
    }
    cells
}

#[test]
fn help_then_invalid_then_glider() {
    let mut script = typed("h");
    script.extend(typed("pulsar"));
    script.extend(typed("glider"));
    script.push(Some(InputAction::Insert('q')));

    let mut fe = Headless::new(script);
    let summary = Runner::new(RunConfig::default()).run(&mut fe).unwrap();

    assert_eq!(summary.pattern, Some(Pattern::Glider));
    assert_eq!(summary.exit, ExitReason::Quit);
    assert_eq!(summary.generations, 0);

    // Last prompt frame before the grid: help shown once, invalid line echoed
    // with no message of its own.
    let prompt = &fe.frames[fe.frames.len() - 2];
    assert_eq!(prompt.row_text(0).trim_end(), format!("{PROMPT_TEXT}h"));
    assert_eq!(prompt.row_text(1).trim_end(), HELP_TEXT);
    assert_eq!(prompt.row_text(2).trim_end(), "");
    assert_eq!(prompt.row_text(3).trim_end(), format!("{PROMPT_TEXT}pulsar"));
    assert!(prompt.row_text(4).starts_with(&format!("{PROMPT_TEXT}glider")));

    let running = fe.last_frame();
    let expected: Vec<_> = seeded(10, Pattern::Glider).live_cells().collect();
    assert_eq!(live_cells_in(running, 10), expected);
    assert!(running.row_text(10).starts_with("generation 0 | glider | 5 alive"));
}

#[test]
fn timed_pacing_uses_configured_interval() {
    let config = RunConfig {
        pacing: Pacing::Timed(Duration::from_millis(1000)),
        max_generations: Some(2),
        ..RunConfig::default()
    };
    let mut script = typed("tetris");
    script.extend([None, None]);

    let mut fe = Headless::new(script);
    let summary = Runner::new(config).run(&mut fe).unwrap();

    assert_eq!(summary.exit, ExitReason::GenerationLimit);
    assert_eq!(summary.generations, 2);

    // Prompt waits block; running waits are bounded by the interval.
    let running_waits = &fe.timeouts[fe.timeouts.len() - 2..];
    for timeout in running_waits {
        let timeout = timeout.expect("timed wait");
        assert!(timeout <= Duration::from_millis(1000));
    }
    assert!(fe.timeouts[..7].iter().all(Option::is_none));

    let frame = fe.last_frame();
    assert_eq!(
        live_cells_in(frame, 10),
        vec![(3, 4), (4, 3), (4, 5), (6, 3), (6, 4), (6, 5)]
    );
    assert!(frame.row_text(10).starts_with("generation 2 | tetris | 6 alive"));
}

#[test]
fn grid_size_from_config_is_used() {
    let config = RunConfig {
        grid_size: 4,
        max_generations: Some(0),
        ..RunConfig::default()
    };
    let mut fe = Headless::new(typed("tetris"));
    let summary = Runner::new(config).run(&mut fe).unwrap();

    assert_eq!(summary.exit, ExitReason::GenerationLimit);
    // Tetris needs rows 4 and 5; nothing fits on a 4×4 grid.
    let frame = fe.last_frame();
    assert!(live_cells_in(frame, 4).is_empty());
    assert!(frame.row_text(4).starts_with("generation 0 | tetris | 0 alive"));
}

#[test]
fn quit_key_at_prompt_is_plain_text() {
    // `q` is typed into the prompt; only Quit leaves.
    let mut script = typed("q");
    script.push(Some(InputAction::Quit));

    let mut fe = Headless::new(script);
    let summary = Runner::new(RunConfig::default()).run(&mut fe).unwrap();
    assert_eq!(summary.pattern, None);
    assert_eq!(
        fe.last_frame().row_text(0).trim_end(),
        format!("{PROMPT_TEXT}q")
    );
}
