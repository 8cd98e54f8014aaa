//! Runner: the synchronous display / wait / advance loop.
//!
//! The loop talks to the outside world only through [`Frontend`], so it can be
//! driven by a real terminal or by a scripted frontend in tests.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;

use crate::config::{Pacing, RunConfig};
use crate::prompt::PromptEvent;
use crate::session::{RunningCommand, Screen, Session};
use crate::types::{InputAction, Pattern};

/// Display and input surface used by [`Runner`].
pub trait Frontend {
    /// Draw one frame. Each call replaces whatever was shown before.
    fn show(&mut self, screen: Screen<'_>) -> Result<()>;

    /// Wait for the next input action.
    ///
    /// With `Some(timeout)`, returns `Ok(None)` once the timeout has elapsed
    /// without input; input may arrive (and be returned) earlier. With `None`,
    /// blocks until an action is available.
    fn wait(&mut self, timeout: Option<Duration>) -> Result<Option<InputAction>>;
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    GenerationLimit,
}

impl ExitReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExitReason::Quit => "quit",
            ExitReason::GenerationLimit => "generation_limit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub pattern: Option<Pattern>,
    /// Last generation that was displayed
    pub generations: u64,
    pub exit: ExitReason,
}

enum Paced {
    Advance,
    Quit,
}

pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run a whole session: prompt for a pattern, then display and advance
    /// generations until the user quits or the generation cap is reached.
    pub fn run<F: Frontend>(&self, frontend: &mut F) -> Result<RunSummary> {
        let mut session = Session::new(self.config.grid_size);

        let pattern = loop {
            frontend.show(session.screen())?;
            let Some(action) = frontend.wait(None)? else {
                continue;
            };
            match session.handle_prompt_input(action) {
                PromptEvent::Chosen(pattern) => break pattern,
                PromptEvent::Quit => return Ok(self.finish(&session, None, ExitReason::Quit)),
                PromptEvent::Editing | PromptEvent::HelpShown | PromptEvent::Rejected(_) => {}
            }
        };

        loop {
            frontend.show(session.screen())?;

            if self
                .config
                .max_generations
                .is_some_and(|max| session.generation() >= max)
            {
                return Ok(self.finish(&session, Some(pattern), ExitReason::GenerationLimit));
            }

            match self.pace(frontend, &session)? {
                Paced::Advance => session.advance(),
                Paced::Quit => {
                    return Ok(self.finish(&session, Some(pattern), ExitReason::Quit));
                }
            }
        }
    }

    /// Wait until the next generation is due, handling quit and redraw keys.
    fn pace<F: Frontend>(&self, frontend: &mut F, session: &Session) -> Result<Paced> {
        match self.config.pacing {
            Pacing::Timed(interval) => {
                let deadline = Instant::now() + interval;
                loop {
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    let Some(action) = frontend.wait(Some(remaining))? else {
                        return Ok(Paced::Advance);
                    };
                    match session.running_command(action) {
                        RunningCommand::Quit => return Ok(Paced::Quit),
                        RunningCommand::Redraw => frontend.show(session.screen())?,
                        RunningCommand::Advance => {}
                    }
                    if remaining.is_zero() {
                        return Ok(Paced::Advance);
                    }
                }
            }
            Pacing::Manual => loop {
                let Some(action) = frontend.wait(None)? else {
                    continue;
                };
                match session.running_command(action) {
                    RunningCommand::Quit => return Ok(Paced::Quit),
                    RunningCommand::Redraw => frontend.show(session.screen())?,
                    RunningCommand::Advance => return Ok(Paced::Advance),
                }
            },
        }
    }

    fn finish(&self, session: &Session, pattern: Option<Pattern>, exit: ExitReason) -> RunSummary {
        let summary = RunSummary {
            pattern,
            generations: session.generation(),
            exit,
        };
        info!(
            pattern = pattern.map(|p| p.as_str()).unwrap_or("none"),
            generations = summary.generations,
            population = session.grid().population(),
            reason = exit.as_str(),
            "run finished"
        );
        summary
    }
}
