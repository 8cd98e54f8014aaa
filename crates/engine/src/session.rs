//! Session state machine.
//!
//! ```text
//! AwaitingPatternChoice --(valid pattern name)--> Running
//! ```
//!
//! `Running` is terminal: once a pattern is chosen the session only advances
//! generations. Leaving the program is the runner's business.

use tracing::{debug, info};

use crate::core::{seeded, Grid};
use crate::prompt::{PatternPrompt, PromptEvent};
use crate::types::{InputAction, Pattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingPatternChoice,
    Running { pattern: Pattern },
}

/// What a key press means while the simulation is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunningCommand {
    Quit,
    Redraw,
    /// Advance one generation (only used in manual pacing)
    Advance,
}

/// Everything a frontend needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub enum Screen<'a> {
    Prompt {
        transcript: &'a [String],
        input: &'a str,
    },
    Running {
        grid: &'a Grid,
        pattern: Pattern,
        generation: u64,
    },
}

#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    prompt: PatternPrompt,
    grid: Grid,
    /// Double buffer for the next generation
    scratch: Grid,
    generation: u64,
}

impl Session {
    pub fn new(grid_size: usize) -> Self {
        Self {
            phase: Phase::AwaitingPatternChoice,
            prompt: PatternPrompt::new(),
            grid: Grid::new(grid_size),
            scratch: Grid::new(grid_size),
            generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations advanced since the pattern was seeded
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn prompt(&self) -> &PatternPrompt {
        &self.prompt
    }

    pub fn screen(&self) -> Screen<'_> {
        match self.phase {
            Phase::AwaitingPatternChoice => Screen::Prompt {
                transcript: self.prompt.transcript(),
                input: self.prompt.input(),
            },
            Phase::Running { pattern } => Screen::Running {
                grid: &self.grid,
                pattern,
                generation: self.generation,
            },
        }
    }

    /// Feed one input action while awaiting a pattern choice.
    ///
    /// A chosen pattern seeds the grid and moves the session to `Running`.
    /// Input received in any other phase is ignored.
    pub fn handle_prompt_input(&mut self, action: InputAction) -> PromptEvent {
        if self.phase != Phase::AwaitingPatternChoice {
            return PromptEvent::Editing;
        }

        let event = self.prompt.handle(action);
        match &event {
            PromptEvent::Chosen(pattern) => self.start(*pattern),
            PromptEvent::HelpShown => debug!("help requested"),
            PromptEvent::Rejected(line) => debug!(input = %line, "unrecognized pattern name"),
            PromptEvent::Editing | PromptEvent::Quit => {}
        }
        event
    }

    /// Seed a fresh grid with `pattern` and start running.
    pub fn start(&mut self, pattern: Pattern) {
        self.grid = seeded(self.grid.size(), pattern);
        self.generation = 0;
        self.phase = Phase::Running { pattern };
        info!(
            %pattern,
            size = self.grid.size(),
            population = self.grid.population(),
            "pattern chosen"
        );
    }

    /// Interpret a key press while running.
    pub fn running_command(&self, action: InputAction) -> RunningCommand {
        match action {
            InputAction::Quit | InputAction::Insert('q') | InputAction::Insert('Q') => {
                RunningCommand::Quit
            }
            InputAction::Resize => RunningCommand::Redraw,
            InputAction::Insert(_)
            | InputAction::Backspace
            | InputAction::Submit
            | InputAction::Other => RunningCommand::Advance,
        }
    }

    /// Advance one generation. Does nothing before a pattern is chosen.
    pub fn advance(&mut self) {
        if !matches!(self.phase, Phase::Running { .. }) {
            return;
        }
        self.grid.step_into(&mut self.scratch);
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "advanced"
        );
    }
}
