//! Pattern prompt: a tiny line editor plus the choice rules.
//!
//! The terminal runs in raw mode, so echoing and line assembly happen here.
//! Finished lines are appended to a transcript that the prompt screen renders
//! above the live input line, the way a cooked-mode console would scroll.

use crate::types::{InputAction, Pattern, HELP_COMMAND, HELP_TEXT, PROMPT_TEXT};

/// Longest line the prompt accepts
pub const MAX_INPUT_LEN: usize = 64;

/// What a finished line asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Help,
    Pattern(Pattern),
    Invalid,
}

/// Classify a submitted line.
///
/// ```
/// use tui_life_engine::prompt::{evaluate_choice, Choice};
/// use tui_life_types::Pattern;
///
/// assert_eq!(evaluate_choice("h"), Choice::Help);
/// assert_eq!(evaluate_choice("tetris"), Choice::Pattern(Pattern::Tetris));
/// assert_eq!(evaluate_choice("pulsar"), Choice::Invalid);
/// ```
pub fn evaluate_choice(line: &str) -> Choice {
    if line == HELP_COMMAND {
        return Choice::Help;
    }
    match line.parse::<Pattern>() {
        Ok(pattern) => Choice::Pattern(pattern),
        Err(_) => Choice::Invalid,
    }
}

/// Result of feeding one input action to the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    /// The line is still being edited
    Editing,
    /// Help was printed; prompt again
    HelpShown,
    /// The line did not name a pattern; prompt again without feedback
    Rejected(String),
    /// A pattern was chosen
    Chosen(Pattern),
    /// The user asked to leave
    Quit,
}

#[derive(Debug, Clone, Default)]
pub struct PatternPrompt {
    input: String,
    transcript: Vec<String>,
}

impl PatternPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Characters typed on the current line
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Finished lines, oldest first
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn handle(&mut self, action: InputAction) -> PromptEvent {
        match action {
            InputAction::Insert(ch) => {
                if !ch.is_control() && self.input.chars().count() < MAX_INPUT_LEN {
                    self.input.push(ch);
                }
                PromptEvent::Editing
            }
            InputAction::Backspace => {
                self.input.pop();
                PromptEvent::Editing
            }
            InputAction::Submit => self.submit(),
            InputAction::Quit => PromptEvent::Quit,
            InputAction::Resize | InputAction::Other => PromptEvent::Editing,
        }
    }

    fn submit(&mut self) -> PromptEvent {
        let line = std::mem::take(&mut self.input);
        self.transcript.push(format!("{PROMPT_TEXT}{line}"));

        match evaluate_choice(&line) {
            Choice::Help => {
                self.transcript.push(HELP_TEXT.to_string());
                self.transcript.push(String::new());
                PromptEvent::HelpShown
            }
            Choice::Pattern(pattern) => PromptEvent::Chosen(pattern),
            Choice::Invalid => PromptEvent::Rejected(line),
        }
    }
}
