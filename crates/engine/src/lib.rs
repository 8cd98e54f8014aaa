//! Engine: session state machine and the run loop.
//!
//! - [`config`]: run configuration from the environment
//! - [`prompt`]: pattern prompt line editor and choice rules
//! - [`session`]: `AwaitingPatternChoice -> Running` state machine
//! - [`runner`]: display / wait / advance loop over a [`Frontend`]
//!
//! The engine performs no terminal I/O itself; frontends draw [`Screen`]s and
//! deliver [`InputAction`](tui_life_types::InputAction)s.

pub mod config;
pub mod prompt;
pub mod runner;
pub mod session;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use config::{Pacing, RunConfig};
pub use prompt::{evaluate_choice, Choice, PatternPrompt, PromptEvent};
pub use runner::{ExitReason, Frontend, RunSummary, Runner};
pub use session::{Phase, RunningCommand, Screen, Session};
