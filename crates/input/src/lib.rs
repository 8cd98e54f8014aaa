//! Terminal input module.
//!
//! Maps `crossterm` events into [`InputAction`](crate::types::InputAction)s.
//! What an action means (editing the prompt, advancing a generation, quitting)
//! is decided by the engine for the current phase.

pub mod map;

pub use tui_life_types as types;

pub use map::{handle_event, handle_key_event, should_quit};
