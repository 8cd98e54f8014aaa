//! Key mapping from terminal events to input actions.

use crate::types::InputAction;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map any terminal event to an input action.
///
/// Only key presses and resizes matter; key releases, auto-repeat, mouse and
/// focus events are dropped.
pub fn handle_event(event: &Event) -> Option<InputAction> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(handle_key_event(*key)),
        Event::Resize(_, _) => Some(InputAction::Resize),
        _ => None,
    }
}

/// Map a key press to an input action.
pub fn handle_key_event(key: KeyEvent) -> InputAction {
    if should_quit(key) {
        return InputAction::Quit;
    }

    match key.code {
        KeyCode::Enter => InputAction::Submit,
        KeyCode::Backspace => InputAction::Backspace,
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            InputAction::Insert(ch)
        }
        _ => InputAction::Other,
    }
}

/// Check if key should quit the program in any phase.
///
/// Plain `q` is not included: it is a valid character at the prompt.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::F(1))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
