//! Input handling - convert key events to game input tokens
//!
//! The core consumes single-character tokens; arrow keys are folded onto the
//! vi keys before they reach it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Convert a key event to the token the game understands.
///
/// Releases and Ctrl combos yield nothing, except Ctrl+C which quits.
pub fn key_to_token(key: KeyEvent) -> Option<char> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some('q'),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left => Some('h'),
        KeyCode::Down => Some('j'),
        KeyCode::Up => Some('k'),
        KeyCode::Right => Some('l'),
        KeyCode::Esc => Some('q'),
        KeyCode::Char(c) => Some(c),
        _ => None,
    }
}
