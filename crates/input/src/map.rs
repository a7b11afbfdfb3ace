//! Key mapping from terminal events to game actions.
//!
//! Controls are fixed: space jumps; `q`, `Esc` and `Ctrl-C` quit. Raw mode
//! swallows SIGINT, so `Ctrl-C` has to be handled as a key here.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Key releases and unbound keys map to `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    match key.code {
        KeyCode::Char(' ') => Some(GameAction::Jump),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
