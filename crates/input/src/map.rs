//! Key mapping from terminal events to game actions.

use crate::types::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys shared by both games: movement, pause and terminate.
fn common_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Down),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::Pause),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Terminate),
        _ => None,
    }
}

/// Map keyboard input to falling-block actions.
///
/// Up, W and space rotate (`Primary`); Down and S hard-drop.
pub fn tetris_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char(' ') => {
            Some(Action::Primary)
        }
        _ => common_action(key),
    }
}

/// Map keyboard input to snake actions.
///
/// Arrows and WASD steer; E and space toggle boost (`Primary`).
pub fn snake_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::Up),
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Char(' ') => Some(Action::Primary),
        _ => common_action(key),
    }
}

/// Ctrl+C leaves the program immediately, whatever the game state.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
