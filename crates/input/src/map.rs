//! Terminal key events to game actions.
//!
//! | Action       | Keys                         |
//! |--------------|------------------------------|
//! | move left    | Left, `h`, `a`               |
//! | move right   | Right, `l`, `d`              |
//! | move up      | Up, `k`, `w`                 |
//! | move down    | Down, `j`, `s`               |
//! | toggle pause | Space                        |
//! | reset        | `r`, `o`                     |
//! | quit         | `q`, Esc, Ctrl+C             |
//!
//! Letters match in either case.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::GameAction;

/// Action bound to a key, whatever the event kind.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    let action = match key.code {
        KeyCode::Left => GameAction::MoveLeft,
        KeyCode::Right => GameAction::MoveRight,
        KeyCode::Up => GameAction::MoveUp,
        KeyCode::Down => GameAction::MoveDown,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'h' | 'a' => GameAction::MoveLeft,
            'l' | 'd' => GameAction::MoveRight,
            'k' | 'w' => GameAction::MoveUp,
            'j' | 's' => GameAction::MoveDown,
            ' ' => GameAction::TogglePause,
            'r' | 'o' => GameAction::Reset,
            _ => return None,
        },
        _ => return None,
    };
    Some(action)
}

/// Action for a key press. Repeats and releases map to nothing, so one
/// physical press is one hop.
pub fn action_for_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind != KeyEventKind::Press || should_quit(key) {
        return None;
    }
    handle_key_event(key)
}

/// True for the keys that leave the game.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            c.eq_ignore_ascii_case(&'c')
        }
        KeyCode::Char(c) => c.eq_ignore_ascii_case(&'q'),
        _ => false,
    }
}
