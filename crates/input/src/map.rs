//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_2048_types::{Direction, GameAction};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::Move(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::Move(Direction::Right)),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
