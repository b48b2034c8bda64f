//! Key mapping from terminal events to game and menu actions.

use crate::types::{GameAction, GameStatus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// UI actions that drive the status state machine rather than the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Start a new game (also restart / try again).
    Start,
    /// Leave the pause screen without resetting.
    Resume,
    Quit,
}

/// Map keyboard input to gameplay actions.
///
/// Only meaningful while playing; the caller decides whether to apply them.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::Rotate),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        _ => None,
    }
}

/// Map keyboard input to overlay actions for the current status.
///
/// Start works from the menu, pause and game-over screens; resume only from
/// the pause screen. Quit works everywhere.
pub fn handle_menu_key(key: KeyEvent, status: GameStatus) -> Option<MenuAction> {
    if should_quit(key) {
        return Some(MenuAction::Quit);
    }
    if status == GameStatus::Playing {
        return None;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => Some(MenuAction::Start),
        KeyCode::Char('r') | KeyCode::Char('R') if status == GameStatus::Paused => {
            Some(MenuAction::Resume)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
