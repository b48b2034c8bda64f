//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] for the
//! falling piece and [`MenuAction`] for the overlay screens. Each key press
//! maps to at most one action; there is no auto-repeat handling beyond what
//! the terminal delivers.

pub mod map;

pub use neo_tetris_types as types;

pub use map::{handle_key_event, handle_menu_key, should_quit, MenuAction};
