//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and renders into a simple framebuffer that is
//! flushed to the terminal as a diff.
//!
//! - [`GameView`] draws a [`core::GameSnapshot`]: board, ghost, side panel
//!   and the menu / pause / game-over overlays.
//! - [`ShakeEffect`] turns the snapshot's shake counter into a short
//!   horizontal jitter.
//! - [`TerminalRenderer`] owns raw mode and the alternate screen.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod shake;

pub use neo_tetris_core as core;
pub use neo_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{speed_segments, BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use shake::ShakeEffect;
