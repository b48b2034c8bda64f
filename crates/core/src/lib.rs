//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has no
//! dependencies on terminal, timing, or I/O, so the same seed replays the
//! same game in tests, benches and the binary.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of locked cells, stamping and line clearing
//! - [`collision`]: shape-vs-board checks and drop distance
//! - [`game_state`]: the session state machine and every gameplay action
//! - [`pieces`]: tetromino matrices, clockwise rotation, wall kick offsets
//! - [`rng`]: seeded uniform piece generator
//! - [`scoring`]: line points, combo bonus, levels and gravity intervals
//! - [`snapshot`]: read-only view of a session for renderers and logs
//!
//! # Rules
//!
//! - Pieces spawn at column 4, row 0; a blocked spawn ends the game.
//! - Rotation is clockwise only, with horizontal kicks 0, -1, +1, -2, +2.
//! - There is no lock delay: a blocked downward move locks immediately.
//! - A clear of N lines scores `[0, 100, 300, 500, 800][N] * level`, plus
//!   `combo * 50` for consecutive clearing locks.
//! - A hard drop that clears nothing scores 2 points per row fallen.
//! - One level per 10 lines; gravity is `max(100, 800 - (level - 1) * 50)` ms.
//!
//! # Example
//!
//! ```
//! use neo_tetris_core::GameState;
//! use neo_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.shake_trigger(), 1);
//! assert_eq!(game.piece_id(), 2);
//! ```
//!
//! Gravity is not applied here; a driver (see `neo-tetris-engine`) calls
//! [`GameState::gravity_drop`] once per elapsed drop interval.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use neo_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{collides, drop_distance, landing_y};
pub use game_state::{ActivePiece, GameState, MoveOutcome};
pub use pieces::{get_shape, Shape, Tetromino, WALL_KICKS};
pub use rng::PieceGenerator;
pub use scoring::{calculate_score, get_drop_interval_ms, ScoreResult};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
