//! Time-driven helpers on top of `neo-tetris-core`.
//!
//! Core has no notion of time; this crate owns the gravity schedule.

pub mod game_loop;

pub use game_loop::{FrameOutcome, GameLoop};
