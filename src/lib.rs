//! Neo Tetris (workspace facade crate).
//!
//! Re-exports the implementation crates under `crates/` as
//! `neo_tetris::{core, engine, input, term, types}` and adds the pieces the
//! binary needs on top: environment configuration and the snapshot recorder.

pub use neo_tetris_core as core;
pub use neo_tetris_engine as engine;
pub use neo_tetris_input as input;
pub use neo_tetris_term as term;
pub use neo_tetris_types as types;

pub mod config;
pub mod recorder;

pub use config::GameConfig;
pub use recorder::SnapshotRecorder;
