//! Read-only copy of the session state for presentation and logging.
//!
//! The presentation layer never touches `GameState` directly; it renders a
//! `GameSnapshot` taken once per frame.

use serde::{Serialize, Serializer};

use crate::board::Board;
use crate::game_state::ActivePiece;
use crate::pieces::{Shape, Tetromino};
use crate::types::{Color, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.tetromino.kind,
            shape: value.tetromino.shape,
            color: value.tetromino.color,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Option<ActiveSnapshot>,
    pub next: Tetromino,
    pub status: GameStatus,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub combo: i32,
    pub shake_trigger: u32,
    pub drop_interval_ms: u32,
    pub episode_id: u32,
    pub piece_id: u32,
    pub seed: u64,
    pub revision: u64,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status.is_playing()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: Tetromino::new(PieceKind::I),
            status: GameStatus::Menu,
            score: 0,
            level: 1,
            lines: 0,
            combo: -1,
            shake_trigger: 0,
            drop_interval_ms: 0,
            episode_id: 0,
            piece_id: 0,
            seed: 0,
            revision: 0,
        }
    }
}

/// Boards serialize as 20 rows of 10 cells (`null` or `"#rrggbb"`).
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(BOARD_HEIGHT as usize))?;
        for y in 0..BOARD_HEIGHT as usize {
            let start = y * BOARD_WIDTH as usize;
            seq.serialize_element(&self.cells()[start..start + BOARD_WIDTH as usize])?;
        }
        seq.end()
    }
}
