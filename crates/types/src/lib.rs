//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, making them usable in any
//! context (core rules, terminal rendering, session logs).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: (4, 0), horizontally centered
//!
//! # Drop Intervals by Level
//!
//! Gravity speeds up by 50ms per level and is clamped at 100ms:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 800ms |
//! | 2 | 750ms |
//! | 10 | 350ms |
//! | 15+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use neo_tetris_types::{Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.as_str(), "T");
//! assert_eq!(PieceKind::T.color(), Color::from_hex(0xa855f7));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn column of the top-left shape anchor
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Spawn row of the top-left shape anchor
pub const SPAWN_Y: i8 = 0;

/// Frame interval of the default runner (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval at level 1
pub const BASE_DROP_MS: u32 = 800;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 50;

/// Fastest gravity interval
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines required per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points for clearing 0..=4 lines, multiplied by the current level.
pub const LINE_POINTS: [u32; 5] = [0, 100, 300, 500, 800];

/// Bonus per combo step (added without level multiplier)
pub const COMBO_BONUS: u32 = 50;

/// Points per row for hard drops that clear nothing
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Duration of the visual shake after a hard drop
pub const SHAKE_DURATION_MS: u32 = 200;

/// Combo counter value meaning "no active combo"
pub const NO_COMBO: i32 = -1;


/// 24-bit RGB color of a locked cell or piece.
///
/// Serialized as a `"#rrggbb"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse a `#rrggbb` string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_hex)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color: {s}")))
    }
}

/// Display palette
pub mod palette {
    use super::Color;

    pub const I: Color = Color::from_hex(0x06b6d4);
    pub const J: Color = Color::from_hex(0x3b82f6);
    pub const L: Color = Color::from_hex(0xf97316);
    pub const O: Color = Color::from_hex(0xeab308);
    pub const S: Color = Color::from_hex(0x22c55e);
    pub const T: Color = Color::from_hex(0xa855f7);
    pub const Z: Color = Color::from_hex(0xef4444);
    pub const GHOST: Color = Color::from_hex(0xffffff);
    pub const GRID: Color = Color::from_hex(0x1e293b);
}

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Purple, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Uppercase letter, as shown in the HUD.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Fixed display color of this kind.
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => palette::I,
            PieceKind::J => palette::J,
            PieceKind::L => palette::L,
            PieceKind::O => palette::O,
            PieceKind::S => palette::S,
            PieceKind::T => palette::T,
            PieceKind::Z => palette::Z,
        }
    }
}

/// Session status
///
/// Menu → Playing ⇄ Paused, Playing → GameOver; `start` restarts from any
/// status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Menu => "MENU",
            GameStatus::Playing => "PLAYING",
            GameStatus::Paused => "PAUSED",
            GameStatus::GameOver => "GAME_OVER",
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, GameStatus::Playing)
    }
}

/// Game actions produced by key input
///
/// These are only honored while the session is [`GameStatus::Playing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (locks when blocked)
    SoftDrop,
    /// Instantly drop piece to lowest valid position and lock
    HardDrop,
    /// Rotate piece 90° clockwise with horizontal kicks
    Rotate,
    /// Pause the session
    Pause,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a locked piece of that color
///
/// Only the color survives a lock; the piece kind is not recorded.
pub type Cell = Option<Color>;

/// Event recorded after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points from the line clear including the combo bonus.
    pub line_clear_score: u32,
    /// Fall-distance bonus of a non-clearing hard drop.
    pub drop_bonus: u32,
    pub combo: i32,
    pub hard_drop: bool,
}
