//! Game state module - manages the complete session state
//!
//! This module ties together the board, the piece catalog, collision checks
//! and scoring. It owns the status state machine and every mutation of the
//! session: spawn, move, rotate, soft/hard drop, lock and line clears.
//!
//! Invalid operations (wrong status, no active piece, blocked moves) are
//! silent no-ops. The only terminal condition is a spawn collision, which
//! moves the session to [`GameStatus::GameOver`].

use tracing::{debug, info};

use crate::board::Board;
use crate::collision::{collides, drop_distance};
use crate::pieces::{Tetromino, WALL_KICKS};
use crate::rng::PieceGenerator;
use crate::scoring::{
    calculate_hard_drop_bonus, calculate_level, calculate_score, get_drop_interval_ms,
};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// The falling piece: a catalog piece plus its top-left anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub tetromino: Tetromino,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Place `tetromino` at the spawn anchor
    pub fn spawn(tetromino: Tetromino) -> Self {
        Self {
            tetromino,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Place a fresh template of `kind` at (x, y)
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            tetromino: Tetromino::new(kind),
            x,
            y,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.tetromino.kind
    }

    /// Whether the piece overlaps walls, floor or locked cells where it is
    pub fn collides(&self, board: &Board) -> bool {
        collides(self.x, self.y, &self.tetromino.shape, board)
    }

    fn offset(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }
}

/// Result of a single move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Not playing, or no active piece
    Ignored,
    /// Candidate position was free; the piece moved
    Moved,
    /// A downward move was blocked; the piece locked
    Locked,
    /// A sideways move was blocked; nothing changed
    Blocked,
}

impl MoveOutcome {
    /// Whether the session state changed
    pub fn changed(self) -> bool {
        matches!(self, MoveOutcome::Moved | MoveOutcome::Locked)
    }
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    next: Tetromino,
    generator: PieceGenerator,
    status: GameStatus,
    score: u32,
    level: u32,
    lines: u32,
    /// -1 = no combo; otherwise consecutive clearing locks minus one.
    combo: i32,
    /// Edge-triggered visual signal; never reset.
    shake_trigger: u32,
    /// Monotonic session id (increments on every start).
    episode_id: u32,
    /// Monotonic id for spawned pieces (increments only on successful spawn).
    piece_id: u32,
    /// Bumped on every mutation; observers compare it to detect changes.
    revision: u64,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a session in the menu, with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_generator(PieceGenerator::new(seed))
    }

    /// Create a session in the menu using `generator` for all draws
    pub fn with_generator(mut generator: PieceGenerator) -> Self {
        let next = generator.random_piece();
        Self {
            board: Board::new(),
            active: None,
            next,
            generator,
            status: GameStatus::Menu,
            score: 0,
            level: 1,
            lines: 0,
            combo: NO_COMBO,
            shake_trigger: 0,
            episode_id: 0,
            piece_id: 0,
            revision: 0,
            last_event: None,
        }
    }

    /// Start (or restart) a game: full reset, then spawn the first piece.
    ///
    /// Valid from every status. The shake counter is kept.
    pub fn start(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.combo = NO_COMBO;
        self.last_event = None;
        self.next = self.generator.random_piece();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.status = GameStatus::Playing;
        info!(episode = self.episode_id, seed = self.generator.seed(), "game started");
        self.spawn_piece();
        self.touch();
    }

    /// Playing -> Paused. Returns false (no-op) from any other status.
    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.status = GameStatus::Paused;
        debug!("paused");
        self.touch();
        true
    }

    /// Paused -> Playing without reset. Returns false (no-op) otherwise.
    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.status = GameStatus::Playing;
        debug!("resumed");
        self.touch();
        true
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status.is_playing()
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn combo(&self) -> i32 {
        self.combo
    }

    pub fn shake_trigger(&self) -> u32 {
        self.shake_trigger
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_piece(&self) -> Tetromino {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for tests and puzzle setups.
    pub fn board_mut(&mut self) -> &mut Board {
        self.touch();
        &mut self.board
    }

    /// Replace the active piece (tests and puzzle setups).
    pub fn set_active(&mut self, piece: Option<ActivePiece>) {
        self.active = piece;
        self.touch();
    }

    /// Replace the queued next piece (tests and puzzle setups).
    pub fn set_next(&mut self, kind: PieceKind) {
        self.next = Tetromino::new(kind);
        self.touch();
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> u32 {
        get_drop_interval_ms(self.level)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next;
        out.status = self.status;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.combo = self.combo;
        out.shake_trigger = self.shake_trigger;
        out.drop_interval_ms = self.drop_interval_ms();
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
        out.seed = self.generator.seed();
        out.revision = self.revision;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the next piece to active at the spawn anchor.
    ///
    /// A collision at spawn ends the game and clears the active piece; this
    /// is the only game-over trigger. Returns whether a piece was spawned.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.next);

        if piece.collides(&self.board) {
            self.active = None;
            self.status = GameStatus::GameOver;
            info!(
                score = self.score,
                level = self.level,
                lines = self.lines,
                "game over"
            );
            self.touch();
            return false;
        }

        self.active = Some(piece);
        self.next = self.generator.random_piece();
        self.piece_id = self.piece_id.wrapping_add(1);
        debug!(kind = piece.kind().as_str(), next = self.next.kind.as_str(), "spawned");
        self.touch();
        true
    }

    /// Try to move the active piece by (dx, dy).
    ///
    /// A blocked downward move locks the piece; a blocked sideways move is
    /// rejected silently.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> MoveOutcome {
        if !self.is_playing() {
            return MoveOutcome::Ignored;
        }
        let Some(active) = self.active else {
            return MoveOutcome::Ignored;
        };

        let candidate = active.offset(dx, dy);
        if !candidate.collides(&self.board) {
            self.active = Some(candidate);
            self.touch();
            return MoveOutcome::Moved;
        }

        if dy > 0 {
            self.lock_piece(None);
            return MoveOutcome::Locked;
        }

        MoveOutcome::Blocked
    }

    /// Manual soft drop: one row down, locking when blocked.
    pub fn soft_drop(&mut self) -> MoveOutcome {
        self.try_move(0, 1)
    }

    /// Gravity step issued by the game loop. Same rules as a soft drop.
    pub fn gravity_drop(&mut self) -> MoveOutcome {
        self.try_move(0, 1)
    }

    /// Rotate the active piece clockwise with horizontal wall kicks.
    ///
    /// Offsets are tried in order 0, -1, +1, -2, +2; if none is free the
    /// rotation is abandoned and nothing changes.
    pub fn try_rotate(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = ActivePiece {
            tetromino: active.tetromino.rotated(),
            ..active
        };

        for &dx in WALL_KICKS.iter() {
            let candidate = rotated.offset(dx, 0);
            if !candidate.collides(&self.board) {
                self.active = Some(candidate);
                self.touch();
                return true;
            }
        }

        false
    }

    /// Drop the active piece to its lowest free row and lock it at once.
    ///
    /// Always bumps the shake trigger by one. A drop whose lock clears no
    /// lines earns 2 points per row fallen. Returns the fall distance, or
    /// `None` when ignored.
    pub fn hard_drop(&mut self) -> Option<u32> {
        if !self.is_playing() {
            return None;
        }
        let active = self.active?;

        let distance = drop_distance(active.x, active.y, &active.tetromino.shape, &self.board);
        self.active = Some(ActivePiece {
            y: active.y.saturating_add(distance as i8),
            ..active
        });

        self.shake_trigger = self.shake_trigger.wrapping_add(1);
        self.lock_piece(Some(distance));

        Some(distance)
    }

    /// Lock the active piece onto the board, clear lines, score, and spawn.
    ///
    /// `hard_drop` carries the fall distance when the lock comes from a hard
    /// drop.
    fn lock_piece(&mut self, hard_drop: Option<u32>) {
        let Some(active) = self.active.take() else {
            return;
        };

        // Cells above row 0 are clipped away.
        self.board.stamp(
            &active.tetromino.shape,
            active.x,
            active.y,
            active.tetromino.color,
        );

        let lines_cleared = self.board.clear_full_rows().len();

        let mut line_clear_score = 0;
        let mut drop_bonus = 0;
        if lines_cleared > 0 {
            self.combo += 1;

            // Scored at the level in effect before this clear.
            let result = calculate_score(lines_cleared, self.level, self.combo);
            self.score = self.score.saturating_add(result.total);
            line_clear_score = result.total;

            self.lines += lines_cleared as u32;
            let next_level = calculate_level(self.lines);
            if next_level > self.level {
                info!(level = next_level, lines = self.lines, "level up");
                self.level = next_level;
            }

            debug!(
                lines = lines_cleared,
                combo = self.combo,
                points = result.total,
                "lines cleared"
            );
        } else {
            self.combo = NO_COMBO;
            if let Some(distance) = hard_drop {
                drop_bonus = calculate_hard_drop_bonus(distance);
                self.score = self.score.saturating_add(drop_bonus);
            }
        }

        self.last_event = Some(LockEvent {
            lines_cleared: lines_cleared as u32,
            line_clear_score,
            drop_bonus,
            combo: self.combo,
            hard_drop: hard_drop.is_some(),
        });

        self.touch();
        self.spawn_piece();
    }

    /// Last lock event (not consumed)
    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a key-derived action. Only honored while playing.
    ///
    /// Returns whether the session state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.is_playing() {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0).changed(),
            GameAction::MoveRight => self.try_move(1, 0).changed(),
            GameAction::SoftDrop => self.soft_drop().changed(),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::Rotate => self.try_rotate(),
            GameAction::Pause => self.pause(),
        }
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
