//! Integration tests for full game sessions through the public API

use neo_tetris::core::{ActivePiece, GameState, MoveOutcome};
use neo_tetris::types::{Color, GameAction, GameStatus, PieceKind, BOARD_WIDTH};

const STONE: Color = Color::from_hex(0x64748b);

fn playing(seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    state.start();
    state
}

fn fill_row_except(state: &mut GameState, y: i8, gaps: &[i8]) {
    let board = state.board_mut();
    for x in 0..BOARD_WIDTH as i8 {
        if !gaps.contains(&x) {
            board.set(x, y, Some(STONE));
        }
    }
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.status(), GameStatus::Menu);
    assert!(state.active().is_none());

    state.start();
    assert_eq!(state.status(), GameStatus::Playing);
    let active = state.active().unwrap();
    assert_eq!((active.x, active.y), (4, 0));

    assert!(state.apply_action(GameAction::Pause));
    assert_eq!(state.status(), GameStatus::Paused);
    assert!(state.resume());
    assert_eq!(state.status(), GameStatus::Playing);
}

#[test]
fn test_o_piece_falls_to_floor_and_locks() {
    let mut state = playing(12345);
    state.set_active(Some(ActivePiece::at(PieceKind::O, 4, 0)));

    for _ in 0..18 {
        assert_eq!(state.soft_drop(), MoveOutcome::Moved);
    }
    assert_eq!(state.active().unwrap().y, 18);

    assert_eq!(state.soft_drop(), MoveOutcome::Locked);
    assert_eq!(state.board().row_fill_count(19), 2);
    assert_eq!(state.board().row_fill_count(18), 2);
    assert!(state.board().is_occupied(4, 19));
    assert!(state.board().is_occupied(5, 19));
    assert_eq!(state.score(), 0);
    assert_eq!(state.combo(), -1);

    // A fresh piece took its place at the spawn anchor.
    let next = state.active().unwrap();
    assert_eq!((next.x, next.y), (4, 0));
}

#[test]
fn test_o_piece_nineteen_moves_then_once_more() {
    let mut state = playing(12345);
    state.set_active(Some(ActivePiece::at(PieceKind::O, 4, 0)));

    let outcomes: Vec<_> = (0..20).map(|_| state.soft_drop()).collect();

    let mut expected = vec![MoveOutcome::Moved; 18];
    expected.push(MoveOutcome::Locked);
    // The twentieth move acts on the freshly spawned piece.
    expected.push(MoveOutcome::Moved);
    assert_eq!(outcomes, expected);

    assert_eq!(state.board().row_fill_count(19), 2);
    assert_eq!(state.board().row_fill_count(18), 2);
    assert_eq!(state.score(), 0);
    assert_eq!(state.status(), GameStatus::Playing);
}

#[test]
fn test_single_line_completion_scores_by_level() {
    let mut state = playing(12345);
    fill_row_except(&mut state, 19, &[8, 9]);
    state.set_active(Some(ActivePiece::at(PieceKind::O, 8, 0)));

    while state.soft_drop() == MoveOutcome::Moved {}

    assert_eq!(state.score(), 100);
    assert_eq!(state.lines(), 1);
    assert_eq!(state.combo(), 0);
    // The O's top half slid into the bottom row.
    assert_eq!(state.board().row_fill_count(19), 2);
    assert!(state.board().is_occupied(8, 19));
    assert!(state.board().is_occupied(9, 19));
    assert_eq!(state.board().row_fill_count(18), 0);
}

#[test]
fn test_consecutive_clears_earn_combo_bonus() {
    let mut state = playing(12345);

    fill_row_except(&mut state, 19, &[0, 1]);
    state.set_active(Some(ActivePiece::at(PieceKind::O, 0, 18)));
    assert_eq!(state.soft_drop(), MoveOutcome::Locked);
    let first = state.take_last_event().unwrap();
    assert_eq!(first.line_clear_score, 100);
    assert_eq!(first.combo, 0);

    fill_row_except(&mut state, 19, &[8, 9]);
    state.set_active(Some(ActivePiece::at(PieceKind::O, 8, 18)));
    assert_eq!(state.soft_drop(), MoveOutcome::Locked);
    let second = state.take_last_event().unwrap();
    assert_eq!(second.line_clear_score, 150);
    assert_eq!(second.combo, 1);
    assert_eq!(state.score(), 250);

    // A lock without a clear breaks the chain.
    state.set_active(Some(ActivePiece::at(PieceKind::O, 4, 0)));
    state.hard_drop();
    assert_eq!(state.combo(), -1);
}

#[test]
fn test_hard_drop_five_rows() {
    let mut state = playing(12345);
    state.set_active(Some(ActivePiece::at(PieceKind::O, 4, 13)));

    assert_eq!(state.hard_drop(), Some(5));
    assert_eq!(state.score(), 10);
    assert_eq!(state.shake_trigger(), 1);
    assert!(state.board().is_occupied(4, 18));
    assert!(state.board().is_occupied(5, 19));
}

#[test]
fn test_tetris_at_level_two() {
    let mut state = playing(12345);

    // Ten consecutive singles to reach level 2.
    for _ in 0..10 {
        fill_row_except(&mut state, 19, &[0, 1]);
        state.set_active(Some(ActivePiece::at(PieceKind::O, 0, 18)));
        assert_eq!(state.soft_drop(), MoveOutcome::Locked);
        // Drop the O's leftover top half so the board is empty again.
        for x in 0..BOARD_WIDTH as i8 {
            state.board_mut().set(x, 19, None);
        }
    }
    assert_eq!(state.lines(), 10);
    assert_eq!(state.level(), 2);
    assert_eq!(state.drop_interval_ms(), 750);

    let score_before = state.score();
    for y in 16..20 {
        fill_row_except(&mut state, y, &[0]);
    }
    let vertical_i = neo_tetris::core::Tetromino::new(PieceKind::I).rotated();
    // Bar sits in matrix column 2.
    state.set_active(Some(ActivePiece {
        tetromino: vertical_i,
        x: -2,
        y: 0,
    }));
    state.hard_drop();

    assert_eq!(state.lines(), 14);
    // 800 * level 2, combo bonus for the 11th consecutive clear.
    assert_eq!(state.score() - score_before, 1600 + 10 * 50);
    assert_eq!(state.board().filled_count(), 0);
}

#[test]
fn test_blocked_spawn_ends_game() {
    let mut state = playing(12345);
    fill_row_except(&mut state, 0, &[0]);
    fill_row_except(&mut state, 1, &[0]);

    state.set_active(Some(ActivePiece::at(PieceKind::O, 8, 18)));
    assert_eq!(state.soft_drop(), MoveOutcome::Locked);

    assert_eq!(state.status(), GameStatus::GameOver);
    assert!(state.active().is_none());
    assert!(!state.apply_action(GameAction::HardDrop));
    assert!(!state.resume());

    state.start();
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.score(), 0);
    assert!(state.active().is_some());
}

#[test]
fn test_restart_from_pause_resets_board() {
    let mut state = playing(7);
    state.hard_drop();
    assert!(state.board().filled_count() > 0);

    state.pause();
    state.start();
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.board().filled_count(), 0);
    assert_eq!(state.shake_trigger(), 1);
}

#[test]
fn test_same_seed_replays_identically() {
    let actions = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::HardDrop,
        GameAction::SoftDrop,
        GameAction::HardDrop,
    ];

    let run = || {
        let mut state = playing(99);
        for _ in 0..10 {
            for action in actions {
                state.apply_action(action);
            }
        }
        state.snapshot()
    };

    assert_eq!(run(), run());
}
