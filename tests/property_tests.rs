//! Property tests: collision, line clears and gameplay invariants

use proptest::prelude::*;

use neo_tetris::core::{
    collides, drop_distance, get_shape, ActivePiece, Board, GameState, Shape,
};
use neo_tetris::types::{palette, GameAction, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn arb_kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

/// Board with each cell filled independently with probability `density`.
fn arb_board_with(density: f64) -> impl Strategy<Value = Board> {
    let cells = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);
    prop::collection::vec(prop::bool::weighted(density), cells).prop_map(|bits| {
        let mut board = Board::new();
        for (i, filled) in bits.into_iter().enumerate() {
            if filled {
                let x = (i % BOARD_WIDTH as usize) as i8;
                let y = (i / BOARD_WIDTH as usize) as i8;
                board.set(x, y, Some(palette::GRID));
            }
        }
        board
    })
}

/// Sparse enough that most piece placements are free.
fn arb_board() -> impl Strategy<Value = Board> {
    arb_board_with(0.2)
}

/// Stack where each row is either full or sparse.
fn arb_stack() -> impl Strategy<Value = Board> {
    let row = prop_oneof![
        1 => Just(vec![true; BOARD_WIDTH as usize]),
        2 => prop::collection::vec(prop::bool::weighted(0.5), BOARD_WIDTH as usize),
    ];
    prop::collection::vec(row, BOARD_HEIGHT as usize).prop_map(|rows| {
        let mut board = Board::new();
        for (y, row) in rows.into_iter().enumerate() {
            for (x, filled) in row.into_iter().enumerate() {
                if filled {
                    board.set(x as i8, y as i8, Some(palette::GRID));
                }
            }
        }
        board
    })
}

fn arb_rotated_shape() -> impl Strategy<Value = Shape> {
    (arb_kind(), 0usize..4).prop_map(|(kind, turns)| {
        (0..turns).fold(get_shape(kind), |shape, _| shape.rotated_cw())
    })
}

/// Cell-by-cell check against walls, floor and filled cells.
fn overlaps_by_cells(x: i8, y: i8, shape: &Shape, board: &Board) -> bool {
    for r in 0..4 {
        for c in 0..4 {
            if !shape.is_filled(r, c) {
                continue;
            }
            let bx = x as i32 + c as i32;
            let by = y as i32 + r as i32;
            if bx < 0 || bx >= BOARD_WIDTH as i32 || by >= BOARD_HEIGHT as i32 {
                return true;
            }
            if by >= 0 && board.get(bx as i8, by as i8).flatten().is_some() {
                return true;
            }
        }
    }
    false
}

fn arb_action() -> impl Strategy<Value = GameAction> {
    prop::sample::select(vec![
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Rotate,
    ])
}

proptest! {
    #[test]
    fn collides_matches_cell_by_cell_check(
        board in arb_board(),
        shape in arb_rotated_shape(),
        x in -5i8..14,
        y in -6i8..24,
    ) {
        prop_assert_eq!(
            collides(x, y, &shape, &board),
            overlaps_by_cells(x, y, &shape, &board)
        );
    }

    #[test]
    fn drop_distance_lands_on_last_free_row(
        board in arb_board(),
        kind in arb_kind(),
        x in 0i8..7,
        y in -2i8..16,
    ) {
        let shape = get_shape(kind);
        prop_assume!(!collides(x, y, &shape, &board));

        let d = drop_distance(x, y, &shape, &board) as i8;
        prop_assert!(!collides(x, y + d, &shape, &board));
        prop_assert!(collides(x, y + d + 1, &shape, &board));
    }

    #[test]
    fn rows_above_board_never_collide_with_cells(
        board in arb_board(),
        kind in arb_kind(),
        x in 0i8..7,
    ) {
        // Fully above row 0 and within the walls.
        let shape = get_shape(kind);
        let y = -(shape.height() as i8);
        prop_assume!(x + shape.width() as i8 <= BOARD_WIDTH as i8);
        prop_assert!(!collides(x, y, &shape, &board));
    }

    #[test]
    fn clear_removes_exactly_full_rows(board in arb_stack()) {
        let full = (0..BOARD_HEIGHT as usize).filter(|&y| board.is_row_full(y)).count();
        let survivors: Vec<Vec<_>> = (0..BOARD_HEIGHT as usize)
            .filter(|&y| !board.is_row_full(y))
            .map(|y| board.row(y).map(|r| r.to_vec()).unwrap_or_default())
            .collect();

        let mut cleared = board.clone();
        prop_assert_eq!(cleared.clear_full_rows().len(), full);

        for y in 0..full {
            prop_assert!(cleared.is_row_empty(y));
        }
        for (i, row) in survivors.iter().enumerate() {
            prop_assert_eq!(cleared.row(full + i).map(|r| r.to_vec()), Some(row.clone()));
        }
    }

    #[test]
    fn rotation_either_fits_or_changes_nothing(
        board in arb_board(),
        kind in arb_kind(),
        x in 0i8..8,
        y in 0i8..17,
    ) {
        let mut state = GameState::new(1);
        state.start();
        *state.board_mut() = board;
        let piece = ActivePiece::at(kind, x, y);
        prop_assume!(!piece.collides(state.board()));
        state.set_active(Some(piece));

        if state.try_rotate() {
            let rotated = state.active().unwrap();
            prop_assert!(!rotated.collides(state.board()));
            prop_assert_eq!(rotated.y, y);
            prop_assert!((rotated.x - x).abs() <= 2);
        } else {
            prop_assert_eq!(state.active(), Some(piece));
        }
    }

    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        actions in prop::collection::vec(arb_action(), 1..300),
    ) {
        let mut state = GameState::new(seed);
        state.start();
        let mut last_score = 0;
        let mut last_shake = 0;

        for action in actions {
            let was_hard_drop = action == GameAction::HardDrop && state.is_playing();
            let combo_before = state.combo();
            state.apply_action(action);

            if let Some(lock) = state.take_last_event() {
                let expected = if lock.lines_cleared == 0 { -1 } else { combo_before + 1 };
                prop_assert_eq!(state.combo(), expected);
                prop_assert_eq!(lock.combo, expected);
            } else {
                prop_assert_eq!(state.combo(), combo_before);
            }

            if let Some(active) = state.active() {
                prop_assert!(!active.collides(state.board()));
            } else {
                prop_assert_eq!(state.status(), GameStatus::GameOver);
            }
            for y in 0..BOARD_HEIGHT as usize {
                prop_assert!(!state.board().is_row_full(y));
            }
            prop_assert!(state.score() >= last_score);
            prop_assert_eq!(state.level(), state.lines() / 10 + 1);
            prop_assert_eq!(state.shake_trigger(), last_shake + u32::from(was_hard_drop));
            prop_assert!(state.combo() >= -1);

            last_score = state.score();
            last_shake = state.shake_trigger();
        }
    }
}
