use neo_tetris::core::{ActivePiece, GameState};
use neo_tetris::term::{GameView, Rgb, ShakeEffect, Viewport};
use neo_tetris::types::{palette, PieceKind};

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let vp = Viewport::new(22, 22);
    let fb = view.render(&snap, vp, 0);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut state = GameState::new(1);
    state.start();
    state.board_mut().set(0, 19, Some(palette::I));
    state.set_active(None);
    let snap = state.snapshot();

    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, vp, 0);
    let layout = view.layout(vp, 0);

    let (x, y) = layout.cell_origin(0, 19);
    for dx in 0..2 {
        let cell = fb.get(x + dx, y).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from(palette::I));
    }
    assert_eq!(fb.get(x + 2, y).unwrap().ch, '·');
}

#[test]
fn term_view_draws_ghost_at_landing_row() {
    let mut state = GameState::new(1);
    state.start();
    state.set_active(Some(ActivePiece::at(PieceKind::T, 3, 2)));
    let snap = state.snapshot();

    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, vp, 0);
    let layout = view.layout(vp, 0);

    // T lands with its flat side on row 19.
    for cx in 3..6 {
        let (x, y) = layout.cell_origin(cx, 19);
        assert_eq!(fb.get(x, y).unwrap().ch, '░');
    }
    let (x, y) = layout.cell_origin(4, 18);
    assert_eq!(fb.get(x, y).unwrap().ch, '░');

    // The ghost never leaks back into the game state.
    assert_eq!(state.board().filled_count(), 0);
}

#[test]
fn term_view_shake_follows_hard_drop() {
    let mut state = GameState::new(1);
    state.start();
    let mut shake = ShakeEffect::new();
    shake.observe(state.shake_trigger(), 0);

    state.hard_drop();
    assert!(shake.observe(state.shake_trigger(), 1_000));
    assert_ne!(shake.offset(1_000), 0);
    assert_eq!(shake.offset(1_200), 0);

    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let still = view.render(&state.snapshot(), vp, 0);
    let shaken = view.render(&state.snapshot(), vp, shake.offset(1_000));
    assert_ne!(still, shaken);
}

#[test]
fn term_view_menu_and_game_over_text() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    let mut state = GameState::new(5);
    assert!(view.render(&state.snapshot(), vp, 0).contains_text("NEO TETRIS"));

    state.start();
    // Bury the spawn area and force a spawn.
    for x in 1..10 {
        state.board_mut().set(x, 0, Some(palette::Z));
        state.board_mut().set(x, 1, Some(palette::Z));
    }
    state.set_active(None);
    assert!(!state.spawn_piece());

    let fb = view.render(&state.snapshot(), vp, 0);
    assert!(fb.contains_text("GAME OVER"));
    assert!(fb.contains_text("SCORE 000000"));
    assert!(fb.contains_text("LEVEL 1"));
}
