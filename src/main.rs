//! Terminal runner (default binary).
//!
//! crossterm for input, the framebuffer renderer for output. Stdout belongs to
//! the game screen, so diagnostics only go to the file named by
//! `NEO_TETRIS_LOG_PATH`.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use neo_tetris::config::GameConfig;
use neo_tetris::core::{GameSnapshot, GameState, PieceGenerator};
use neo_tetris::engine::GameLoop;
use neo_tetris::input::{handle_key_event, handle_menu_key, MenuAction};
use neo_tetris::recorder::SnapshotRecorder;
use neo_tetris::term::{FrameBuffer, GameView, ShakeEffect, TerminalRenderer, Viewport};
use neo_tetris::types::GameStatus;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_tracing(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    if let Err(err) = &result {
        tracing::error!(error = %err, "exited with error");
    }
    result
}

fn init_tracing(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "neo_tetris=info,neo_tetris_core=info,neo_tetris_engine=info".into()
        }))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let generator = match config.seed {
        Some(seed) => PieceGenerator::new(seed),
        None => PieceGenerator::from_entropy(),
    };
    let mut game = GameState::with_generator(generator);
    info!(seed = game.seed(), frame_ms = config.frame_ms, "session created");

    let mut recorder = match &config.snapshot_log {
        Some(path) => Some(SnapshotRecorder::open(path)?),
        None => None,
    };

    let view = GameView::default();
    let mut game_loop = GameLoop::new();
    let mut shake = ShakeEffect::new();
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = config.frame_duration();
    let epoch = Instant::now();
    let mut last_frame = Instant::now();

    loop {
        let now_ms = epoch.elapsed().as_millis() as u64;

        game_loop.frame(&mut game, now_ms);
        game.snapshot_into(&mut snapshot);
        shake.observe(snapshot.shake_trigger, now_ms);
        if let Some(rec) = recorder.as_mut() {
            rec.record(&snapshot, now_ms)?;
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, Viewport::new(w, h), shake.offset(now_ms), &mut fb);
        term.draw_swap(&mut fb)?;

        // Wait for input until the next frame or the next due drop.
        let mut timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);
        if let Some(until_drop) = game_loop.time_until_drop(&game, now_ms) {
            timeout = timeout.min(until_drop);
        }

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(action) = handle_menu_key(key, game.status()) {
                        match action {
                            MenuAction::Quit => break,
                            MenuAction::Start => game.start(),
                            MenuAction::Resume => {
                                game.resume();
                            }
                        }
                    } else if game.status() == GameStatus::Playing {
                        if let Some(action) = handle_key_event(key) {
                            game.apply_action(action);
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
        }
    }

    if let Some(rec) = recorder.as_mut() {
        rec.flush()?;
    }
    info!(
        score = game.score(),
        level = game.level(),
        lines = game.lines(),
        "session ended"
    );
    Ok(())
}
