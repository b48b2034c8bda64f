//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{landing_y, GameSnapshot, Shape, Tetromino};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{palette, Color, GameStatus, BOARD_HEIGHT, BOARD_WIDTH};

/// Number of segments in the speed bar.
const SPEED_SEGMENTS: u32 = 5;

/// Minimum side panel width worth drawing.
const PANEL_MIN_W: u16 = 14;

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(15, 23, 42);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board frame lands on screen for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border.
    pub x: u16,
    pub y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    cell_w: u16,
    cell_h: u16,
}

impl BoardLayout {
    /// Screen position of the top-left character of board cell (cx, cy).
    pub fn cell_origin(&self, cx: u16, cy: u16) -> (u16, u16) {
        (
            self.x + 1 + cx * self.cell_w,
            self.y + 1 + cy * self.cell_h,
        )
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Board placement for `viewport`, shifted horizontally by `shake_offset`.
    ///
    /// The board plus side panel is centered; the shift never pushes the
    /// frame off the left edge.
    pub fn layout(&self, viewport: Viewport, shake_offset: i16) -> BoardLayout {
        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let total_w = frame_w + 2 + PANEL_MIN_W;

        let base_x = viewport.width.saturating_sub(total_w) / 2;
        let x = (base_x as i32 + shake_offset as i32).max(0) as u16;
        let y = viewport.height.saturating_sub(frame_h) / 2;

        BoardLayout {
            x,
            y,
            frame_w,
            frame_h,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        shake_offset: i16,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).into_cell(' '));

        let layout = self.layout(viewport, shake_offset);

        self.draw_border(fb, &layout, CellStyle::new(Rgb::new(100, 116, 139), SCREEN_BG));

        // Locked cells, with a faint grid on empty ones.
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                match snap.board.get(x as i8, y as i8).flatten() {
                    Some(color) => self.draw_block(fb, &layout, x as i8, y as i8, color, false),
                    None => {
                        let grid = CellStyle::new(palette::GRID.into(), BOARD_BG);
                        self.fill_cell(fb, &layout, x as i8, y as i8, '·', grid);
                    }
                }
            }
        }

        if let Some(active) = snap.active {
            // Ghost first so the active piece wins where they overlap.
            let ghost_y = landing_y(active.x, active.y, &active.shape, &snap.board);
            if ghost_y != active.y {
                let ghost = CellStyle::new(
                    Rgb::from(palette::GHOST).mix(BOARD_BG, 2, 3),
                    BOARD_BG,
                )
                .dim();
                for (dx, dy) in active.shape.cells() {
                    self.fill_cell(
                        fb,
                        &layout,
                        active.x.saturating_add(dx),
                        ghost_y.saturating_add(dy),
                        '░',
                        ghost,
                    );
                }
            }

            for (dx, dy) in active.shape.cells() {
                let (x, y) = (active.x.saturating_add(dx), active.y.saturating_add(dy));
                self.draw_block(fb, &layout, x, y, active.color, true);
            }
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        match snap.status {
            GameStatus::Menu => self.draw_overlay(
                fb,
                &layout,
                &[("NEO TETRIS", true), ("", false), ("ENTER  START", false), ("Q  QUIT", false)],
            ),
            GameStatus::Paused => self.draw_overlay(
                fb,
                &layout,
                &[("PAUSED", true), ("", false), ("R  RESUME", false), ("S  RESTART", false)],
            ),
            GameStatus::GameOver => {
                let mut score = [0u8; 16];
                let mut level = [0u8; 16];
                let score = format_into(&mut score, "SCORE ", snap.score, 6);
                let level = format_into(&mut level, "LEVEL ", snap.level, 1);
                self.draw_overlay(
                    fb,
                    &layout,
                    &[
                        ("GAME OVER", true),
                        ("", false),
                        (score, false),
                        (level, false),
                        ("", false),
                        ("S  TRY AGAIN", false),
                    ],
                );
            }
            GameStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport, shake_offset: i16) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, shake_offset, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &BoardLayout, style: CellStyle) {
        let BoardLayout {
            x,
            y,
            frame_w: w,
            frame_h: h,
            ..
        } = *layout;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        x: i8,
        y: i8,
        color: Color,
        bold: bool,
    ) {
        let mut style = CellStyle::new(color.into(), BOARD_BG);
        style.bold = bold;
        self.fill_cell(fb, layout, x, y, '█', style);
    }

    /// Fill one board cell; cells outside the board (e.g. above row 0) are skipped.
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let (px, py) = layout.cell_origin(x as u16, y as u16);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::new(Rgb::new(148, 163, 184), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(226, 232, 240), SCREEN_BG);
        let accent = CellStyle::new(palette::L.into(), SCREEN_BG).bold();

        let mut y = layout.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_u32_padded(panel_x, y, snap.score, 6, value.bold());
        y += 1;
        if snap.combo > 0 {
            let w = fb.put_u32(panel_x, y, snap.combo as u32, accent);
            fb.put_str(panel_x + w, y, "x COMBO", accent);
        }
        y += 2;

        fb.put_str(panel_x, y, "LEVEL", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.level, value);
        y += 2;

        fb.put_str(panel_x, y, "SPEED", label);
        y += 1;
        let filled = speed_segments(snap.level);
        for i in 0..SPEED_SEGMENTS {
            let (ch, style) = if i < filled {
                ('▮', CellStyle::new(palette::S.into(), SCREEN_BG))
            } else {
                ('▯', CellStyle::new(palette::GRID.into(), SCREEN_BG))
            };
            fb.put_char(panel_x + i as u16, y, ch, style);
        }
        y += 2;

        fb.put_str(panel_x, y, "LINES", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.lines, value);
        y += 2;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        self.draw_preview(fb, panel_x, y, &snap.next);
        y += 5;

        let help = CellStyle::new(Rgb::new(100, 116, 139), SCREEN_BG);
        for line in ["←→ MOVE  ↑ ROTATE", "↓ SOFT  SPACE HARD", "P PAUSE  Q QUIT"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, next: &Tetromino) {
        let style = CellStyle::new(next.color.into(), SCREEN_BG);
        draw_shape(fb, x, y, &next.shape, style);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &BoardLayout, lines: &[(&str, bool)]) {
        let inner_w = layout.frame_w.saturating_sub(2);
        let box_h = lines.len() as u16 + 2;
        let top = layout.y + layout.frame_h.saturating_sub(box_h) / 2;

        let backdrop = CellStyle::new(Rgb::new(226, 232, 240), Rgb::new(2, 6, 23));
        fb.fill_rect(layout.x + 1, top, inner_w, box_h, ' ', backdrop);

        for (i, (text, bold)) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = layout.x + 1 + inner_w.saturating_sub(text_w) / 2;
            let mut style = backdrop;
            if *bold {
                style.bold = true;
                style.fg = palette::T.into();
            }
            fb.put_str(x, top + 1 + i as u16, text, style);
        }
    }
}

/// Filled segments of the speed bar: `ceil(level / 2)`, at most 5.
pub fn speed_segments(level: u32) -> u32 {
    level.div_ceil(2).min(SPEED_SEGMENTS)
}

fn draw_shape(fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape, style: CellStyle) {
    for (dx, dy) in shape.cells() {
        let px = x + dx as u16 * 2;
        let py = y + dy as u16;
        fb.put_char(px, py, '█', style);
        fb.put_char(px + 1, py, '█', style);
    }
}

/// Write `prefix` then `value` zero-padded to `digits` into `buf`.
fn format_into<'a>(buf: &'a mut [u8; 16], prefix: &str, value: u32, digits: usize) -> &'a str {
    use std::io::Write;

    let mut cursor = std::io::Cursor::new(&mut buf[..]);
    // Ten digits plus a short prefix always fits.
    let _ = write!(cursor, "{prefix}{value:0digits$}");
    let len = cursor.position() as usize;
    std::str::from_utf8(&buf[..len]).unwrap_or("")
}
