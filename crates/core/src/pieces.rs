//! Pieces module - tetromino shape matrices and the piece catalog
//!
//! Shapes are small occupancy matrices anchored at their top-left corner.
//! Templates are immutable; rotation always builds a new matrix.

use serde::Serialize;

use crate::types::{Color, PieceKind};

/// Largest supported matrix side (the I piece uses 4x4)
pub const MAX_SHAPE_SIDE: usize = 4;

/// Offset of a single occupied cell relative to the shape origin (dx, dy)
pub type MinoOffset = (i8, i8);

/// Horizontal offsets tried, in order, when a rotation collides
pub const WALL_KICKS: [i8; 5] = [0, -1, 1, -2, 2];

/// Rectangular occupancy matrix of a piece
///
/// Stored inline (no allocation) so it can be copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    width: u8,
    height: u8,
    rows: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// Build a shape from 0/1 rows.
    ///
    /// Cells outside `width` x `height` are ignored. Dimensions are clamped to
    /// `MAX_SHAPE_SIDE`.
    pub const fn from_bits(
        width: u8,
        height: u8,
        bits: [[u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
    ) -> Self {
        let max = MAX_SHAPE_SIDE as u8;
        let width = if width > max { max } else { width };
        let height = if height > max { max } else { height };
        let mut rows = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let mut r = 0;
        while r < height as usize {
            let mut c = 0;
            while c < width as usize {
                rows[r][c] = bits[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            width,
            height,
            rows,
        }
    }

    /// Parse rows like `".#."` (`#` = occupied). Intended for tests and tooling.
    ///
    /// Returns `None` for ragged or oversized input.
    pub fn parse(rows: &[&str]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if height == 0 || height > MAX_SHAPE_SIDE || width == 0 || width > MAX_SHAPE_SIDE {
            return None;
        }
        let mut bits = [[0u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (r, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return None;
            }
            for (c, ch) in row.chars().enumerate() {
                bits[r][c] = u8::from(ch == '#');
            }
        }
        Some(Self::from_bits(width as u8, height as u8, bits))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the sub-cell at row `r`, column `c` is occupied.
    pub fn is_filled(&self, r: usize, c: usize) -> bool {
        r < self.height as usize && c < self.width as usize && self.rows[r][c]
    }

    /// Occupied cells as `(dx, dy)` offsets, row-major.
    pub fn cells(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        (0..self.height as usize).flat_map(move |r| {
            (0..self.width as usize)
                .filter(move |&c| self.rows[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// Rotate 90° clockwise (transpose, then reverse each new row).
    ///
    /// `new[i][j] = old[h - 1 - j][i]`; width and height swap.
    pub fn rotated_cw(&self) -> Shape {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut rows = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (i, row) in rows.iter_mut().enumerate().take(w) {
            for (j, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.rows[h - 1 - j][i];
            }
        }
        Shape {
            width: self.height,
            height: self.width,
            rows,
        }
    }

    /// Render as `#`/`.` rows (debug and test helper).
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height as usize)
            .map(|r| {
                (0..self.width as usize)
                    .map(|c| if self.rows[r][c] { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

const I_SHAPE: Shape = Shape::from_bits(
    4,
    4,
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const J_SHAPE: Shape = Shape::from_bits(
    3,
    3,
    [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const L_SHAPE: Shape = Shape::from_bits(
    3,
    3,
    [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const O_SHAPE: Shape = Shape::from_bits(
    2,
    2,
    [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const S_SHAPE: Shape = Shape::from_bits(
    3,
    3,
    [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const T_SHAPE: Shape = Shape::from_bits(
    3,
    3,
    [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const Z_SHAPE: Shape = Shape::from_bits(
    3,
    3,
    [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

/// Get the spawn template of a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// A catalog piece: kind, current shape and display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
}

impl Tetromino {
    /// Fresh copy of the catalog template for `kind`
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
            color: kind.color(),
        }
    }

    /// Same piece with its shape rotated clockwise
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }
}
