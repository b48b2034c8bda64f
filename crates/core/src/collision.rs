//! Collision engine
//!
//! Pure, total checks of a shape at an anchor position against the board.
//! Cells above the visible playfield (negative rows) never collide, which lets
//! pieces spawn partially above the ceiling.

use crate::board::Board;
use crate::pieces::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `shape` anchored at (x, y) overlaps a wall, the floor, or a filled
/// cell.
///
/// For each occupied sub-cell the absolute column must lie in `[0, W)` and the
/// absolute row must be `< H`; rows `>= 0` must also be empty on the board.
pub fn collides(x: i8, y: i8, shape: &Shape, board: &Board) -> bool {
    collides_at(x as i32, y as i32, shape, board)
}

fn collides_at(x: i32, y: i32, shape: &Shape, board: &Board) -> bool {
    shape.cells().any(|(dx, dy)| {
        let bx = x + dx as i32;
        let by = y + dy as i32;
        if bx < 0 || bx >= BOARD_WIDTH as i32 || by >= BOARD_HEIGHT as i32 {
            return true;
        }
        by >= 0 && board.is_occupied(bx as i8, by as i8)
    })
}

/// How many rows `shape` can fall straight down from (x, y) without colliding.
///
/// Returns 0 when the piece is already resting (or already colliding).
pub fn drop_distance(x: i8, y: i8, shape: &Shape, board: &Board) -> u32 {
    let (x, y) = (x as i32, y as i32);
    if collides_at(x, y, shape, board) {
        return 0;
    }
    let mut distance: u32 = 0;
    // Terminates at the floor at the latest.
    while !collides_at(x, y + distance as i32 + 1, shape, board) {
        distance += 1;
    }
    distance
}

/// Landing row of `shape` dropped from (x, y) (ghost projection).
pub fn landing_y(x: i8, y: i8, shape: &Shape, board: &Board) -> i8 {
    let landed = y as i32 + drop_distance(x, y, shape, board) as i32;
    landed.clamp(i8::MIN as i32, i8::MAX as i32) as i8
}
