//! Scoring module - line clear points, combo bonus, levels and gravity
//!
//! Rules:
//! - A clear of N lines is worth `LINE_POINTS[N] * level`.
//! - The combo bonus is `combo * 50` with no level multiplier; the first clear
//!   of a chain has combo 0 and earns no bonus.
//! - Hard drops that clear nothing earn 2 points per row fallen.
//! - One level per 10 lines, starting at level 1.

use crate::types::{
    BASE_DROP_MS, COMBO_BONUS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, HARD_DROP_POINTS_PER_ROW,
    LINES_PER_LEVEL, LINE_POINTS,
};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Base points times level, excludes combo bonus.
    pub line_clear_score: u32,
    /// Combo bonus added on top of `line_clear_score`.
    pub combo_bonus: u32,
    pub total: u32,
}

/// Base points for clearing `lines` rows at `level`.
///
/// Counts beyond the table (only reachable on hand-built boards) score 0.
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    LINE_POINTS
        .get(lines)
        .copied()
        .unwrap_or(0)
        .saturating_mul(level)
}

/// Combo bonus for the combo index after this clear.
///
/// `-1` and `0` earn nothing.
pub fn calculate_combo_bonus(combo: i32) -> u32 {
    if combo <= 0 {
        return 0;
    }
    COMBO_BONUS.saturating_mul(combo as u32)
}

/// Complete score for a clearing lock.
pub fn calculate_score(lines: usize, level: u32, combo: i32) -> ScoreResult {
    let line_clear_score = calculate_line_score(lines, level);
    let combo_bonus = calculate_combo_bonus(combo);
    ScoreResult {
        line_clear_score,
        combo_bonus,
        total: line_clear_score.saturating_add(combo_bonus),
    }
}

/// Fall-distance bonus of a hard drop that cleared no lines.
pub fn calculate_hard_drop_bonus(distance: u32) -> u32 {
    distance.saturating_mul(HARD_DROP_POINTS_PER_ROW)
}

/// Level reached after `total_lines` cleared lines (1-based).
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level in milliseconds.
///
/// `max(100, 800 - (level - 1) * 50)`; level 0 is treated as level 1.
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}
