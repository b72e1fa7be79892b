//! Scoring module - score, level, and gravity progression
//!
//! All three are pure functions of plain integers. The driver owns the
//! running totals and feeds them back in.

use crate::types::{
    BASE_DROP_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_CLEAR_POINTS, MIN_DROP_MS,
};

/// Points for one landing that cleared `lines` rows at `level`.
///
/// Uses the single/double/triple/tetris table `100/300/500/800`, multiplied
/// by the level. Any `lines` outside 1-4 scores 0.
pub fn calculate_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_CLEAR_POINTS.len() {
        return 0;
    }
    LINE_CLEAR_POINTS[lines].saturating_mul(level)
}

/// Level management
/// Level starts at 1 and increases every 10 lines cleared
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Get drop interval for a level (in milliseconds)
///
/// 1000ms at level 1, 100ms faster per level, never below 100ms.
/// Level 0 is treated as level 1.
pub fn get_drop_speed(level: u32) -> u32 {
    let steps = level.saturating_sub(1);
    BASE_DROP_MS
        .saturating_sub(steps.saturating_mul(DROP_STEP_MS))
        .max(MIN_DROP_MS)
}
