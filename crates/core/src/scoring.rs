//! Scoring module - classic line clear table and the level curve
//!
//! - Line clears pay `LINE_SCORES[rows] * level`, using the level that was
//!   active before the clear is counted.
//! - Manual soft drops pay 1 point per row, hard drops 2 points per row.
//!   Drop bonuses are awarded at drop time, independently of any clear.
//! - `level = lines / 10 + 1`, so a fresh game starts at level 1.

use crate::config::FallCurve;
use crate::types::{HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_SCORES, SOFT_DROP_POINTS};

/// Points for clearing `lines` rows in one lock at `level`
pub fn line_clear_points(lines: u32, level: u32) -> u32 {
    LINE_SCORES
        .get(lines as usize)
        .map_or(0, |&base| base.saturating_mul(level))
}

/// Level reached after `lines` total cleared rows
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for `level`, never below the curve's floor
pub fn fall_interval_ms(level: u32, curve: &FallCurve) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(curve.step_ms);
    curve.base_ms.saturating_sub(reduction).max(curve.min_ms)
}

/// Bonus for moving a piece down `rows` rows
pub fn drop_points(rows: u32, hard_drop: bool) -> u32 {
    let per_row = if hard_drop {
        HARD_DROP_POINTS
    } else {
        SOFT_DROP_POINTS
    };
    rows.saturating_mul(per_row)
}
