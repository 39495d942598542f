//! Scoring module - points per placement
//!
//! A single flat rule: every cleared row is worth `LINE_CLEAR_POINTS` plus
//! `LINE_CLEAR_BONUS`, with no multi-line multiplier, level factor or combo.

use crate::types::{LINE_CLEAR_BONUS, LINE_CLEAR_POINTS};

/// Points for clearing `lines` rows with one placement
pub fn line_clear_score(lines: u32) -> u32 {
    lines
        .saturating_mul(LINE_CLEAR_POINTS)
        .saturating_add(lines.saturating_mul(LINE_CLEAR_BONUS))
}
