//! Scoring weights for Pentago evaluation
//!
//! Scores are always from White's point of view: positive favors White,
//! negative favors Black.

use crate::board::BOARD_SIZE;

/// Evaluation weights
pub struct Score;

impl Score {
    /// A completed five for one side
    pub const WINNER_VALUE: i32 = 1_000_000;
    /// Stone on one of the four quadrant centers
    pub const CENTER_BONUS: i32 = 10;
    /// Continued run on row/column index 1 or 4
    pub const CHAIN_BONUS_MIDDLE: i32 = 5;
    /// Continued run on the other rows/columns
    pub const CHAIN_BONUS_OUTER: i32 = 3;
}

/// Quadrant centers, each the pivot of its quadrant's rotation
pub const CENTERS: [(usize, usize); 4] = [(1, 1), (1, 4), (4, 1), (4, 4)];

/// Weight for a run along row or column `idx`.
/// Lines through the quadrant centers count more.
#[inline]
pub fn chain_bonus(idx: usize) -> i32 {
    debug_assert!(idx < BOARD_SIZE);
    match idx {
        1 | 4 => Score::CHAIN_BONUS_MIDDLE,
        _ => Score::CHAIN_BONUS_OUTER,
    }
}
