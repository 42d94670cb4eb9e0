//! Evaluation module for Pentago positions
//!
//! The static evaluation considers:
//! - Terminal wins (scored as +/- `Score::WINNER_VALUE`)
//! - Occupation of the four quadrant centers
//! - Runs of equal cells along rows and columns

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{chain_bonus, Score};
