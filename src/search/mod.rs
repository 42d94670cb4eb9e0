//! Search module for Pentago AI
//!
//! Contains:
//! - The bounded best-first candidate list
//! - Breadth-limited lookahead over rotation-distinct successors

pub mod lookahead;
pub mod shortlist;

pub use lookahead::{find_best_move, Searcher};
pub use shortlist::{EvaluatedMove, Shortlist};
