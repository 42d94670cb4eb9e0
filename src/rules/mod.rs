//! Game rules for Pentago
//!
//! This module implements the rule set:
//! - Win conditions (five in a row, simultaneous fives and full board draws)
//! - Move enumeration with rotation-symmetry reduction

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{find_raw_moves, find_successors, Successors};
pub use win::{
    check_winner, find_five_positions, has_five_in_row, winning_stones, Winner, WIN_LENGTH,
};
