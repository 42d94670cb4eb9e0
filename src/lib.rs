//! Pentago game core and computer player
//!
//! Pentago is played on a 6x6 board made of four 3x3 quadrants:
//! - White moves first; a turn places one stone on an empty cell and then
//!   rotates one quadrant a quarter turn in either direction
//! - Five in a row (row, column or diagonal) wins
//! - Fives for both colors after the same turn, or a full board, is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board representation, quadrant rotation, move application
//! - [`rules`]: Winner detection and successor generation
//! - [`eval`]: Static position evaluation
//! - [`search`]: Breadth-limited lookahead search
//! - [`engine`]: AI engine wrapping the search with statistics
//! - [`config`]: TOML configuration
//! - [`cli`]: Text-mode game loop
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use pentago::{AIEngine, Board, Direction, Move, Quadrant, Winner};
//!
//! // White takes the upper-left center, then turns that quadrant clockwise
//! let board = Board::new()
//!     .apply(Move::new(1, 1, Quadrant::UpperLeft, Direction::Clockwise))
//!     .unwrap();
//!
//! // AI responds as Black
//! let mut engine = AIEngine::with_config(3, 1);
//! if let Some(mv) = engine.get_move(&board) {
//!     let board = board.apply(mv).unwrap();
//!     println!("AI plays {mv}\n{board}");
//!     assert_eq!(board.winner(), Winner::None);
//! }
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Color, Direction, Move, Pos, Quadrant, Stone, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult};
pub use rules::Winner;
pub use search::{find_best_move, EvaluatedMove};
