//! Main AI Engine
//!
//! Wraps the lookahead search with a fixed (breadth, depth) configuration,
//! timing and node statistics. The search itself is synchronous; callers
//! that need a time budget bound `breadth`/`depth` or run the engine on a
//! worker thread, as the GUI does.
//!
//! # Example
//!
//! ```
//! use pentago::{AIEngine, Board};
//!
//! // Small configuration for a fast example
//! let mut engine = AIEngine::with_config(3, 1);
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Score: {}", result.score);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{Board, Move};
use crate::config::AiConfig;
use crate::search::Searcher;

/// Candidates kept per node unless configured otherwise
pub const DEFAULT_BREADTH: usize = 5;
/// Opponent replies simulated unless configured otherwise
pub const DEFAULT_DEPTH: u32 = 3;

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Backed-up score of the move, from White's point of view
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of positions evaluated
    pub nodes: u64,
}

impl MoveResult {
    /// Create a result indicating no move found
    fn no_move(time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            time_ms,
            nodes,
        }
    }
}

/// AI player for Pentago.
///
/// # Configuration
///
/// - `breadth`: candidate moves kept at every search node (at least 1)
/// - `depth`: opponent-reply plies simulated before backing up a value
pub struct AIEngine {
    breadth: usize,
    depth: u32,
}

impl AIEngine {
    /// Create a new AI engine with default settings (breadth 5, depth 3).
    #[must_use]
    pub fn new() -> Self {
        Self {
            breadth: DEFAULT_BREADTH,
            depth: DEFAULT_DEPTH,
        }
    }

    /// Create an AI engine with custom configuration.
    ///
    /// A breadth of zero is raised to one so the engine always keeps a move.
    ///
    /// ```
    /// use pentago::AIEngine;
    ///
    /// let engine = AIEngine::with_config(8, 2);
    /// assert_eq!(engine.breadth(), 8);
    /// ```
    #[must_use]
    pub fn with_config(breadth: usize, depth: u32) -> Self {
        Self {
            breadth: breadth.max(1),
            depth,
        }
    }

    #[must_use]
    pub fn from_config(config: &AiConfig) -> Self {
        Self::with_config(config.breadth, config.depth)
    }

    /// Get the best move for the side to move.
    ///
    /// Returns `None` if the board is full.
    pub fn get_move(&mut self, board: &Board) -> Option<Move> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move with search statistics.
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let mut searcher = Searcher::new();
        let found = searcher.find_best_move(board, self.breadth, self.depth);
        let time_ms = start.elapsed().as_millis() as u64;

        let Some(best) = found else {
            tracing::warn!(turn = %board.turn(), "no move available");
            return MoveResult::no_move(time_ms, searcher.nodes());
        };

        tracing::debug!(
            turn = %board.turn(),
            breadth = self.breadth,
            depth = self.depth,
            nodes = searcher.nodes(),
            time_ms,
            mv = %best.mv,
            score = best.value,
            "search finished"
        );

        MoveResult {
            best_move: Some(best.mv),
            score: best.value,
            time_ms,
            nodes: searcher.nodes(),
        }
    }

    pub fn set_breadth(&mut self, breadth: usize) {
        self.breadth = breadth.max(1);
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
    }

    #[must_use]
    pub fn breadth(&self) -> usize {
        self.breadth
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
