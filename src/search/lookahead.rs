//! Breadth-limited lookahead search
//!
//! At each node the distinct successors are scored with the static
//! evaluator and the best `breadth` of them are kept for the side to move.
//! With depth left, each kept candidate is re-scored by the value of the
//! opponent's best reply (searched one level shallower), and the candidate
//! whose reply value is best for the side to move wins.
//!
//! This is not negamax: every level compares in its own mover's direction on
//! White-relative scores, and leaf values always come from `evaluate`.
//!
//! # Example
//!
//! ```
//! use pentago::board::Board;
//! use pentago::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.find_best_move(&Board::new(), 3, 0);
//! if let Some(best) = result {
//!     println!("Best move: {} ({})", best.mv, best.value);
//! }
//! ```

use crate::board::Board;
use crate::eval::evaluate;
use crate::rules::find_successors;

use super::shortlist::{EvaluatedMove, Shortlist};

/// Search driver that counts evaluated positions
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions evaluated since creation or the last `reset`
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn reset(&mut self) {
        self.nodes = 0;
    }

    /// Best move for the side to move on `board`.
    ///
    /// Returns `None` when `breadth` is zero or the board has no empty cell.
    pub fn find_best_move(
        &mut self,
        board: &Board,
        breadth: usize,
        depth: u32,
    ) -> Option<EvaluatedMove> {
        let mover = board.turn();
        let mut shortlist = Shortlist::new(breadth, mover);

        for (next, mv) in find_successors(board) {
            self.nodes += 1;
            shortlist.offer(EvaluatedMove::new(mv, evaluate(&next)));
        }

        if depth == 0 {
            return shortlist.best();
        }

        let mut best: Option<EvaluatedMove> = None;
        for candidate in shortlist.iter() {
            let Ok(after) = board.apply(candidate.mv) else {
                continue;
            };

            // A full board has no reply; the candidate keeps its own score
            let backed_up = self
                .find_best_move(&after, breadth, depth - 1)
                .map_or(candidate.value, |reply| reply.value);

            let current = best.map_or(mover.worst_score(), |b| b.value);
            if mover.prefers(backed_up, current) {
                best = Some(EvaluatedMove::new(candidate.mv, backed_up));
            }
        }

        best
    }
}

/// Convenience wrapper around `Searcher::find_best_move`
pub fn find_best_move(board: &Board, breadth: usize, depth: u32) -> Option<EvaluatedMove> {
    Searcher::new().find_best_move(board, breadth, depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Direction, Move, Quadrant};
    use crate::eval::Score;

    fn board(s: &str, turn: Color) -> Board {
        s.parse::<Board>().unwrap().with_turn(turn)
    }

    #[test]
    fn test_finds_immediate_win() {
        let b = board(
            "O O O O _ X
             _ _ _ _ X _
             _ _ _ X _ _
             X _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _",
            Color::White,
        );
        let best = find_best_move(&b, 1, 0).unwrap();
        assert_eq!((best.mv.row, best.mv.col), (0, 4));
        assert_eq!(best.value, Score::WINNER_VALUE);
        assert_eq!(
            best.mv,
            Move::new(0, 4, Quadrant::LowerLeft, Direction::Clockwise)
        );
    }

    #[test]
    fn test_black_finds_its_own_win() {
        let b = board(
            "O O O O _ X
             _ _ _ _ X _
             _ _ _ X _ _
             X _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _",
            Color::Black,
        );
        let best = find_best_move(&b, 1, 0).unwrap();
        assert_eq!(
            best.mv,
            Move::new(4, 1, Quadrant::LowerLeft, Direction::Clockwise)
        );
        assert_eq!(best.value, -Score::WINNER_VALUE);
    }

    #[test]
    fn test_win_through_rotation() {
        let position = "_ _ _ _ _ _
                        _ _ _ O O O
                        _ O _ _ _ _
                        X X X _ _ X
                        _ _ _ _ _ _
                        _ _ _ _ _ _";

        let white = find_best_move(&board(position, Color::White), 1, 0).unwrap();
        assert_eq!(
            white.mv,
            Move::new(1, 1, Quadrant::UpperLeft, Direction::CounterClockwise)
        );
        assert_eq!(white.value, Score::WINNER_VALUE);

        let black = find_best_move(&board(position, Color::Black), 1, 0).unwrap();
        assert_eq!(
            black.mv,
            Move::new(4, 5, Quadrant::LowerRight, Direction::CounterClockwise)
        );
        assert_eq!(black.value, -Score::WINNER_VALUE);
    }

    #[test]
    fn test_opening_prefers_center() {
        let best = find_best_move(&Board::new(), 1, 0).unwrap();
        assert_eq!(
            best.mv,
            Move::new(1, 1, Quadrant::UpperLeft, Direction::Clockwise)
        );
        assert_eq!(best.value, Score::CENTER_BONUS);
    }

    #[test]
    fn test_depth_one_backs_up_reply_value() {
        // White takes a center; Black's best reply takes another one
        let best = find_best_move(&Board::new(), 3, 1).unwrap();
        assert_eq!(
            best.mv,
            Move::new(1, 1, Quadrant::UpperLeft, Direction::Clockwise)
        );
        assert_eq!(best.value, 0);
    }

    #[test]
    fn test_depth_one_defends() {
        let b = board(
            "_ _ _ _ O _
             O O O _ _ _
             _ _ _ _ _ _
             _ _ X _ _ _
             _ X X _ _ _
             _ _ _ _ _ _",
            Color::Black,
        );
        let black = find_best_move(&b, 5, 1).unwrap();
        let after = b.apply(black.mv).unwrap();
        assert_eq!(after.turn(), Color::White);

        let white = find_best_move(&after, 5, 1).unwrap();
        assert_ne!(
            white.value,
            Score::WINNER_VALUE,
            "White should not be able to win after Black plays {}",
            black.mv
        );
        let immediate = find_best_move(&after, 5, 0).unwrap();
        assert_ne!(immediate.value, Score::WINNER_VALUE);
    }

    #[test]
    fn test_depth_two_forced_win() {
        let b = board(
            "_ _ _ _ _ _
             _ O O O _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ X _ _ X _
             _ _ X _ _ _",
            Color::White,
        );
        let mut searcher = Searcher::new();
        let best = searcher.find_best_move(&b, 5, 2).unwrap();
        assert_eq!(
            best.value,
            Score::WINNER_VALUE,
            "White had a forced win, but moved {}",
            best.mv
        );
        assert!(searcher.nodes() > 0);
    }

    #[test]
    fn test_zero_breadth_has_no_move() {
        assert!(find_best_move(&Board::new(), 0, 0).is_none());
        assert!(find_best_move(&Board::new(), 0, 2).is_none());
    }

    #[test]
    fn test_full_board_has_no_move() {
        let full: Board = "OX".repeat(18).parse().unwrap();
        assert!(find_best_move(&full, 3, 1).is_none());
    }

    #[test]
    fn test_node_count_and_reset() {
        let mut searcher = Searcher::new();
        searcher.find_best_move(&Board::new(), 2, 0);
        assert_eq!(searcher.nodes(), 9);
        searcher.reset();
        assert_eq!(searcher.nodes(), 0);
    }
}
