//! Static evaluation of Pentago positions
//!
//! This is the leaf scorer used by the lookahead search. It looks at:
//! - Win detection (`Winner::White` / `Winner::Black` only)
//! - Center control: the four quadrant centers never move under rotation
//! - Chains: consecutive equal cells along each row and column
//!
//! Diagonals are not scored. A drawn board is not special-cased either: it
//! falls through to the ordinary center and chain terms.

use crate::board::{Board, Stone, BOARD_SIZE};
use crate::rules::Winner;

use super::patterns::{chain_bonus, Score, CENTERS};

/// Evaluate the board from White's perspective.
///
/// Returns `Score::WINNER_VALUE` if White has won, `-Score::WINNER_VALUE` if
/// Black has won, and the heuristic sum otherwise.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    match board.winner() {
        Winner::White => return Score::WINNER_VALUE,
        Winner::Black => return -Score::WINNER_VALUE,
        Winner::Draw | Winner::None => {}
    }

    evaluate_centers(board) + evaluate_chains(board)
}

fn evaluate_centers(board: &Board) -> i32 {
    CENTERS
        .iter()
        .map(|&(r, c)| Score::CENTER_BONUS * board.at(r, c).sign())
        .sum()
}

/// Sum of chain bonuses over all rows and columns
fn evaluate_chains(board: &Board) -> i32 {
    (0..BOARD_SIZE)
        .map(|idx| chain_score(&board.row(idx), idx) + chain_score(&board.column(idx), idx))
        .sum()
}

/// Score one row or column.
///
/// Walking positions 1..6, each cell equal to the last tracked value adds
/// `chain_bonus(idx)` signed by its color; any other cell becomes the new
/// tracked value. Runs of empty cells are tracked too but contribute 0.
fn chain_score(line: &[Stone; BOARD_SIZE], idx: usize) -> i32 {
    let bonus = chain_bonus(idx);
    let mut last_seen = line[0];
    let mut score = 0;

    for &stone in &line[1..] {
        if stone == last_seen {
            score += bonus * stone.sign();
        } else {
            last_seen = stone;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_evaluate_empty_board() {
        assert_eq!(evaluate(&Board::new()), 0, "Empty board should have score 0");
    }

    #[test]
    fn test_evaluate_center_bonus() {
        let b = board(
            "_ _ _ _ _ _
             _ O _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _",
        );
        assert_eq!(evaluate(&b), Score::CENTER_BONUS);
    }

    #[test]
    fn test_evaluate_centers_cancel() {
        let b = board(
            "_ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ X _ _ O _
             _ _ _ _ _ _",
        );
        assert_eq!(evaluate(&b), 0);
    }

    #[test]
    fn test_evaluate_row_chains() {
        // row 0: two White continuations (+3 each)
        // row 1: Black center (-10) and one Black continuation (-5)
        let b = board(
            "O O O _ _ _
             _ X X _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _",
        );
        assert_eq!(evaluate(&b), 6 - 10 - 5);
    }

    #[test]
    fn test_evaluate_column_chain_on_middle_index() {
        let b = board(
            "_ _ _ _ O _
             _ _ _ _ O _
             _ _ _ _ O _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _",
        );
        // center (1,4) plus two continuations on column 4
        assert_eq!(evaluate(&b), Score::CENTER_BONUS + 2 * Score::CHAIN_BONUS_MIDDLE);
    }

    #[test]
    fn test_interrupted_chain_restarts() {
        let line = [
            Stone::White,
            Stone::White,
            Stone::Black,
            Stone::White,
            Stone::White,
            Stone::White,
        ];
        // W W | B | W W W: one continuation, then two
        assert_eq!(chain_score(&line, 0), 3 * Score::CHAIN_BONUS_OUTER);
        assert_eq!(chain_score(&[Stone::Empty; BOARD_SIZE], 1), 0);
    }

    #[test]
    fn test_evaluate_winning_positions() {
        let white = board(
            "_ _ _ _ _ _
             _ O O O O O
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _",
        );
        assert_eq!(evaluate(&white), Score::WINNER_VALUE);

        let black = board(
            "X _ _ _ _ _
             X _ _ _ _ _
             X _ _ _ _ _
             X _ _ _ _ _
             X _ _ _ _ _
             _ _ _ _ _ _",
        );
        assert_eq!(evaluate(&black), -Score::WINNER_VALUE);
    }

    #[test]
    fn test_draw_falls_through_to_heuristic() {
        let b = board(
            "O O O O O _
             X X X X X _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _",
        );
        assert_eq!(b.winner(), Winner::Draw);
        assert_eq!(evaluate(&b), -28);

        let full = board(
            "O O O O X O
             X X X X O X
             O O O O X O
             X X X X O X
             O O O O X O
             X X X X O X",
        );
        assert_eq!(full.winner(), Winner::Draw);
        assert_eq!(evaluate(&full), 0);
    }

    #[test]
    fn test_evaluate_is_color_symmetric() {
        let b = board(
            "O O _ X _ _
             _ X X _ O _
             _ _ O _ _ _
             _ X _ _ _ O
             _ _ _ O X _
             X _ _ _ _ _",
        );
        let mirrored: Board = b
            .to_string()
            .chars()
            .map(|c| match c {
                'O' => 'X',
                'X' => 'O',
                other => other,
            })
            .collect::<String>()
            .parse()
            .unwrap();
        assert_eq!(evaluate(&b), -evaluate(&mirrored));
    }
}
