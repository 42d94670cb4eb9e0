//! Terminal-state detection for Pentago
//!
//! A color wins with five of its stones in a row along any row, column,
//! long diagonal or short (length-5) diagonal. Lines are checked for both
//! colors; if both complete a line on the same board the game is drawn, and
//! a full board without any line is drawn too.

use crate::board::{Board, Color, Pos, BOARD_SIZE};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Terminal classification of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// Game continues
    None,
    White,
    Black,
    Draw,
}

impl Winner {
    #[inline]
    pub fn is_over(self) -> bool {
        self != Winner::None
    }
}

impl From<Color> for Winner {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Winner::White,
            Color::Black => Winner::Black,
        }
    }
}

/// Diagonal lines as (start, step, length).
/// Two long diagonals plus the four short ones next to them.
const DIAGONALS: [((i32, i32), (i32, i32), usize); 6] = [
    ((0, 0), (1, 1), 6),
    ((5, 0), (-1, 1), 6),
    ((0, 1), (1, 1), 5),
    ((1, 0), (1, 1), 5),
    ((5, 1), (-1, 1), 5),
    ((4, 0), (-1, 1), 5),
];

/// A scan line: up to six positions, `len` of which are used
#[derive(Clone, Copy)]
struct Line {
    cells: [Pos; BOARD_SIZE],
    len: usize,
}

impl Line {
    fn walk(start: (i32, i32), step: (i32, i32), len: usize) -> Self {
        let mut cells = [Pos::new(0, 0); BOARD_SIZE];
        for (i, cell) in cells.iter_mut().enumerate().take(len) {
            let r = start.0 + step.0 * i as i32;
            let c = start.1 + step.1 * i as i32;
            debug_assert!(Pos::is_valid(r, c));
            *cell = Pos::new(r as u8, c as u8);
        }
        Self { cells, len }
    }

    #[inline]
    fn positions(&self) -> &[Pos] {
        &self.cells[..self.len]
    }
}

/// All 18 lines that can hold five in a row
fn lines() -> impl Iterator<Item = Line> {
    let size = BOARD_SIZE as i32;
    let rows = (0..size).map(move |r| Line::walk((r, 0), (0, 1), BOARD_SIZE));
    let cols = (0..size).map(move |c| Line::walk((0, c), (1, 0), BOARD_SIZE));
    let diagonals = DIAGONALS
        .iter()
        .map(|&(start, step, len)| Line::walk(start, step, len));
    rows.chain(cols).chain(diagonals)
}

/// Every run of five consecutive stones of one color within a line
fn line_fives<'a>(
    board: &'a Board,
    line: &'a Line,
) -> impl Iterator<Item = (Color, [Pos; WIN_LENGTH])> + 'a {
    line.positions().windows(WIN_LENGTH).filter_map(|window| {
        let color = board.get(window[0]).color()?;
        if window.iter().all(|&p| board.get(p) == color.stone()) {
            let mut five = [window[0]; WIN_LENGTH];
            five.copy_from_slice(window);
            Some((color, five))
        } else {
            None
        }
    })
}

/// First five within a line, if any
fn line_five(board: &Board, line: &Line) -> Option<(Color, [Pos; WIN_LENGTH])> {
    line_fives(board, line).next()
}

/// Check if `color` has five in a row anywhere
pub fn has_five_in_row(board: &Board, color: Color) -> bool {
    find_five_positions(board, color).is_some()
}

/// Positions of one winning line for `color`, if it has one
pub fn find_five_positions(board: &Board, color: Color) -> Option<[Pos; WIN_LENGTH]> {
    lines().find_map(|line| match line_five(board, &line) {
        Some((c, five)) if c == color => Some(five),
        _ => None,
    })
}

/// Classify the board.
///
/// Every line is scanned so that simultaneous fives for both colors are
/// detected as a draw.
pub fn check_winner(board: &Board) -> Winner {
    let mut white = false;
    let mut black = false;

    for line in lines() {
        match line_five(board, &line) {
            Some((Color::White, _)) => white = true,
            Some((Color::Black, _)) => black = true,
            None => {}
        }
        if white && black {
            return Winner::Draw;
        }
    }

    match (white, black) {
        (true, false) => Winner::White,
        (false, true) => Winner::Black,
        _ if board.stone_count() < BOARD_SIZE * BOARD_SIZE => Winner::None,
        _ => Winner::Draw,
    }
}

/// Stones of `color` that make up winning lines (for highlighting)
pub fn winning_stones(board: &Board, color: Color) -> Vec<Pos> {
    let mut stones: Vec<Pos> = Vec::new();
    for line in lines() {
        for (c, five) in line_fives(board, &line) {
            if c == color {
                stones.extend(five);
            }
        }
    }
    stones.sort();
    stones.dedup();
    stones
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_continues() {
        assert_eq!(check_winner(&Board::new()), Winner::None);
        assert!(!Winner::None.is_over());
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let b = board(
            "_ _ _ _ _ _
             _ O O O O O
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _",
        );
        assert_eq!(check_winner(&b), Winner::White);
        assert!(has_five_in_row(&b, Color::White));
        assert!(!has_five_in_row(&b, Color::Black));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let b = board(
            "_ _ _ _ _ _
             _ O _ _ _ _
             _ O _ _ _ _
             _ O _ _ _ _
             _ O _ _ _ _
             _ O _ _ _ _",
        );
        assert_eq!(check_winner(&b), Winner::White);
    }

    #[test]
    fn test_five_on_long_diagonals() {
        let b = board(
            "_ _ _ _ _ _
             _ O _ _ _ _
             _ _ O _ _ _
             _ _ _ O _ _
             _ _ _ _ O _
             _ _ _ _ _ O",
        );
        assert_eq!(check_winner(&b), Winner::White);

        let b = board(
            "_ _ _ _ _ _
             _ _ _ _ X _
             _ _ O X _ _
             _ _ X O _ _
             _ X _ _ O _
             X _ _ _ _ O",
        );
        assert_eq!(check_winner(&b), Winner::Black);
    }

    #[test]
    fn test_five_on_short_diagonals() {
        let upper = board(
            "_ O _ _ _ _
             _ _ O _ _ _
             _ _ _ O _ _
             _ _ _ _ O _
             _ _ _ _ _ O
             _ _ _ _ _ _",
        );
        assert_eq!(check_winner(&upper), Winner::White);

        let lower = board(
            "_ _ _ _ _ _
             O _ _ _ _ _
             _ O _ _ _ _
             _ _ O _ _ _
             _ _ _ O _ _
             _ _ _ _ O _",
        );
        assert_eq!(check_winner(&lower), Winner::White);

        let anti_lower = board(
            "_ _ _ _ _ _
             _ _ _ _ _ X
             _ _ _ _ X _
             _ _ _ X _ _
             _ _ X _ _ _
             _ X _ _ _ _",
        );
        assert_eq!(check_winner(&anti_lower), Winner::Black);

        let anti_upper = board(
            "_ _ _ _ X _
             _ _ _ X _ _
             _ _ X _ _ _
             _ X _ _ _ _
             X _ _ _ _ _
             _ _ _ _ _ _",
        );
        assert_eq!(check_winner(&anti_upper), Winner::Black);
    }

    #[test]
    fn test_gap_is_not_five() {
        let b = board(
            "O O _ O O O
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _",
        );
        assert_eq!(check_winner(&b), Winner::None);
    }

    #[test]
    fn test_four_not_win() {
        let b = board(
            "_ O O O O X
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _",
        );
        assert_eq!(check_winner(&b), Winner::None);
    }

    #[test]
    fn test_both_colors_five_is_draw() {
        let b = board(
            "O O O O O _
             X X X X X _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _",
        );
        assert_eq!(check_winner(&b), Winner::Draw);
    }

    #[test]
    fn test_full_board_without_five_is_draw() {
        let b = board(
            "O O O O X O
             X X X X O X
             O O O O X O
             X X X X O X
             O O O O X O
             X X X X O X",
        );
        assert_eq!(check_winner(&b), Winner::Draw);
        assert!(b.is_full());
    }

    #[test]
    fn test_no_winner_mid_game() {
        let b = board(
            "_ O _ O _ _
             O O O O X X
             X X X O X _
             _ _ _ X _ _
             _ _ X _ _ _
             _ O _ _ _ _",
        );
        assert_eq!(check_winner(&b), Winner::None);
    }

    #[test]
    fn test_find_five_positions() {
        let b = board(
            "_ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             X X X X X _",
        );
        let five = find_five_positions(&b, Color::Black).unwrap();
        assert_eq!(five[0], Pos::new(5, 0));
        assert_eq!(five[4], Pos::new(5, 4));
        assert!(find_five_positions(&b, Color::White).is_none());
        assert_eq!(winning_stones(&b, Color::Black).len(), 5);
    }

    #[test]
    fn test_six_in_row_counts_once_per_stone() {
        let b = board(
            "O O O O O O
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _
             _ _ _ _ _ _",
        );
        assert_eq!(check_winner(&b), Winner::White);
        assert_eq!(winning_stones(&b, Color::White).len(), 6);
    }

    #[test]
    fn test_six_in_row_highlights_both_ends() {
        let b = board(
            "_ _ X _ _ _
             _ _ X _ _ _
             _ _ X _ _ _
             _ _ X _ _ _
             _ _ X _ _ _
             _ _ X _ _ _",
        );
        let stones = winning_stones(&b, Color::Black);
        assert!(stones.contains(&Pos::new(0, 2)));
        assert!(stones.contains(&Pos::new(5, 2)));
        assert!(winning_stones(&b, Color::White).is_empty());
    }

    #[test]
    fn test_winner_from_color() {
        assert_eq!(Winner::from(Color::White), Winner::White);
        assert_eq!(Winner::from(Color::Black), Winner::Black);
        assert!(Winner::Draw.is_over());
    }
}
