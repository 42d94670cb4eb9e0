//! Immutable board value with placement and quadrant rotation

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::{Color, Direction, Move, Pos, Quadrant, Stone, BOARD_SIZE, QUADRANT_SIZE, TOTAL_CELLS};
use crate::error::BoardError;
use crate::rules::{check_winner, Winner};

/// Game board: a 6x6 grid plus the side to move.
///
/// Boards are values. `set_at`, `rotate` and `apply` return new boards and
/// never modify `self`. Equality compares the grid only; `turn` is ignored.
#[derive(Debug, Clone, Copy)]
pub struct Board {
    cells: [[Stone; BOARD_SIZE]; BOARD_SIZE],
    turn: Color,
}

impl Board {
    /// Empty board, White to move
    pub fn new() -> Self {
        Self {
            cells: [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE],
            turn: Color::White,
        }
    }

    pub fn from_rows(cells: [[Stone; BOARD_SIZE]; BOARD_SIZE], turn: Color) -> Self {
        Self { cells, turn }
    }

    /// Side to move next
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Same grid with a different side to move
    #[must_use]
    pub fn with_turn(&self, turn: Color) -> Self {
        Self { turn, ..*self }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.row as usize][pos.col as usize]
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Stone {
        self.cells[row][col]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    pub fn row(&self, row: usize) -> [Stone; BOARD_SIZE] {
        self.cells[row]
    }

    pub fn column(&self, col: usize) -> [Stone; BOARD_SIZE] {
        std::array::from_fn(|row| self.cells[row][col])
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&s| s != Stone::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        self.stone_count() == TOTAL_CELLS
    }

    /// Place the mover's stone at `pos` and pass the turn.
    ///
    /// Placing on an occupied field is rejected rather than overwriting it.
    pub fn set_at(&self, pos: Pos) -> Result<Board, BoardError> {
        if !self.is_empty(pos) {
            return Err(BoardError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }

        let mut next = *self;
        next.cells[pos.row as usize][pos.col as usize] = self.turn.stone();
        next.turn = self.turn.opponent();
        Ok(next)
    }

    /// Rotate one quadrant by a quarter turn. The other 27 cells are untouched.
    #[must_use]
    pub fn rotate(&self, quadrant: Quadrant, direction: Direction) -> Board {
        let mut next = *self;
        let (ro, co) = quadrant.offset();
        let last = QUADRANT_SIZE - 1;

        for i in 0..QUADRANT_SIZE {
            for j in 0..QUADRANT_SIZE {
                match direction {
                    Direction::Clockwise => {
                        next.cells[ro + i][co + j] = self.cells[ro + last - j][co + i];
                    }
                    Direction::CounterClockwise => {
                        next.cells[ro + last - j][co + i] = self.cells[ro + i][co + j];
                    }
                }
            }
        }
        next
    }

    /// Play a complete move: placement followed by rotation
    pub fn apply(&self, mv: Move) -> Result<Board, BoardError> {
        Ok(self.set_at(mv.pos())?.rotate(mv.quadrant, mv.direction))
    }

    /// Rotate the whole grid clockwise by `quarter_turns` x 90 degrees
    #[must_use]
    pub fn rotated(&self, quarter_turns: u8) -> Board {
        let mut next = *self;
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &stone) in row.iter().enumerate() {
                let (tr, tc) = rotate_index(r, c, quarter_turns);
                next.cells[tr][tc] = stone;
            }
        }
        next
    }

    /// Exact grid equality, ignoring whose turn it is
    #[inline]
    pub fn equals(&self, other: &Board) -> bool {
        self.cells == other.cells
    }

    /// True if `other` is this board rotated as a whole by 0, 90, 180 or 270 degrees
    pub fn equals_ignore_rotation(&self, other: &Board) -> bool {
        (0..4).any(|k| self.equals_rotated(other, k))
    }

    fn equals_rotated(&self, other: &Board, quarter_turns: u8) -> bool {
        if quarter_turns % 4 == 0 {
            return self.equals(other);
        }
        self.cells.iter().enumerate().all(|(r, row)| {
            row.iter().enumerate().all(|(c, &stone)| {
                let (tr, tc) = rotate_index(r, c, quarter_turns);
                other.cells[tr][tc] == stone
            })
        })
    }

    /// Terminal classification, computed fresh on every call
    pub fn winner(&self) -> Winner {
        check_winner(self)
    }
}

/// Where cell (r, c) lands after `quarter_turns` clockwise whole-board turns
#[inline]
fn rotate_index(r: usize, c: usize, quarter_turns: u8) -> (usize, usize) {
    let last = BOARD_SIZE - 1;
    match quarter_turns % 4 {
        0 => (r, c),
        1 => (c, last - r),
        2 => (last - r, last - c),
        _ => (last - c, r),
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|s| s.glyph().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse 36 cell glyphs (`_`/`.` empty, `O` white, `X` black) in row-major
    /// order. Whitespace is ignored. White is to move.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE];
        let mut count = 0usize;

        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let stone = Stone::from_glyph(ch)
                .ok_or_else(|| BoardError::Parse(format!("unexpected glyph '{ch}'")))?;
            if count >= TOTAL_CELLS {
                return Err(BoardError::Parse(format!(
                    "more than {TOTAL_CELLS} cells"
                )));
            }
            let pos = Pos::from_index(count);
            cells[pos.row as usize][pos.col as usize] = stone;
            count += 1;
        }

        if count != TOTAL_CELLS {
            return Err(BoardError::Parse(format!(
                "expected {TOTAL_CELLS} cells, found {count}"
            )));
        }

        Ok(Board::from_rows(cells, Color::White))
    }
}
