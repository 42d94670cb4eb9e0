//! Board representation for Pentago

pub mod board;


use std::fmt;

// Re-exports
pub use board::Board;

/// Board size (6x6)
pub const BOARD_SIZE: usize = 6;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 36

/// Edge length of a rotatable quadrant (3x3)
pub const QUADRANT_SIZE: usize = 3;

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    White,
    Black,
}

impl Stone {
    /// +1 for White, -1 for Black, 0 for Empty
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Stone::White => 1,
            Stone::Black => -1,
            Stone::Empty => 0,
        }
    }

    /// Owning color, if any
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Stone::White => Some(Color::White),
            Stone::Black => Some(Color::Black),
            Stone::Empty => None,
        }
    }

    /// Display glyph used by the text representation
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Stone::Empty => '_',
            Stone::White => 'O',
            Stone::Black => 'X',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Stone> {
        match glyph {
            '_' | '.' => Some(Stone::Empty),
            'O' | 'o' => Some(Stone::White),
            'X' | 'x' => Some(Stone::Black),
            _ => None,
        }
    }
}

/// Side to move. White always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    pub fn sign(self) -> i32 {
        self.stone().sign()
    }

    #[inline]
    pub fn stone(self) -> Stone {
        match self {
            Color::White => Stone::White,
            Color::Black => Stone::Black,
        }
    }

    /// Whether `a` is strictly preferable to `b` for this side.
    /// White maximizes scores, Black minimizes them.
    #[inline]
    pub fn prefers(self, a: i32, b: i32) -> bool {
        match self {
            Color::White => a > b,
            Color::Black => a < b,
        }
    }

    /// The score this side would never accept: below every real score for
    /// White, above every real score for Black.
    #[inline]
    pub fn worst_score(self) -> i32 {
        match self {
            Color::White => i32::MIN,
            Color::Black => i32::MAX,
        }
    }
}

impl From<Color> for Stone {
    fn from(color: Color) -> Self {
        color.stone()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// One of the four 3x3 sub-grids, named by its corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl Quadrant {
    /// All quadrants in enumeration order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperLeft,
        Quadrant::UpperRight,
        Quadrant::LowerLeft,
        Quadrant::LowerRight,
    ];

    /// (row, col) of the quadrant's upper-left cell
    #[inline]
    pub fn offset(self) -> (usize, usize) {
        match self {
            Quadrant::UpperLeft => (0, 0),
            Quadrant::UpperRight => (0, QUADRANT_SIZE),
            Quadrant::LowerLeft => (QUADRANT_SIZE, 0),
            Quadrant::LowerRight => (QUADRANT_SIZE, QUADRANT_SIZE),
        }
    }

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(idx: u8) -> Option<Quadrant> {
        Quadrant::ALL.get(idx as usize).copied()
    }

    /// Quadrant containing the given cell
    pub fn containing(pos: Pos) -> Quadrant {
        let lower = pos.row as usize >= QUADRANT_SIZE;
        let right = pos.col as usize >= QUADRANT_SIZE;
        match (lower, right) {
            (false, false) => Quadrant::UpperLeft,
            (false, true) => Quadrant::UpperRight,
            (true, false) => Quadrant::LowerLeft,
            (true, true) => Quadrant::LowerRight,
        }
    }
}

/// Rotation sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Clockwise, Direction::CounterClockwise];

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(idx: u8) -> Option<Direction> {
        Direction::ALL.get(idx as usize).copied()
    }

    #[inline]
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A full turn: place on (row, col), then rotate `quadrant` in `direction`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: u8,
    pub col: u8,
    pub quadrant: Quadrant,
    pub direction: Direction,
}

impl Move {
    #[inline]
    pub fn new(row: u8, col: u8, quadrant: Quadrant, direction: Direction) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self {
            row,
            col,
            quadrant,
            direction,
        }
    }

    #[inline]
    pub fn pos(self) -> Pos {
        Pos::new(self.row, self.col)
    }

    /// Cell the placed stone ends up on once the rotation is done
    pub fn landing(self) -> Pos {
        if Quadrant::containing(self.pos()) != self.quadrant {
            return self.pos();
        }
        let (ro, co) = self.quadrant.offset();
        let a = self.row as usize - ro;
        let b = self.col as usize - co;
        let (i, j) = match self.direction {
            Direction::Clockwise => (b, QUADRANT_SIZE - 1 - a),
            Direction::CounterClockwise => (QUADRANT_SIZE - 1 - b, a),
        };
        Pos::new((ro + i) as u8, (co + j) as u8)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}|{}) Q{} R{}",
            self.row,
            self.col,
            self.quadrant.index(),
            self.direction.index()
        )
    }
}
