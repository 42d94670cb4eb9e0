//! Legal move enumeration with symmetry reduction
//!
//! Every empty cell combines with every (quadrant, direction) pair, giving
//! eight raw moves per empty cell. Many of them lead to boards that are the
//! same up to a rotation of the whole grid; `find_successors` keeps only the
//! first move found for each such class.

use crate::board::{Board, Direction, Move, Pos, Quadrant, TOTAL_CELLS};

/// Distinct successor boards paired with the move that produced them,
/// in enumeration order
pub type Successors = Vec<(Board, Move)>;

/// All raw moves in row-major cell order; per cell, quadrants in order and
/// clockwise before counterclockwise.
pub fn find_raw_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(TOTAL_CELLS * 8);

    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if !board.is_empty(pos) {
            continue;
        }
        for quadrant in Quadrant::ALL {
            for direction in Direction::ALL {
                moves.push(Move::new(pos.row, pos.col, quadrant, direction));
            }
        }
    }

    moves
}

/// Successor boards, one per whole-board-rotation class.
///
/// The first move (in `find_raw_moves` order) reaching a class is kept as its
/// representative; later moves into the same class are dropped.
pub fn find_successors(board: &Board) -> Successors {
    let mut found: Successors = Vec::new();

    for mv in find_raw_moves(board) {
        // Raw moves only target empty cells
        let Ok(next) = board.apply(mv) else {
            continue;
        };

        let present = found
            .iter()
            .any(|(kept, _)| kept.equals_ignore_rotation(&next));
        if !present {
            found.push((next, mv));
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Stone};

    #[test]
    fn test_raw_moves_on_empty_board() {
        let moves = find_raw_moves(&Board::new());
        assert_eq!(moves.len(), 36 * 8);
        assert_eq!(
            moves[0],
            Move::new(0, 0, Quadrant::UpperLeft, Direction::Clockwise)
        );
        assert_eq!(
            moves[1],
            Move::new(0, 0, Quadrant::UpperLeft, Direction::CounterClockwise)
        );
        assert_eq!(
            moves[2],
            Move::new(0, 0, Quadrant::UpperRight, Direction::Clockwise)
        );
        assert_eq!(
            moves[8],
            Move::new(0, 1, Quadrant::UpperLeft, Direction::Clockwise)
        );
        assert_eq!(
            moves[287],
            Move::new(5, 5, Quadrant::LowerRight, Direction::CounterClockwise)
        );
    }

    #[test]
    fn test_raw_moves_skip_occupied() {
        let b = Board::new().set_at(Pos::new(0, 0)).unwrap();
        let moves = find_raw_moves(&b);
        assert_eq!(moves.len(), 35 * 8);
        assert!(moves.iter().all(|m| m.pos() != Pos::new(0, 0)));
    }

    #[test]
    fn test_successors_of_empty_board() {
        let succs = find_successors(&Board::new());
        assert_eq!(succs.len(), 9);

        let first: Vec<Move> = succs.iter().map(|(_, m)| *m).collect();
        assert_eq!(
            first[0],
            Move::new(0, 0, Quadrant::UpperLeft, Direction::Clockwise)
        );
        assert_eq!(
            first[8],
            Move::new(1, 1, Quadrant::UpperLeft, Direction::Clockwise)
        );
    }

    #[test]
    fn test_successors_are_pairwise_distinct() {
        let b = Board::new().set_at(Pos::new(1, 1)).unwrap();
        let succs = find_successors(&b);
        assert_eq!(succs.len(), 35);

        for (i, (a, _)) in succs.iter().enumerate() {
            for (other, _) in &succs[i + 1..] {
                assert!(!a.equals_ignore_rotation(other));
            }
        }
    }

    #[test]
    fn test_successor_board_matches_its_move() {
        let b = Board::new().set_at(Pos::new(2, 3)).unwrap();
        for (next, mv) in find_successors(&b) {
            assert_eq!(b.apply(mv).unwrap(), next);
            assert_eq!(next.turn(), Color::White);
            assert_eq!(next.stone_count(), 2);
        }
    }

    #[test]
    fn test_no_successors_on_full_board() {
        let full: Board = "OX".repeat(18).parse().unwrap();
        assert!(find_raw_moves(&full).is_empty());
        assert!(find_successors(&full).is_empty());
        assert_eq!(full.get(Pos::new(0, 0)), Stone::White);
    }
}
