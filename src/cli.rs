//! Text-mode game loop
//!
//! Plays one game between a human on `input`/`output` and the engine. The
//! loop is generic over the reader and writer so it runs on stdin/stdout from
//! the binary and on in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use crate::board::{Board, Color, Direction, Move, Pos, Quadrant, BOARD_SIZE};
use crate::engine::AIEngine;
use crate::rules::Winner;

/// Play a game from the empty board.
///
/// When `human` is `None` the player is asked which color to take. Returns
/// the final result, or `UnexpectedEof` if `input` runs dry mid-game.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: W,
    human: Option<Color>,
    engine: &mut AIEngine,
) -> io::Result<Winner> {
    play(Board::new(), input, output, human, engine)
}

/// Play a game starting from `board`.
pub fn play<R: BufRead, W: Write>(
    mut board: Board,
    mut input: R,
    mut output: W,
    human: Option<Color>,
    engine: &mut AIEngine,
) -> io::Result<Winner> {
    let human = match human {
        Some(color) => color,
        None => ask_color(&mut input, &mut output)?,
    };
    tracing::info!(%human, "starting game");
    writeln!(output, "Starting game")?;

    while board.winner() == Winner::None {
        writeln!(output, "\nBoard:\n{board}")?;

        let mv = if board.turn() == human {
            ask_move(&board, &mut input, &mut output)?
        } else {
            let Some(mv) = engine.get_move(&board) else {
                break;
            };
            writeln!(output, "My move: {mv}")?;
            mv
        };

        board = board.apply(mv).map_err(io::Error::other)?;
    }

    let winner = board.winner();
    writeln!(output, "\nBoard:\n{board}")?;
    match winner {
        Winner::White => writeln!(output, "White wins")?,
        Winner::Black => writeln!(output, "Black wins")?,
        Winner::Draw | Winner::None => writeln!(output, "Game is drawn")?,
    }
    output.flush()?;

    tracing::info!(?winner, "game finished");
    Ok(winner)
}

fn ask_color<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Color> {
    loop {
        writeln!(output, "Will you play white (1) or black (-1)?")?;
        output.flush()?;
        match read_line(input)?.trim() {
            "1" => return Ok(Color::White),
            "-1" => return Ok(Color::Black),
            _ => writeln!(output, "Invalid input")?,
        }
    }
}

/// Read a placement and a rotation, re-prompting until both are legal
fn ask_move<R: BufRead, W: Write>(
    board: &Board,
    input: &mut R,
    output: &mut W,
) -> io::Result<Move> {
    let pos = loop {
        writeln!(output, "Your move (row, col, e.g. '0 5')?")?;
        output.flush()?;
        let Some((row, col)) = parse_pair(&read_line(input)?) else {
            continue;
        };
        if row >= BOARD_SIZE as u8 || col >= BOARD_SIZE as u8 {
            continue;
        }
        let pos = Pos::new(row, col);
        if !board.is_empty(pos) {
            writeln!(output, "Field is blocked")?;
            continue;
        }
        break pos;
    };

    let (quadrant, direction) = loop {
        writeln!(
            output,
            "\nRotate which quadrant?\n0 1\t\t0 = clockwise\n2 3\t\t1 = counterclockwise\n?"
        )?;
        output.flush()?;
        let Some((q, d)) = parse_pair(&read_line(input)?) else {
            continue;
        };
        if let (Some(q), Some(d)) = (Quadrant::from_index(q), Direction::from_index(d)) {
            break (q, d);
        }
    };

    Ok(Move::new(pos.row, pos.col, quadrant, direction))
}

/// Exactly two whitespace-separated small non-negative integers
fn parse_pair(line: &str) -> Option<(u8, u8)> {
    let mut parts = line.split_whitespace();
    let a = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((a, b))
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the game ended",
        ));
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const FOUR_IN_ROW: &str = "O O O O _ _
                               _ _ _ _ _ _
                               _ _ _ _ _ _
                               _ _ _ _ _ _
                               _ _ _ _ _ _
                               _ _ _ _ _ _";

    fn play_script(
        board: Board,
        script: &str,
        human: Option<Color>,
    ) -> (io::Result<Winner>, String) {
        let mut engine = AIEngine::with_config(1, 0);
        let mut out = Vec::new();
        let result = play(board, Cursor::new(script), &mut out, human, &mut engine);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("0 5\n"), Some((0, 5)));
        assert_eq!(parse_pair("  3   1 "), Some((3, 1)));
        assert_eq!(parse_pair("3"), None);
        assert_eq!(parse_pair("1 2 3"), None);
        assert_eq!(parse_pair("a b"), None);
        assert_eq!(parse_pair("-1 2"), None);
    }

    #[test]
    fn test_human_completes_five() {
        let board: Board = FOUR_IN_ROW.parse().unwrap();
        let (result, out) = play_script(board, "0 4\n3 0\n", Some(Color::White));

        assert_eq!(result.unwrap(), Winner::White);
        assert!(out.contains("Starting game"));
        assert!(out.contains("White wins"));
        assert!(!out.contains("My move"));
    }

    #[test]
    fn test_bad_input_is_reprompted() {
        let board: Board = FOUR_IN_ROW.parse().unwrap();
        let script = "nonsense\n7 7\n0 0\n0 4\n4 0\n1 2\n3 1\n";
        let (result, out) = play_script(board, script, Some(Color::White));

        assert_eq!(result.unwrap(), Winner::White);
        assert_eq!(out.matches("Field is blocked").count(), 1);
        assert_eq!(out.matches("Your move").count(), 4);
        assert_eq!(out.matches("Rotate which quadrant?").count(), 3);
    }

    #[test]
    fn test_engine_takes_the_win() {
        let board: Board = FOUR_IN_ROW.parse().unwrap();
        let (result, out) = play_script(board, "", Some(Color::Black));

        assert_eq!(result.unwrap(), Winner::White);
        assert!(out.contains("My move: (0|4)"));
        assert!(out.contains("White wins"));
    }

    #[test]
    fn test_color_prompt() {
        let board: Board = FOUR_IN_ROW.parse().unwrap();
        let (result, out) = play_script(board, "0\nwhite\n-1\n", None);

        assert_eq!(result.unwrap(), Winner::White);
        assert_eq!(out.matches("Will you play white (1) or black (-1)?").count(), 3);
        assert_eq!(out.matches("Invalid input").count(), 2);
    }

    #[test]
    fn test_end_of_input() {
        let mut engine = AIEngine::with_config(1, 0);
        let mut out = Vec::new();
        let err = run(
            Cursor::new("0 0\n"),
            &mut out,
            Some(Color::White),
            &mut engine,
        )
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

        let err = run(Cursor::new(""), &mut out, None, &mut engine).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_drawn_board_ends_immediately() {
        let full: Board = "OX".repeat(18).parse().unwrap();
        let (result, out) = play_script(full, "", Some(Color::White));

        assert_eq!(result.unwrap(), Winner::Draw);
        assert!(out.contains("Game is drawn"));
    }
}
