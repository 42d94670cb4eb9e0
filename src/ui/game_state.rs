//! Game state management for the Pentago GUI

use crate::board::{Board, Color, Direction, Move, Pos, Quadrant};
use crate::config::AiConfig;
use crate::rules::{winning_stones, Winner};
use crate::{AIEngine, MoveResult};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Color },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Color::White,
        }
    }
}

/// Which half of a turn the human is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for a stone to be placed
    Place,
    /// Stone placed on `placed`, waiting for a quadrant rotation
    Rotate { placed: Pos },
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    /// Position after the last completed move
    pub board: Board,
    pub mode: GameMode,
    pub phase: TurnPhase,
    pub winner: Winner,
    pub last_move: Option<Move>,
    pub move_history: Vec<Move>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub suggested_move: Option<Move>,
    pub message: Option<String>,

    ai_config: AiConfig,
}

impl GameState {
    pub fn new(mode: GameMode, ai_config: AiConfig) -> Self {
        Self {
            board: Board::new(),
            mode,
            phase: TurnPhase::Place,
            winner: Winner::None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            suggested_move: None,
            message: None,
            ai_config,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.ai_config.clone());
    }

    pub fn ai_config(&self) -> &AiConfig {
        &self.ai_config
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.board.turn()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_over()
    }

    /// Board to draw, including a stone placed but not yet rotated
    pub fn display_board(&self) -> Board {
        match self.phase {
            TurnPhase::Rotate { placed } => self.board.set_at(placed).unwrap_or(self.board),
            TurnPhase::Place => self.board,
        }
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    fn check_can_act(&self) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        Ok(())
    }

    /// First half of a human turn: put a stone on an empty cell
    pub fn try_place(&mut self, pos: Pos) -> Result<(), String> {
        self.check_can_act()?;

        if self.phase != TurnPhase::Place {
            return Err("Rotate a quadrant first".to_string());
        }
        if !self.board.is_empty(pos) {
            return Err("Field is blocked".to_string());
        }

        self.phase = TurnPhase::Rotate { placed: pos };
        self.message = None;
        Ok(())
    }

    /// Second half of a human turn: rotate a quadrant and finish the move
    pub fn try_rotate(&mut self, quadrant: Quadrant, direction: Direction) -> Result<(), String> {
        self.check_can_act()?;

        let TurnPhase::Rotate { placed } = self.phase else {
            return Err("Place a stone first".to_string());
        };

        self.execute_move(Move::new(placed.row, placed.col, quadrant, direction));
        Ok(())
    }

    /// Take back a placed stone before rotating
    pub fn cancel_placement(&mut self) {
        self.phase = TurnPhase::Place;
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, mv: Move) {
        let color = self.current_turn();

        let next = match self.board.apply(mv) {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!(%mv, error = %e, "rejected move");
                self.message = Some(e.to_string());
                self.phase = TurnPhase::Place;
                return;
            }
        };

        self.board = next;
        self.move_history.push(mv);
        self.last_move = Some(mv);
        self.suggested_move = None;
        self.phase = TurnPhase::Place;
        self.message = None;
        self.winner = self.board.winner();

        tracing::info!(%color, %mv, winner = ?self.winner, "move played");
    }

    /// Stones forming a five, for highlighting once the game is over
    pub fn winning_stones(&self) -> Vec<Pos> {
        let mut stones = Vec::new();
        if matches!(self.winner, Winner::White | Winner::Draw) {
            stones.extend(winning_stones(&self.board, Color::White));
        }
        if matches!(self.winner, Winner::Black | Winner::Draw) {
            stones.extend(winning_stones(&self.board, Color::Black));
        }
        stones
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_over() {
            return;
        }

        let board = self.board;
        let config = self.ai_config.clone();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::from_config(&config);
            let result = engine.get_move_with_stats(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    tracing::error!("AI worker exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some(move_result) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result.clone());

            if let Some(mv) = move_result.best_move {
                self.execute_move(mv);
            } else {
                self.message = Some("AI could not find a move".to_string());
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for PvP mode
    pub fn request_suggestion(&mut self) {
        if self.is_over() || self.is_ai_thinking() {
            return;
        }

        // Quick, shallow search
        let mut engine = AIEngine::with_config(self.ai_config.breadth, 1);
        let result = engine.get_move_with_stats(&self.board);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        if let TurnPhase::Rotate { .. } = self.phase {
            self.cancel_placement();
            return;
        }
        if self.move_history.is_empty() {
            return;
        }

        // For PvE, undo two moves (human + AI)
        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.move_history.len() >= 2 => 2,
            _ => 1,
        };

        // Simple undo: reset and replay
        let moves_to_keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<Move> = self.move_history.drain(..moves_to_keep).collect();
        self.move_history.clear();

        self.board = Board::new();
        self.winner = Winner::None;
        self.last_move = None;
        self.suggested_move = None;
        self.message = None;

        for mv in moves {
            self.execute_move(mv);
        }
    }
}
