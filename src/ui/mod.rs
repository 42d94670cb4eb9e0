//! GUI module for the Pentago game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::PentagoApp;
pub use board_view::BoardClick;
pub use game_state::{AiState, GameMode, GameState, TurnPhase};
