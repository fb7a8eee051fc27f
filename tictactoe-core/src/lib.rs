//! Tic-tac-toe core - game model and perfect-play engine
//!
//! This crate provides:
//! - Board model with the 1-9 / 0 / -1 cell encoding
//! - Win and tie detection
//! - Exhaustive minimax search for the machine's move
//! - Turn-taking game state

pub mod board;
pub mod checker;
pub mod eval;
pub mod ai;
pub mod game;
pub mod error;

// Re-exports for convenient access
pub use board::{Board, Cell, Move, Side, LINES, NUM_CELLS};
pub use checker::{is_tie, is_win, outcome, GameResult};
pub use eval::{terminal_score, HUMAN_WIN_SCORE, MACHINE_WIN_SCORE, TIE_SCORE};
pub use ai::{select_move, MinimaxAI, SearchStats};
pub use game::GameState;
pub use error::{Error, Result};
