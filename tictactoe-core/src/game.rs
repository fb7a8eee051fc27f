//! Turn-taking game state

use crate::ai::MinimaxAI;
use crate::board::{Board, Move, Side};
use crate::checker::{outcome, GameResult};
use crate::error::{Error, Result};

/// A game between the human and the machine
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    to_move: Side,
    result: GameResult,
    history: Vec<(Side, Move)>,
}

impl GameState {
    /// Fresh game with `first` to move
    pub fn new(first: Side) -> Self {
        Self::from_board(Board::new(), first)
    }

    /// Resume from an arbitrary position
    pub fn from_board(board: Board, to_move: Side) -> Self {
        Self {
            board,
            to_move,
            result: outcome(&board, Side::Human, Side::Machine),
            history: Vec::new(),
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Moves played since this state was created
    pub fn history(&self) -> &[(Side, Move)] {
        &self.history
    }

    /// Empty cells, or nothing once the game is over
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.result.is_over() {
            return vec![];
        }
        self.board.empty_cells().collect()
    }

    // ========================================================================
    // PLAY
    // ========================================================================

    /// Place the side-to-move's marker and pass the turn
    pub fn apply_move(&mut self, mv: Move) -> Result<GameResult> {
        if self.result.is_over() {
            return Err(Error::GameOver);
        }
        self.board.place(mv, self.to_move)?;
        self.history.push((self.to_move, mv));
        self.result = outcome(&self.board, Side::Human, Side::Machine);
        self.to_move = self.to_move.opponent();
        Ok(self.result)
    }

    /// Let `ai` choose and play the machine's move
    pub fn play_machine(&mut self, ai: &mut MinimaxAI) -> Result<Move> {
        if self.result.is_over() {
            return Err(Error::GameOver);
        }
        if self.to_move != ai.machine() {
            return Err(Error::NotMachineTurn);
        }
        let mv = ai.best_move(&self.board).ok_or(Error::GameOver)?;
        self.apply_move(mv)?;
        Ok(mv)
    }
}
