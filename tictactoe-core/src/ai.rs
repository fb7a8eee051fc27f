//! Exhaustive minimax search
//!
//! The search runs every line to a terminal position; a 3x3 board never needs
//! more than nine plies. Positions are passed by value, so each ply works on
//! its own copy of the board and the caller's board is only ever borrowed.

use crate::board::{Board, Move, Side};
use crate::eval::{terminal_score, TIE_SCORE};

// ============================================================================
// SEARCH STATISTICS
// ============================================================================

/// Counters for the most recent search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited by the recursive scorer
    pub nodes: u64,
    /// Positions that ended the game
    pub terminals: u64,
}

// ============================================================================
// MINIMAX AI
// ============================================================================

/// Minimax player for the machine side.
///
/// `human` is the maximizing side and `machine` the minimizing one, matching
/// the score convention in [`crate::eval`].
#[derive(Clone, Debug)]
pub struct MinimaxAI {
    human: Side,
    machine: Side,
    stats: SearchStats,
}

impl Default for MinimaxAI {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxAI {
    pub fn new() -> Self {
        Self::with_sides(Side::Human, Side::Machine)
    }

    /// Engine that searches on behalf of `machine` against `human`
    pub fn with_sides(human: Side, machine: Side) -> Self {
        debug_assert_ne!(human, machine, "sides must differ");
        Self {
            human,
            machine,
            stats: SearchStats::default(),
        }
    }

    pub fn machine(&self) -> Side {
        self.machine
    }

    /// Statistics of the last search
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Best move for the machine side, or `None` if the board is full.
    ///
    /// Picks the lowest-scoring candidate; among equal scores the first empty
    /// cell in row-major order wins.
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        let (mv, score) = self
            .scored_moves(board)
            .into_iter()
            .min_by_key(|&(_, score)| score)?;

        tracing::debug!(
            "machine plays {} (square {}): score={}, nodes={}",
            mv,
            mv.square(),
            score,
            self.stats.nodes
        );

        Some(mv)
    }

    /// Score of every machine placement, in row-major order
    pub fn scored_moves(&mut self, board: &Board) -> Vec<(Move, i32)> {
        self.stats = SearchStats::default();
        let (human, machine) = (self.human, self.machine);
        board
            .empty_cells()
            .map(|mv| (mv, self.minimax(board.with(mv, machine), human)))
            .collect()
    }

    /// Minimax value of `board` with `to_move` about to play
    pub fn evaluate(&mut self, board: &Board, to_move: Side) -> i32 {
        self.stats = SearchStats::default();
        self.minimax(*board, to_move)
    }

    fn minimax(&mut self, board: Board, to_move: Side) -> i32 {
        self.stats.nodes += 1;

        if let Some(score) = terminal_score(&board, self.human, self.machine) {
            self.stats.terminals += 1;
            return score;
        }

        let maximizing = to_move == self.human;
        let next = to_move.opponent();
        let scores = board
            .empty_cells()
            .map(|mv| self.minimax(board.with(mv, to_move), next));

        let best = if maximizing {
            scores.max()
        } else {
            scores.min()
        };

        // A non-terminal board always has an empty cell
        best.unwrap_or(TIE_SCORE)
    }
}

/// Pick the machine's reply on `board`.
///
/// Returns `None` only when no cell is empty.
pub fn select_move(board: &Board, human: Side, machine: Side) -> Option<Move> {
    MinimaxAI::with_sides(human, machine).best_move(board)
}

// ============================================================================
// TESTS
// ============================================================================
