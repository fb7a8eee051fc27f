//! Win and tie detection over a board snapshot

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Side, LINES};

/// State of a game as seen from a board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    HumanWins,
    MachineWins,
    Tie,
}

impl GameResult {
    pub fn is_over(self) -> bool {
        self != GameResult::Ongoing
    }

    /// Result in which `side` has won
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::Human => GameResult::HumanWins,
            Side::Machine => GameResult::MachineWins,
        }
    }
}

/// True if `side` holds all three cells of some row, column or diagonal
pub fn is_win(board: &Board, side: Side) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&mv| board.cell(mv) == Cell::Taken(side)))
}

/// True if no cell is empty.
///
/// Does not look for a completed line: a full board that also holds a win
/// still reports a tie. Use [`outcome`] when the distinction matters.
pub fn is_tie(board: &Board) -> bool {
    !board.has_empty_cell()
}

/// Classify a board, checking human win, machine win, then tie
pub fn outcome(board: &Board, human: Side, machine: Side) -> GameResult {
    if is_win(board, human) {
        GameResult::win_for(human)
    } else if is_win(board, machine) {
        GameResult::win_for(machine)
    } else if is_tie(board) {
        GameResult::Tie
    } else {
        GameResult::Ongoing
    }
}
