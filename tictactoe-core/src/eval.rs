//! Terminal position scoring
//!
//! Scores are from the human's point of view: the human side maximizes and
//! the machine side minimizes. There is no depth adjustment, so a win in one
//! move and a win in three score the same.

use crate::board::{Board, Side};
use crate::checker::{is_tie, is_win};

/// Score of a position where the human side has a line
pub const HUMAN_WIN_SCORE: i32 = 10;

/// Score of a position where the machine side has a line
pub const MACHINE_WIN_SCORE: i32 = -10;

/// Score of a full board without a line
pub const TIE_SCORE: i32 = 0;

/// Score a terminal position, or `None` if play can continue
pub fn terminal_score(board: &Board, human: Side, machine: Side) -> Option<i32> {
    if is_win(board, human) {
        Some(HUMAN_WIN_SCORE)
    } else if is_win(board, machine) {
        Some(MACHINE_WIN_SCORE)
    } else if is_tie(board) {
        Some(TIE_SCORE)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: Side = Side::Human;
    const M: Side = Side::Machine;

    #[test]
    fn test_terminal_scores() {
        assert_eq!(terminal_score(&"XXX/OO./...".parse().unwrap(), H, M), Some(10));
        assert_eq!(terminal_score(&"XX./OOO/X..".parse().unwrap(), H, M), Some(-10));
        assert_eq!(terminal_score(&"XXO/OOX/XOX".parse().unwrap(), H, M), Some(0));
    }

    #[test]
    fn test_non_terminal_has_no_score() {
        assert_eq!(terminal_score(&Board::new(), H, M), None);
        assert_eq!(terminal_score(&"XO./.X./...".parse().unwrap(), H, M), None);
    }

    #[test]
    fn test_swapped_roles_flip_sign() {
        // The first side argument is always the maximizer
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(terminal_score(&board, M, H), Some(MACHINE_WIN_SCORE));
    }
}
