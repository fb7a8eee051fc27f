//! Boxed console rendering of the board

use tictactoe_core::board::BOARD_SIZE;
use tictactoe_core::{Board, Cell, Move, Side};

use crate::config::PlayConfig;

const INDENT: &str = "          ";

/// Draw the board; empty cells show their square number
pub fn render_board(board: &Board, config: &PlayConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("{INDENT}+-------------------+\n"));
    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{INDENT}|###################|\n"));
        out.push_str(&format!("{INDENT}|#"));
        for col in 0..BOARD_SIZE {
            let glyph = match board.cell(Move::new(row, col)) {
                Cell::Empty(square) => char::from(b'0' + square),
                Cell::Taken(Side::Human) => config.human_glyph,
                Cell::Taken(Side::Machine) => config.machine_glyph,
            };
            out.push_str(&format!("  {glyph}  #"));
        }
        out.push_str("|\n");
    }
    out.push_str(&format!("{INDENT}|###################|\n"));
    out.push_str(&format!("{INDENT}+-------------------+\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let out = render_board(&Board::new(), &PlayConfig::default());
        assert!(out.contains("|#  1  #  2  #  3  #|"));
        assert!(out.contains("|#  7  #  8  #  9  #|"));
        assert_eq!(out.lines().count(), 9);
        assert!(out.lines().all(|l| l.trim_start().len() == 21));
    }

    #[test]
    fn test_render_uses_glyphs() {
        let board: Board = "XO./.../...".parse().unwrap();
        let out = render_board(&board, &PlayConfig::default());
        assert!(out.contains("|#  X  #  O  #  3  #|"));

        let config = PlayConfig {
            human_glyph: '*',
            machine_glyph: '@',
            ..PlayConfig::default()
        };
        let out = render_board(&board, &config);
        assert!(out.contains("|#  *  #  @  #  3  #|"));
    }
}
