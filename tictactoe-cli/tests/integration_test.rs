//! Integration tests for the tic-tac-toe engine
//!
//! Tests the full stack: board model, state checks, minimax search, and
//! turn-taking games

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use tictactoe_core::{
    is_tie, is_win, outcome, select_move, Board, GameResult, GameState, MinimaxAI, Move, Side,
    LINES,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

/// Random position where it is the machine's turn and nobody has won yet.
/// Returns `None` when the random game ended before reaching one.
fn random_machine_turn(rng: &mut ChaCha8Rng, plies: usize) -> Option<Board> {
    let mut state = GameState::new(Side::Human);
    for _ in 0..plies {
        let mv = *state.legal_moves().choose(rng)?;
        state.apply_move(mv).unwrap();
        if state.result().is_over() {
            return None;
        }
    }
    (state.to_move() == Side::Machine).then(|| *state.board())
}

/// Every human strategy against the engine; returns (games, human wins)
fn explore(state: GameState, ai: &mut MinimaxAI) -> (u64, u64) {
    match state.result() {
        GameResult::Ongoing => {}
        GameResult::HumanWins => return (1, 1),
        _ => return (1, 0),
    }
    match state.to_move() {
        Side::Human => state
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let mut next = state.clone();
                next.apply_move(mv).unwrap();
                explore(next, ai)
            })
            .fold((0, 0), |(g, w), (g2, w2)| (g + g2, w + w2)),
        Side::Machine => {
            let mut next = state;
            next.play_machine(ai).unwrap();
            explore(next, ai)
        }
    }
}

// ============================================================================
// STATE CHECKS
// ============================================================================

#[test]
fn test_every_line_is_a_win() {
    for line in LINES {
        let mut b = Board::new();
        for mv in line {
            b.place(mv, Side::Machine).unwrap();
        }
        assert!(is_win(&b, Side::Machine), "line {:?}", line);
        assert!(!is_win(&b, Side::Human));
    }
}

#[test]
fn test_tie_means_full() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..50 {
        let mut state = GameState::new(Side::Human);
        while !state.result().is_over() {
            assert!(!is_tie(state.board()));
            let mv = *state.legal_moves().choose(&mut rng).unwrap();
            state.apply_move(mv).unwrap();
        }
        assert_eq!(is_tie(state.board()), !state.board().has_empty_cell());
    }
}

#[test]
fn test_full_board_with_line_is_tie() {
    let b = board("XXX/OOX/XOO");
    assert!(is_win(&b, Side::Human));
    assert!(is_tie(&b));
    assert_eq!(outcome(&b, Side::Human, Side::Machine), GameResult::HumanWins);
}

// ============================================================================
// DECISION ENGINE
// ============================================================================

#[test]
fn test_empty_board_opens_top_left() {
    assert_eq!(
        select_move(&Board::new(), Side::Human, Side::Machine),
        Some(Move::new(0, 0))
    );
}

#[test]
fn test_blocks_bottom_row() {
    assert_eq!(
        select_move(&board(".../.O./XX."), Side::Human, Side::Machine),
        Some(Move::new(2, 2))
    );
}

#[test]
fn test_select_move_picks_empty_cell_and_leaves_board() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut checked = 0;
    for i in 0..200 {
        let plies = 1 + 2 * (i % 4);
        let Some(b) = random_machine_turn(&mut rng, plies) else {
            continue;
        };
        let before = b;
        let mv = select_move(&b, Side::Human, Side::Machine).unwrap();
        assert!(b.is_empty_at(mv), "{} -> {}", b, mv);
        assert_eq!(b, before);
        assert_eq!(select_move(&b, Side::Human, Side::Machine), Some(mv));
        checked += 1;
    }
    assert!(checked > 100);
}

#[test]
fn test_engine_never_loses() {
    let mut ai = MinimaxAI::new();
    for first in [Side::Human, Side::Machine] {
        let (games, human_wins) = explore(GameState::new(first), &mut ai);
        assert!(games > 0);
        assert_eq!(human_wins, 0, "{} first", first);
    }
}

#[test]
fn test_full_search_performance() {
    let start = Instant::now();
    let mut ai = MinimaxAI::new();
    ai.best_move(&Board::new());
    let elapsed = start.elapsed();
    println!(
        "Empty board: {} nodes in {:.1}ms",
        ai.stats().nodes,
        elapsed.as_secs_f64() * 1000.0
    );
    assert_eq!(ai.stats().nodes, 549_945);
}
