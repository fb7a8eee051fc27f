//! Analyze command - show the engine's reply to a given position
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: analyze(), report_results()
//! - Level 4: formatting utilities

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use tictactoe_core::{outcome, Board, GameResult, MinimaxAI, Move, Side};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Position as nine cells, e.g. "XO./.X./..." (X human, O machine, . or digit empty)
    pub board: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// A candidate machine move with its minimax score
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
struct Candidate {
    square: u8,
    #[serde(rename = "move")]
    mv: Move,
    score: i32,
}

/// Everything reported for one position
#[derive(Clone, Debug, Serialize)]
struct Analysis {
    board: Board,
    outcome: GameResult,
    machine_move: Option<Move>,
    candidates: Vec<Candidate>,
    nodes: u64,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run analyze command
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let board: Board = args
        .board
        .parse()
        .with_context(|| format!("Failed to parse board: {}", args.board))?;

    warn_if_not_machine_turn(&board);

    let analysis = analyze(&board);
    report_results(&analysis, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Score every machine reply; finished positions get no search
fn analyze(board: &Board) -> Analysis {
    let result = outcome(board, Side::Human, Side::Machine);
    if result.is_over() {
        return Analysis {
            board: *board,
            outcome: result,
            machine_move: None,
            candidates: vec![],
            nodes: 0,
        };
    }

    let mut ai = MinimaxAI::new();
    let candidates: Vec<Candidate> = ai
        .scored_moves(board)
        .into_iter()
        .map(|(mv, score)| Candidate {
            square: mv.square(),
            mv,
            score,
        })
        .collect();
    let nodes = ai.stats().nodes;
    // Same pick as best_move: first minimum in row-major order
    let machine_move = candidates.iter().min_by_key(|c| c.score).map(|c| c.mv);

    Analysis {
        board: *board,
        outcome: result,
        machine_move,
        candidates,
        nodes,
    }
}

fn report_results(analysis: &Analysis, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(analysis)?);
    } else {
        print_text_results(analysis);
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// The engine assumes the machine is to move
fn warn_if_not_machine_turn(board: &Board) {
    let human = board.count(Side::Human);
    let machine = board.count(Side::Machine);
    if human != machine && human != machine + 1 {
        tracing::warn!(
            "Board has {} human and {} machine markers; it cannot be the machine's turn",
            human,
            machine
        );
    }
}

fn print_text_results(analysis: &Analysis) {
    println!("Board:   {}", analysis.board);
    println!("Outcome: {:?}", analysis.outcome);

    let Some(mv) = analysis.machine_move else {
        return;
    };

    println!("Machine plays square {} {}", mv.square(), mv);
    println!("\nCandidates ({} positions searched):", analysis.nodes);
    for c in &analysis.candidates {
        let marker = if c.mv == mv { " <" } else { "" };
        println!("  square {}: {:>3}{}", c.square, c.score, marker);
    }
}
