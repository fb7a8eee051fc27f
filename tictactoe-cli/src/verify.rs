//! Verify command - prove the engine never loses
//!
//! Walks every game the human could play against the engine, with both
//! first-move assignments. The engine is deterministic, so the human's
//! choices are the only branching.
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: verify_all(), report_results()
//! - Level 3: explore()

use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use tictactoe_core::{GameResult, GameState, MinimaxAI, Side};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct VerifyArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Outcome counts over every explored game
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub games: u64,
    pub machine_wins: u64,
    pub ties: u64,
    pub human_wins: u64,
    /// Square sequence of the first game the engine lost, if any
    pub first_loss: Option<Vec<u8>>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run verify command
pub fn run(args: VerifyArgs) -> Result<()> {
    tracing::info!("Exploring every human strategy against the engine");

    let start = Instant::now();
    let tally = verify_all()?;
    let elapsed = start.elapsed();

    report_results(&tally, elapsed, args.json)?;

    if let Some(line) = &tally.first_loss {
        bail!(
            "engine lost {} of {} games; first losing line: {:?}",
            tally.human_wins,
            tally.games,
            line
        );
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Explore every game from both starting sides
pub fn verify_all() -> Result<Tally> {
    let mut tally = Tally::default();
    let mut ai = MinimaxAI::new();

    for first in [Side::Human, Side::Machine] {
        let before = tally.games;
        explore(GameState::new(first), &mut ai, &mut tally)?;
        tracing::debug!("{} first: {} games", first, tally.games - before);
    }

    Ok(tally)
}

fn report_results(tally: &Tally, elapsed: Duration, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(tally)?);
        return Ok(());
    }

    println!("\n=== Verification ===");
    println!("Games explored: {}", tally.games);
    println!("Machine wins:   {}", tally.machine_wins);
    println!("Ties:           {}", tally.ties);
    println!("Human wins:     {}", tally.human_wins);
    println!("Elapsed:        {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Depth-first walk: branch on every human move, follow the engine's reply
fn explore(state: GameState, ai: &mut MinimaxAI, tally: &mut Tally) -> Result<()> {
    match state.result() {
        GameResult::Ongoing => {}
        result => {
            record(&state, result, tally);
            return Ok(());
        }
    }

    match state.to_move() {
        Side::Human => {
            for mv in state.legal_moves() {
                let mut next = state.clone();
                next.apply_move(mv)?;
                explore(next, ai, tally)?;
            }
        }
        Side::Machine => {
            let mut next = state;
            next.play_machine(ai)?;
            explore(next, ai, tally)?;
        }
    }

    Ok(())
}

fn record(state: &GameState, result: GameResult, tally: &mut Tally) {
    tally.games += 1;
    match result {
        GameResult::MachineWins => tally.machine_wins += 1,
        GameResult::Tie => tally.ties += 1,
        GameResult::HumanWins => {
            tally.human_wins += 1;
            if tally.first_loss.is_none() {
                let line = state.history().iter().map(|(_, mv)| mv.square()).collect();
                tally.first_loss = Some(line);
            }
        }
        GameResult::Ongoing => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_never_loses() {
        let tally = verify_all().unwrap();
        assert_eq!(tally.human_wins, 0);
        assert_eq!(tally.first_loss, None);
        assert!(tally.games > 0);
        assert_eq!(tally.games, tally.machine_wins + tally.ties);
    }

    #[test]
    fn test_record_keeps_first_loss() {
        let mut tally = Tally::default();
        let mut state = GameState::new(Side::Human);
        for square in [1, 4, 2, 5, 3] {
            state
                .apply_move(tictactoe_core::Move::from_square(square).unwrap())
                .unwrap();
        }
        assert_eq!(state.result(), GameResult::HumanWins);
        record(&state, state.result(), &mut tally);
        record(&state, state.result(), &mut tally);
        assert_eq!(tally.human_wins, 2);
        assert_eq!(tally.first_loss, Some(vec![1, 4, 2, 5, 3]));
    }
}
