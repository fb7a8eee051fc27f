//! Match command - play the engine against a random opponent
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_match(), report_results()
//! - Level 3: play_single_game(), compute_match_statistics()
//! - Level 4: formatting utilities

use anyhow::Result;
use clap::Args;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tictactoe_core::{GameResult, GameState, MinimaxAI, Move, Side};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Number of games to play (alternating who moves first)
    #[arg(long, default_value = "100")]
    pub games: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRecord {
    game_number: usize,
    first: Side,
    result: GameResult,
    moves: Vec<Move>,
}

/// Aggregated match results
#[derive(Clone, Debug)]
struct MatchResults {
    games: Vec<GameRecord>,
    machine_wins: usize,
    random_wins: usize,
    ties: usize,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
///
/// 1. Play the requested number of games against a random mover
/// 2. Report results
pub fn run(args: MatchArgs, seed: Option<u64>) -> Result<()> {
    tracing::info!("Starting match: {} games against a random opponent", args.games);

    let results = play_match(args.games, seed)?;

    if results.random_wins > 0 {
        tracing::warn!("The engine lost {} games", results.random_wins);
    }

    report_results(&results, args.json);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play all games in the match
fn play_match(games: usize, seed: Option<u64>) -> Result<MatchResults> {
    let mut rng = create_rng(seed);
    let mut ai = MinimaxAI::new();
    let mut records = Vec::with_capacity(games);

    for game_num in 0..games {
        // Alternate who opens
        let first = if game_num % 2 == 0 {
            Side::Human
        } else {
            Side::Machine
        };

        let record = play_single_game(first, game_num + 1, &mut ai, &mut rng)?;

        tracing::debug!(
            "Game {}: {:?} in {} moves",
            record.game_number,
            record.result,
            record.moves.len()
        );

        records.push(record);
    }

    Ok(compute_match_statistics(records))
}

/// Report match results
fn report_results(results: &MatchResults, json: bool) {
    if json {
        print_json_results(results);
    } else {
        print_text_results(results);
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play one game; the random side takes the human's seat
fn play_single_game(
    first: Side,
    game_number: usize,
    ai: &mut MinimaxAI,
    rng: &mut ChaCha8Rng,
) -> Result<GameRecord> {
    let mut state = GameState::new(first);

    while !state.result().is_over() {
        match state.to_move() {
            Side::Human => {
                let legal = state.legal_moves();
                if let Some(&mv) = legal.choose(rng) {
                    state.apply_move(mv)?;
                }
            }
            Side::Machine => {
                state.play_machine(ai)?;
            }
        }
    }

    Ok(GameRecord {
        game_number,
        first,
        result: state.result(),
        moves: state.history().iter().map(|&(_, mv)| mv).collect(),
    })
}

/// Compute aggregate statistics from game records
fn compute_match_statistics(games: Vec<GameRecord>) -> MatchResults {
    let count = |result: GameResult| games.iter().filter(|g| g.result == result).count();
    let machine_wins = count(GameResult::MachineWins);
    let random_wins = count(GameResult::HumanWins);
    let ties = count(GameResult::Tie);

    MatchResults {
        games,
        machine_wins,
        random_wins,
        ties,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn percent(part: usize, total: usize) -> f32 {
    if total > 0 {
        part as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

/// Print results as JSON
fn print_json_results(results: &MatchResults) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        first: Side,
        result: GameResult,
        squares: Vec<u8>,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        total_games: usize,
        machine_wins: usize,
        random_wins: usize,
        ties: usize,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        total_games: results.games.len(),
        machine_wins: results.machine_wins,
        random_wins: results.random_wins,
        ties: results.ties,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                first: g.first,
                result: g.result,
                squares: g.moves.iter().map(|mv| mv.square()).collect(),
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

/// Print results as text
fn print_text_results(results: &MatchResults) {
    let total = results.games.len();

    println!("\n=== Match Results ===");
    println!("Total games:  {}", total);
    println!(
        "Machine wins: {} ({:.1}%)",
        results.machine_wins,
        percent(results.machine_wins, total)
    );
    println!(
        "Random wins:  {} ({:.1}%)",
        results.random_wins,
        percent(results.random_wins, total)
    );
    println!(
        "Ties:         {} ({:.1}%)",
        results.ties,
        percent(results.ties, total)
    );
}

// ============================================================================
// TESTS
// ============================================================================
