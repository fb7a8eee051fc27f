//! Minimax search timing
//!
//! Measures how long a full search takes from a handful of positions,
//! from the empty board (largest tree) down to late middlegames.

use std::time::Instant;

use tictactoe_core::{Board, MinimaxAI};

// ============================================================================
// TEST POSITIONS
// ============================================================================

fn positions() -> Vec<(&'static str, Board)> {
    let parse = |s: &str| s.parse::<Board>().expect("valid bench position");
    vec![
        ("empty", Board::new()),
        ("center opening", parse(".../.X./...")),
        ("corner opening", parse("X../.../...")),
        ("after three moves", parse("XO./.X./...")),
        ("late game", parse("XOX/.O./X..")),
    ]
}

// ============================================================================
// BENCHMARK STRUCTURES
// ============================================================================

#[derive(Clone, Debug)]
struct BenchmarkResult {
    position: String,
    avg_search_ms: f64,
    nodes: u64,
    nodes_per_second: f64,
}

impl BenchmarkResult {
    fn to_table_row(&self) -> String {
        format!(
            "| {:<22} | {:>9.2}ms | {:>8} | {:>12.0} |",
            self.position, self.avg_search_ms, self.nodes, self.nodes_per_second
        )
    }
}

// ============================================================================
// BENCHMARK: Time to Find Move
// ============================================================================

fn benchmark_search(name: &str, board: &Board, iterations: usize) -> BenchmarkResult {
    let mut ai = MinimaxAI::new();
    let mut total_time = 0.0;

    for _ in 0..iterations {
        let start = Instant::now();
        let _ = ai.best_move(board);
        total_time += start.elapsed().as_secs_f64() * 1000.0;
    }

    let avg_time = total_time / iterations as f64;
    let nodes = ai.stats().nodes;

    BenchmarkResult {
        position: name.to_string(),
        avg_search_ms: avg_time,
        nodes,
        nodes_per_second: nodes as f64 / (avg_time / 1000.0),
    }
}

fn main() {
    println!("\n=== MINIMAX SEARCH BENCHMARK ===");
    println!("| {:<22} | {:>11} | {:>8} | {:>12} |", "position", "avg", "nodes", "nodes/sec");

    for (name, board) in positions() {
        let result = benchmark_search(name, &board, 5);
        println!("{}", result.to_table_row());
    }

    println!();
}
