//! N-Queens Example
//!
//! The N-Queens problem places N queens on an N×N chessboard such that no
//! two queens threaten each other. This example enumerates the placements
//! with the backtracking engine, pauses after a few of them, and resumes
//! from the last one.
//!
//! Reads `search.toml` from the working directory when present. Set
//! `RUST_LOG=debug` to see engine events.

use backtrack::prelude::*;
use tracing_subscriber::EnvFilter;

/// Prints a board given as the queen's column for each row.
fn print_board(columns: &[i32]) {
    let n = columns.len();
    println!("{}", "-".repeat(n * 2 + 1));
    for &column in columns {
        print!("|");
        for col_idx in 0..n as i32 {
            print!("{}", if col_idx == column { "Q|" } else { " |" });
        }
        println!();
    }
    println!("{}", "-".repeat(n * 2 + 1));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("Backtrack N-Queens Example");
    println!("==========================\n");

    let config = SearchConfig::load("search.toml").unwrap_or_default();
    let outcome = run_search(&config)?;

    println!(
        "{} on size {}: {} solution(s), stopped: {}\n",
        config.problem,
        config.size,
        outcome.solution_count(),
        outcome.stop_reason
    );

    for (index, solution) in outcome.solutions.iter().enumerate() {
        println!("Solution {} {:?}", index + 1, solution);
        if config.problem == ProblemKind::NQueens {
            print_board(solution);
        }
    }

    // Resume after the last reported solution and count what is left.
    if let Some(last) = outcome.solutions.last() {
        let mut engine = standard_engine(config.problem, config.size)?;
        engine.seed(last)?;
        let remaining = engine.count_solutions()?;
        println!("\n{remaining} more solution(s) after {last:?}");
    }

    Ok(())
}
