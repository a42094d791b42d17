//! Display functions for command results

use super::formatters::{chain_length, format_chain, puzzle_box, solution_count};
use crate::commands::{NormalizeResult, SolveResult};
use crate::core::Puzzle;
use colored::Colorize;

/// Print the puzzle layout
pub fn print_puzzle(puzzle: &Puzzle) {
    println!();
    for line in puzzle_box(puzzle) {
        println!("{}", line.bright_yellow().bold());
    }
}

/// Print the result of solving a puzzle
///
/// With `sort`, shorter chains are listed first; otherwise discovery order is kept.
pub fn print_solve_result(result: &SolveResult, verbose: bool, sort: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle: {}  ({} search)",
        result.puzzle.to_uppercase().bright_yellow().bold(),
        result.mode
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        println!("  Playable words: {}", result.catalog_size);
        println!("  Start words:    {}", result.attempts);
        if result.cap_reached {
            println!("  {}", "Attempt limit reached".yellow());
        }
        println!("  Time taken:     {:.3}s", result.duration.as_secs_f64());
    }

    if !result.is_solved() {
        println!("\n{}", "❌ No solution found".red().bold());
        return;
    }

    let chains: Vec<&[String]> = if sort {
        result.sorted_by_length()
    } else {
        result.solutions.iter().map(Vec::as_slice).collect()
    };

    let count = chains.len();
    println!();
    for (i, chain) in chains.into_iter().enumerate() {
        let words = if chain.len() == 1 { "word" } else { "words" };
        println!(
            "  {:>3}. {}  {}",
            (i + 1).to_string().bright_black(),
            format_chain(chain).bright_white().bold(),
            format!("({} {words}, {} letters)", chain.len(), chain_length(chain)).bright_black()
        );
    }

    println!();
    println!("{}", format!("✅ {}", solution_count(count)).green().bold());
}

/// Print the result of normalizing a word list
pub fn print_normalize_result(result: &NormalizeResult, output: &str) {
    println!(
        "{} kept {} of {} entries ({} dropped) → {}",
        "✅".green(),
        result.kept.to_string().bright_yellow().bold(),
        result.read,
        result.dropped(),
        output
    );
}
