//! Formatting utilities for terminal output

use crate::core::Puzzle;

/// Join chain words with arrows, uppercased
#[must_use]
pub fn format_chain<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| w.as_ref().to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Total letters typed to play a chain
#[must_use]
pub fn chain_length<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|w| w.as_ref().len()).sum()
}

/// "1 solution found", "3 solutions found"
#[must_use]
pub fn solution_count(count: usize) -> String {
    let noun = if count == 1 { "solution" } else { "solutions" };
    format!("{count} {noun} found")
}

/// Draw the puzzle as a box
///
/// Side 1 runs along the top, side 2 down the right, side 3 along the bottom and
/// side 4 down the left.
#[must_use]
pub fn puzzle_box(puzzle: &Puzzle) -> Vec<String> {
    let sides: Vec<Vec<char>> = puzzle
        .side_labels()
        .iter()
        .map(|s| s.to_uppercase().chars().collect())
        .collect();
    let spaced = |letters: &[char]| {
        letters
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut lines = Vec::with_capacity(5);
    lines.push(format!("  ┌ {} ┐", spaced(&sides[0])));
    for i in 0..sides[1].len() {
        lines.push(format!("  {}       {}", sides[3][i], sides[1][i]));
    }
    lines.push(format!("  └ {} ┘", spaced(&sides[2])));
    lines
}
