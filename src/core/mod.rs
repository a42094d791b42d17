//! Core domain types for Letter Boxed
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! Letters, puzzles, scored words and chains are plain values shared by every other layer.

mod chain;
mod letters;
mod puzzle;
mod word;

pub use chain::Chain;
pub use letters::LetterSet;
pub use puzzle::{
    LETTER_COUNT, LETTERS_PER_SIDE, Puzzle, PuzzleError, SIDE_COUNT, parse_letter_token,
};
pub use word::{ScoredWord, by_priority, score};
