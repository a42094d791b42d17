//! Letter Boxed Solver
//!
//! Finds chains of dictionary words that use all twelve letters of a Letter Boxed puzzle.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_boxed::catalog::Exclusions;
//! use letter_boxed::core::Puzzle;
//! use letter_boxed::solver::{ExhaustiveSearch, Solver};
//!
//! let puzzle: Puzzle = "abc def ghi jkl".parse().unwrap();
//! let dictionary = ["adgjbe", "ehkcfil", "eha"];
//!
//! let solver = Solver::new(ExhaustiveSearch::new(2), puzzle, &dictionary, &Exclusions::new());
//! for chain in solver.solve().solutions {
//!     println!("{chain}");
//! }
//! ```

// Core domain types
pub mod core;

// Dictionary filtering
pub mod catalog;

// Search algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
