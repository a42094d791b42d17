//! Letter Boxed search algorithms
//!
//! Scores the catalog, then searches word chains greedily or exhaustively.

mod engine;
pub mod exhaustive;
pub mod greedy;
mod index;
pub mod strategy;

pub use engine::Solver;
pub use exhaustive::ExhaustiveSearch;
pub use greedy::{GreedyConfig, GreedySearch};
pub use index::{ScoredIndex, StartQueue};
pub use strategy::{SearchMode, SearchReport, SearchStrategy};
