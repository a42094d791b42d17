//! Command implementations

pub mod interactive;
pub mod normalize;
pub mod solve;

pub use interactive::run_interactive;
pub use normalize::{NormalizeResult, normalize_file};
pub use solve::{SolveConfig, SolveResult, solve_puzzle};
