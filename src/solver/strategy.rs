//! Search strategies
//!
//! Defines the `SearchStrategy` trait, the report every search returns, and the
//! runtime-selectable `SearchMode` wrapper.

use super::ScoredIndex;
use super::exhaustive::ExhaustiveSearch;
use super::greedy::{GreedyConfig, GreedySearch};
use crate::core::Chain;

/// A strategy for finding solution chains in a scored index
pub trait SearchStrategy {
    /// Search the index and report every solution found, in discovery order
    fn search<'a>(&self, index: &'a ScoredIndex) -> SearchReport<'a>;
}

/// Outcome of one search
#[derive(Debug, Clone, Default)]
pub struct SearchReport<'a> {
    /// Solutions in discovery order
    pub solutions: Vec<Chain<'a>>,
    /// Number of starting words tried
    pub attempts: usize,
    /// The attempt guard stopped the search before every start was tried
    pub cap_reached: bool,
}

impl SearchReport<'_> {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// Length of the shortest solution found
    #[must_use]
    pub fn shortest(&self) -> Option<usize> {
        self.solutions.iter().map(|c| c.len()).min()
    }
}

/// Enum wrapper for all search strategies
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum SearchMode {
    /// Greedy best-coverage chaining (default, fast, incomplete)
    Greedy(GreedySearch),
    /// Every chain up to a word limit
    Exhaustive(ExhaustiveSearch),
}

impl SearchStrategy for SearchMode {
    fn search<'a>(&self, index: &'a ScoredIndex) -> SearchReport<'a> {
        match self {
            Self::Greedy(s) => s.search(index),
            Self::Exhaustive(s) => s.search(index),
        }
    }
}

impl SearchMode {
    /// Create a strategy from its name
    ///
    /// Supported names: "greedy", "exhaustive" (or "all"). Defaults to greedy if the
    /// name is unrecognized. `max_words` bounds solution length in both modes.
    #[must_use]
    pub fn from_name(name: &str, max_words: usize) -> Self {
        match name {
            "exhaustive" | "all" => Self::Exhaustive(ExhaustiveSearch::new(max_words)),
            _ => Self::Greedy(GreedySearch::new(GreedyConfig {
                max_words: Some(max_words),
                ..GreedyConfig::default()
            })),
        }
    }

    /// Short name for display
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Greedy(_) => "greedy",
            Self::Exhaustive(_) => "exhaustive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_selects_mode() {
        assert_eq!(SearchMode::from_name("greedy", 3).name(), "greedy");
        assert_eq!(SearchMode::from_name("exhaustive", 3).name(), "exhaustive");
        assert_eq!(SearchMode::from_name("all", 2).name(), "exhaustive");
        assert_eq!(SearchMode::from_name("unknown", 3).name(), "greedy");
    }

    #[test]
    fn from_name_passes_word_limit() {
        match SearchMode::from_name("greedy", 2) {
            SearchMode::Greedy(s) => assert_eq!(s.config().max_words, Some(2)),
            SearchMode::Exhaustive(_) => panic!("expected greedy"),
        }
        match SearchMode::from_name("exhaustive", 4) {
            SearchMode::Exhaustive(s) => assert_eq!(s.max_words(), 4),
            SearchMode::Greedy(_) => panic!("expected exhaustive"),
        }
    }

    #[test]
    fn empty_report() {
        let report = SearchReport::default();
        assert!(!report.is_solved());
        assert_eq!(report.shortest(), None);
    }
}
