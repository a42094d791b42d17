//! Main Letter Boxed solver interface

use super::strategy::{SearchReport, SearchStrategy};
use super::ScoredIndex;
use crate::catalog::{Exclusions, WordCatalog};
use crate::core::Puzzle;
use log::info;

/// Main Letter Boxed solver
///
/// Owns the scored index for one puzzle and runs a strategy over it.
pub struct Solver<S: SearchStrategy> {
    strategy: S,
    puzzle: Puzzle,
    index: ScoredIndex,
}

impl<S: SearchStrategy> Solver<S> {
    /// Create a solver for a puzzle
    ///
    /// # Parameters
    /// - `strategy`: How to search for chains
    /// - `puzzle`: The validated puzzle
    /// - `dictionary`: Candidate words, filtered into the puzzle's catalog
    /// - `excluded`: Words to leave out regardless of legality
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::catalog::Exclusions;
    /// use letter_boxed::core::Puzzle;
    /// use letter_boxed::solver::{GreedySearch, Solver};
    ///
    /// let puzzle: Puzzle = "abc def ghi jkl".parse().unwrap();
    /// let dictionary = ["adgjbe", "ehkcfil"];
    /// let solver = Solver::new(GreedySearch::default(), puzzle, &dictionary, &Exclusions::new());
    ///
    /// let report = solver.solve();
    /// assert_eq!(report.solutions[0].to_string(), "adgjbe → ehkcfil");
    /// ```
    pub fn new<W: AsRef<str>>(
        strategy: S,
        puzzle: Puzzle,
        dictionary: &[W],
        excluded: &Exclusions,
    ) -> Self {
        let catalog = WordCatalog::build(dictionary, &puzzle, excluded);
        Self::from_catalog(strategy, puzzle, &catalog)
    }

    /// Create a solver from an already built catalog
    pub fn from_catalog(strategy: S, puzzle: Puzzle, catalog: &WordCatalog) -> Self {
        let index = ScoredIndex::new(catalog);
        info!("{} playable words for {puzzle}", index.len());

        Self {
            strategy,
            puzzle,
            index,
        }
    }

    /// Run the strategy over the index
    pub fn solve(&self) -> SearchReport<'_> {
        self.strategy.search(&self.index)
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn index(&self) -> &ScoredIndex {
        &self.index
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{ExhaustiveSearch, GreedySearch, SearchMode};

    fn puzzle() -> Puzzle {
        "abc-def-ghi-jkl".parse().unwrap()
    }

    const DICTIONARY: &[&str] = &["adgjbe", "ehkcfil", "eha", "adg", "xyz", "abc"];

    #[test]
    fn catalog_is_filtered_before_search() {
        let solver = Solver::new(GreedySearch::default(), puzzle(), DICTIONARY, &Exclusions::new());
        assert_eq!(solver.index().len(), 4);
        assert_eq!(solver.puzzle(), &puzzle());
    }

    #[test]
    fn greedy_and_exhaustive_agree_on_short_solution() {
        let greedy = Solver::new(GreedySearch::default(), puzzle(), DICTIONARY, &Exclusions::new());
        let exhaustive = Solver::new(ExhaustiveSearch::new(2), puzzle(), DICTIONARY, &Exclusions::new());

        let g = greedy.solve();
        let e = exhaustive.solve();
        assert_eq!(g.solutions[0].texts(), e.solutions[0].texts());
    }

    #[test]
    fn exclusions_remove_solutions() {
        let excluded: Exclusions = ["ehkcfil"].into_iter().collect();
        let solver = Solver::new(SearchMode::from_name("exhaustive", 3), puzzle(), DICTIONARY, &excluded);
        assert!(!solver.solve().is_solved());
    }

    #[test]
    fn empty_dictionary_after_exclusion() {
        let excluded: Exclusions = DICTIONARY.iter().collect();
        let solver = Solver::new(SearchMode::from_name("greedy", 3), puzzle(), DICTIONARY, &excluded);
        assert!(solver.index().is_empty());

        let report = solver.solve();
        assert!(!report.is_solved());
        assert_eq!(report.attempts, 0);
    }
}
