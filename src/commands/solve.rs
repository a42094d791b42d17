//! Puzzle solving command
//!
//! Builds the catalog for a puzzle, runs the selected search and collects the chains.

use crate::catalog::{Exclusions, WordCatalog};
use crate::core::Puzzle;
use crate::solver::{GreedyConfig, GreedySearch, SearchMode, SearchReport, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Word limit used by exhaustive search when none is given
pub const DEFAULT_EXHAUSTIVE_WORDS: usize = 3;

/// Configuration for solving a puzzle
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// "greedy" or "exhaustive"
    pub mode: String,
    /// Longest solution to report
    pub max_words: Option<usize>,
    /// Greedy extensions after the starting word
    pub max_hops: usize,
    /// Greedy: keep extending solved chains
    pub report_all: bool,
    /// Greedy: cap on starting words tried
    pub max_attempts: Option<usize>,
    /// Exhaustive: show a progress bar
    pub show_progress: bool,
}

impl SolveConfig {
    #[must_use]
    pub fn new(mode: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            max_words: None,
            max_hops: GreedyConfig::default().max_hops,
            report_all: false,
            max_attempts: None,
            show_progress: false,
        }
    }

    /// Build the search strategy this configuration describes
    #[must_use]
    pub fn strategy(&self, catalog_size: usize) -> SearchMode {
        match SearchMode::from_name(&self.mode, self.max_words.unwrap_or(DEFAULT_EXHAUSTIVE_WORDS)) {
            SearchMode::Exhaustive(search) if self.show_progress => {
                SearchMode::Exhaustive(search.with_progress(progress_bar(catalog_size)))
            }
            SearchMode::Exhaustive(search) => SearchMode::Exhaustive(search),
            SearchMode::Greedy(_) => SearchMode::Greedy(GreedySearch::new(GreedyConfig {
                max_hops: self.max_hops,
                report_all: self.report_all,
                max_words: self.max_words,
                max_attempts: self.max_attempts,
            })),
        }
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new("greedy")
    }
}

/// Result of solving a puzzle
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub puzzle: String,
    pub mode: &'static str,
    pub catalog_size: usize,
    pub solutions: Vec<Vec<String>>,
    pub attempts: usize,
    pub cap_reached: bool,
    pub duration: Duration,
}

impl SolveResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// Solutions ordered by word count, discovery order within equal lengths
    #[must_use]
    pub fn sorted_by_length(&self) -> Vec<&[String]> {
        let mut sorted: Vec<&[String]> = self.solutions.iter().map(Vec::as_slice).collect();
        sorted.sort_by_key(|chain| chain.len());
        sorted
    }
}

/// Solve a puzzle against a dictionary
///
/// An empty catalog is not an error: the result simply holds no solutions.
#[must_use]
pub fn solve_puzzle<W: AsRef<str>>(
    config: &SolveConfig,
    puzzle: Puzzle,
    dictionary: &[W],
    excluded: &Exclusions,
) -> SolveResult {
    let start = Instant::now();

    let catalog = WordCatalog::build(dictionary, &puzzle, excluded);
    let strategy = config.strategy(catalog.len());
    let mode = strategy.name();
    let solver = Solver::from_catalog(strategy, puzzle, &catalog);

    let report = solver.solve();
    if let SearchMode::Exhaustive(search) = solver.strategy() {
        search.finish_progress();
    }

    collect_result(&solver, &report, mode, start.elapsed())
}

fn collect_result(
    solver: &Solver<SearchMode>,
    report: &SearchReport<'_>,
    mode: &'static str,
    duration: Duration,
) -> SolveResult {
    SolveResult {
        puzzle: solver.puzzle().to_string(),
        mode,
        catalog_size: solver.index().len(),
        solutions: report.solutions.iter().map(|c| c.texts()).collect(),
        attempts: report.attempts,
        cap_reached: report.cap_reached,
        duration,
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} start words ({percent}%)")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb
}
