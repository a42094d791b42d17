//! Greedy bounded chain search
//!
//! Starts from the best unused word, then repeatedly appends the continuation that
//! covers the most new letters. Fast, but it can miss solutions that need a locally
//! worse step.

use super::strategy::{SearchReport, SearchStrategy};
use super::ScoredIndex;
use crate::core::{Chain, LetterSet, ScoredWord};
use log::{debug, trace};
use std::cmp::Reverse;

/// Configuration for greedy search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyConfig {
    /// Extensions allowed after the starting word
    pub max_hops: usize,
    /// Keep extending a solved chain to find longer solutions sharing its prefix
    pub report_all: bool,
    /// Drop solutions with more words than this
    pub max_words: Option<usize>,
    /// Cap on attempts; `None` means one attempt per catalog word
    pub max_attempts: Option<usize>,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            max_hops: 3,
            report_all: false,
            max_words: None,
            max_attempts: None,
        }
    }
}

/// Greedy search strategy
#[derive(Debug, Clone, Default)]
pub struct GreedySearch {
    config: GreedyConfig,
}

impl GreedySearch {
    #[must_use]
    pub const fn new(config: GreedyConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &GreedyConfig {
        &self.config
    }

    /// Run one attempt from `start`, pushing every accepted solution
    fn attempt<'a>(
        &self,
        index: &'a ScoredIndex,
        start: &'a ScoredWord,
        solutions: &mut Vec<Chain<'a>>,
    ) {
        let accepted = index.accepted();
        let mut chain = vec![start];
        let mut completed = start.letters();
        let mut hops = 0;

        loop {
            if completed == accepted {
                self.accept(&chain, solutions);
                if !self.config.report_all {
                    return;
                }
            }

            if hops == self.config.max_hops {
                return;
            }

            let Some(last) = chain.last() else { return };
            let Some(next) = best_continuation(index, last.last(), completed) else {
                trace!("dead end after {}", Chain::new(chain.clone()));
                return;
            };

            completed = completed.union(next.letters());
            chain.push(next);
            hops += 1;
        }
    }

    fn accept<'a>(&self, chain: &[&'a ScoredWord], solutions: &mut Vec<Chain<'a>>) {
        if self.config.max_words.is_some_and(|max| chain.len() > max) {
            trace!("solution of {} words exceeds limit", chain.len());
            return;
        }
        let solution = Chain::new(chain.to_vec());
        debug!("found {solution}");
        solutions.push(solution);
    }
}

/// Pick the continuation adding the most uncovered letters
///
/// Ties go to the lower score, then to the earlier word in index order.
fn best_continuation(
    index: &ScoredIndex,
    letter: u8,
    completed: LetterSet,
) -> Option<&ScoredWord> {
    let mut best: Option<(&ScoredWord, usize)> = None;

    for word in index.starting_with(letter) {
        let gain = word.new_letters(completed);
        let better = match best {
            None => true,
            Some((current, current_gain)) => {
                gain > current_gain || (gain == current_gain && word.score() < current.score())
            }
        };
        if better {
            best = Some((word, gain));
        }
    }

    best.map(|(word, _)| word)
}

impl SearchStrategy for GreedySearch {
    fn search<'a>(&self, index: &'a ScoredIndex) -> SearchReport<'a> {
        let max_attempts = self.config.max_attempts.unwrap_or(index.len());
        let mut queue = index.start_queue();
        let mut report = SearchReport::default();

        while let Some(Reverse((_, start))) = queue.pop() {
            if report.attempts == max_attempts {
                report.cap_reached = true;
                debug!("stopped after {max_attempts} attempts");
                break;
            }
            report.attempts += 1;
            self.attempt(index, index.word(start), &mut report.solutions);
        }

        debug!(
            "greedy search: {} solutions from {} attempts",
            report.solutions.len(),
            report.attempts
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Exclusions, WordCatalog};
    use crate::core::Puzzle;

    fn scored(dictionary: &[&str]) -> ScoredIndex {
        let puzzle = Puzzle::new(&["abc", "def", "ghi", "jkl"]).unwrap();
        ScoredIndex::new(&WordCatalog::build(dictionary, &puzzle, &Exclusions::new()))
    }

    fn solution_texts(report: &SearchReport<'_>) -> Vec<Vec<String>> {
        report.solutions.iter().map(Chain::texts).collect()
    }

    const DICTIONARY: &[&str] = &["adgjbe", "ehkcfil", "eha", "adg"];

    #[test]
    fn finds_solutions_in_start_priority_order() {
        let index = scored(DICTIONARY);
        let report = GreedySearch::default().search(&index);

        // ehkcfil dead-ends on 'l', adgjbe solves in two, eha in three, adg dead-ends
        assert_eq!(
            solution_texts(&report),
            vec![
                vec!["adgjbe", "ehkcfil"],
                vec!["eha", "adgjbe", "ehkcfil"],
            ]
        );
        assert_eq!(report.attempts, 4);
        assert!(!report.cap_reached);
        assert_eq!(report.shortest(), Some(2));
    }

    #[test]
    fn repeated_dictionary_words_start_once() {
        let index = scored(&["adgjbe", "ehkcfil", "ADGJBE", "adgjbe"]);
        let report = GreedySearch::default().search(&index);
        assert_eq!(solution_texts(&report), vec![vec!["adgjbe", "ehkcfil"]]);
        assert_eq!(report.attempts, 2);
    }

    #[test]
    fn every_solution_is_valid() {
        let index = scored(DICTIONARY);
        let report = GreedySearch::default().search(&index);
        for chain in &report.solutions {
            assert!(chain.solves(index.accepted()), "{chain}");
        }
    }

    #[test]
    fn word_limit_filters_long_solutions() {
        let index = scored(DICTIONARY);
        let search = GreedySearch::new(GreedyConfig {
            max_words: Some(2),
            ..GreedyConfig::default()
        });
        let report = search.search(&index);
        assert_eq!(solution_texts(&report), vec![vec!["adgjbe", "ehkcfil"]]);
    }

    #[test]
    fn hop_limit_bounds_attempts() {
        let index = scored(DICTIONARY);
        let search = GreedySearch::new(GreedyConfig {
            max_hops: 1,
            ..GreedyConfig::default()
        });
        // eha needs two extensions, so only the two-word chain survives
        let report = search.search(&index);
        assert_eq!(solution_texts(&report), vec![vec!["adgjbe", "ehkcfil"]]);
    }

    #[test]
    fn single_word_solution() {
        let index = scored(&["adgjbehkcfil", "lad"]);
        let report = GreedySearch::default().search(&index);
        assert_eq!(solution_texts(&report), vec![vec!["adgjbehkcfil"]]);
    }

    #[test]
    fn report_all_keeps_extending() {
        let index = scored(&["adgjbehkcfil", "lad"]);
        let search = GreedySearch::new(GreedyConfig {
            report_all: true,
            ..GreedyConfig::default()
        });
        let report = search.search(&index);
        assert_eq!(
            solution_texts(&report),
            vec![vec!["adgjbehkcfil"], vec!["adgjbehkcfil", "lad"]]
        );
    }

    #[test]
    fn attempt_cap_stops_search() {
        let index = scored(DICTIONARY);
        let search = GreedySearch::new(GreedyConfig {
            max_attempts: Some(2),
            ..GreedyConfig::default()
        });
        let report = search.search(&index);
        assert_eq!(report.attempts, 2);
        assert!(report.cap_reached);
        assert_eq!(solution_texts(&report), vec![vec!["adgjbe", "ehkcfil"]]);
    }

    #[test]
    fn continuation_prefers_new_letters_then_score() {
        let index = scored(&["eha", "ehkc", "ela"]);
        let covered = LetterSet::from_word("adgjbe");
        // ehkc adds h,k,c
        let best = best_continuation(&index, b'e', covered).unwrap();
        assert_eq!(best.text(), "ehkc");

        // All three add one letter: ehkc has the lower score
        let covered = LetterSet::from_word("adgjbekc");
        let best = best_continuation(&index, b'e', covered).unwrap();
        assert_eq!(best.text(), "ehkc");

        // eha and ela tie on gain and score: first in index order wins
        let index = scored(&["eha", "ela"]);
        let best = best_continuation(&index, b'e', covered).unwrap();
        assert_eq!(best.text(), "eha");

        assert!(best_continuation(&index, b'z', covered).is_none());
    }

    #[test]
    fn unsolvable_dictionary() {
        // Contrived puzzle where dog, gal and lab are all legal
        let puzzle = Puzzle::new(&["dae", "olf", "gbh", "ijk"]).unwrap();
        let catalog = WordCatalog::build(&["dog", "gal", "lab"], &puzzle, &Exclusions::new());
        assert_eq!(catalog.words(), ["dog", "gal", "lab"]);

        let index = ScoredIndex::new(&catalog);
        let report = GreedySearch::default().search(&index);
        assert!(!report.is_solved());
        assert_eq!(report.attempts, 3);
    }

    #[test]
    fn empty_index_finds_nothing() {
        let index = scored(&[]);
        let report = GreedySearch::default().search(&index);
        assert!(!report.is_solved());
        assert_eq!(report.attempts, 0);
        assert!(!report.cap_reached);
    }
}
