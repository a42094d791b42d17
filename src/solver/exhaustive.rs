//! Exhaustive bounded-depth chain search
//!
//! Enumerates every chain of up to `max_words` words and reports each one that
//! covers the whole puzzle. Complete within its bound, but the cost grows
//! exponentially with `max_words`.

use super::strategy::{SearchReport, SearchStrategy};
use super::ScoredIndex;
use crate::core::{Chain, LetterSet, ScoredWord};
use indicatif::ProgressBar;
use log::{debug, trace};
use rayon::prelude::*;

/// One level of the depth-first walk
///
/// Every frame owns its covered letters; popping a frame never has to undo anything.
struct Frame<'a> {
    word: &'a ScoredWord,
    completed: LetterSet,
    cursor: usize,
}

/// Exhaustive search strategy
#[derive(Debug, Clone)]
pub struct ExhaustiveSearch {
    max_words: usize,
    progress: Option<ProgressBar>,
}

impl ExhaustiveSearch {
    /// Search chains of at most `max_words` words
    #[must_use]
    pub const fn new(max_words: usize) -> Self {
        Self {
            max_words,
            progress: None,
        }
    }

    /// Tick `progress` once per starting word
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Clear the progress bar, if any
    pub fn finish_progress(&self) {
        if let Some(progress) = &self.progress {
            progress.finish_and_clear();
        }
    }

    #[must_use]
    pub const fn max_words(&self) -> usize {
        self.max_words
    }

    /// Every solution that begins with `start`, in depth-first order
    #[must_use]
    pub fn search_from<'a>(&self, index: &'a ScoredIndex, start: &'a ScoredWord) -> Vec<Chain<'a>> {
        let accepted = index.accepted();
        let mut solutions = Vec::new();

        if self.max_words == 0 {
            return solutions;
        }

        if start.letters() == accepted {
            solutions.push(Chain::new(vec![start]));
            return solutions;
        }

        if self.max_words == 1 {
            return solutions;
        }

        let mut stack = vec![Frame {
            word: start,
            completed: start.letters(),
            cursor: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(next) = index.nth_starting_with(frame.word.last(), frame.cursor) else {
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            let completed = frame.completed.union(next.letters());
            if completed == accepted {
                let mut words: Vec<&ScoredWord> = stack.iter().map(|f| f.word).collect();
                words.push(next);
                let solution = Chain::new(words);
                trace!("found {solution}");
                solutions.push(solution);
            } else if stack.len() + 1 < self.max_words {
                stack.push(Frame {
                    word: next,
                    completed,
                    cursor: 0,
                });
            }
        }

        solutions
    }
}

impl SearchStrategy for ExhaustiveSearch {
    fn search<'a>(&self, index: &'a ScoredIndex) -> SearchReport<'a> {
        let per_start: Vec<Vec<Chain<'a>>> = index
            .words()
            .par_iter()
            .map(|start| {
                let found = self.search_from(index, start);
                if let Some(progress) = &self.progress {
                    progress.inc(1);
                }
                found
            })
            .collect();

        let solutions: Vec<Chain<'a>> = per_start.into_iter().flatten().collect();
        debug!(
            "exhaustive search up to {} words: {} solutions from {} starts",
            self.max_words,
            solutions.len(),
            index.len()
        );

        SearchReport {
            solutions,
            attempts: index.len(),
            cap_reached: false,
        }
    }
}
