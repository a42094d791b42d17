//! Scored word index
//!
//! Scores every catalog word once and groups the results by first letter, so a
//! search can look up continuations of a chain in constant time.

use crate::catalog::WordCatalog;
use crate::core::{LetterSet, ScoredWord, by_priority};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-heap of `(score, catalog index)` keys
pub type StartQueue = BinaryHeap<Reverse<(u32, usize)>>;

/// Catalog words scored and indexed by first letter
#[derive(Debug, Clone)]
pub struct ScoredIndex {
    words: Vec<ScoredWord>,
    by_first: FxHashMap<u8, Vec<usize>>,
    accepted: LetterSet,
}

impl ScoredIndex {
    /// Score and index a catalog
    ///
    /// Each first-letter bucket is ordered by score, then catalog position.
    #[must_use]
    pub fn new(catalog: &WordCatalog) -> Self {
        let accepted = catalog.accepted();
        let words: Vec<ScoredWord> = catalog
            .words()
            .iter()
            .enumerate()
            .map(|(i, text)| ScoredWord::new(text.as_str(), accepted, i))
            .collect();

        let mut by_first: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for word in &words {
            by_first.entry(word.first()).or_default().push(word.index());
        }
        for bucket in by_first.values_mut() {
            bucket.sort_by(|&a, &b| by_priority(&words[a], &words[b]));
        }

        Self {
            words,
            by_first,
            accepted,
        }
    }

    /// All scored words in catalog order
    #[must_use]
    pub fn words(&self) -> &[ScoredWord] {
        &self.words
    }

    /// The word at a catalog position
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[inline]
    #[must_use]
    pub fn word(&self, index: usize) -> &ScoredWord {
        &self.words[index]
    }

    /// Words starting with `letter`, best first
    pub fn starting_with(&self, letter: u8) -> impl Iterator<Item = &ScoredWord> + '_ {
        self.by_first
            .get(&letter)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(|&i| &self.words[i])
    }

    /// The `n`th word starting with `letter`, in the same order as [`Self::starting_with`]
    #[must_use]
    pub fn nth_starting_with(&self, letter: u8, n: usize) -> Option<&ScoredWord> {
        self.by_first
            .get(&letter)
            .and_then(|bucket| bucket.get(n))
            .map(|&i| &self.words[i])
    }

    /// Every word ordered best first, as a queue of start candidates
    ///
    /// Each call returns a fresh queue so the index itself is never consumed.
    #[must_use]
    pub fn start_queue(&self) -> StartQueue {
        self.words.iter().map(|w| Reverse(w.priority())).collect()
    }

    /// The puzzle's twelve letters
    #[inline]
    #[must_use]
    pub const fn accepted(&self) -> LetterSet {
        self.accepted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
