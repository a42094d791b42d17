//! Word chains
//!
//! A chain is a sequence of words where each word starts with the letter the
//! previous one ended with.

use super::{LetterSet, ScoredWord};
use std::fmt;

/// An ordered sequence of catalog words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<'a> {
    words: Vec<&'a ScoredWord>,
}

impl<'a> Chain<'a> {
    #[must_use]
    pub const fn new(words: Vec<&'a ScoredWord>) -> Self {
        Self { words }
    }

    #[must_use]
    pub fn words(&self) -> &[&'a ScoredWord] {
        &self.words
    }

    /// Number of words in the chain
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Union of the letters of every word
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.words
            .iter()
            .fold(LetterSet::EMPTY, |acc, w| acc.union(w.letters()))
    }

    /// Whether every word starts with the previous word's last letter
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.words.windows(2).all(|pair| pair[0].last() == pair[1].first())
    }

    /// Whether the chain is linked and uses every accepted letter
    #[must_use]
    pub fn solves(&self, accepted: LetterSet) -> bool {
        !self.words.is_empty() && self.is_linked() && accepted.is_subset(self.letters())
    }

    /// The words as plain strings
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.words.iter().map(|w| w.text().to_string()).collect()
    }
}

impl fmt::Display for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
