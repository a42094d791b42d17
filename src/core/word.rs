//! Scored word representation
//!
//! A `ScoredWord` is a catalog word together with its distinct letters and its
//! coverage score. Lower scores cover more of the puzzle.

use super::LetterSet;
use std::cmp::Ordering;
use std::fmt;

/// Coverage score of a word
///
/// The number of accepted letters the word does *not* use: a word covering every
/// accepted letter scores 0.
///
/// # Examples
/// ```
/// use letter_boxed::core::{LetterSet, score};
///
/// let accepted = LetterSet::from_word("abcdefghijkl");
/// assert_eq!(score("adgjbehkcfil", accepted), 0);
/// assert_eq!(score("adgjbe", accepted), 6);
/// ```
#[must_use]
pub fn score(word: &str, accepted: LetterSet) -> u32 {
    let covered = LetterSet::from_word(word).intersection(accepted);
    (accepted.len() - covered.len()) as u32
}

/// A catalog word with its letter set and score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    text: String,
    letters: LetterSet,
    score: u32,
    index: usize,
}

impl ScoredWord {
    /// Score a word against the accepted letters
    ///
    /// `index` is the word's position in the catalog and breaks ties between equal scores.
    /// The word must be non-empty for [`Self::first`] and [`Self::last`] to work.
    #[must_use]
    pub fn new(text: impl Into<String>, accepted: LetterSet, index: usize) -> Self {
        let text = text.into();
        let letters = LetterSet::from_word(&text);
        let score = score(&text, accepted);

        Self {
            text,
            letters,
            score,
            index,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Distinct letters used by the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Position in the catalog
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// First letter of the word
    ///
    /// # Panics
    /// Panics if the word is empty. Catalog words never are.
    #[inline]
    #[must_use]
    pub fn first(&self) -> u8 {
        self.text.as_bytes()[0]
    }

    /// Last letter of the word, the letter the next word must start with
    ///
    /// # Panics
    /// Panics if the word is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> u8 {
        self.text.as_bytes()[self.text.len() - 1]
    }

    /// How many letters this word adds to an already covered set
    #[inline]
    #[must_use]
    pub const fn new_letters(&self, covered: LetterSet) -> usize {
        self.letters.difference(covered).len()
    }

    /// Priority key: score ascending, then catalog position
    #[inline]
    #[must_use]
    pub const fn priority(&self) -> (u32, usize) {
        (self.score, self.index)
    }
}

/// Compare two words by search priority
///
/// Lower score first; equal scores fall back to catalog order so results are reproducible.
#[must_use]
pub fn by_priority(a: &ScoredWord, b: &ScoredWord) -> Ordering {
    a.priority().cmp(&b.priority())
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
