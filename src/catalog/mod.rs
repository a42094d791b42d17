//! Word catalog construction
//!
//! Filters a dictionary down to the words that are legal moves for one puzzle.

mod exclusions;

pub use exclusions::Exclusions;

use crate::core::{LetterSet, Puzzle};
use log::{debug, trace, warn};
use rustc_hash::FxHashSet;

/// Shortest word the game accepts
pub const MIN_WORD_LEN: usize = 3;

/// Why a dictionary entry was left out of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Excluded,
    TooShort,
    ForeignLetter,
    SameSide,
}

/// The legal words for one puzzle, in dictionary order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCatalog {
    words: Vec<String>,
    accepted: LetterSet,
}

impl WordCatalog {
    /// Filter a dictionary against a puzzle
    ///
    /// Entries are trimmed and lowercased, then dropped if they are excluded, shorter
    /// than three letters, use a letter outside the puzzle, or place two letters from
    /// the same side next to each other. Survivors keep their dictionary order, and a
    /// word listed more than once keeps only its first occurrence.
    ///
    /// An empty result is not an error; searching it simply finds nothing.
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::catalog::{Exclusions, WordCatalog};
    /// use letter_boxed::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new(&["abc", "def", "ghi", "jkl"]).unwrap();
    /// let dictionary = ["adgj", "abe", "dog", "eha"];
    /// let catalog = WordCatalog::build(&dictionary, &puzzle, &Exclusions::new());
    ///
    /// // "abe" pairs a/b on one side, "dog" uses 'o'
    /// assert_eq!(catalog.words(), ["adgj", "eha"]);
    /// ```
    #[must_use]
    pub fn build<S: AsRef<str>>(
        dictionary: &[S],
        puzzle: &Puzzle,
        excluded: &Exclusions,
    ) -> Self {
        let mut words = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut rejected = [0usize; 4];
        let mut duplicates = 0usize;

        for entry in dictionary {
            let word = entry.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }

            match check(&word, puzzle, excluded) {
                Ok(()) if seen.insert(word.clone()) => words.push(word),
                Ok(()) => {
                    trace!("skipped repeated {word}");
                    duplicates += 1;
                }
                Err(reason) => {
                    trace!("rejected {word}: {reason:?}");
                    rejected[reason as usize] += 1;
                }
            }
        }

        debug!(
            "catalog for {puzzle}: {} words kept, {duplicates} repeats, rejected excluded={} short={} foreign={} same_side={}",
            words.len(),
            rejected[Rejection::Excluded as usize],
            rejected[Rejection::TooShort as usize],
            rejected[Rejection::ForeignLetter as usize],
            rejected[Rejection::SameSide as usize],
        );

        if words.is_empty() {
            warn!("no dictionary words are playable on {puzzle}");
        }

        Self {
            words,
            accepted: puzzle.accepted(),
        }
    }

    /// The legal words in dictionary order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The puzzle's twelve letters
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

/// Test one normalized word against the puzzle
///
/// # Errors
/// Returns the first rule the word breaks.
pub fn check(word: &str, puzzle: &Puzzle, excluded: &Exclusions) -> Result<(), Rejection> {
    if excluded.contains(word) {
        return Err(Rejection::Excluded);
    }

    if word.len() < MIN_WORD_LEN {
        return Err(Rejection::TooShort);
    }

    let forbidden = puzzle.accepted().complement();
    if !word
        .bytes()
        .all(|b| LetterSet::is_letter(b) && !forbidden.contains(b))
    {
        return Err(Rejection::ForeignLetter);
    }

    if word
        .as_bytes()
        .windows(2)
        .any(|pair| puzzle.same_side(pair[0], pair[1]))
    {
        return Err(Rejection::SameSide);
    }

    Ok(())
}
