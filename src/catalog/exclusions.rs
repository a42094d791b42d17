//! Words to leave out of the catalog
//!
//! Exclusions are matched case-insensitively after trimming.

use rustc_hash::FxHashSet;

/// A set of excluded words
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    words: FxHashSet<String>,
}

impl Exclusions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word; blank entries are ignored
    pub fn insert(&mut self, word: &str) {
        let normalized = normalize(word);
        if !normalized.is_empty() {
            self.words.insert(normalized);
        }
    }

    /// Whether `word` is excluded
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::catalog::Exclusions;
    ///
    /// let exclusions: Exclusions = ["  Lab "].into_iter().collect();
    /// assert!(exclusions.contains("lab"));
    /// assert!(exclusions.contains("LAB"));
    /// assert!(!exclusions.contains("gal"));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        !self.words.is_empty() && self.words.contains(&normalize(word))
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

impl<S: AsRef<str>> FromIterator<S> for Exclusions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut exclusions = Self::new();
        for word in iter {
            exclusions.insert(word.as_ref());
        }
        exclusions
    }
}

impl<S: AsRef<str>> Extend<S> for Exclusions {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_entries_ignored() {
        let exclusions: Exclusions = ["", "   ", "dog"].into_iter().collect();
        assert_eq!(exclusions.len(), 1);
        assert!(!exclusions.contains(""));
    }

    #[test]
    fn duplicates_collapse() {
        let exclusions: Exclusions = ["Dog", "dog", " DOG"].into_iter().collect();
        assert_eq!(exclusions.len(), 1);
    }

    #[test]
    fn extend_adds_words() {
        let mut exclusions = Exclusions::new();
        assert!(exclusions.is_empty());
        exclusions.extend(vec!["gal".to_string(), "lab".to_string()]);
        assert!(exclusions.contains("GAL"));
        assert!(exclusions.contains("lab"));
    }
}
