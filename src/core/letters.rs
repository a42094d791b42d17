//! Letter set representation
//!
//! A `LetterSet` packs a set of lowercase ASCII letters into the low 26 bits of a `u32`.
//! Union, difference and size checks are single bit operations, which keeps the
//! coverage arithmetic in the search loops cheap.

use std::fmt;

const LOWERCASE_A: u8 = b'a';

/// A set of lowercase ASCII letters stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// All 26 lowercase letters
    pub const ALPHABET: Self = Self((1 << 26) - 1);

    /// Build a set from the letters of a word
    ///
    /// Bytes outside `a..=z` are ignored; use [`LetterSet::is_letter`] to validate first.
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::LetterSet;
    ///
    /// let set = LetterSet::from_word("banana");
    /// assert_eq!(set.len(), 3);
    /// assert!(set.contains(b'n'));
    /// assert!(!set.contains(b'z'));
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        word.bytes().fold(Self::EMPTY, |set, b| set.with(b))
    }

    /// Whether a byte is a lowercase ASCII letter
    #[inline]
    #[must_use]
    pub const fn is_letter(b: u8) -> bool {
        b.is_ascii_lowercase()
    }

    /// Return a copy of this set with `letter` added
    ///
    /// Non-letters leave the set unchanged.
    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        if Self::is_letter(letter) {
            Self(self.0 | (1 << (letter - LOWERCASE_A)))
        } else {
            self
        }
    }

    /// Add a letter in place
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        *self = self.with(letter);
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        Self::is_letter(letter) && self.0 & (1 << (letter - LOWERCASE_A)) != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// The letters of the alphabet not in this set
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Self {
        Self::ALPHABET.difference(self)
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..26u8)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(|i| LOWERCASE_A + i)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_word_deduplicates() {
        let set = LetterSet::from_word("letter");
        assert_eq!(set.len(), 4);
        assert_eq!(set.to_string(), "elrt");
    }

    #[test]
    fn non_letters_are_ignored() {
        let set = LetterSet::from_word("a-b C1");
        assert_eq!(set.to_string(), "ab");
        assert!(!set.contains(b'C'));
        assert!(!set.contains(b'-'));
    }

    #[test]
    fn set_operations() {
        let abc = LetterSet::from_word("abc");
        let bcd = LetterSet::from_word("bcd");

        assert_eq!(abc.union(bcd).to_string(), "abcd");
        assert_eq!(abc.intersection(bcd).to_string(), "bc");
        assert_eq!(abc.difference(bcd).to_string(), "a");
        assert!(LetterSet::from_word("ab").is_subset(abc));
        assert!(!abc.is_subset(bcd));
        assert!(abc.is_disjoint(LetterSet::from_word("xyz")));
    }

    #[test]
    fn complement_covers_rest_of_alphabet() {
        let set = LetterSet::from_word("abcdefghijkl");
        let rest = set.complement();
        assert_eq!(rest.len(), 14);
        assert!(rest.is_disjoint(set));
        assert_eq!(rest.union(set), LetterSet::ALPHABET);
    }

    #[test]
    fn insert_and_collect() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());
        set.insert(b'z');
        set.insert(b'a');
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![b'a', b'z']);

        let collected: LetterSet = b"zebra".iter().copied().collect();
        assert_eq!(collected.len(), 5);
    }
}
