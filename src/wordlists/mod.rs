//! Word lists for Letter Boxed solving
//!
//! Provides the embedded default dictionary, file loading and dictionary normalization.

mod embedded;
pub mod loader;
pub mod normalize;

pub use embedded::{WORDS, WORDS_COUNT};
pub use normalize::normalize_words;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_normalized() {
        // Everything shipped in the binary already passes normalization
        let normalized = normalize_words(WORDS.iter().copied());
        assert_eq!(normalized.len(), WORDS.len());
    }

    #[test]
    fn embedded_words_are_lowercase() {
        for &word in WORDS {
            assert!(word.len() >= 3, "Word '{word}' is too short");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }
}
