//! Dictionary normalization
//!
//! Turns an arbitrary word list into the format the catalog expects: lowercase
//! alphabetic words of at least three letters with no letter repeated back to back.

use crate::catalog::MIN_WORD_LEN;

/// Normalize a single dictionary entry
///
/// Returns `None` if the entry cannot be played in any puzzle.
///
/// # Examples
/// ```
/// use letter_boxed::wordlists::normalize::normalize_word;
///
/// assert_eq!(normalize_word("  Castle "), Some("castle".to_string()));
/// assert_eq!(normalize_word("apple"), None); // doubled 'p'
/// assert_eq!(normalize_word("ox"), None);
/// ```
#[must_use]
pub fn normalize_word(entry: &str) -> Option<String> {
    let word = entry.trim().to_lowercase();

    if word.len() < MIN_WORD_LEN || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }

    if word.as_bytes().windows(2).any(|pair| pair[0] == pair[1]) {
        return None;
    }

    Some(word)
}

/// Normalize a whole word list, keeping input order
pub fn normalize_words<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|entry| normalize_word(entry.as_ref()))
        .collect()
}
