//! Dictionary normalization command
//!
//! Reads a raw word list and writes the playable entries to a new file, so later
//! runs can load the smaller list directly.

use crate::wordlists::loader::{load_from_file, save_to_file};
use crate::wordlists::normalize_words;
use log::info;
use std::io;
use std::path::Path;

/// Result of normalizing a word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeResult {
    pub read: usize,
    pub kept: usize,
}

impl NormalizeResult {
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.read - self.kept
    }
}

/// Normalize `input` and write the result to `output`
///
/// # Errors
///
/// Returns an I/O error if the input cannot be read or the output cannot be written.
pub fn normalize_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> io::Result<NormalizeResult> {
    let raw = load_from_file(&input)?;
    let words = normalize_words(&raw);
    save_to_file(&output, &words)?;

    info!(
        "normalized {} -> {}: kept {} of {} entries",
        input.as_ref().display(),
        output.as_ref().display(),
        words.len(),
        raw.len()
    );

    Ok(NormalizeResult {
        read: raw.len(),
        kept: words.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn normalize_round_trip_through_files() {
        let dir = std::env::temp_dir();
        let input = dir.join(format!("letter_boxed_raw_{}.txt", std::process::id()));
        let output = dir.join(format!("letter_boxed_norm_{}.txt", std::process::id()));
        fs::write(&input, "Castle\napple\nox\n\ndragon\nx-ray\n").unwrap();

        let result = normalize_file(&input, &output).unwrap();
        assert_eq!(result, NormalizeResult { read: 5, kept: 2 });
        assert_eq!(result.dropped(), 3);
        assert_eq!(fs::read_to_string(&output).unwrap(), "castle\ndragon\n");

        fs::remove_file(&input).unwrap();
        fs::remove_file(&output).unwrap();
    }

    #[test]
    fn missing_input_is_an_error() {
        let output = std::env::temp_dir().join("letter_boxed_never_written.txt");
        assert!(normalize_file("/nonexistent/letter_boxed/raw.txt", &output).is_err());
    }
}
