//! Word list loading utilities
//!
//! Reads dictionaries and exclusion lists from newline-delimited files.

use crate::catalog::Exclusions;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Load raw dictionary entries from a file
///
/// Blank lines are skipped; entries are trimmed but otherwise left as written.
/// Catalog construction lowercases and filters them.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letter_boxed::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

/// Load an exclusion list from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_exclusions<P: AsRef<Path>>(path: P) -> io::Result<Exclusions> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().collect())
}

/// Write one word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_to_file<P: AsRef<Path>, S: AsRef<str>>(path: P, words: &[S]) -> io::Result<()> {
    let mut file = io::BufWriter::new(fs::File::create(path)?);
    for word in words {
        writeln!(file, "{}", word.as_ref())?;
    }
    file.flush()
}

/// Convert embedded string slice to owned words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
