//! Puzzle layout and validation
//!
//! A Letter Boxed puzzle is four sides of three letters each. Twelve distinct
//! letters in total; a word may not use two letters from the same side back to back.

use super::LetterSet;
use std::fmt;
use std::str::FromStr;

/// Number of sides on the box
pub const SIDE_COUNT: usize = 4;

/// Number of letters on each side
pub const LETTERS_PER_SIDE: usize = 3;

/// Number of distinct letters in a puzzle
pub const LETTER_COUNT: usize = SIDE_COUNT * LETTERS_PER_SIDE;

/// Error type for an invalid puzzle configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The layout did not have exactly four sides
    WrongSideCount(usize),
    /// A side did not have exactly three distinct letters
    WrongSideLength { side: usize, len: usize },
    /// A character that is not a letter
    InvalidLetter(char),
    /// A letter token that is empty or longer than one character
    InvalidToken(String),
    /// The union of all sides did not contain exactly twelve letters
    WrongLetterCount(usize),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid puzzle configuration: ")?;
        match self {
            Self::WrongSideCount(count) => {
                write!(f, "expected {SIDE_COUNT} sides, got {count}")
            }
            Self::WrongSideLength { side, len } => write!(
                f,
                "side {} must have {LETTERS_PER_SIDE} distinct letters, got {len}",
                side + 1
            ),
            Self::InvalidLetter(c) => write!(f, "'{c}' is not a letter"),
            Self::InvalidToken(token) => {
                write!(f, "'{token}' is not a single letter")
            }
            Self::WrongLetterCount(count) => write!(
                f,
                "sides must hold {LETTER_COUNT} distinct letters, got {count}"
            ),
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Parse one user-entered letter token
///
/// The token is trimmed and lowercased; it must then be exactly one ASCII letter.
///
/// # Errors
/// Returns `PuzzleError::InvalidToken` for empty or multi-character tokens and
/// `PuzzleError::InvalidLetter` for a single non-letter character.
pub fn parse_letter_token(token: &str) -> Result<char, PuzzleError> {
    let normalized = token.trim().to_lowercase();
    let mut chars = normalized.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_lowercase() => Ok(c),
        (Some(c), None) => Err(PuzzleError::InvalidLetter(c)),
        _ => Err(PuzzleError::InvalidToken(token.trim().to_string())),
    }
}

/// A validated Letter Boxed puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    sides: [LetterSet; SIDE_COUNT],
    labels: [String; SIDE_COUNT],
    accepted: LetterSet,
}

impl Puzzle {
    /// Create a puzzle from its four sides
    ///
    /// Each side is given as a string of its letters. Input is trimmed and lowercased.
    ///
    /// # Errors
    /// Returns `PuzzleError` if:
    /// - There are not exactly four sides
    /// - A side contains a non-letter character
    /// - A side does not hold exactly three distinct letters
    /// - The sides together do not hold exactly twelve distinct letters
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new(&["abc", "def", "ghi", "jkl"]).unwrap();
    /// assert_eq!(puzzle.accepted().len(), 12);
    ///
    /// // 'a' on two sides leaves only 11 distinct letters
    /// assert!(Puzzle::new(&["abc", "def", "ghi", "jka"]).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(sides: &[S]) -> Result<Self, PuzzleError> {
        if sides.len() != SIDE_COUNT {
            return Err(PuzzleError::WrongSideCount(sides.len()));
        }

        let mut sets = [LetterSet::EMPTY; SIDE_COUNT];
        let mut labels: [String; SIDE_COUNT] = Default::default();

        for (i, side) in sides.iter().enumerate() {
            let label = side.as_ref().trim().to_lowercase();

            if let Some(bad) = label.chars().find(|c| !c.is_ascii_lowercase()) {
                return Err(PuzzleError::InvalidLetter(bad));
            }

            let set = LetterSet::from_word(&label);
            // Counting both characters and distinct letters rejects "abcd" and "aab"
            if label.len() != LETTERS_PER_SIDE || set.len() != LETTERS_PER_SIDE {
                return Err(PuzzleError::WrongSideLength {
                    side: i,
                    len: set.len().min(label.len()),
                });
            }

            sets[i] = set;
            labels[i] = label;
        }

        let accepted = sets.iter().fold(LetterSet::EMPTY, |acc, &s| acc.union(s));
        if accepted.len() != LETTER_COUNT {
            return Err(PuzzleError::WrongLetterCount(accepted.len()));
        }

        Ok(Self {
            sides: sets,
            labels,
            accepted,
        })
    }

    /// Create a puzzle from twelve letter tokens, three per side
    ///
    /// Used by interactive input where every letter is typed separately.
    ///
    /// # Errors
    /// Returns `PuzzleError` for malformed tokens or an invalid layout.
    pub fn from_tokens<S: AsRef<str>>(sides: &[[S; LETTERS_PER_SIDE]]) -> Result<Self, PuzzleError> {
        let joined = sides
            .iter()
            .map(|side| {
                side.iter()
                    .map(|token| parse_letter_token(token.as_ref()))
                    .collect::<Result<String, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(&joined)
    }

    /// All twelve letters of the puzzle
    #[inline]
    #[must_use]
    pub const fn accepted(&self) -> LetterSet {
        self.accepted
    }

    /// The four sides as letter sets
    #[inline]
    #[must_use]
    pub const fn sides(&self) -> &[LetterSet; SIDE_COUNT] {
        &self.sides
    }

    /// The four sides as entered, lowercased
    #[must_use]
    pub fn side_labels(&self) -> &[String; SIDE_COUNT] {
        &self.labels
    }

    /// Index of the side holding `letter`, if any
    #[must_use]
    pub fn side_of(&self, letter: u8) -> Option<usize> {
        self.sides.iter().position(|side| side.contains(letter))
    }

    /// Whether two letters sit on the same side
    #[inline]
    #[must_use]
    pub fn same_side(&self, a: u8, b: u8) -> bool {
        self.sides
            .iter()
            .any(|side| side.contains(a) && side.contains(b))
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    /// Parse sides separated by whitespace, commas, hyphens or slashes
    ///
    /// `"abc def ghi jkl"`, `"abc,def,ghi,jkl"` and `"ABC-DEF-GHI-JKL"` all parse to the same puzzle.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sides: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '-' | '/'))
            .filter(|part| !part.is_empty())
            .collect();

        Self::new(&sides)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_puzzle() {
        let puzzle = Puzzle::new(&["abc", "def", "ghi", "jkl"]).unwrap();
        assert_eq!(puzzle.accepted(), LetterSet::from_word("abcdefghijkl"));
        assert_eq!(puzzle.side_of(b'e'), Some(1));
        assert_eq!(puzzle.side_of(b'z'), None);
        assert_eq!(puzzle.to_string(), "abc-def-ghi-jkl");
    }

    #[test]
    fn input_is_normalized() {
        let puzzle = Puzzle::new(&[" ABC", "dEf ", "ghi", "JKL"]).unwrap();
        assert_eq!(puzzle.side_labels()[0], "abc");
        assert_eq!(puzzle.side_labels()[3], "jkl");
    }

    #[test]
    fn same_side_detection() {
        let puzzle = Puzzle::new(&["abc", "def", "ghi", "jkl"]).unwrap();
        assert!(puzzle.same_side(b'a', b'c'));
        assert!(puzzle.same_side(b'a', b'a'));
        assert!(!puzzle.same_side(b'a', b'd'));
        assert!(!puzzle.same_side(b'a', b'z'));
    }

    #[test]
    fn wrong_side_count() {
        assert_eq!(
            Puzzle::new(&["abc", "def", "ghi"]),
            Err(PuzzleError::WrongSideCount(3))
        );
        assert_eq!(
            Puzzle::new(&["abc", "def", "ghi", "jkl", "mno"]),
            Err(PuzzleError::WrongSideCount(5))
        );
    }

    #[test]
    fn wrong_side_length() {
        assert!(matches!(
            Puzzle::new(&["ab", "def", "ghi", "jkl"]),
            Err(PuzzleError::WrongSideLength { side: 0, len: 2 })
        ));
        assert!(matches!(
            Puzzle::new(&["abc", "defm", "ghi", "jkl"]),
            Err(PuzzleError::WrongSideLength { side: 1, .. })
        ));
        // Repeated letter within a side
        assert!(matches!(
            Puzzle::new(&["abc", "def", "ggi", "jkl"]),
            Err(PuzzleError::WrongSideLength { side: 2, len: 2 })
        ));
    }

    #[test]
    fn overlapping_sides_leave_eleven_letters() {
        assert_eq!(
            Puzzle::new(&["abc", "def", "ghi", "jka"]),
            Err(PuzzleError::WrongLetterCount(11))
        );
    }

    #[test]
    fn non_letter_rejected() {
        assert_eq!(
            Puzzle::new(&["ab1", "def", "ghi", "jkl"]),
            Err(PuzzleError::InvalidLetter('1'))
        );
    }

    #[test]
    fn parse_from_str_separators() {
        let expected = Puzzle::new(&["abc", "def", "ghi", "jkl"]).unwrap();
        for input in ["abc def ghi jkl", "abc,def,ghi,jkl", "ABC-DEF-GHI-JKL", "abc/def/ghi/jkl"] {
            assert_eq!(input.parse::<Puzzle>().unwrap(), expected, "input {input}");
        }
        assert!("abc def ghi".parse::<Puzzle>().is_err());
    }

    #[test]
    fn letter_tokens() {
        assert_eq!(parse_letter_token(" Q "), Ok('q'));
        assert_eq!(
            parse_letter_token(""),
            Err(PuzzleError::InvalidToken(String::new()))
        );
        assert_eq!(
            parse_letter_token("ab"),
            Err(PuzzleError::InvalidToken("ab".to_string()))
        );
        assert_eq!(parse_letter_token("7"), Err(PuzzleError::InvalidLetter('7')));
    }

    #[test]
    fn from_tokens_builds_puzzle() {
        let tokens = [
            ["a", "b", "c"],
            ["d", "e", "f"],
            ["g", "h", "i"],
            ["j", "k", "L"],
        ];
        let puzzle = Puzzle::from_tokens(&tokens).unwrap();
        assert_eq!(puzzle.to_string(), "abc-def-ghi-jkl");

        let bad = [
            ["a", "b", "c"],
            ["d", "e", "f"],
            ["g", "hh", "i"],
            ["j", "k", "l"],
        ];
        assert_eq!(
            Puzzle::from_tokens(&bad),
            Err(PuzzleError::InvalidToken("hh".to_string()))
        );
    }

    #[test]
    fn error_display() {
        let err = PuzzleError::WrongLetterCount(11);
        assert_eq!(
            err.to_string(),
            "invalid puzzle configuration: sides must hold 12 distinct letters, got 11"
        );
    }
}
