//! Word representation
//!
//! A Word stores a validated 5-letter lowercase word along with its letters
//! encoded as small integers (0 = 'a' .. 25 = 'z') for the pattern hot loop.

use std::fmt;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// Size of the supported alphabet
pub const ALPHABET: usize = 26;

/// A word encoded as five letter codes in `0..26`
pub type Encoded = [u8; WORD_LEN];

/// A 5-letter word with its encoded letter codes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    codes: Encoded,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

/// Encode a lowercase ASCII letter as `0..26`
#[inline]
#[must_use]
pub const fn letter_code(letter: u8) -> u8 {
    letter - b'a'
}

/// Decode a letter code back to its lowercase character
#[inline]
#[must_use]
pub const fn code_letter(code: u8) -> char {
    (b'a' + code) as char
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.codes(), &[2, 17, 0, 13, 4]);
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut codes = [0u8; WORD_LEN];
        for (slot, byte) in codes.iter_mut().zip(text.bytes()) {
            *slot = letter_code(byte);
        }

        Ok(Self { text, codes })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the encoded letter codes
    #[inline]
    #[must_use]
    pub const fn codes(&self) -> &Encoded {
        &self.codes
    }

    /// Get the letter code at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn code_at(&self, position: usize) -> u8 {
        self.codes[position]
    }

    /// Count occurrences of each letter code
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET] {
        let mut counts = [0u8; ALPHABET];
        for &code in &self.codes {
            counts[code as usize] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.codes(), &[2, 17, 0, 13, 4]);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err());
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cran!").is_err());
        assert!(matches!(Word::new("crané"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_code_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(code_letter(word.code_at(0)), 'c');
        assert_eq!(code_letter(word.code_at(4)), 'e');
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[letter_code(b'e') as usize], 2);
        assert_eq!(counts[letter_code(b's') as usize], 1);
        assert_eq!(counts[letter_code(b'z') as usize], 0);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
