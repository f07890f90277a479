//! Word list loading utilities
//!
//! Reads word lists from plain text files, one word per line.

use crate::core::{Dictionary, DictionaryError, Word};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for loading a dictionary from disk
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Dictionary(DictionaryError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::Dictionary(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Dictionary(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<DictionaryError> for LoadError {
    fn from(e: DictionaryError) -> Self {
        Self::Dictionary(e)
    }
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Load a file straight into a [`Dictionary`]
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::Dictionary` if it holds no valid word.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary, LoadError> {
    let words = load_from_file(path)?;
    Ok(Dictionary::new(words.iter().map(Word::text))?)
}

/// Parse one word per line, skipping anything that is not a valid word
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines("crane\n\n  Slate \ntoolong\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "slate");
/// ```
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_lines_skips_invalid() {
        let words = words_from_lines("crane\ntoolong\nabc\n\nslate\n");

        // Only "crane" and "slate" are valid 5-letter words
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn dictionary_from_file() {
        let path = std::env::temp_dir().join(format!("wordle-assist-list-{}.txt", std::process::id()));
        fs::write(&path, "crane\nslate\n\ncrane\nsl4te\n").unwrap();

        let words = load_from_file(&path).unwrap();
        assert_eq!(words.len(), 3);

        // Duplicates collapse once the words become a dictionary
        let dict = load_dictionary(&path).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.fingerprint(), Dictionary::new(["slate", "crane"]).unwrap().fingerprint());

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("wordle-assist-does-not-exist.txt");
        assert!(matches!(load_dictionary(path), Err(LoadError::Io(_))));
    }

    #[test]
    fn file_without_words_is_empty_dictionary() {
        let path = std::env::temp_dir().join(format!("wordle-assist-empty-{}.txt", std::process::id()));
        fs::write(&path, "abc\n\n").unwrap();

        assert!(matches!(
            load_dictionary(&path),
            Err(LoadError::Dictionary(DictionaryError::Empty))
        ));
        fs::remove_file(path).unwrap();
    }
}
