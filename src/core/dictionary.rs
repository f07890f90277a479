//! Session dictionary
//!
//! An ordered, immutable list of validated words identified by a content
//! fingerprint. Every index handed out by the engines refers to this order.

use super::word::{Encoded, Word};
use rustc_hash::{FxHashSet, FxHasher};
use std::fmt;
use std::hash::Hasher;
use std::ops::Index;

/// Error type for dictionary construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// No valid words remained after validation
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Dictionary contains no valid 5-letter words"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Ordered word list with a content fingerprint
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    fingerprint: String,
}

impl Dictionary {
    /// Build a dictionary from raw strings
    ///
    /// Invalid entries are skipped and duplicates keep their first position.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no valid word remains.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Dictionary;
    ///
    /// let dict = Dictionary::new(["crane", "SLATE", "bad", "crane"]).unwrap();
    /// assert_eq!(dict.len(), 2);
    /// assert_eq!(dict[1].text(), "slate");
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter_map(|raw| Word::new(raw.as_ref().trim()).ok())
            .filter(|word| seen.insert(word.text().to_string()))
            .collect();

        Self::from_words(words)
    }

    /// Build a dictionary from already-validated words
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if `words` is empty.
    pub fn from_words(words: Vec<Word>) -> Result<Self, DictionaryError> {
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }
        let fingerprint = fingerprint(&words);
        Ok(Self { words, fingerprint })
    }

    /// Content fingerprint: hash of the sorted word list
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every word's letter codes, in dictionary order
    #[must_use]
    pub fn encoded(&self) -> Vec<Encoded> {
        self.words.iter().map(|word| *word.codes()).collect()
    }

    /// Find the index of a word
    #[must_use]
    pub fn position(&self, text: &str) -> Option<usize> {
        self.words.iter().position(|word| word.text() == text)
    }

    /// Indices `0..len`, the unconstrained candidate set
    #[must_use]
    pub fn all_indices(&self) -> Vec<usize> {
        (0..self.words.len()).collect()
    }
}

impl Index<usize> for Dictionary {
    type Output = Word;

    fn index(&self, index: usize) -> &Word {
        &self.words[index]
    }
}

fn fingerprint(words: &[Word]) -> String {
    let mut sorted: Vec<&str> = words.iter().map(Word::text).collect();
    sorted.sort_unstable();

    let mut hasher = FxHasher::default();
    hasher.write(sorted.join("\n").as_bytes());
    format!("{:016x}", hasher.finish())
}
