//! Letter-frequency statistics over a dictionary
//!
//! Positional counts (letter × position), overall counts (each letter counted
//! at most once per word), and adjacent-bigram counts. Built once per session
//! and read-only afterwards.

use crate::core::{ALPHABET, Dictionary, WORD_LEN, Word, code_letter};
use crate::persist::RestoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const BIGRAMS: usize = ALPHABET * ALPHABET;

/// Frequency tables for one dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTables {
    positional: [[u32; WORD_LEN]; ALPHABET],
    overall: [u32; ALPHABET],
    bigram: Vec<u32>,
    word_count: u32,
}

/// Plain-data form of [`FrequencyTables`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablesSnapshot {
    /// 26 rows of 5 positional counts
    pub positional: Vec<Vec<u32>>,
    /// 26 overall counts
    pub overall: Vec<u32>,
    /// Two-letter key to count; absent keys are zero
    pub bigram: BTreeMap<String, u32>,
    pub word_count: u32,
}

impl FrequencyTables {
    /// Build tables in a single pass over the dictionary
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Dictionary;
    /// use wordle_assist::frequency::FrequencyTables;
    ///
    /// let dict = Dictionary::new(["speed", "spade"]).unwrap();
    /// let tables = FrequencyTables::build(&dict);
    ///
    /// assert_eq!(tables.positional(b's', 0), 2);
    /// assert_eq!(tables.overall(b'e'), 2); // SPEED counts its Es once
    /// assert_eq!(tables.bigram(b's', b'p'), 2);
    /// ```
    #[must_use]
    pub fn build(dictionary: &Dictionary) -> Self {
        let mut tables = Self {
            positional: [[0; WORD_LEN]; ALPHABET],
            overall: [0; ALPHABET],
            bigram: vec![0; BIGRAMS],
            word_count: 0,
        };

        for word in dictionary.words() {
            tables.add_word(word);
        }

        tables
    }

    fn add_word(&mut self, word: &Word) {
        let codes = word.codes();
        let mut seen = [false; ALPHABET];

        for (position, &code) in codes.iter().enumerate() {
            let code = code as usize;
            self.positional[code][position] += 1;

            if !seen[code] {
                seen[code] = true;
                self.overall[code] += 1;
            }
        }

        for pair in codes.windows(2) {
            self.bigram[bigram_slot(pair[0], pair[1])] += 1;
        }

        self.word_count += 1;
    }

    /// Number of words the tables were built from
    #[must_use]
    pub const fn word_count(&self) -> u32 {
        self.word_count
    }

    /// Count of words with `letter` at `position`; 0 for out-of-range input
    #[must_use]
    pub fn positional(&self, letter: u8, position: usize) -> u32 {
        match letter_index(letter) {
            Some(code) if position < WORD_LEN => self.positional[code][position],
            _ => 0,
        }
    }

    /// Count of words containing `letter` at least once
    #[must_use]
    pub fn overall(&self, letter: u8) -> u32 {
        letter_index(letter).map_or(0, |code| self.overall[code])
    }

    /// Count of adjacent `first`,`second` pairs across all words
    #[must_use]
    pub fn bigram(&self, first: u8, second: u8) -> u32 {
        match (letter_index(first), letter_index(second)) {
            (Some(a), Some(b)) => self.bigram[a * ALPHABET + b],
            _ => 0,
        }
    }

    // Code-based lookups for the scorer hot path
    pub(crate) const fn positional_code(&self, code: u8, position: usize) -> u32 {
        self.positional[code as usize][position]
    }

    pub(crate) const fn overall_code(&self, code: u8) -> u32 {
        self.overall[code as usize]
    }

    pub(crate) fn bigram_code(&self, first: u8, second: u8) -> u32 {
        self.bigram[bigram_slot(first, second)]
    }

    /// Convert to plain nested arrays and a string-keyed bigram map
    #[must_use]
    pub fn to_snapshot(&self) -> TablesSnapshot {
        let bigram = self
            .bigram
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(slot, &count)| {
                let key: String = [
                    code_letter((slot / ALPHABET) as u8),
                    code_letter((slot % ALPHABET) as u8),
                ]
                .iter()
                .collect();
                (key, count)
            })
            .collect();

        TablesSnapshot {
            positional: self.positional.iter().map(|row| row.to_vec()).collect(),
            overall: self.overall.to_vec(),
            bigram,
            word_count: self.word_count,
        }
    }

    /// Rebuild tables from a snapshot
    ///
    /// # Errors
    /// Returns `RestoreError::Shape` if any array has the wrong dimensions or
    /// a bigram key is not two lowercase letters.
    pub fn from_snapshot(snapshot: &TablesSnapshot) -> Result<Self, RestoreError> {
        if snapshot.positional.len() != ALPHABET {
            return Err(RestoreError::Shape("positional rows"));
        }
        let mut positional = [[0; WORD_LEN]; ALPHABET];
        for (row, source) in positional.iter_mut().zip(&snapshot.positional) {
            *row = source
                .as_slice()
                .try_into()
                .map_err(|_| RestoreError::Shape("positional columns"))?;
        }

        let overall: [u32; ALPHABET] = snapshot
            .overall
            .as_slice()
            .try_into()
            .map_err(|_| RestoreError::Shape("overall counts"))?;

        let mut bigram = vec![0; BIGRAMS];
        for (key, &count) in &snapshot.bigram {
            let &[first, second] = key.as_bytes() else {
                return Err(RestoreError::Shape("bigram key"));
            };
            let (Some(a), Some(b)) = (letter_index(first), letter_index(second)) else {
                return Err(RestoreError::Shape("bigram key"));
            };
            bigram[a * ALPHABET + b] = count;
        }

        Ok(Self {
            positional,
            overall,
            bigram,
            word_count: snapshot.word_count,
        })
    }
}

const fn bigram_slot(first: u8, second: u8) -> usize {
    first as usize * ALPHABET + second as usize
}

fn letter_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FrequencyTables {
        let dict = Dictionary::new(["crane", "slate", "speed", "eerie"]).unwrap();
        FrequencyTables::build(&dict)
    }

    #[test]
    fn counts_positional_and_total() {
        let tables = sample();
        assert_eq!(tables.word_count(), 4);
        assert_eq!(tables.positional(b's', 0), 2);
        assert_eq!(tables.positional(b'e', 4), 3);
        assert_eq!(tables.positional(b'e', 0), 1);
    }

    #[test]
    fn overall_counts_once_per_word() {
        let tables = sample();
        // E appears in all four words, three times in EERIE
        assert_eq!(tables.overall(b'e'), 4);
        assert_eq!(tables.overall(b'z'), 0);
    }

    #[test]
    fn bigrams_count_adjacent_pairs() {
        let tables = sample();
        assert_eq!(tables.bigram(b'e', b'e'), 2); // spEEd, EErie
        assert_eq!(tables.bigram(b'r', b'a'), 1);
        assert_eq!(tables.bigram(b'a', b'r'), 0);
    }

    #[test]
    fn out_of_range_lookups_are_zero() {
        let tables = sample();
        assert_eq!(tables.positional(b'A', 0), 0);
        assert_eq!(tables.positional(b'e', 5), 0);
        assert_eq!(tables.overall(b'!'), 0);
        assert_eq!(tables.bigram(b'e', b'1'), 0);
    }

    #[test]
    fn snapshot_survives_json() {
        let tables = sample();
        let json = serde_json::to_string(&tables.to_snapshot()).unwrap();
        let snapshot: TablesSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(FrequencyTables::from_snapshot(&snapshot).unwrap(), tables);
        assert!(json.contains("\"ee\":2"));
    }

    #[test]
    fn snapshot_with_wrong_shape_is_rejected() {
        let mut snapshot = sample().to_snapshot();
        snapshot.positional[3].pop();
        assert!(FrequencyTables::from_snapshot(&snapshot).is_err());

        let mut snapshot = sample().to_snapshot();
        snapshot.bigram.insert("abc".to_string(), 1);
        assert!(FrequencyTables::from_snapshot(&snapshot).is_err());
    }
}
