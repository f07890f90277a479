//! Commonness scoring
//!
//! A word's commonness is a weighted blend of how typical its letters are at
//! their positions, how common its distinct letters are overall, and how
//! common its adjacent letter pairs are. Every component is normalized by the
//! dictionary's word count.

use super::tables::FrequencyTables;
use crate::core::{ALPHABET, Dictionary, WORD_LEN, Word};
use crate::persist::RestoreError;
use serde::{Deserialize, Serialize};

/// Blend weights for the commonness composite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub positional: f64,
    pub overall: f64,
    pub bigram: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            positional: 0.60,
            overall: 0.30,
            bigram: 0.10,
        }
    }
}

/// Composite score and its components for one word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordScore {
    pub composite: f64,
    pub positional: f64,
    pub overall: f64,
    pub bigram: f64,
}

/// Per-word commonness for a whole dictionary
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Commonness {
    /// Composite score per dictionary index
    pub scores: Vec<f64>,
    /// Largest score, 0 when empty
    pub max: f64,
}

/// Plain-data form of [`Commonness`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonnessSnapshot {
    pub scores: Vec<f64>,
    pub max: f64,
}

/// Score a single word against the tables
///
/// # Examples
/// ```
/// use wordle_assist::core::{Dictionary, Word};
/// use wordle_assist::frequency::{FrequencyTables, ScoringWeights, score_word};
///
/// let dict = Dictionary::new(["slate", "slant", "jazzy"]).unwrap();
/// let tables = FrequencyTables::build(&dict);
/// let weights = ScoringWeights::default();
///
/// let common = score_word(&dict[0], &tables, &weights);
/// let rare = score_word(&dict[2], &tables, &weights);
/// assert!(common.composite > rare.composite);
/// ```
#[must_use]
pub fn score_word(word: &Word, tables: &FrequencyTables, weights: &ScoringWeights) -> WordScore {
    let total = f64::from(tables.word_count().max(1));
    let codes = word.codes();

    let positional = codes
        .iter()
        .enumerate()
        .map(|(position, &code)| f64::from(tables.positional_code(code, position)) / total)
        .sum::<f64>()
        / WORD_LEN as f64;

    let mut seen = [false; ALPHABET];
    let mut overall_sum = 0.0;
    for &code in codes {
        if !seen[code as usize] {
            seen[code as usize] = true;
            overall_sum += f64::from(tables.overall_code(code)) / total;
        }
    }
    let overall = overall_sum / WORD_LEN as f64;

    let bigram = codes
        .windows(2)
        .map(|pair| f64::from(tables.bigram_code(pair[0], pair[1])) / total)
        .sum::<f64>()
        / (WORD_LEN - 1) as f64;

    WordScore {
        composite: weights.positional * positional
            + weights.overall * overall
            + weights.bigram * bigram,
        positional,
        overall,
        bigram,
    }
}

/// Score every word, sorted by descending composite
#[must_use]
pub fn score_words<'a>(
    dictionary: &'a Dictionary,
    tables: &FrequencyTables,
    weights: &ScoringWeights,
) -> Vec<(&'a Word, WordScore)> {
    let mut scored: Vec<_> = dictionary
        .words()
        .iter()
        .map(|word| (word, score_word(word, tables, weights)))
        .collect();

    scored.sort_by(|(_, a), (_, b)| b.composite.total_cmp(&a.composite));
    scored
}

/// Precompute commonness for every dictionary index
#[must_use]
pub fn compute_commonness(
    dictionary: &Dictionary,
    tables: &FrequencyTables,
    weights: &ScoringWeights,
) -> Commonness {
    let scores: Vec<f64> = dictionary
        .words()
        .iter()
        .map(|word| score_word(word, tables, weights).composite)
        .collect();
    let max = scores.iter().copied().fold(0.0, f64::max);

    Commonness { scores, max }
}

impl Commonness {
    /// Score for a dictionary index, 0 if out of range
    #[must_use]
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn to_snapshot(&self) -> CommonnessSnapshot {
        CommonnessSnapshot {
            scores: self.scores.clone(),
            max: self.max,
        }
    }

    /// Restore commonness for a dictionary of `expected_len` words
    ///
    /// # Errors
    /// Returns `RestoreError::Length` if the score count does not match.
    pub fn from_snapshot(
        snapshot: CommonnessSnapshot,
        expected_len: usize,
    ) -> Result<Self, RestoreError> {
        if snapshot.scores.len() != expected_len {
            return Err(RestoreError::Length {
                what: "commonness scores",
                expected: expected_len,
                found: snapshot.scores.len(),
            });
        }
        Ok(Self {
            scores: snapshot.scores,
            max: snapshot.max,
        })
    }
}
