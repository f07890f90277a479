//! Candidate filtering with memoization
//!
//! `ConstraintEngine` owns the per-session cache from board cache keys to
//! filter results. Filtering itself is a pure function of the dictionary and
//! the board; the cache must be cleared whenever the dictionary changes.

use super::derive::{GuessDelta, merge_guesses, project_positions};
use super::letter::{LetterTable, PositionConstraint};
use crate::core::{BoardState, Dictionary, GuessRecord, WORD_LEN, Word};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Warning attached to a well-formed board that rules out every word
pub const NO_CANDIDATES_WARNING: &str = "No candidates remaining -- board state may be invalid";

/// Unified constraints behind a filter result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSummary {
    pub per_letter: LetterTable,
    pub per_position: [PositionConstraint; WORD_LEN],
    /// One entry per guess, in row order
    pub per_guess: Vec<GuessDelta>,
}

impl ConstraintSummary {
    /// Whether a word satisfies every position and count constraint
    #[must_use]
    pub fn accepts(&self, word: &Word) -> bool {
        let fits_positions = word
            .codes()
            .iter()
            .zip(&self.per_position)
            .all(|(&code, position)| position.admits(code));
        if !fits_positions {
            return false;
        }

        let counts = word.letter_counts();
        self.per_letter
            .iter()
            .all(|(code, constraint)| constraint.allows(counts[code as usize]))
    }
}

/// Outcome of filtering a dictionary against a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
    /// Dictionary indices consistent with every guess, ascending
    pub candidates: Vec<usize>,
    /// True only for an empty board
    pub unconstrained: bool,
    /// Validation failure or empty-result notice
    pub warning: Option<String>,
    pub constraints: ConstraintSummary,
}

impl FilterResult {
    fn unconstrained(dictionary: &Dictionary) -> Self {
        Self {
            candidates: dictionary.all_indices(),
            unconstrained: true,
            warning: None,
            constraints: ConstraintSummary::default(),
        }
    }

    fn invalid(reason: String) -> Self {
        Self {
            candidates: Vec::new(),
            unconstrained: false,
            warning: Some(reason),
            constraints: ConstraintSummary::default(),
        }
    }
}

/// Memoizing candidate filter
///
/// # Examples
/// ```
/// use wordle_assist::constraints::ConstraintEngine;
/// use wordle_assist::core::{BoardState, Dictionary};
///
/// let dict = Dictionary::new(["crane", "slate", "grace"]).unwrap();
/// let board = BoardState::from_patterns(&[("crane", "YGG-G")], 6).unwrap();
///
/// let mut engine = ConstraintEngine::new();
/// let result = engine.filter_candidates(&dict, &board);
/// assert_eq!(result.candidates, vec![2]);
/// assert!(result.warning.is_none());
/// ```
#[derive(Debug, Default)]
pub struct ConstraintEngine {
    cache: FxHashMap<String, Arc<FilterResult>>,
    hits: u64,
    misses: u64,
}

impl ConstraintEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter `dictionary` down to the words consistent with `board`
    ///
    /// Never fails: malformed boards produce an empty result with a warning.
    pub fn filter_candidates(
        &mut self,
        dictionary: &Dictionary,
        board: &BoardState,
    ) -> Arc<FilterResult> {
        if board.guesses.is_empty() {
            return Arc::new(FilterResult::unconstrained(dictionary));
        }

        if let Err(reason) = validate(&board.guesses) {
            warn!(%reason, "Rejecting malformed board state");
            return Arc::new(FilterResult::invalid(reason));
        }

        let key = board.cache_key();
        if let Some(hit) = self.cache.get(&key) {
            self.hits += 1;
            debug!(key = %key, "Constraint cache hit");
            return Arc::clone(hit);
        }
        self.misses += 1;
        debug!(key = %key, "Constraint cache miss");

        let result = Arc::new(compute(dictionary, board));
        self.cache.insert(key, Arc::clone(&result));
        result
    }

    /// Drop every memoized result; required after a dictionary change
    pub fn clear_cache(&mut self) {
        let dropped = self.cache.len();
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
        debug!(dropped, "Constraint cache cleared");
    }

    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }
}

/// Filter a board that already passed validation
fn compute(dictionary: &Dictionary, board: &BoardState) -> FilterResult {
    let (per_letter, per_guess) = merge_guesses(&board.guesses);
    let constraints = ConstraintSummary {
        per_letter,
        per_position: project_positions(&per_letter),
        per_guess,
    };

    let candidates: Vec<usize> = dictionary
        .words()
        .iter()
        .enumerate()
        .filter(|(_, word)| constraints.accepts(word))
        .map(|(index, _)| index)
        .collect();

    let warning = if candidates.is_empty() {
        warn!(guesses = board.guesses.len(), "{NO_CANDIDATES_WARNING}");
        Some(NO_CANDIDATES_WARNING.to_string())
    } else {
        None
    };

    FilterResult {
        candidates,
        unconstrained: false,
        warning,
        constraints,
    }
}

fn validate(guesses: &[GuessRecord]) -> Result<(), String> {
    for (g, guess) in guesses.iter().enumerate() {
        if guess.tiles.len() != WORD_LEN {
            return Err(format!(
                "Invalid guess at index {g}: expected {WORD_LEN} tiles, found {}",
                guess.tiles.len()
            ));
        }

        for (t, tile) in guess.tiles.iter().enumerate() {
            if !tile.letter.is_ascii_alphabetic() {
                return Err(format!("Invalid tile letter at guess {g}, tile {t}"));
            }
            if tile.position != t {
                return Err(format!(
                    "Invalid tile position at guess {g}, tile {t}: found {}",
                    tile.position
                ));
            }
        }

        let matches_tiles = guess.word.len() == WORD_LEN
            && guess
                .word
                .chars()
                .zip(&guess.tiles)
                .all(|(letter, tile)| letter.eq_ignore_ascii_case(&tile.letter));
        if !matches_tiles {
            return Err(format!(
                "Invalid guess at index {g}: word '{}' does not match its tiles",
                guess.word
            ));
        }
    }
    Ok(())
}
