//! Fixed-size constraint records
//!
//! Per-letter data lives in a 26-slot array indexed by letter code; position
//! and letter sets are bitmasks.

use crate::core::{ALPHABET, WORD_LEN, code_letter};
use std::fmt;

/// Set of board positions (bits 0-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PositionSet(u8);

impl PositionSet {
    pub const EMPTY: Self = Self(0);

    #[must_use]
    pub const fn with(self, position: usize) -> Self {
        Self(self.0 | (1 << position))
    }

    #[must_use]
    pub const fn contains(self, position: usize) -> bool {
        self.0 & (1 << position) != 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Positions in `self` that are not in `other`
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Ascending positions
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..WORD_LEN).filter(move |&p| self.contains(p))
    }
}

/// Set of letters, by code (bits 0-25)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn insert(&mut self, code: u8) {
        self.0 |= 1 << code;
    }

    #[must_use]
    pub const fn contains(self, code: u8) -> bool {
        self.0 & (1 << code) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = char> {
        (0..ALPHABET as u8)
            .filter(move |&code| self.contains(code))
            .map(code_letter)
    }
}

/// Everything known about one letter, unified across guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterConstraint {
    /// Positions confirmed to hold this letter
    pub green: PositionSet,
    /// Positions where the letter was reported present but misplaced
    pub yellow: PositionSet,
    /// Positions where an occurrence of the letter was reported absent
    pub gray: PositionSet,
    /// Lower bound on occurrences in the secret
    pub min_count: u8,
    /// Upper bound on occurrences; `None` is unbounded
    pub max_count: Option<u8>,
}

impl LetterConstraint {
    /// Tighten with another guess's constraint for the same letter
    ///
    /// Positions are unioned, the lower bound takes the max, and the upper
    /// bound takes the min with unbounded acting as infinity.
    pub fn merge(&mut self, other: &Self) {
        self.green = self.green.union(other.green);
        self.yellow = self.yellow.union(other.yellow);
        self.gray = self.gray.union(other.gray);
        self.min_count = self.min_count.max(other.min_count);
        self.max_count = match (self.max_count, other.max_count) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (bound, None) | (None, bound) => bound,
        };
    }

    /// Whether `count` occurrences satisfy both bounds
    #[must_use]
    pub fn allows(&self, count: u8) -> bool {
        count >= self.min_count && self.max_count.is_none_or(|max| count <= max)
    }

    /// Proven absent from the secret
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self.max_count, Some(0))
    }
}

impl fmt::Display for LetterConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_count {
            Some(max) if max == self.min_count => write!(f, "exactly {max}")?,
            Some(max) => write!(f, "{}..={max}", self.min_count)?,
            None => write!(f, ">= {}", self.min_count)?,
        }
        if !self.green.is_empty() {
            let positions: Vec<String> = self.green.iter().map(|p| (p + 1).to_string()).collect();
            write!(f, ", at {}", positions.join(","))?;
        }
        if !self.yellow.is_empty() {
            let positions: Vec<String> = self.yellow.iter().map(|p| (p + 1).to_string()).collect();
            write!(f, ", not at {}", positions.join(","))?;
        }
        Ok(())
    }
}

/// Unified per-letter constraints; `None` for letters never guessed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterTable([Option<LetterConstraint>; ALPHABET]);

impl Default for LetterTable {
    fn default() -> Self {
        Self([None; ALPHABET])
    }
}

impl LetterTable {
    #[must_use]
    pub fn get(&self, code: u8) -> Option<&LetterConstraint> {
        self.0.get(code as usize).and_then(Option::as_ref)
    }

    pub(crate) fn entry(&mut self, code: u8) -> &mut LetterConstraint {
        self.0[code as usize].get_or_insert_with(LetterConstraint::default)
    }

    /// Seen letters with their constraints, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (u8, &LetterConstraint)> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(code, slot)| slot.as_ref().map(|c| (code as u8, c)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Merge every letter of `other` into this table
    pub fn merge(&mut self, other: &Self) {
        for (code, constraint) in other.iter() {
            self.entry(code).merge(constraint);
        }
    }
}

/// What one board position requires or forbids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionConstraint {
    /// Letter code confirmed at this position
    pub required: Option<u8>,
    /// Letter codes ruled out at this position
    pub excluded: LetterSet,
}

impl PositionConstraint {
    /// Whether a letter code may sit here
    #[must_use]
    pub fn admits(&self, code: u8) -> bool {
        self.required.is_none_or(|required| required == code) && !self.excluded.contains(code)
    }
}
