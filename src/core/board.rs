//! Board state as observed from the game
//!
//! A `BoardState` is an ordered list of submitted guesses with their
//! per-tile feedback. It is rebuilt by the board reader on every change and
//! handed to the constraint engine as-is; malformed entries are reported by
//! the engine rather than rejected here.

use super::pattern::Pattern;
use super::word::{WORD_LEN, Word, WordError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of rows on the board
pub const DEFAULT_ROWS: usize = 6;

/// Feedback for a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileStatus {
    Correct,
    Present,
    Absent,
}

impl TileStatus {
    /// Single-character code used in cache keys
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'c',
            Self::Present => 'p',
            Self::Absent => 'a',
        }
    }

    /// Base-3 digit used in pattern encoding
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    /// Inverse of [`TileStatus::digit`]; any value above 2 maps to correct
    #[must_use]
    pub const fn from_digit(digit: u8) -> Self {
        match digit {
            0 => Self::Absent,
            1 => Self::Present,
            _ => Self::Correct,
        }
    }
}

impl std::str::FromStr for TileStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "correct" | "c" => Ok(Self::Correct),
            "present" | "p" => Ok(Self::Present),
            "absent" | "a" => Ok(Self::Absent),
            other => Err(format!("Unrecognized tile status: {other}")),
        }
    }
}

/// One tile of a submitted guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub letter: char,
    pub status: TileStatus,
    pub position: usize,
}

/// A submitted word and its feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub word: String,
    pub tiles: Vec<Tile>,
}

impl GuessRecord {
    /// Build a record by playing `guess` against a known pattern
    #[must_use]
    pub fn from_pattern(guess: &Word, pattern: Pattern) -> Self {
        let tiles = guess
            .text()
            .chars()
            .zip(pattern.statuses())
            .enumerate()
            .map(|(position, (letter, status))| Tile {
                letter,
                status,
                position,
            })
            .collect();

        Self {
            word: guess.text().to_string(),
            tiles,
        }
    }

    /// Cache-key fragment: the word followed by one status code per tile
    #[must_use]
    pub fn key_fragment(&self) -> String {
        let mut key = String::with_capacity(self.word.len() + 1 + self.tiles.len());
        key.push_str(&self.word);
        key.push(':');
        key.extend(self.tiles.iter().map(|tile| tile.status.code()));
        key
    }
}

/// Derived game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Snapshot of the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub guesses: Vec<GuessRecord>,
    pub total_rows: usize,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS)
    }
}

impl BoardState {
    /// Create an empty board with the given number of rows
    #[must_use]
    pub const fn new(total_rows: usize) -> Self {
        Self {
            guesses: Vec::new(),
            total_rows,
        }
    }

    /// Build a board from `(word, pattern)` pairs such as `("crane", "-Y-G-")`
    ///
    /// # Errors
    /// Returns a message naming the first word or pattern that fails to parse.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{BoardState, GameStatus};
    ///
    /// let board = BoardState::from_patterns(&[("crane", "--G-G")], 6).unwrap();
    /// assert_eq!(board.guesses_left(), 5);
    /// assert_eq!(board.status(), GameStatus::InProgress);
    /// ```
    pub fn from_patterns(entries: &[(&str, &str)], total_rows: usize) -> Result<Self, String> {
        let mut board = Self::new(total_rows);
        for &(word, pattern) in entries {
            let word = Word::new(word).map_err(|e: WordError| format!("{word}: {e}"))?;
            let pattern = pattern.parse::<Pattern>()?;
            board.push(&word, pattern);
        }
        Ok(board)
    }

    /// Append a guess with its observed pattern
    pub fn push(&mut self, guess: &Word, pattern: Pattern) {
        self.guesses.push(GuessRecord::from_pattern(guess, pattern));
    }

    /// Rows remaining
    #[must_use]
    pub const fn guesses_left(&self) -> usize {
        self.total_rows.saturating_sub(self.guesses.len())
    }

    /// Derive the game status from the submitted rows
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let solved = self.guesses.last().is_some_and(|guess| {
            guess.tiles.len() == WORD_LEN
                && guess
                    .tiles
                    .iter()
                    .all(|tile| tile.status == TileStatus::Correct)
        });

        if solved {
            GameStatus::Won
        } else if self.guesses.len() >= self.total_rows {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Memoization key: guess fragments joined by `|`
    #[must_use]
    pub fn cache_key(&self) -> String {
        self.guesses
            .iter()
            .map(GuessRecord::key_fragment)
            .collect::<Vec<_>>()
            .join("|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_patterns_builds_tiles() {
        let board = BoardState::from_patterns(&[("speed", "-YY--")], 6).unwrap();
        let tiles = &board.guesses[0].tiles;

        assert_eq!(tiles.len(), 5);
        assert_eq!(tiles[1].letter, 'p');
        assert_eq!(tiles[1].status, TileStatus::Present);
        assert_eq!(tiles[3].status, TileStatus::Absent);
        assert_eq!(tiles[4].position, 4);
    }

    #[test]
    fn from_patterns_rejects_bad_input() {
        assert!(BoardState::from_patterns(&[("toolong", "-----")], 6).is_err());
        assert!(BoardState::from_patterns(&[("crane", "--x--")], 6).is_err());
    }

    #[test]
    fn status_won_lost_in_progress() {
        let empty = BoardState::default();
        assert_eq!(empty.status(), GameStatus::InProgress);
        assert_eq!(empty.guesses_left(), 6);

        let won = BoardState::from_patterns(&[("crane", "-----"), ("slate", "GGGGG")], 6).unwrap();
        assert_eq!(won.status(), GameStatus::Won);

        let lost = BoardState::from_patterns(&[("crane", "-----"), ("slate", "-----")], 2).unwrap();
        assert_eq!(lost.status(), GameStatus::Lost);
        assert_eq!(lost.guesses_left(), 0);
    }

    #[test]
    fn cache_key_format() {
        let board = BoardState::from_patterns(&[("crane", "G-Y--"), ("slate", "-----")], 6).unwrap();
        assert_eq!(board.cache_key(), "crane:capaa|slate:aaaaa");
    }

    #[test]
    fn tile_status_parsing() {
        assert_eq!("correct".parse::<TileStatus>(), Ok(TileStatus::Correct));
        assert_eq!("p".parse::<TileStatus>(), Ok(TileStatus::Present));
        assert!("maybe".parse::<TileStatus>().is_err());
    }

    #[test]
    fn board_json_shape() {
        let board = BoardState::from_patterns(&[("crane", "G----")], 6).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert!(json.contains("\"status\":\"correct\""));

        let back: BoardState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
