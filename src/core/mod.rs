//! Core domain types
//!
//! Words, feedback patterns, the session dictionary, and the observed board.
//! All types here are pure and cheap to test in isolation.

mod board;
mod dictionary;
mod pattern;
mod word;

pub use board::{BoardState, DEFAULT_ROWS, GameStatus, GuessRecord, Tile, TileStatus};
pub use dictionary::{Dictionary, DictionaryError};
pub use pattern::{PATTERN_COUNT, Pattern};
pub use word::{ALPHABET, Encoded, WORD_LEN, Word, WordError, code_letter, letter_code};
