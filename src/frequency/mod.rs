//! Letter-frequency statistics and word commonness
//!
//! Tables are built once per dictionary; commonness scores derived from them
//! estimate how likely each word is to be the hidden answer.

mod scorer;
mod tables;

pub use scorer::{
    Commonness, CommonnessSnapshot, ScoringWeights, WordScore, compute_commonness, score_word,
    score_words,
};
pub use tables::{FrequencyTables, TablesSnapshot};
