//! Wordle Assist
//!
//! The algorithmic core of a Wordle guessing assistant: exact constraint
//! filtering from tri-state feedback, letter-frequency commonness, and
//! entropy-based guess ranking with an urgency blend toward likely answers.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordle_assist::constraints::ConstraintEngine;
//! use wordle_assist::core::{BoardState, Dictionary};
//! use wordle_assist::frequency::{FrequencyTables, ScoringWeights, compute_commonness};
//! use wordle_assist::solver::{EngineConfig, EntropyEngine};
//!
//! let dict = Arc::new(Dictionary::new(["crane", "slate", "trace", "grace", "brace"]).unwrap());
//! let tables = FrequencyTables::build(&dict);
//! let commonness = compute_commonness(&dict, &tables, &ScoringWeights::default());
//!
//! let mut engine = EntropyEngine::new(EngineConfig::default());
//! let pending = engine.init(Arc::clone(&dict), commonness).unwrap();
//! engine.finish_init(pending.wait()).unwrap();
//!
//! let board = BoardState::from_patterns(&[("crane", "YGG-G")], 6).unwrap();
//! let filter = ConstraintEngine::new().filter_candidates(&dict, &board);
//! let rankings = engine.rank_guesses_for_state(&filter.candidates, Some(board.guesses_left()));
//! assert_eq!(rankings.best_answer.len(), 3);
//! ```

// Core domain types
pub mod core;

// Letter statistics and commonness
pub mod frequency;

// Feedback constraints and candidate filtering
pub mod constraints;

// Entropy ranking
pub mod solver;

// Snapshots and key→blob storage
pub mod persist;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
