//! Constraint derivation and candidate filtering
//!
//! Accumulated feedback is reduced to per-letter bounds and per-position
//! requirements, which then select the consistent words of a dictionary.

mod derive;
mod engine;
mod letter;

pub use derive::{GuessDelta, derive_guess, merge_guesses, project_positions};
pub use engine::{ConstraintEngine, ConstraintSummary, FilterResult, NO_CANDIDATES_WARNING};
pub use letter::{LetterConstraint, LetterSet, LetterTable, PositionConstraint, PositionSet};
