//! Guess ranking
//!
//! Entropy evaluation, the adaptive pool and urgency policy, and the engine
//! that ties them to a session's dictionary.

pub mod adaptive;
mod config;
mod engine;
pub mod entropy;
mod init;

pub use adaptive::{PoolTier, UrgencySchedule};
pub use config::{DEFAULT_TIE_EPSILON, EngineConfig};
pub use engine::{EntropyEngine, FirstGuessSnapshot, GuessRankings};
pub use entropy::RankedGuess;
pub use init::{InitError, InitOutcome, PendingInit, self_pairing_entropies};
