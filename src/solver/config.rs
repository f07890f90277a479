//! Engine configuration

use super::adaptive::{PoolTier, UrgencySchedule};
use crate::frequency::ScoringWeights;
use serde::{Deserialize, Serialize};

/// Entropy difference, in bits, below which two guesses count as tied
pub const DEFAULT_TIE_EPSILON: f64 = 1e-6;

/// Tunables for ranking and initialization
///
/// Every field has a default, so a config file only names what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Candidate count at or below which information guesses come from the
    /// candidates only
    pub adaptive_threshold: usize,
    /// Entropy tie tolerance; ties fall back to commonness
    pub tie_epsilon: f64,
    /// Entries kept per track in the first-guess cache
    pub first_guess_cache_size: usize,
    pub urgency: UrgencySchedule,
    pub scoring: ScoringWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            adaptive_threshold: 20,
            tie_epsilon: DEFAULT_TIE_EPSILON,
            first_guess_cache_size: 20,
            urgency: UrgencySchedule::default(),
            scoring: ScoringWeights::default(),
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub const fn pool_tier(&self, num_candidates: usize) -> PoolTier {
        PoolTier::for_candidates(num_candidates, self.adaptive_threshold)
    }
}
