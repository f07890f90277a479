//! Adaptive pool selection and urgency
//!
//! Two knobs change as a game progresses: which words are worth guessing for
//! information, and how much weight likely answers get over informative ones.

use serde::{Deserialize, Serialize};

/// Where information guesses are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolTier {
    /// Many candidates: any dictionary word may split them best
    Dictionary,

    /// Few candidates: guessing outside them rarely pays off
    Candidates,
}

impl PoolTier {
    /// Pick the tier for a candidate count
    ///
    /// Counts at or below `threshold` use the candidates themselves.
    #[must_use]
    pub const fn for_candidates(num_candidates: usize, threshold: usize) -> Self {
        if num_candidates > threshold {
            Self::Dictionary
        } else {
            Self::Candidates
        }
    }
}

/// Urgency by guesses remaining
///
/// Four or more guesses left is always pure entropy (0.0) and one left is
/// always pure commonness (1.0); the two middle steps are tunable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrgencySchedule {
    pub three_left: f64,
    pub two_left: f64,
}

impl Default for UrgencySchedule {
    fn default() -> Self {
        Self {
            three_left: 0.15,
            two_left: 0.4,
        }
    }
}

impl UrgencySchedule {
    /// Weight in `[0, 1]` given to commonness; unknown counts are least urgent
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::solver::UrgencySchedule;
    ///
    /// let schedule = UrgencySchedule::default();
    /// assert_eq!(schedule.urgency(None), 0.0);
    /// assert_eq!(schedule.urgency(Some(5)), 0.0);
    /// assert_eq!(schedule.urgency(Some(2)), 0.4);
    /// assert_eq!(schedule.urgency(Some(0)), 1.0);
    /// ```
    #[must_use]
    pub fn urgency(&self, guesses_left: Option<usize>) -> f64 {
        match guesses_left {
            None | Some(4..) => 0.0,
            Some(3) => self.three_left,
            Some(2) => self.two_left,
            Some(_) => 1.0,
        }
    }
}
