//! Entropy engine: dual-track guess recommendations
//!
//! Owns the encoded dictionary, commonness scores, and the first-guess cache
//! for one session. All state has an explicit lifecycle: `init` or `restore`
//! to fill it, `clear` to drop it.

use super::adaptive::PoolTier;
use super::config::EngineConfig;
use super::entropy::{RankedGuess, Ranker, compute_entropy};
use super::init::{InitError, InitOutcome, PendingInit};
use crate::core::{ALPHABET, Dictionary, Encoded};
use crate::frequency::Commonness;
use crate::persist::RestoreError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Both recommendation tracks for one board state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuessRankings {
    /// Pure entropy ranking
    pub best_info: Vec<RankedGuess>,
    /// Candidates ranked by the urgency blend
    pub best_answer: Vec<RankedGuess>,
}

/// Plain-data form of the first-guess cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstGuessSnapshot {
    /// One five-element array of letter codes per dictionary word
    pub encoded_words: Vec<Vec<u8>>,
    pub best_info: Vec<RankedGuess>,
    pub best_answer: Vec<RankedGuess>,
}

#[derive(Debug)]
struct Session {
    dictionary: Arc<Dictionary>,
    encoded: Vec<Encoded>,
    commonness: Commonness,
}

/// Ranks guesses for a session's dictionary
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use wordle_assist::core::Dictionary;
/// use wordle_assist::frequency::{FrequencyTables, ScoringWeights, compute_commonness};
/// use wordle_assist::solver::{EngineConfig, EntropyEngine};
///
/// let dict = Arc::new(Dictionary::new(["crane", "slate", "trace", "grace"]).unwrap());
/// let tables = FrequencyTables::build(&dict);
/// let commonness = compute_commonness(&dict, &tables, &ScoringWeights::default());
///
/// let mut engine = EntropyEngine::new(EngineConfig::default());
/// let pending = engine.init(Arc::clone(&dict), commonness).unwrap();
/// assert!(engine.finish_init(pending.wait()).unwrap());
///
/// let rankings = engine.rank_guesses_for_state(&[1, 2, 3], Some(2));
/// assert_eq!(rankings.best_answer.len(), 3);
/// ```
#[derive(Debug)]
pub struct EntropyEngine {
    config: EngineConfig,
    session: Option<Session>,
    first_guess: Option<GuessRankings>,
    generation: u64,
}

impl EntropyEngine {
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self {
            config,
            session: None,
            first_guess: None,
            generation: 0,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start a fresh session and launch the self-pairing pass off-thread
    ///
    /// The returned handle must be polled (or waited on) and its outcome fed
    /// to [`EntropyEngine::finish_init`]. Ranking works immediately; only the
    /// first-guess cache waits for the pass.
    ///
    /// # Errors
    /// Returns `InitError::Spawn` if the worker thread cannot be started.
    pub fn init(
        &mut self,
        dictionary: Arc<Dictionary>,
        commonness: Commonness,
    ) -> Result<PendingInit, InitError> {
        self.generation += 1;

        let encoded = dictionary.encoded();
        let flat: Vec<u8> = encoded.iter().flatten().copied().collect();
        debug!(
            words = dictionary.len(),
            generation = self.generation,
            "Starting first-guess pass"
        );

        self.first_guess = None;
        self.session = Some(Session {
            dictionary,
            encoded,
            commonness,
        });

        PendingInit::spawn(self.generation, flat)
    }

    /// Install a worker outcome
    ///
    /// Returns `Ok(false)` when the outcome belongs to a superseded `init`
    /// call and was ignored.
    ///
    /// # Errors
    /// Propagates the worker's `InitError`.
    pub fn finish_init(&mut self, outcome: InitOutcome) -> Result<bool, InitError> {
        if outcome.generation != self.generation {
            warn!(
                stale = outcome.generation,
                current = self.generation,
                "Ignoring superseded initialization result"
            );
            return Ok(false);
        }
        let Some(session) = &self.session else {
            warn!("Initialization finished after the engine was cleared");
            return Ok(false);
        };

        let entropies = outcome.result?;
        let ranked = self
            .ranker(session)
            .order_entropies(entropies.into_iter().enumerate());
        let rankings = self.first_guess_rankings(ranked);

        if let Some(top) = rankings.best_info.first() {
            info!(
                elapsed_ms = outcome.elapsed.as_millis(),
                top = %top.word,
                bits = top.entropy,
                "Entropy engine initialized"
            );
        }
        self.first_guess = Some(rankings);
        Ok(true)
    }

    /// Current generation; each `init`, `restore`, or `clear` advances it
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the first-guess cache is available
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.first_guess.is_some()
    }

    /// Cached rankings for the unconstrained board; empty until ready
    #[must_use]
    pub fn first_guess(&self) -> GuessRankings {
        self.first_guess.clone().unwrap_or_default()
    }

    /// Entropy of one dictionary word against `remaining`
    ///
    /// 0 without a session or when `guess` is not a dictionary index.
    #[must_use]
    pub fn compute_entropy(&self, guess: usize, remaining: &[usize]) -> f64 {
        self.session
            .as_ref()
            .and_then(|session| {
                let codes = session.encoded.get(guess)?;
                Some(compute_entropy(codes, &session.encoded, remaining))
            })
            .unwrap_or(0.0)
    }

    /// Rank `pool` by entropy against `remaining`
    #[must_use]
    pub fn rank_guesses(&self, pool: &[usize], remaining: &[usize]) -> Vec<RankedGuess> {
        self.session.as_ref().map_or_else(Vec::new, |session| {
            self.ranker(session).by_entropy(pool, remaining)
        })
    }

    /// Both recommendation tracks for a candidate set
    ///
    /// `guesses_left` of `None` is treated as the least urgent case. An empty
    /// candidate set yields two empty lists; the full dictionary is served
    /// from the first-guess cache once it is ready.
    #[must_use]
    pub fn rank_guesses_for_state(
        &self,
        candidates: &[usize],
        guesses_left: Option<usize>,
    ) -> GuessRankings {
        let Some(session) = &self.session else {
            return GuessRankings::default();
        };
        if candidates.is_empty() {
            return GuessRankings::default();
        }

        if candidates.len() == session.dictionary.len()
            && let Some(cached) = &self.first_guess
        {
            debug!("Serving first-guess cache");
            return cached.clone();
        }

        let ranker = self.ranker(session);
        let urgency = self.config.urgency.urgency(guesses_left);

        let best_info = match self.config.pool_tier(candidates.len()) {
            PoolTier::Candidates => ranker.by_entropy(candidates, candidates),
            PoolTier::Dictionary => {
                ranker.by_entropy(&session.dictionary.all_indices(), candidates)
            }
        };

        GuessRankings {
            best_info,
            best_answer: ranker.by_blend(candidates, urgency),
        }
    }

    /// Export the first-guess cache; `None` until ready
    #[must_use]
    pub fn to_snapshot(&self) -> Option<FirstGuessSnapshot> {
        let session = self.session.as_ref()?;
        let rankings = self.first_guess.as_ref()?;

        Some(FirstGuessSnapshot {
            encoded_words: session.encoded.iter().map(|codes| codes.to_vec()).collect(),
            best_info: rankings.best_info.clone(),
            best_answer: rankings.best_answer.clone(),
        })
    }

    /// Start a session from a snapshot, skipping the self-pairing pass
    ///
    /// Supersedes any in-flight `init`.
    ///
    /// # Errors
    /// Returns `RestoreError` if the snapshot was taken for a different
    /// dictionary or is malformed.
    pub fn restore(
        &mut self,
        snapshot: FirstGuessSnapshot,
        dictionary: Arc<Dictionary>,
        commonness: Commonness,
    ) -> Result<(), RestoreError> {
        let encoded = decode_words(&snapshot.encoded_words)?;
        if encoded != dictionary.encoded() {
            return Err(RestoreError::Mismatch("encoded words differ from dictionary"));
        }

        let out_of_range = snapshot
            .best_info
            .iter()
            .chain(&snapshot.best_answer)
            .any(|guess| guess.index >= dictionary.len());
        if out_of_range {
            return Err(RestoreError::Shape("ranked guess index"));
        }

        self.generation += 1;
        self.session = Some(Session {
            dictionary,
            encoded,
            commonness,
        });
        self.first_guess = Some(GuessRankings {
            best_info: snapshot.best_info,
            best_answer: snapshot.best_answer,
        });
        info!(generation = self.generation, "Entropy engine restored from cache");
        Ok(())
    }

    /// Drop all session state; in-flight results become stale
    pub fn clear(&mut self) {
        self.generation += 1;
        self.session = None;
        self.first_guess = None;
        info!("Entropy engine caches cleared");
    }

    fn ranker<'a>(&self, session: &'a Session) -> Ranker<'a> {
        Ranker {
            dictionary: &session.dictionary,
            encoded: &session.encoded,
            commonness: &session.commonness,
            tie_epsilon: self.config.tie_epsilon,
        }
    }

    fn first_guess_rankings(&self, mut ranked: Vec<RankedGuess>) -> GuessRankings {
        ranked.truncate(self.config.first_guess_cache_size);

        let max_entropy = ranked.iter().map(|guess| guess.entropy).fold(0.0, f64::max);
        let best_answer = ranked
            .iter()
            .map(|guess| RankedGuess {
                blended: if max_entropy > 0.0 {
                    guess.entropy / max_entropy
                } else {
                    0.0
                },
                ..guess.clone()
            })
            .collect();

        GuessRankings {
            best_info: ranked,
            best_answer,
        }
    }
}

fn decode_words(rows: &[Vec<u8>]) -> Result<Vec<Encoded>, RestoreError> {
    rows.iter()
        .map(|row| {
            let codes: Encoded = row
                .as_slice()
                .try_into()
                .map_err(|_| RestoreError::Shape("encoded word length"))?;
            if codes.iter().any(|&code| usize::from(code) >= ALPHABET) {
                return Err(RestoreError::Shape("encoded letter code"));
            }
            Ok(codes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::{FrequencyTables, ScoringWeights, compute_commonness};

    const WORDS: [&str; 12] = [
        "crane", "slate", "trace", "grace", "react", "crate", "irate", "raise", "stare", "arise",
        "hotel", "jazzy",
    ];

    fn session() -> (Arc<Dictionary>, Commonness) {
        let dict = Arc::new(Dictionary::new(WORDS).unwrap());
        let tables = FrequencyTables::build(&dict);
        let commonness = compute_commonness(&dict, &tables, &ScoringWeights::default());
        (dict, commonness)
    }

    fn ready_engine(config: EngineConfig) -> (EntropyEngine, Arc<Dictionary>) {
        let (dict, commonness) = session();
        let mut engine = EntropyEngine::new(config);
        let pending = engine.init(Arc::clone(&dict), commonness).unwrap();
        assert!(engine.finish_init(pending.wait()).unwrap());
        (engine, dict)
    }

    #[test]
    fn empty_candidates_give_empty_tracks() {
        let (engine, _) = ready_engine(EngineConfig::default());
        let rankings = engine.rank_guesses_for_state(&[], Some(3));

        assert!(rankings.best_info.is_empty());
        assert!(rankings.best_answer.is_empty());
    }

    #[test]
    fn out_of_range_guess_has_zero_entropy() {
        let (engine, dict) = ready_engine(EngineConfig::default());
        let remaining: Vec<usize> = (0..dict.len()).collect();

        assert!(engine.compute_entropy(0, &remaining) > 0.0);
        assert!(engine.compute_entropy(dict.len(), &remaining).abs() < f64::EPSILON);
        assert!(engine.compute_entropy(usize::MAX, &remaining).abs() < f64::EPSILON);
    }

    #[test]
    fn uninitialized_engine_ranks_nothing() {
        let engine = EntropyEngine::new(EngineConfig::default());
        assert_eq!(engine.rank_guesses_for_state(&[0, 1], None), GuessRankings::default());
        assert!(engine.compute_entropy(0, &[0, 1]).abs() < f64::EPSILON);
        assert!(!engine.is_ready());
    }

    #[test]
    fn last_guess_orders_by_commonness() {
        let (engine, _) = ready_engine(EngineConfig::default());
        let (_, commonness) = session();
        let candidates = vec![0, 2, 3, 5, 6];

        let rankings = engine.rank_guesses_for_state(&candidates, Some(1));
        let mut expected = candidates.clone();
        expected.sort_by(|&a, &b| commonness.score(b).total_cmp(&commonness.score(a)));

        let got: Vec<usize> = rankings.best_answer.iter().map(|g| g.index).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn small_candidate_sets_use_candidate_pool() {
        let (engine, _) = ready_engine(EngineConfig {
            adaptive_threshold: 3,
            ..EngineConfig::default()
        });

        let small = engine.rank_guesses_for_state(&[0, 1, 2], None);
        assert_eq!(small.best_info.len(), 3);

        let large = engine.rank_guesses_for_state(&[0, 1, 2, 3], None);
        assert_eq!(large.best_info.len(), WORDS.len());
        assert_eq!(large.best_answer.len(), 4);
    }

    #[test]
    fn full_dictionary_served_from_cache() {
        let (engine, dict) = ready_engine(EngineConfig {
            first_guess_cache_size: 5,
            ..EngineConfig::default()
        });

        let rankings = engine.rank_guesses_for_state(&dict.all_indices(), Some(6));
        assert_eq!(rankings, engine.first_guess());
        assert_eq!(rankings.best_info.len(), 5);

        let direct = engine.rank_guesses(&dict.all_indices(), &dict.all_indices());
        assert_eq!(rankings.best_info[..], direct[..5]);
    }

    #[test]
    fn stale_outcome_is_ignored() {
        let (dict, commonness) = session();
        let mut engine = EntropyEngine::new(EngineConfig::default());

        let first = engine.init(Arc::clone(&dict), commonness.clone()).unwrap();
        let second = engine.init(Arc::clone(&dict), commonness).unwrap();
        assert_eq!(second.generation(), first.generation() + 1);

        assert!(!engine.finish_init(first.wait()).unwrap());
        assert!(!engine.is_ready());
        assert!(engine.finish_init(second.wait()).unwrap());
        assert!(engine.is_ready());
    }

    #[test]
    fn clear_drops_session_and_supersedes_init() {
        let (dict, commonness) = session();
        let mut engine = EntropyEngine::new(EngineConfig::default());
        let pending = engine.init(dict, commonness).unwrap();

        engine.clear();
        assert!(!engine.finish_init(pending.wait()).unwrap());
        assert!(engine.first_guess().best_info.is_empty());
    }

    #[test]
    fn snapshot_restores_without_recomputing() {
        let (engine, dict) = ready_engine(EngineConfig::default());
        let snapshot = engine.to_snapshot().unwrap();
        assert_eq!(snapshot.encoded_words.len(), WORDS.len());

        let (_, commonness) = session();
        let mut restored = EntropyEngine::new(EngineConfig::default());
        restored.restore(snapshot, Arc::clone(&dict), commonness).unwrap();

        assert!(restored.is_ready());
        assert_eq!(restored.first_guess(), engine.first_guess());
    }

    #[test]
    fn snapshot_for_other_dictionary_is_rejected() {
        let (engine, _) = ready_engine(EngineConfig::default());
        let mut snapshot = engine.to_snapshot().unwrap();

        let (_, commonness) = session();
        let other = Arc::new(Dictionary::new(["fuzzy", "boost"]).unwrap());
        let mut restored = EntropyEngine::new(EngineConfig::default());
        assert!(matches!(
            restored.restore(snapshot.clone(), other, commonness.clone()),
            Err(RestoreError::Mismatch(_))
        ));

        let (dict, _) = session();
        snapshot.encoded_words[0].push(3);
        assert!(matches!(
            restored.restore(snapshot, dict, commonness),
            Err(RestoreError::Shape(_))
        ));
        assert!(!restored.is_ready());
    }
}
