//! Session wiring shared by every command
//!
//! Builds (or restores) everything one dictionary needs, then answers board
//! states with a filter result and both recommendation tracks.

use crate::constraints::{ConstraintEngine, FilterResult};
use crate::core::{BoardState, Dictionary, GameStatus};
use crate::frequency::{Commonness, FrequencyTables, compute_commonness};
use crate::persist::{BlobStore, RestoredSession, SessionCache};
use crate::solver::{EngineConfig, EntropyEngine, GuessRankings, InitError, RankedGuess};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Everything the assistant knows about one board
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub status: GameStatus,
    pub guesses_left: usize,
    pub filter: Arc<FilterResult>,
    pub rankings: GuessRankings,
}

impl Suggestion {
    /// The guess to play next
    ///
    /// Prefers the answer track whenever its top word gives up no
    /// information against the info track, or on the final row.
    #[must_use]
    pub fn pick(&self, tie_epsilon: f64) -> Option<&RankedGuess> {
        let answer = self.rankings.best_answer.first();
        let info = self.rankings.best_info.first();

        match (answer, info) {
            (Some(answer), Some(info)) => {
                if self.guesses_left <= 1 || answer.entropy + tie_epsilon >= info.entropy {
                    Some(answer)
                } else {
                    Some(info)
                }
            }
            (answer, info) => answer.or(info),
        }
    }
}

/// A ready-to-use session for one dictionary
#[derive(Debug)]
pub struct Assistant {
    dictionary: Arc<Dictionary>,
    tables: FrequencyTables,
    commonness: Commonness,
    constraints: ConstraintEngine,
    engine: EntropyEngine,
}

impl Assistant {
    /// Build a session, reusing a cached one from `store` when it matches
    ///
    /// A missing, unreadable, or mismatched cache falls back to the full
    /// setup, whose result is then written back to `store`.
    ///
    /// # Errors
    /// Returns `InitError` if the first-guess pass fails.
    pub fn start(
        dictionary: Dictionary,
        config: EngineConfig,
        store: &mut dyn BlobStore,
    ) -> Result<Self, InitError> {
        let dictionary = Arc::new(dictionary);
        let mut engine = EntropyEngine::new(config);

        let (tables, commonness) = match load_cached(&*store, &dictionary, &mut engine) {
            Some(restored) => (restored.tables, restored.commonness),
            None => {
                let tables = FrequencyTables::build(&dictionary);
                let commonness = compute_commonness(&dictionary, &tables, &engine.config().scoring);
                (tables, commonness)
            }
        };

        if !engine.is_ready() {
            info!(words = dictionary.len(), "Computing first-guess rankings");
            let pending = engine.init(Arc::clone(&dictionary), commonness.clone())?;
            engine.finish_init(pending.wait())?;

            let cache = SessionCache::capture(&dictionary, &tables, &commonness, &engine);
            if let Err(e) = cache.save(store) {
                warn!(error = %e, "Failed to save session cache");
            }
        }

        Ok(Self {
            dictionary,
            tables,
            commonness,
            constraints: ConstraintEngine::new(),
            engine,
        })
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn tables(&self) -> &FrequencyTables {
        &self.tables
    }

    #[must_use]
    pub const fn commonness(&self) -> &Commonness {
        &self.commonness
    }

    #[must_use]
    pub const fn engine(&self) -> &EntropyEngine {
        &self.engine
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintEngine {
        &self.constraints
    }

    /// Candidates for `board` without ranking them
    pub fn filter(&mut self, board: &BoardState) -> Arc<FilterResult> {
        self.constraints.filter_candidates(&self.dictionary, board)
    }

    /// Filter and rank for `board`
    pub fn suggest(&mut self, board: &BoardState) -> Suggestion {
        let filter = self.filter(board);
        let guesses_left = board.guesses_left();
        let rankings = self
            .engine
            .rank_guesses_for_state(&filter.candidates, Some(guesses_left));

        Suggestion {
            status: board.status(),
            guesses_left,
            filter,
            rankings,
        }
    }
}

fn load_cached(
    store: &dyn BlobStore,
    dictionary: &Arc<Dictionary>,
    engine: &mut EntropyEngine,
) -> Option<RestoredSession> {
    let cache = match SessionCache::load(store, dictionary.fingerprint()) {
        Ok(Some(cache)) => cache,
        Ok(None) => {
            debug!(fingerprint = dictionary.fingerprint(), "No session cache");
            return None;
        }
        Err(e) => {
            warn!(error = %e, "Unreadable session cache");
            return None;
        }
    };

    cache
        .restore(dictionary, engine)
        .inspect_err(|e| warn!(error = %e, "Discarding session cache"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;

    const WORDS: [&str; 10] = [
        "crane", "slate", "trace", "grace", "brace", "speed", "erupt", "jazzy", "hotel", "geese",
    ];

    fn assistant(store: &mut MemoryStore) -> Assistant {
        let dict = Dictionary::new(WORDS).unwrap();
        Assistant::start(dict, EngineConfig::default(), store).unwrap()
    }

    #[test]
    fn start_saves_then_restores() {
        let mut store = MemoryStore::new();
        let first = assistant(&mut store);
        assert_eq!(store.len(), 1);
        assert!(first.engine().is_ready());

        let second = assistant(&mut store);
        assert!(second.engine().is_ready());
        assert_eq!(second.tables(), first.tables());
        assert_eq!(
            second.engine().first_guess().best_info.len(),
            first.engine().first_guess().best_info.len()
        );
    }

    #[test]
    fn corrupt_cache_falls_back_to_full_setup() {
        let dict = Dictionary::new(WORDS).unwrap();
        let mut store = MemoryStore::new();
        store.save(dict.fingerprint(), b"{broken").unwrap();

        let assistant = Assistant::start(dict, EngineConfig::default(), &mut store).unwrap();
        assert!(assistant.engine().is_ready());
    }

    #[test]
    fn empty_board_serves_first_guess_cache() {
        let mut store = MemoryStore::new();
        let mut assistant = assistant(&mut store);

        let suggestion = assistant.suggest(&BoardState::default());
        assert!(suggestion.filter.unconstrained);
        assert_eq!(suggestion.guesses_left, 6);
        assert_eq!(suggestion.rankings, assistant.engine().first_guess());
    }

    #[test]
    fn constrained_board_ranks_candidates() {
        let mut store = MemoryStore::new();
        let mut assistant = assistant(&mut store);

        let board = BoardState::from_patterns(&[("crane", "YGG-G")], 6).unwrap();
        let suggestion = assistant.suggest(&board);

        let words: Vec<&str> = suggestion
            .filter
            .candidates
            .iter()
            .map(|&i| assistant.dictionary()[i].text())
            .collect();
        assert_eq!(words, ["trace", "grace", "brace"]);
        assert_eq!(suggestion.rankings.best_answer.len(), words.len());

        let pick = suggestion.pick(1e-6).unwrap();
        assert!(!pick.word.is_empty());
    }

    #[test]
    fn filter_shares_cache_with_suggest() {
        let mut store = MemoryStore::new();
        let mut assistant = assistant(&mut store);

        let board = BoardState::from_patterns(&[("crane", "YGG-G")], 6).unwrap();
        let filtered = assistant.filter(&board);
        assert_eq!(filtered.candidates.len(), 3);
        assert_eq!(assistant.constraints().misses(), 1);

        let suggestion = assistant.suggest(&board);
        assert!(Arc::ptr_eq(&filtered, &suggestion.filter));
        assert_eq!(assistant.constraints().hits(), 1);
    }

    #[test]
    fn contradictory_board_suggests_nothing() {
        let mut store = MemoryStore::new();
        let mut assistant = assistant(&mut store);

        let board = BoardState::from_patterns(&[("jazzy", "GGGGG"), ("hotel", "GGGGG")], 6).unwrap();
        let suggestion = assistant.suggest(&board);

        assert!(suggestion.filter.candidates.is_empty());
        assert!(suggestion.filter.warning.is_some());
        assert!(suggestion.pick(1e-6).is_none());
    }
}
