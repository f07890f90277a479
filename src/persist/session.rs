//! Per-dictionary session bundle

use super::RestoreError;
use super::store::{BlobStore, StoreError};
use crate::core::Dictionary;
use crate::frequency::{Commonness, CommonnessSnapshot, FrequencyTables, TablesSnapshot};
use crate::solver::{EntropyEngine, FirstGuessSnapshot};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Everything needed to skip the expensive setup for a known dictionary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCache {
    pub fingerprint: String,
    pub tables: TablesSnapshot,
    pub commonness: CommonnessSnapshot,
    /// Absent when saved before the first-guess pass finished
    pub first_guess: Option<FirstGuessSnapshot>,
}

/// Live data rebuilt from a [`SessionCache`]
#[derive(Debug)]
pub struct RestoredSession {
    pub tables: FrequencyTables,
    pub commonness: Commonness,
    /// Whether the engine's first-guess cache was restored
    pub first_guess_ready: bool,
}

impl SessionCache {
    /// Capture the current session
    #[must_use]
    pub fn capture(
        dictionary: &Dictionary,
        tables: &FrequencyTables,
        commonness: &Commonness,
        engine: &EntropyEngine,
    ) -> Self {
        Self {
            fingerprint: dictionary.fingerprint().to_string(),
            tables: tables.to_snapshot(),
            commonness: commonness.to_snapshot(),
            first_guess: engine.to_snapshot(),
        }
    }

    /// Write the bundle under its fingerprint
    ///
    /// # Errors
    /// Returns `StoreError` if encoding or the store fails.
    pub fn save(&self, store: &mut dyn BlobStore) -> Result<(), StoreError> {
        let blob = serde_json::to_vec(self)?;
        store.save(&self.fingerprint, &blob)?;
        debug!(fingerprint = %self.fingerprint, bytes = blob.len(), "Session cache saved");
        Ok(())
    }

    /// Read the bundle for `fingerprint`, if one was saved
    ///
    /// # Errors
    /// Returns `StoreError` if the store fails or the blob is not valid JSON.
    pub fn load(store: &dyn BlobStore, fingerprint: &str) -> Result<Option<Self>, StoreError> {
        store
            .load(fingerprint)?
            .map(|blob| serde_json::from_slice(&blob).map_err(StoreError::from))
            .transpose()
    }

    /// Rebuild tables and commonness, and hand the first-guess cache to `engine`
    ///
    /// # Errors
    /// Returns `RestoreError` if the bundle belongs to another dictionary or
    /// any snapshot is malformed. The engine is untouched on error.
    pub fn restore(
        self,
        dictionary: &Arc<Dictionary>,
        engine: &mut EntropyEngine,
    ) -> Result<RestoredSession, RestoreError> {
        if self.fingerprint != dictionary.fingerprint() {
            return Err(RestoreError::Fingerprint {
                expected: dictionary.fingerprint().to_string(),
                found: self.fingerprint,
            });
        }

        let tables = FrequencyTables::from_snapshot(&self.tables)?;
        let commonness = Commonness::from_snapshot(self.commonness, dictionary.len())?;

        let first_guess_ready = match self.first_guess {
            Some(snapshot) => {
                engine.restore(snapshot, Arc::clone(dictionary), commonness.clone())?;
                true
            }
            None => false,
        };

        info!(
            fingerprint = %self.fingerprint,
            first_guess_ready,
            "Session restored from cache"
        );
        Ok(RestoredSession {
            tables,
            commonness,
            first_guess_ready,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::{ScoringWeights, compute_commonness};
    use crate::persist::MemoryStore;
    use crate::solver::EngineConfig;

    fn build() -> (Arc<Dictionary>, FrequencyTables, Commonness, EntropyEngine) {
        let dict = Arc::new(Dictionary::new(["crane", "slate", "trace", "speed"]).unwrap());
        let tables = FrequencyTables::build(&dict);
        let commonness = compute_commonness(&dict, &tables, &ScoringWeights::default());

        let mut engine = EntropyEngine::new(EngineConfig::default());
        let pending = engine.init(Arc::clone(&dict), commonness.clone()).unwrap();
        engine.finish_init(pending.wait()).unwrap();
        (dict, tables, commonness, engine)
    }

    #[test]
    fn saved_session_restores_into_fresh_engine() {
        let (dict, tables, commonness, engine) = build();
        let mut store = MemoryStore::new();
        SessionCache::capture(&dict, &tables, &commonness, &engine)
            .save(&mut store)
            .unwrap();

        let cache = SessionCache::load(&store, dict.fingerprint())
            .unwrap()
            .unwrap();
        let mut fresh = EntropyEngine::new(EngineConfig::default());
        let restored = cache.restore(&dict, &mut fresh).unwrap();

        assert_eq!(restored.tables, tables);
        assert_eq!(restored.commonness.scores.len(), dict.len());
        assert!(restored.first_guess_ready);

        let words = |engine: &EntropyEngine| -> Vec<String> {
            engine
                .first_guess()
                .best_info
                .into_iter()
                .map(|guess| guess.word)
                .collect()
        };
        assert_eq!(words(&fresh), words(&engine));
    }

    #[test]
    fn unknown_fingerprint_loads_nothing() {
        let store = MemoryStore::new();
        assert!(SessionCache::load(&store, "0123456789abcdef").unwrap().is_none());
    }

    #[test]
    fn other_dictionary_is_rejected() {
        let (dict, tables, commonness, engine) = build();
        let cache = SessionCache::capture(&dict, &tables, &commonness, &engine);

        let other = Arc::new(Dictionary::new(["fuzzy", "jazzy"]).unwrap());
        let mut fresh = EntropyEngine::new(EngineConfig::default());
        assert!(matches!(
            cache.restore(&other, &mut fresh),
            Err(RestoreError::Fingerprint { .. })
        ));
        assert!(!fresh.is_ready());
    }

    #[test]
    fn corrupt_blob_is_a_store_error() {
        let mut store = MemoryStore::new();
        store.save("feed", b"not json").unwrap();
        assert!(matches!(
            SessionCache::load(&store, "feed"),
            Err(StoreError::Json(_))
        ));
    }
}
