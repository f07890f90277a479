//! Off-thread first-guess initialization
//!
//! The full self-pairing pass (every word against every word) runs on a
//! dedicated worker thread that fans out over rayon. The worker takes sole
//! ownership of a flat encoded-word buffer and replies exactly once with a
//! per-word entropy array or an error. There is no cancellation: a caller
//! that starts over simply ignores outcomes from older generations.

use super::entropy::{bucket_counts, shannon_entropy};
use crate::core::{Encoded, WORD_LEN};
use rayon::prelude::*;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Failure of the one-time initialization pass
#[derive(Debug)]
pub enum InitError {
    /// The worker thread could not be started
    Spawn(std::io::Error),
    /// The pass panicked inside the worker
    WorkerPanicked,
    /// The worker went away without replying
    Disconnected,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(e) => write!(f, "Failed to start entropy worker: {e}"),
            Self::WorkerPanicked => write!(f, "Entropy worker panicked"),
            Self::Disconnected => write!(f, "Entropy worker exited without a result"),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

/// The single message a worker delivers
#[derive(Debug)]
pub struct InitOutcome {
    /// Generation of the `init` call that produced this outcome
    pub generation: u64,
    /// Entropy of each word against the whole dictionary, by index
    pub result: Result<Vec<f64>, InitError>,
    pub elapsed: Duration,
}

/// Handle to an in-flight initialization
#[derive(Debug)]
pub struct PendingInit {
    generation: u64,
    receiver: Receiver<InitOutcome>,
    delivered: bool,
}

impl PendingInit {
    /// Start the pass on a new worker thread, consuming `flat`
    ///
    /// `flat` holds `WORD_LEN` letter codes per word, back to back.
    pub(crate) fn spawn(generation: u64, flat: Vec<u8>) -> Result<Self, InitError> {
        let (sender, receiver) = mpsc::channel();

        thread::Builder::new()
            .name(format!("entropy-init-{generation}"))
            .spawn(move || {
                let started = Instant::now();
                let result = panic::catch_unwind(AssertUnwindSafe(|| self_pairing_entropies(&flat)))
                    .map_err(|_| InitError::WorkerPanicked);

                sender
                    .send(InitOutcome {
                        generation,
                        result,
                        elapsed: started.elapsed(),
                    })
                    .ok();
            })
            .map_err(InitError::Spawn)?;

        Ok(Self {
            generation,
            receiver,
            delivered: false,
        })
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Poll for the outcome without blocking
    ///
    /// Returns `Some` exactly once; later calls return `None`.
    pub fn try_take(&mut self) -> Option<InitOutcome> {
        if self.delivered {
            return None;
        }
        let outcome = match self.receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => self.disconnected(),
        };
        self.delivered = true;
        Some(outcome)
    }

    /// Block until the outcome arrives
    #[must_use]
    pub fn wait(self) -> InitOutcome {
        self.receiver
            .recv()
            .unwrap_or_else(|_| self.disconnected())
    }

    fn disconnected(&self) -> InitOutcome {
        InitOutcome {
            generation: self.generation,
            result: Err(InitError::Disconnected),
            elapsed: Duration::ZERO,
        }
    }
}

/// Entropy of every word as a guess against every word as a secret
#[must_use]
pub fn self_pairing_entropies(flat: &[u8]) -> Vec<f64> {
    let words: Vec<Encoded> = flat
        .chunks_exact(WORD_LEN)
        .map(|chunk| {
            let mut codes = [0; WORD_LEN];
            codes.copy_from_slice(chunk);
            codes
        })
        .collect();

    words
        .par_iter()
        .map(|guess| shannon_entropy(&bucket_counts(guess, &words)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::solver::entropy::compute_entropy;

    fn flat(dict: &Dictionary) -> Vec<u8> {
        dict.encoded().iter().flatten().copied().collect()
    }

    #[test]
    fn self_pairing_matches_direct_entropy() {
        let dict = Dictionary::new(["crane", "slate", "speed", "erupt", "jazzy"]).unwrap();
        let encoded = dict.encoded();
        let all = dict.all_indices();

        let entropies = self_pairing_entropies(&flat(&dict));
        assert_eq!(entropies.len(), dict.len());
        for (guess, &entropy) in entropies.iter().enumerate() {
            let direct = compute_entropy(&encoded[guess], &encoded, &all);
            assert!((entropy - direct).abs() < 1e-12);
        }
    }

    #[test]
    fn worker_replies_once() {
        let dict = Dictionary::new(["crane", "slate", "trace"]).unwrap();
        let mut pending = PendingInit::spawn(7, flat(&dict)).unwrap();
        assert_eq!(pending.generation(), 7);

        let outcome = loop {
            if let Some(outcome) = pending.try_take() {
                break outcome;
            }
            thread::yield_now();
        };

        assert_eq!(outcome.generation, 7);
        assert_eq!(outcome.result.unwrap().len(), 3);
        assert!(pending.try_take().is_none());
    }

    #[test]
    fn wait_blocks_for_result() {
        let dict = Dictionary::new(["crane", "slate"]).unwrap();
        let outcome = PendingInit::spawn(1, flat(&dict)).unwrap().wait();

        let entropies = outcome.result.unwrap();
        assert!(entropies.iter().all(|&e| (e - 1.0).abs() < 1e-12));
    }
}
