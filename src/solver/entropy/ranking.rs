//! Guess ranking by entropy and by entropy/commonness blend
//!
//! Entropy is evaluated in parallel over the guess pool; ordering is fully
//! deterministic regardless of thread scheduling.

use super::calculator::compute_entropy;
use crate::core::{Dictionary, Encoded};
use crate::frequency::Commonness;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One scored guess
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedGuess {
    /// Dictionary index
    pub index: usize,
    pub word: String,
    /// Expected information in bits
    pub entropy: f64,
    pub commonness: f64,
    /// Score the list is ordered by
    pub blended: f64,
}

/// Shared inputs for ranking against one dictionary
#[derive(Debug, Clone, Copy)]
pub struct Ranker<'a> {
    pub dictionary: &'a Dictionary,
    pub encoded: &'a [Encoded],
    pub commonness: &'a Commonness,
    pub tie_epsilon: f64,
}

impl Ranker<'_> {
    /// Rank every word of `pool` by entropy against `remaining`
    ///
    /// Entropies within the tie tolerance of each other are ordered by
    /// descending commonness. An empty `remaining` yields an empty list.
    #[must_use]
    pub fn by_entropy(&self, pool: &[usize], remaining: &[usize]) -> Vec<RankedGuess> {
        if remaining.is_empty() {
            return Vec::new();
        }

        let entropies: Vec<(usize, f64)> = pool
            .par_iter()
            .map(|&guess| {
                (
                    guess,
                    compute_entropy(&self.encoded[guess], self.encoded, remaining),
                )
            })
            .collect();

        self.order_entropies(entropies)
    }

    /// Order precomputed `(index, entropy)` pairs the way [`Ranker::by_entropy`] does
    #[must_use]
    pub fn order_entropies<I>(&self, entropies: I) -> Vec<RankedGuess>
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let mut ranked: Vec<RankedGuess> = entropies
            .into_iter()
            .map(|(index, entropy)| self.entry(index, entropy, entropy))
            .collect();

        sort_with_ties(&mut ranked, self.tie_epsilon);
        ranked
    }

    /// Rank candidates by `(1 - urgency) * entropy + urgency * commonness`
    ///
    /// Both metrics are normalized by their maximum over `candidates`. At
    /// full urgency entropy is not computed at all.
    #[must_use]
    pub fn by_blend(&self, candidates: &[usize], urgency: f64) -> Vec<RankedGuess> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let entropies: Vec<f64> = if urgency >= 1.0 {
            vec![0.0; candidates.len()]
        } else {
            candidates
                .par_iter()
                .map(|&guess| compute_entropy(&self.encoded[guess], self.encoded, candidates))
                .collect()
        };

        let max_entropy = nonzero_or_one(entropies.iter().copied().fold(0.0, f64::max));
        let max_commonness = nonzero_or_one(
            candidates
                .iter()
                .map(|&i| self.commonness.score(i))
                .fold(0.0, f64::max),
        );

        let mut ranked: Vec<RankedGuess> = candidates
            .iter()
            .zip(entropies)
            .map(|(&index, entropy)| {
                let commonness = self.commonness.score(index);
                let blended = (1.0 - urgency) * (entropy / max_entropy)
                    + urgency * (commonness / max_commonness);
                self.entry(index, entropy, blended)
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.blended
                .total_cmp(&a.blended)
                .then_with(|| b.commonness.total_cmp(&a.commonness))
                .then_with(|| a.index.cmp(&b.index))
        });
        ranked
    }

    fn entry(&self, index: usize, entropy: f64, blended: f64) -> RankedGuess {
        RankedGuess {
            index,
            word: self.dictionary[index].text().to_string(),
            entropy,
            commonness: self.commonness.score(index),
            blended,
        }
    }
}

fn nonzero_or_one(max: f64) -> f64 {
    if max > 0.0 { max } else { 1.0 }
}

/// Sort by descending entropy, ordering near-ties by commonness
///
/// Runs of entries within `epsilon` of the run's first (highest) entropy are
/// treated as one tie group, which keeps the order total.
fn sort_with_ties(ranked: &mut [RankedGuess], epsilon: f64) {
    ranked.sort_by(|a, b| {
        b.entropy
            .total_cmp(&a.entropy)
            .then_with(|| a.index.cmp(&b.index))
    });

    let by_commonness = |a: &RankedGuess, b: &RankedGuess| -> Ordering {
        b.commonness
            .total_cmp(&a.commonness)
            .then_with(|| a.index.cmp(&b.index))
    };

    let mut start = 0;
    while start < ranked.len() {
        let anchor = ranked[start].entropy;
        let run = ranked[start..]
            .iter()
            .take_while(|guess| anchor - guess.entropy < epsilon)
            .count()
            .max(1);
        ranked[start..start + run].sort_by(by_commonness);
        start += run;
    }
}
