//! Entropy-based guess evaluation
//!
//! Implements Shannon entropy over feedback-pattern partitions and the two
//! ranking tracks built on it.

mod calculator;
mod ranking;

pub use calculator::{
    Buckets, GuessMetrics, bucket_counts, calculate_metrics, compute_entropy, shannon_entropy,
};
pub use ranking::{RankedGuess, Ranker};
