//! Benchmark command
//!
//! Self-plays the assistant against a random sample of dictionary words.

use super::assistant::Assistant;
use super::solve::{SolveConfig, solve_word};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub seed: u64,
    pub total_words: usize,
    pub solved: usize,
    pub failed_words: Vec<String>,
    /// Guesses used by solved games only
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct dictionary indices, reproducibly for a given seed
///
/// # Examples
/// ```
/// use wordle_assist::commands::benchmark::sample_targets;
///
/// let sample = sample_targets(100, 10, 42);
/// assert_eq!(sample.len(), 10);
/// assert_eq!(sample, sample_targets(100, 10, 42));
/// ```
#[must_use]
pub fn sample_targets(dictionary_len: usize, count: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    rand::seq::index::sample(&mut rng, dictionary_len, count.min(dictionary_len)).into_vec()
}

/// Solve a random sample of `count` dictionary words
///
/// # Errors
///
/// Returns an error if a game hits an inconsistent board, which means the
/// filter dropped the target.
pub fn run_benchmark(
    assistant: &mut Assistant,
    count: usize,
    seed: u64,
    show_progress: bool,
) -> Result<BenchmarkResult, String> {
    let targets: Vec<String> = sample_targets(assistant.dictionary().len(), count, seed)
        .into_iter()
        .map(|i| assistant.dictionary()[i].text().to_string())
        .collect();

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut solved = 0;
    let mut failed_words = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for target in targets {
        pb.set_message(target.clone());
        let result = solve_word(assistant, SolveConfig::new(target.clone()))?;
        let guesses = result.guesses.len();
        debug!(%target, guesses, success = result.success, "Benchmark game finished");

        if result.success {
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failed_words.push(target);
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = solved + failed_words.len();

    Ok(BenchmarkResult {
        seed,
        total_words,
        solved,
        failed_words,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
