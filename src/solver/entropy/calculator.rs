//! Shannon entropy of feedback partitions
//!
//! A guess splits the remaining candidates into up to 243 buckets, one per
//! feedback pattern. Its entropy is the expected information, in bits, of
//! learning which bucket the secret falls in.

use crate::core::{Encoded, PATTERN_COUNT, Pattern};

/// Per-pattern bucket sizes for one guess
pub type Buckets = [u32; PATTERN_COUNT];

/// Partition metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Largest bucket (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Count how many secrets fall into each feedback pattern for `guess`
#[must_use]
pub fn bucket_counts<'a, I>(guess: &Encoded, secrets: I) -> Buckets
where
    I: IntoIterator<Item = &'a Encoded>,
{
    let mut buckets = [0; PATTERN_COUNT];
    for secret in secrets {
        buckets[usize::from(Pattern::from_codes(guess, secret).value())] += 1;
    }
    buckets
}

/// Shannon entropy of a bucket distribution
///
/// H = Σ (c/n) · log₂(n/c) over nonempty buckets, defined as 0 when n ≤ 1.
///
/// # Examples
/// ```
/// use wordle_assist::core::PATTERN_COUNT;
/// use wordle_assist::solver::entropy::shannon_entropy;
///
/// let mut uniform = [0; PATTERN_COUNT];
/// uniform[..4].copy_from_slice(&[25, 25, 25, 25]);
/// assert!((shannon_entropy(&uniform) - 2.0).abs() < 1e-9);
///
/// let mut single = [0; PATTERN_COUNT];
/// single[7] = 1;
/// assert_eq!(shannon_entropy(&single), 0.0);
/// ```
#[must_use]
pub fn shannon_entropy(buckets: &[u32]) -> f64 {
    let n: u32 = buckets.iter().sum();
    if n <= 1 {
        return 0.0;
    }

    let n = f64::from(n);
    let log_n = n.log2();
    buckets
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let count = f64::from(count);
            (count / n) * (log_n - count.log2())
        })
        .sum()
}

/// Entropy of `guess` against the `remaining` indices of `encoded`
///
/// # Examples
/// ```
/// use wordle_assist::core::Dictionary;
/// use wordle_assist::solver::entropy::compute_entropy;
///
/// let dict = Dictionary::new(["slate", "zzzzz", "crane"]).unwrap();
/// let encoded = dict.encoded();
///
/// // SLATE splits {slate, zzzzz} perfectly: one bit
/// assert!((compute_entropy(&encoded[0], &encoded, &[0, 1]) - 1.0).abs() < 1e-9);
/// assert_eq!(compute_entropy(&encoded[0], &encoded, &[2]), 0.0);
/// ```
#[must_use]
pub fn compute_entropy(guess: &Encoded, encoded: &[Encoded], remaining: &[usize]) -> f64 {
    if remaining.len() <= 1 {
        return 0.0;
    }
    shannon_entropy(&bucket_counts(guess, remaining.iter().map(|&i| &encoded[i])))
}

/// Entropy, expected survivors, and worst case for one guess
#[must_use]
pub fn calculate_metrics(guess: &Encoded, encoded: &[Encoded], remaining: &[usize]) -> GuessMetrics {
    if remaining.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let buckets = bucket_counts(guess, remaining.iter().map(|&i| &encoded[i]));
    let total = remaining.len() as f64;

    let expected_remaining = buckets
        .iter()
        .map(|&count| {
            let count = f64::from(count);
            count * count / total
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&buckets),
        expected_remaining,
        max_partition: buckets.iter().copied().max().unwrap_or(0) as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;

    fn buckets(sizes: &[u32]) -> Buckets {
        let mut buckets = [0; PATTERN_COUNT];
        buckets[..sizes.len()].copy_from_slice(sizes);
        buckets
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        let entropy = shannon_entropy(&buckets(&[1, 1, 1, 1]));
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        assert!(shannon_entropy(&buckets(&[10])).abs() < f64::EPSILON);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let uniform = shannon_entropy(&buckets(&[25, 25, 25, 25]));
        let skewed = shannon_entropy(&buckets(&[97, 1, 1, 1]));
        assert!(uniform > skewed);
    }

    #[test]
    fn shannon_entropy_bounds() {
        let entropy = shannon_entropy(&buckets(&[10, 20, 30]));
        assert!(entropy >= 0.0);
        assert!(entropy <= 3f64.log2());
    }

    #[test]
    fn entropy_zero_for_at_most_one_candidate() {
        let dict = Dictionary::new(["crane", "slate"]).unwrap();
        let encoded = dict.encoded();

        assert!(compute_entropy(&encoded[0], &encoded, &[]).abs() < f64::EPSILON);
        assert!(compute_entropy(&encoded[0], &encoded, &[1]).abs() < f64::EPSILON);
        assert!(shannon_entropy(&[0; PATTERN_COUNT]).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_real_words() {
        let dict = Dictionary::new(["crane", "slate", "irate", "trace", "raise"]).unwrap();
        let encoded = dict.encoded();

        let entropy = compute_entropy(&encoded[0], &encoded, &[1, 2, 3, 4]);
        assert!(entropy > 1.0 && entropy <= 2.0);
    }

    #[test]
    fn all_same_pattern_has_no_information() {
        let dict = Dictionary::new(["zzzzz", "aaaaa", "bbbbb", "ccccc"]).unwrap();
        let encoded = dict.encoded();

        assert!(compute_entropy(&encoded[0], &encoded, &[1, 2, 3]).abs() < 0.001);
    }

    #[test]
    fn metrics_describe_partition() {
        let dict = Dictionary::new(["slate", "zzzzz", "yyyyy", "crane"]).unwrap();
        let encoded = dict.encoded();

        // SLATE against {slate, zzzzz, yyyyy}: buckets of 1 and 2
        let metrics = calculate_metrics(&encoded[0], &encoded, &[0, 1, 2]);
        assert_eq!(metrics.max_partition, 2);
        assert!((metrics.expected_remaining - 5.0 / 3.0).abs() < 1e-9);
        assert!(metrics.entropy > 0.9 && metrics.entropy < 1.0);

        let empty = calculate_metrics(&encoded[0], &encoded, &[]);
        assert_eq!(empty.max_partition, 0);
    }

    #[test]
    fn bucket_counts_cover_every_secret() {
        let dict = Dictionary::new(["crane", "slate", "crate", "irate"]).unwrap();
        let encoded = dict.encoded();
        let counts = bucket_counts(&encoded[0], &encoded);

        assert_eq!(counts.iter().sum::<u32>(), 4);
        assert_eq!(counts[usize::from(Pattern::PERFECT.value())], 1);
    }
}
