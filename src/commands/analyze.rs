//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word against
//! the whole dictionary.

use super::assistant::Assistant;
use crate::core::Word;
use crate::solver::entropy::calculate_metrics;

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    pub in_dictionary: bool,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub commonness: Option<f64>,
    pub total_candidates: usize,
}

/// Analyze the entropy of a word against every dictionary word
///
/// Any valid word can be analyzed; commonness is only known for dictionary
/// words.
///
/// # Errors
///
/// Returns an error if the word is not 5 ASCII letters.
pub fn analyze_word(assistant: &Assistant, word: &str) -> Result<AnalysisResult, String> {
    let word = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;
    let dictionary = assistant.dictionary();

    let metrics = calculate_metrics(
        word.codes(),
        &dictionary.encoded(),
        &dictionary.all_indices(),
    );
    let index = dictionary.position(word.text());

    Ok(AnalysisResult {
        word: word.text().to_string(),
        in_dictionary: index.is_some(),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        commonness: index.map(|i| assistant.commonness().score(i)),
        total_candidates: dictionary.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::persist::MemoryStore;
    use crate::solver::EngineConfig;

    fn assistant() -> Assistant {
        let dict =
            Dictionary::new(["crane", "slate", "trace", "speed", "erupt", "jazzy", "hotel"]).unwrap();
        Assistant::start(dict, EngineConfig::default(), &mut MemoryStore::new()).unwrap()
    }

    #[test]
    fn analyze_dictionary_word() {
        let assistant = assistant();
        let result = analyze_word(&assistant, "CRANE").unwrap();

        assert_eq!(result.word, "crane");
        assert!(result.in_dictionary);
        assert!(result.commonness.is_some());
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(result.total_candidates, 7);
    }

    #[test]
    fn analyze_outside_word() {
        let assistant = assistant();
        let result = analyze_word(&assistant, "zzzzz").unwrap();

        assert!(!result.in_dictionary);
        assert!(result.commonness.is_none());
    }

    #[test]
    fn analyze_invalid_word() {
        let assistant = assistant();
        assert!(analyze_word(&assistant, "abc").is_err());
    }

    #[test]
    fn entropy_properties() {
        let assistant = assistant();
        let result = analyze_word(&assistant, "slate").unwrap();

        // Entropy should be bounded
        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= (result.total_candidates as f64).log2() + 1e-12);

        // Expected remaining should be sensible
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= result.total_candidates as f64);
        assert!(result.max_partition >= 1);
    }
}
