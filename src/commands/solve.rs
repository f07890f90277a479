//! Word solving command
//!
//! Plays the assistant's own recommendations against a known target and
//! returns the solution path.

use super::assistant::Assistant;
use crate::core::{BoardState, DEFAULT_ROWS, Pattern, Word};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: DEFAULT_ROWS,
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific word by following the assistant's picks
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - The target is not in the dictionary
/// - The assistant runs out of candidates
pub fn solve_word(assistant: &mut Assistant, config: SolveConfig) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;
    if assistant.dictionary().position(target.text()).is_none() {
        return Err(format!("Word '{}' not in word list", target.text()));
    }

    let tie_epsilon = assistant.engine().config().tie_epsilon;
    let mut board = BoardState::new(config.max_guesses);
    let mut guesses: Vec<GuessStep> = Vec::new();
    let mut candidates_before = assistant.dictionary().len();

    while board.guesses_left() > 0 {
        let suggestion = assistant.suggest(&board);
        let pick = suggestion
            .pick(tie_epsilon)
            .ok_or_else(|| "No candidates remaining".to_string())?;

        let guess = assistant.dictionary()[pick.index].clone();
        let (entropy, expected_remaining) = if candidates_before > 1 {
            (
                Some(pick.entropy),
                Some(candidates_before as f64 / pick.entropy.exp2()),
            )
        } else {
            (None, None)
        };

        let pattern = Pattern::calculate(&guess, &target);
        board.push(&guess, pattern);
        let candidates_after = assistant.filter(&board).candidates.len();

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after,
            entropy,
            expected_remaining,
        });
        candidates_before = candidates_after;

        if pattern.is_perfect() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}
