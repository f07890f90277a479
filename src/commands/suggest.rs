//! Suggest command
//!
//! Rebuilds a board from `WORD:PATTERN` arguments and asks the assistant for
//! the next guess.

use super::assistant::{Assistant, Suggestion};
use crate::core::BoardState;

/// Split a `WORD:PATTERN` argument such as `crane:-Y-G-`
///
/// # Errors
/// Returns a message if the separator is missing.
///
/// # Examples
/// ```
/// use wordle_assist::commands::suggest::parse_guess_arg;
///
/// assert_eq!(parse_guess_arg("crane:-Y-G-").unwrap(), ("crane", "-Y-G-"));
/// assert!(parse_guess_arg("crane").is_err());
/// ```
pub fn parse_guess_arg(arg: &str) -> Result<(&str, &str), String> {
    arg.split_once(':')
        .map(|(word, pattern)| (word.trim(), pattern.trim()))
        .ok_or_else(|| format!("Expected WORD:PATTERN, got '{arg}'"))
}

/// Build the board for `guesses` and rank the next guess
///
/// # Errors
/// Returns an error if an argument is malformed, the board has more guesses
/// than rows, or `rows` is zero.
pub fn suggest(
    assistant: &mut Assistant,
    guesses: &[String],
    rows: usize,
) -> Result<Suggestion, String> {
    if rows == 0 {
        return Err("Board must have at least one row".to_string());
    }
    if guesses.len() > rows {
        return Err(format!("{} guesses do not fit on a {rows}-row board", guesses.len()));
    }

    let entries = guesses
        .iter()
        .map(|arg| parse_guess_arg(arg))
        .collect::<Result<Vec<_>, _>>()?;
    let board = BoardState::from_patterns(&entries, rows)?;

    Ok(assistant.suggest(&board))
}
