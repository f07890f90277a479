//! Formatting utilities for terminal output

use crate::constraints::GuessDelta;
use crate::core::{Pattern, TileStatus};
use colored::{ColoredString, Colorize};

/// Render a guess as colored letter tiles
#[must_use]
pub fn colored_tiles(word: &str, pattern: Pattern) -> String {
    word.chars()
        .zip(pattern.statuses())
        .map(|(letter, status)| {
            let tile = format!(" {} ", letter.to_ascii_uppercase());
            let tile: ColoredString = match status {
                TileStatus::Correct => tile.black().on_green(),
                TileStatus::Present => tile.black().on_yellow(),
                TileStatus::Absent => tile.white().on_bright_black(),
            };
            tile.to_string()
        })
        .collect()
}

/// Emoji grid of the patterns, one row per guess
#[must_use]
pub fn share_grid(patterns: impl IntoIterator<Item = Pattern>) -> String {
    patterns
        .into_iter()
        .map(Pattern::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = ((ratio * width as f64) as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy bar scaled to the most bits `total` candidates can yield
#[must_use]
pub fn entropy_bar(entropy: f64, total: usize, width: usize) -> String {
    create_progress_bar(entropy, (total.max(2) as f64).log2(), width)
}

/// One-line summary of what a guess taught
///
/// # Examples
/// ```
/// use wordle_assist::constraints::GuessDelta;
/// use wordle_assist::output::formatters::format_delta;
///
/// let delta = GuessDelta {
///     word: "crane".to_string(),
///     new_greens: vec![('r', 1)],
///     new_yellows: vec![],
///     new_grays: vec!['n'],
/// };
/// assert_eq!(format_delta(&delta), "CRANE: green R@2; gray N");
/// ```
#[must_use]
pub fn format_delta(delta: &GuessDelta) -> String {
    let placed = |pairs: &[(char, usize)]| -> String {
        pairs
            .iter()
            .map(|&(letter, position)| format!("{}@{}", letter.to_ascii_uppercase(), position + 1))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut parts = Vec::new();
    if !delta.new_greens.is_empty() {
        parts.push(format!("green {}", placed(&delta.new_greens)));
    }
    if !delta.new_yellows.is_empty() {
        parts.push(format!("yellow {}", placed(&delta.new_yellows)));
    }
    if !delta.new_grays.is_empty() {
        let grays: String = delta.new_grays.iter().map(char::to_ascii_uppercase).collect();
        parts.push(format!("gray {grays}"));
    }
    if parts.is_empty() {
        parts.push("nothing new".to_string());
    }

    format!("{}: {}", delta.word.to_uppercase(), parts.join("; "))
}
