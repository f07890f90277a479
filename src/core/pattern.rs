//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::board::TileStatus;
use super::word::{ALPHABET, Encoded, WORD_LEN, Word};

/// Number of distinct feedback patterns (3^5)
pub const PATTERN_COUNT: usize = 243;

const POWERS_OF_3: [u8; WORD_LEN] = [1, 3, 9, 27, 81];

/// Feedback pattern for a guess
///
/// Represents the tri-state feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self(242);

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Calculate the pattern when `guess` is played against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &secret);
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.value(), 180);
    /// ```
    #[inline]
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        Self::from_codes(guess.codes(), secret.codes())
    }

    /// Calculate the pattern for two encoded words
    ///
    /// All exact matches are resolved before any present-elsewhere
    /// assignment, so a repeated guess letter is only marked present as many
    /// times as the secret still has unmatched copies of it.
    #[must_use]
    pub fn from_codes(guess: &Encoded, secret: &Encoded) -> Self {
        let mut remaining = [0u8; ALPHABET];
        for &code in secret {
            remaining[code as usize] += 1;
        }

        let mut digits = [0u8; WORD_LEN];

        // Allow: Index needed to access guess[i], secret[i], and set digits[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess[i] == secret[i] {
                digits[i] = 2;
                remaining[guess[i] as usize] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if digits[i] == 0 {
                let slot = &mut remaining[guess[i] as usize];
                if *slot > 0 {
                    digits[i] = 1;
                    *slot -= 1;
                }
            }
        }

        let mut value = 0u8;
        for (digit, power) in digits.iter().zip(POWERS_OF_3) {
            value += digit * power;
        }

        Self(value)
    }

    /// Build a pattern from per-tile statuses
    #[must_use]
    pub fn from_statuses(statuses: [TileStatus; WORD_LEN]) -> Self {
        let value = statuses
            .iter()
            .zip(POWERS_OF_3)
            .map(|(status, power)| status.digit() * power)
            .sum();
        Self(value)
    }

    /// Decode into per-tile statuses
    #[must_use]
    pub fn statuses(self) -> [TileStatus; WORD_LEN] {
        let mut out = [TileStatus::Absent; WORD_LEN];
        let mut val = self.0;
        for slot in &mut out {
            *slot = TileStatus::from_digit(val % 3);
            val /= 3;
        }
        out
    }

    /// Parse a pattern from a string like "GY-G-" or "🟩🟨⬜🟩⬜"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LEN {
            return None;
        }

        let mut statuses = [TileStatus::Absent; WORD_LEN];
        for (slot, ch) in statuses.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => TileStatus::Correct,
                'Y' | 'y' | '🟨' => TileStatus::Present,
                '-' | '_' | '⬜' => TileStatus::Absent,
                _ => return None,
            };
        }

        Some(Self::from_statuses(statuses))
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.statuses()
            .iter()
            .map(|status| match status {
                TileStatus::Correct => '🟩',
                TileStatus::Present => '🟨',
                TileStatus::Absent => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
