//! Constraint derivation from observed feedback
//!
//! Each guess is tallied first and only then turned into bounds, so that a
//! letter shown both green/yellow and gray in the same row yields an exact
//! count instead of a contradiction.

use super::letter::{LetterTable, PositionConstraint, PositionSet};
use crate::core::{GuessRecord, TileStatus, WORD_LEN, code_letter};

/// What one guess added relative to everything known before it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessDelta {
    pub word: String,
    /// Newly confirmed `(letter, position)` pairs
    pub new_greens: Vec<(char, usize)>,
    /// Newly observed misplaced `(letter, position)` pairs
    pub new_yellows: Vec<(char, usize)>,
    /// Letters newly proven absent
    pub new_grays: Vec<char>,
}

#[derive(Default, Clone, Copy)]
struct Tally {
    green: PositionSet,
    yellow: PositionSet,
    gray: PositionSet,
}

/// Derive per-letter constraints implied by a single validated guess
#[must_use]
pub fn derive_guess(guess: &GuessRecord) -> LetterTable {
    let mut tallies: [Option<Tally>; 26] = [None; 26];

    for tile in &guess.tiles {
        let code = tile.letter.to_ascii_lowercase() as u8 - b'a';
        let tally = tallies[code as usize].get_or_insert_with(Tally::default);
        match tile.status {
            TileStatus::Correct => tally.green = tally.green.with(tile.position),
            TileStatus::Present => tally.yellow = tally.yellow.with(tile.position),
            TileStatus::Absent => tally.gray = tally.gray.with(tile.position),
        }
    }

    let mut table = LetterTable::default();
    for (code, tally) in tallies.iter().enumerate() {
        let Some(tally) = tally else { continue };
        let min_count = (tally.green.len() + tally.yellow.len()) as u8;

        let constraint = table.entry(code as u8);
        constraint.green = tally.green;
        constraint.yellow = tally.yellow;
        constraint.gray = tally.gray;
        constraint.min_count = min_count;
        constraint.max_count = (!tally.gray.is_empty()).then_some(min_count);
    }
    table
}

/// Merge guesses in row order, recording each guess's delta
///
/// The unified table is snapshotted immediately before each merge, so deltas
/// depend on order even though the final table does not.
#[must_use]
pub fn merge_guesses(guesses: &[GuessRecord]) -> (LetterTable, Vec<GuessDelta>) {
    let mut unified = LetterTable::default();
    let mut deltas = Vec::with_capacity(guesses.len());

    for guess in guesses {
        let derived = derive_guess(guess);
        let before = unified;
        deltas.push(delta(&guess.word, &derived, &before));
        unified.merge(&derived);
    }

    (unified, deltas)
}

fn delta(word: &str, derived: &LetterTable, before: &LetterTable) -> GuessDelta {
    let mut out = GuessDelta {
        word: word.to_string(),
        new_greens: Vec::new(),
        new_yellows: Vec::new(),
        new_grays: Vec::new(),
    };

    for (code, constraint) in derived.iter() {
        let letter = code_letter(code);
        let prior = before.get(code);

        let known_green = prior.map_or(PositionSet::EMPTY, |p| p.green);
        let known_yellow = prior.map_or(PositionSet::EMPTY, |p| p.yellow);

        out.new_greens.extend(
            constraint
                .green
                .difference(known_green)
                .iter()
                .map(|p| (letter, p)),
        );
        out.new_yellows.extend(
            constraint
                .yellow
                .difference(known_yellow)
                .iter()
                .map(|p| (letter, p)),
        );

        if constraint.is_absent() && !prior.is_some_and(|p| p.is_absent()) {
            out.new_grays.push(letter);
        }
    }

    out
}

/// Project per-letter constraints onto the five positions
///
/// Greens become required letters. Yellow and gray positions become
/// exclusions unless the same letter is required there, and letters with an
/// upper bound of zero are excluded from every position that does not
/// require them.
///
/// A gray tile for a letter that is green or yellow elsewhere in the row still
/// rules that letter out at the gray position. Two different greens at one
/// position leave it admitting no letter.
#[must_use]
pub fn project_positions(letters: &LetterTable) -> [PositionConstraint; WORD_LEN] {
    let mut positions = [PositionConstraint::default(); WORD_LEN];

    for (code, constraint) in letters.iter() {
        for p in constraint.green.iter() {
            let position = &mut positions[p];
            match position.required {
                Some(existing) if existing != code => {
                    position.excluded.insert(existing);
                    position.excluded.insert(code);
                }
                _ => position.required = Some(code),
            }
        }
    }

    for (code, constraint) in letters.iter() {
        for p in constraint.yellow.union(constraint.gray).iter() {
            if positions[p].required != Some(code) {
                positions[p].excluded.insert(code);
            }
        }

        if constraint.is_absent() {
            for position in &mut positions {
                if position.required != Some(code) {
                    position.excluded.insert(code);
                }
            }
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardState, Pattern, TileStatus, Word};

    fn guesses(entries: &[(&str, &str)]) -> Vec<GuessRecord> {
        BoardState::from_patterns(entries, 6).unwrap().guesses
    }

    fn code(letter: char) -> u8 {
        letter as u8 - b'a'
    }

    #[test]
    fn green_and_gray_same_letter_gives_exact_count() {
        // SPEED with first E green, second E gray: exactly one E
        let table = derive_guess(&guesses(&[("speed", "--G--")])[0]);
        let e = table.get(code('e')).unwrap();

        assert_eq!(e.min_count, 1);
        assert_eq!(e.max_count, Some(1));
        assert!(e.green.contains(2));
    }

    #[test]
    fn yellow_without_gray_is_unbounded() {
        let table = derive_guess(&guesses(&[("crane", "-Y---")])[0]);
        let r = table.get(code('r')).unwrap();

        assert_eq!(r.min_count, 1);
        assert_eq!(r.max_count, None);
        assert!(r.yellow.contains(1));
        assert!(table.get(code('c')).unwrap().is_absent());
    }

    fn play(secret: &str, words: &[&str]) -> Vec<GuessRecord> {
        let secret = Word::new(secret).unwrap();
        let mut board = BoardState::default();
        for &word in words {
            let guess = Word::new(word).unwrap();
            board.push(&guess, Pattern::calculate(&guess, &secret));
        }
        board.guesses
    }

    #[test]
    fn repeated_letter_converges_on_exact_count() {
        // HOTEL has one E. CRANE shows it present; GEESE shows one E present
        // and the extra Es absent, pinning the count.
        let rows = play("hotel", &["crane", "geese"]);

        let (after_first, _) = merge_guesses(&rows[..1]);
        let e = after_first.get(code('e')).unwrap();
        assert_eq!((e.min_count, e.max_count), (1, None));

        let (unified, _) = merge_guesses(&rows);
        let e = unified.get(code('e')).unwrap();
        assert_eq!((e.min_count, e.max_count), (1, Some(1)));
    }

    #[test]
    fn same_word_twice_pins_exact_count() {
        // SPEED against ERUPT: first E present, second E absent
        let rows = play("erupt", &["speed", "speed"]);
        assert_eq!(rows[0], rows[1]);
        assert_eq!(rows[0].tiles[2].status, TileStatus::Present);
        assert_eq!(rows[0].tiles[3].status, TileStatus::Absent);

        let (after_first, _) = merge_guesses(&rows[..1]);
        let (unified, deltas) = merge_guesses(&rows);
        for table in [after_first, unified] {
            let e = table.get(code('e')).unwrap();
            assert_eq!((e.min_count, e.max_count), (1, Some(1)));
        }
        assert!(deltas[1].new_yellows.is_empty());
        assert!(deltas[1].new_grays.is_empty());
    }

    #[test]
    fn conflicting_greens_block_the_position() {
        let rows = guesses(&[("cdddd", "G----"), ("sffff", "G----")]);
        let (unified, _) = merge_guesses(&rows);
        let positions = project_positions(&unified);

        assert!((0..26).all(|letter| !positions[0].admits(letter)));
    }

    #[test]
    fn merge_is_order_invariant() {
        let rows = play("grace", &["crane", "crate", "speed"]);
        let (forward, forward_deltas) = merge_guesses(&rows);

        let mut reversed = rows.clone();
        reversed.reverse();
        let (backward, backward_deltas) = merge_guesses(&reversed);

        assert_eq!(forward, backward);
        assert_eq!(project_positions(&forward), project_positions(&backward));

        // CRATE after CRANE only adds T; CRATE right after SPEED adds more
        assert_eq!(forward_deltas[1].word, "crate");
        assert!(forward_deltas[1].new_greens.is_empty());
        assert_eq!(forward_deltas[1].new_grays, vec!['t']);
        assert_eq!(backward_deltas[1].word, "crate");
        assert!(!backward_deltas[1].new_greens.is_empty());
    }

    #[test]
    fn deltas_only_report_new_information() {
        let rows = guesses(&[("crane", "--G--"), ("slate", "--G--")]);
        let (_, deltas) = merge_guesses(&rows);

        assert_eq!(deltas[0].new_greens, vec![('a', 2)]);
        assert_eq!(deltas[0].new_grays, vec!['c', 'e', 'n', 'r']);
        assert!(deltas[1].new_greens.is_empty());
        assert_eq!(deltas[1].new_grays, vec!['l', 's', 't']);
    }

    #[test]
    fn projection_green_overrides_yellow_and_absent_spreads() {
        let rows = guesses(&[("crane", "--Y--"), ("blast", "--G--")]);
        let (unified, _) = merge_guesses(&rows);
        let positions = project_positions(&unified);

        assert_eq!(positions[2].required, Some(code('a')));
        assert!(!positions[2].excluded.contains(code('a')));
        for position in &positions {
            assert!(position.excluded.contains(code('c')));
        }
    }

    #[test]
    fn gray_duplicate_excluded_at_its_position() {
        // GEESE against HOTEL: one E present, the others gray
        let rows = play("hotel", &["geese"]);
        let (unified, _) = merge_guesses(&rows);
        let positions = project_positions(&unified);

        let e = code('e');
        assert!(positions[1].excluded.contains(e));
        assert!(positions[2].excluded.contains(e));
        assert!(positions[4].excluded.contains(e));
        assert!(positions[0].admits(e));
        assert!(positions[3].admits(e));
    }
}
