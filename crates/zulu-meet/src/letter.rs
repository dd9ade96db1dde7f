//! Military time-zone letter lookup.
//!
//! Every whole-hour UTC offset in `[-12, 12]` has a single-letter NATO
//! designator: `Z` for UTC itself, `A`..`M` (skipping `J`) for the positive
//! offsets, and `N`..`Y` for the negative ones. The mapping is a fixed
//! 25-entry table; offsets outside the range degrade to a sentinel rather
//! than failing, so callers never need to validate before looking up.

use serde::Serialize;

/// Placeholder returned for offsets outside `[-12, 12]`.
pub const SENTINEL_LETTER: char = '?';

// Index 0 is the reserved zero-offset letter; indexes 1..=12 are the
// positive offsets. J is skipped by convention (too easy to confuse with I
// in handwriting).
const POSITIVE_LETTERS: [char; 13] = [
    'Z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M',
];

// Index i holds the letter for offset -(i + 1).
const NEGATIVE_LETTERS: [char; 12] = [
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y',
];

/// One row of the designator table: a letter and its whole-hour UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterEntry {
    /// The single-character military designator.
    pub letter: char,
    /// Whole hours relative to UTC, in `[-12, 12]`.
    pub offset: i32,
}

/// Look up the military designator for a whole-hour UTC offset.
///
/// # Arguments
///
/// * `offset` — Hours relative to UTC. Any `i32` is accepted.
///
/// # Returns
///
/// The designator letter, or [`SENTINEL_LETTER`] when `offset` is outside
/// `[-12, 12]`. Never panics; invalid input is not an error here because the
/// widget must keep rendering something even for unreachable control values.
///
/// # Examples
///
/// ```
/// use zulu_core::letter::{letter_for, SENTINEL_LETTER};
///
/// assert_eq!(letter_for(0), 'Z');
/// assert_eq!(letter_for(5), 'E');
/// assert_eq!(letter_for(-3), 'P');
/// assert_eq!(letter_for(13), SENTINEL_LETTER);
/// ```
pub fn letter_for(offset: i32) -> char {
    match offset {
        0 => 'Z',
        1..=12 => POSITIVE_LETTERS[offset as usize],
        -12..=-1 => NEGATIVE_LETTERS[offset.unsigned_abs() as usize - 1],
        _ => SENTINEL_LETTER,
    }
}

/// The full designator table, ordered for display.
///
/// # Returns
///
/// Exactly 25 entries sorted strictly descending by offset (`+12` down to
/// `-12`), each offset appearing once. Pure function of the static table —
/// calling it twice yields identical results.
pub fn all_entries() -> Vec<LetterEntry> {
    (-12..=12)
        .rev()
        .map(|offset| LetterEntry {
            letter: letter_for(offset),
            offset,
        })
        .collect()
}

/// Render an offset with an explicit sign: `"+5"`, `"+0"`, `"-3"`.
///
/// Zero takes the `+` branch, so the UTC badge reads `"UTC+0"`.
pub fn format_offset(offset: i32) -> String {
    if offset >= 0 {
        format!("+{offset}")
    } else {
        offset.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_zero_is_zulu() {
        assert_eq!(letter_for(0), 'Z');
    }

    #[test]
    fn test_positive_sequence_skips_j() {
        assert_eq!(letter_for(1), 'A');
        assert_eq!(letter_for(9), 'I');
        assert_eq!(letter_for(10), 'K'); // J skipped
        assert_eq!(letter_for(12), 'M');
    }

    #[test]
    fn test_negative_sequence() {
        assert_eq!(letter_for(-1), 'N');
        assert_eq!(letter_for(-2), 'O');
        assert_eq!(letter_for(-12), 'Y');
    }

    #[test]
    fn test_out_of_range_is_sentinel() {
        assert_eq!(letter_for(13), SENTINEL_LETTER);
        assert_eq!(letter_for(-13), SENTINEL_LETTER);
        assert_eq!(letter_for(i32::MAX), SENTINEL_LETTER);
        assert_eq!(letter_for(i32::MIN), SENTINEL_LETTER);
    }

    #[test]
    fn test_mapping_is_a_bijection() {
        let letters: HashSet<char> = (-12..=12).map(letter_for).collect();
        assert_eq!(letters.len(), 25);
        assert!(!letters.contains(&'J'));
        assert!(!letters.contains(&SENTINEL_LETTER));
    }

    #[test]
    fn test_all_entries_count_and_order() {
        let entries = all_entries();
        assert_eq!(entries.len(), 25);
        assert_eq!(entries[0], LetterEntry { letter: 'M', offset: 12 });
        assert_eq!(entries[12], LetterEntry { letter: 'Z', offset: 0 });
        assert_eq!(entries[24], LetterEntry { letter: 'Y', offset: -12 });
        for pair in entries.windows(2) {
            assert!(pair[0].offset > pair[1].offset);
        }
    }

    #[test]
    fn test_all_entries_covers_each_offset_once() {
        let offsets: HashSet<i32> = all_entries().iter().map(|e| e.offset).collect();
        assert_eq!(offsets, (-12..=12).collect::<HashSet<i32>>());
    }

    #[test]
    fn test_all_entries_is_restartable() {
        assert_eq!(all_entries(), all_entries());
    }

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(5), "+5");
        assert_eq!(format_offset(0), "+0");
        assert_eq!(format_offset(-3), "-3");
        assert_eq!(format_offset(-12), "-12");
    }

    proptest! {
        #[test]
        fn prop_never_panics_and_in_range_is_unique(offset in any::<i32>()) {
            let letter = letter_for(offset);
            if (-12..=12).contains(&offset) {
                prop_assert_ne!(letter, SENTINEL_LETTER);
                // No other in-range offset maps to the same letter.
                for other in -12..=12 {
                    if other != offset {
                        prop_assert_ne!(letter_for(other), letter);
                    }
                }
            } else {
                prop_assert_eq!(letter, SENTINEL_LETTER);
            }
        }

        #[test]
        fn prop_lookup_is_stable(offset in -12i32..=12) {
            prop_assert_eq!(letter_for(offset), letter_for(offset));
        }
    }
}
