//! # Exclusion table
//!
//! A curated list of card multisets for which no combination of `+ - * /` and
//! parentheses, using each card exactly once, reaches 24. The dealer uses it
//! to reject hopeless draws cheaply.
//!
//! The list is empirical. It is not proven exhaustive (some unsolvable
//! multisets may be missing) nor minimal (a listed multiset may in fact be
//! solvable). Callers that need a guarantee should screen with
//! [`crate::solver::solvable`] instead.

use crate::card::HAND_SIZE;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Sorted face-value quadruples treated as unsolvable.
pub const UNSOLVABLE: &[[u8; HAND_SIZE]] = &[
    [1, 1, 1, 1], [1, 1, 1, 2], [1, 1, 2, 2], [1, 2, 2, 2], [2, 2, 2, 2],
    [1, 1, 1, 3], [1, 1, 2, 3], [1, 2, 2, 3], [1, 1, 3, 3], [1, 1, 1, 4],
    [1, 1, 2, 4], [2, 3, 3, 4], [1, 1, 1, 5], [1, 1, 2, 5], [1, 3, 5, 5],
    [2, 5, 5, 5], [3, 5, 5, 5], [1, 1, 1, 6], [2, 2, 2, 6], [2, 5, 5, 6],
    [4, 4, 6, 6], [1, 1, 1, 7], [1, 5, 5, 7], [5, 5, 5, 7], [1, 1, 6, 7],
    [3, 4, 6, 7], [4, 4, 6, 7], [1, 6, 6, 7], [6, 6, 6, 7], [1, 1, 7, 7],
    [1, 5, 7, 7], [3, 5, 7, 7], [1, 6, 7, 7], [2, 6, 7, 7], [6, 6, 7, 7],
    [1, 7, 7, 7], [2, 7, 7, 7], [5, 7, 7, 7], [6, 7, 7, 7], [7, 7, 7, 7],
    [3, 3, 5, 8], [1, 5, 5, 8], [5, 5, 5, 8], [1, 1, 7, 8], [1, 6, 7, 8],
    [6, 6, 7, 8], [1, 7, 7, 8], [5, 7, 7, 8], [6, 7, 7, 8], [7, 7, 7, 8],
    [3, 4, 8, 8], [6, 7, 8, 8], [7, 7, 8, 8], [7, 8, 8, 8], [8, 8, 8, 8],
    [1, 1, 1, 9], [1, 1, 5, 9], [4, 4, 5, 9], [5, 5, 6, 9], [1, 1, 7, 9],
    [2, 2, 7, 9], [5, 5, 7, 9], [2, 7, 7, 9], [4, 7, 7, 9], [6, 7, 7, 9],
    [7, 7, 7, 9], [1, 1, 8, 9], [7, 7, 8, 9], [8, 8, 8, 9], [1, 1, 9, 9],
    [1, 2, 9, 9], [2, 2, 9, 9], [1, 4, 9, 9], [4, 4, 9, 9], [2, 5, 9, 9],
    [6, 6, 9, 9], [2, 7, 9, 9], [5, 7, 9, 9], [7, 7, 9, 9], [1, 8, 9, 9],
    [5, 8, 9, 9], [7, 8, 9, 9], [8, 8, 9, 9], [1, 9, 9, 9], [2, 9, 9, 9],
    [4, 9, 9, 9], [5, 9, 9, 9], [6, 9, 9, 9], [7, 9, 9, 9], [8, 9, 9, 9],
    [9, 9, 9, 9], [1, 1, 1, 10], [3, 3, 4, 10], [1, 1, 5, 10], [3, 5, 5, 10],
    [5, 5, 5, 10], [1, 1, 6, 10], [5, 5, 6, 10], [3, 3, 7, 10], [1, 4, 7, 10],
    [5, 6, 7, 10], [4, 7, 7, 10], [7, 7, 7, 10], [1, 1, 8, 10], [1, 4, 8, 10],
    [3, 5, 8, 10], [2, 7, 8, 10], [3, 7, 8, 10], [7, 7, 8, 10], [1, 1, 9, 10],
    [1, 2, 9, 10], [3, 4, 9, 10], [4, 4, 9, 10], [6, 7, 9, 10], [1, 8, 9, 10],
    [5, 8, 9, 10], [8, 8, 9, 10], [1, 9, 9, 10], [2, 9, 9, 10], [5, 9, 9, 10],
    [7, 9, 9, 10], [8, 9, 9, 10], [9, 9, 9, 10], [1, 1, 10, 10], [1, 2, 10, 10],
    [3, 3, 10, 10], [1, 6, 10, 10], [6, 6, 10, 10], [1, 7, 10, 10], [7, 7, 10, 10],
    [1, 8, 10, 10], [5, 8, 10, 10], [6, 8, 10, 10], [8, 8, 10, 10], [1, 9, 10, 10],
    [4, 9, 10, 10], [6, 9, 10, 10], [7, 9, 10, 10], [8, 9, 10, 10], [9, 9, 10, 10],
    [1, 10, 10, 10], [2, 10, 10, 10], [3, 10, 10, 10], [4, 10, 10, 10], [5, 10, 10, 10],
    [7, 10, 10, 10], [8, 10, 10, 10], [9, 10, 10, 10], [10, 10, 10, 10], [1, 1, 4, 11],
    [1, 1, 5, 11], [1, 2, 5, 11], [3, 3, 5, 11], [4, 5, 5, 11], [5, 5, 5, 11],
    [1, 1, 6, 11], [4, 6, 6, 11], [5, 6, 6, 11], [1, 1, 7, 11], [2, 2, 7, 11],
    [1, 3, 7, 11], [4, 4, 7, 11], [3, 6, 7, 11], [4, 6, 7, 11], [5, 6, 7, 11],
    [3, 7, 7, 11], [7, 7, 7, 11], [1, 1, 8, 11], [1, 2, 8, 11], [2, 2, 8, 11],
    [3, 3, 8, 11], [3, 6, 8, 11], [4, 6, 8, 11], [5, 6, 8, 11], [5, 7, 8, 11],
    [5, 8, 8, 11], [1, 1, 9, 11], [2, 3, 9, 11], [2, 4, 9, 11], [3, 5, 9, 11],
    [4, 5, 9, 11], [1, 6, 9, 11], [4, 6, 9, 11], [6, 7, 9, 11], [7, 7, 9, 11],
    [7, 8, 9, 11], [1, 9, 9, 11], [4, 9, 9, 11], [7, 9, 9, 11], [8, 9, 9, 11],
    [9, 9, 9, 11], [1, 1, 10, 11], [2, 3, 10, 11], [3, 3, 10, 11], [3, 4, 10, 11],
    [4, 4, 10, 11], [1, 6, 10, 11], [6, 6, 10, 11], [1, 7, 10, 11], [6, 7, 10, 11],
    [7, 7, 10, 11], [8, 8, 10, 11], [1, 9, 10, 11], [8, 9, 10, 11], [9, 9, 10, 11],
    [1, 10, 10, 11], [3, 10, 10, 11], [6, 10, 10, 11], [8, 10, 10, 11], [9, 10, 10, 11],
    [10, 10, 10, 11], [3, 3, 11, 11], [1, 4, 11, 11], [3, 4, 11, 11], [4, 4, 11, 11],
    [2, 5, 11, 11], [1, 6, 11, 11], [2, 6, 11, 11], [6, 6, 11, 11], [1, 7, 11, 11],
    [2, 7, 11, 11], [7, 7, 11, 11], [1, 8, 11, 11], [5, 8, 11, 11], [7, 8, 11, 11],
    [8, 8, 11, 11], [5, 9, 11, 11], [6, 9, 11, 11], [9, 9, 11, 11], [1, 10, 11, 11],
    [3, 10, 11, 11], [4, 10, 11, 11], [6, 10, 11, 11], [7, 10, 11, 11], [9, 10, 11, 11],
    [10, 10, 11, 11], [1, 11, 11, 11], [3, 11, 11, 11], [4, 11, 11, 11], [5, 11, 11, 11],
    [6, 11, 11, 11], [7, 11, 11, 11], [8, 11, 11, 11], [10, 11, 11, 11], [11, 11, 11, 11],
    [1, 1, 5, 12], [4, 5, 5, 12], [5, 5, 6, 12], [1, 1, 7, 12], [2, 5, 7, 12],
    [5, 5, 7, 12], [4, 7, 7, 12], [5, 7, 7, 12], [6, 7, 7, 12], [1, 1, 8, 12],
    [1, 2, 8, 12], [5, 7, 8, 12], [7, 7, 8, 12], [5, 8, 8, 12], [1, 1, 9, 12],
    [5, 5, 9, 12], [2, 7, 9, 12], [7, 7, 9, 12], [7, 9, 9, 12], [2, 2, 10, 12],
    [3, 3, 10, 12], [5, 5, 10, 12], [3, 7, 10, 12], [7, 7, 10, 12], [7, 8, 10, 12],
    [5, 9, 10, 12], [9, 9, 10, 12], [6, 10, 10, 12], [9, 10, 10, 12], [1, 4, 11, 12],
    [1, 7, 11, 12], [5, 7, 11, 12], [2, 9, 11, 12], [5, 9, 11, 12], [5, 10, 11, 12],
    [7, 10, 11, 12], [8, 10, 11, 12], [4, 11, 11, 12], [5, 11, 11, 12], [7, 11, 11, 12],
    [8, 11, 11, 12], [9, 11, 11, 12], [2, 9, 12, 12], [2, 10, 12, 12], [3, 10, 12, 12],
    [5, 10, 12, 12], [4, 11, 12, 12], [7, 11, 12, 12], [5, 12, 12, 12], [7, 12, 12, 12],
    [8, 12, 12, 12], [1, 3, 3, 13], [3, 3, 3, 13], [1, 1, 4, 13], [1, 4, 4, 13],
    [4, 4, 4, 13], [1, 1, 5, 13], [2, 2, 5, 13], [3, 5, 5, 13], [4, 5, 5, 13],
    [5, 5, 5, 13], [1, 1, 6, 13], [5, 5, 6, 13], [4, 6, 6, 13], [5, 6, 6, 13],
    [6, 6, 6, 13], [1, 1, 7, 13], [1, 2, 7, 13], [2, 4, 7, 13], [3, 4, 7, 13],
    [5, 5, 7, 13], [1, 6, 7, 13], [4, 6, 7, 13], [6, 6, 7, 13], [1, 7, 7, 13],
    [4, 7, 7, 13], [5, 7, 7, 13], [6, 7, 7, 13], [7, 7, 7, 13], [1, 1, 8, 13],
    [2, 2, 8, 13], [1, 7, 8, 13], [5, 7, 8, 13], [6, 7, 8, 13], [7, 7, 8, 13],
    [1, 8, 8, 13], [3, 8, 8, 13], [6, 8, 8, 13], [2, 2, 9, 13], [4, 4, 9, 13],
    [2, 5, 9, 13], [5, 5, 9, 13], [2, 6, 9, 13], [6, 7, 9, 13], [7, 7, 9, 13],
    [1, 9, 9, 13], [4, 9, 9, 13], [5, 9, 9, 13], [6, 9, 9, 13], [8, 9, 9, 13],
    [9, 9, 9, 13], [1, 3, 10, 13], [1, 4, 10, 13], [3, 6, 10, 13], [4, 6, 10, 13],
    [2, 7, 10, 13], [4, 7, 10, 13], [3, 8, 10, 13], [4, 8, 10, 13], [5, 8, 10, 13],
    [6, 9, 10, 13], [7, 9, 10, 13], [1, 10, 10, 13], [3, 10, 10, 13], [4, 10, 10, 13],
    [7, 10, 10, 13], [8, 10, 10, 13], [1, 3, 11, 13], [1, 4, 11, 13], [2, 4, 11, 13],
    [1, 5, 11, 13], [2, 5, 11, 13], [3, 5, 11, 13], [4, 6, 11, 13], [1, 7, 11, 13],
    [2, 7, 11, 13], [3, 7, 11, 13], [2, 8, 11, 13], [3, 8, 11, 13], [4, 9, 11, 13],
    [7, 9, 11, 13], [1, 10, 11, 13], [5, 10, 11, 13], [6, 10, 11, 13], [8, 10, 11, 13],
    [3, 11, 11, 13], [4, 11, 11, 13], [5, 11, 11, 13], [6, 11, 11, 13], [7, 11, 11, 13],
    [8, 11, 11, 13], [9, 11, 11, 13], [1, 4, 12, 13], [2, 4, 12, 13], [1, 5, 12, 13],
    [5, 7, 12, 13], [1, 8, 12, 13], [5, 8, 12, 13], [6, 8, 12, 13], [1, 9, 12, 13],
    [4, 9, 12, 13], [7, 9, 12, 13], [3, 10, 12, 13], [3, 11, 12, 13], [5, 11, 12, 13],
    [7, 11, 12, 13], [8, 11, 12, 13], [4, 12, 12, 13], [5, 12, 12, 13], [8, 12, 12, 13],
    [9, 12, 12, 13], [3, 3, 13, 13], [1, 4, 13, 13], [3, 4, 13, 13], [4, 4, 13, 13],
    [1, 5, 13, 13], [2, 5, 13, 13], [1, 6, 13, 13], [2, 6, 13, 13], [6, 6, 13, 13],
    [2, 7, 13, 13], [6, 7, 13, 13], [7, 7, 13, 13], [1, 8, 13, 13], [5, 8, 13, 13],
    [7, 8, 13, 13], [8, 8, 13, 13], [1, 9, 13, 13], [4, 9, 13, 13], [5, 9, 13, 13],
    [6, 9, 13, 13], [8, 9, 13, 13], [9, 9, 13, 13], [1, 10, 13, 13], [2, 10, 13, 13],
    [3, 10, 13, 13], [4, 10, 13, 13], [6, 10, 13, 13], [7, 10, 13, 13], [9, 10, 13, 13],
    [10, 10, 13, 13], [3, 11, 13, 13], [4, 11, 13, 13], [5, 11, 13, 13], [6, 11, 13, 13],
    [7, 11, 13, 13], [8, 11, 13, 13], [10, 11, 13, 13], [11, 11, 13, 13], [4, 12, 13, 13],
    [5, 12, 13, 13], [7, 12, 13, 13], [8, 12, 13, 13], [9, 12, 13, 13], [1, 13, 13, 13],
    [3, 13, 13, 13], [4, 13, 13, 13], [5, 13, 13, 13], [6, 13, 13, 13], [7, 13, 13, 13],
    [8, 13, 13, 13], [9, 13, 13, 13], [13, 13, 13, 13],
];

static EXCLUDED: Lazy<HashSet<[u8; HAND_SIZE]>> = Lazy::new(|| {
    let set: HashSet<_> = UNSOLVABLE.iter().copied().collect();
    log::debug!("exclusion table loaded with {} multisets", set.len());
    set
});

/// Returns `true` if the multiset of `faces` is listed as unsolvable.
///
/// The order of `faces` does not matter; the values are sorted before the
/// lookup.
///
/// ```rust
/// # use twentyfour_deck::exclusion::is_excluded;
/// assert!(is_excluded([1, 1, 1, 1]));
/// assert!(is_excluded([7, 1, 1, 1]));
/// assert!(!is_excluded([8, 3, 8, 3]));
/// ```
pub fn is_excluded(faces: [u8; HAND_SIZE]) -> bool {
    let mut key = faces;
    key.sort_unstable();
    EXCLUDED.contains(&key)
}

/// Number of multisets in the table.
pub fn len() -> usize {
    EXCLUDED.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_is_sorted_and_in_range() {
        for entry in UNSOLVABLE {
            assert!(entry.windows(2).all(|w| w[0] <= w[1]), "{entry:?} not sorted");
            assert!(entry.iter().all(|&f| (1..=13).contains(&f)), "{entry:?}");
        }
    }

    #[test]
    fn entries_are_unique() {
        assert_eq!(len(), UNSOLVABLE.len());
        assert_eq!(len(), 458);
    }

    #[test]
    fn lookup_ignores_order() {
        assert!(is_excluded([13, 13, 13, 13]));
        assert!(is_excluded([9, 4, 9, 9]));
        assert!(is_excluded([4, 9, 9, 9]));
    }

    #[test]
    fn known_solvable_hands_are_not_excluded() {
        assert!(!is_excluded([1, 2, 3, 4]));
        assert!(!is_excluded([3, 3, 8, 8]));
        assert!(!is_excluded([6, 6, 6, 6]));
    }
}
