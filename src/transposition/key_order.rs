//! Column order derived from a transposition key.

use std::cmp::Ordering;

use log::trace;

use super::normalize::strip_diacritics;

/// Sort rank of a single key position.
///
/// Variant order matters: every real key character sorts before a position
/// the key does not reach.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    Char {
        /// Uppercased character without diacritics (`Č` -> `C`).
        base: String,
        /// Uppercased character, separating `C` from `Č` when the bases tie.
        full: String,
    },
    Missing,
}

impl Rank {
    fn of(ch: Option<char>) -> Self {
        match ch {
            Some(ch) => {
                let full: String = ch.to_uppercase().collect();
                Rank::Char {
                    base: strip_diacritics(&full),
                    full,
                }
            }
            None => Rank::Missing,
        }
    }
}

/// Returns the column indices `0..cols` in the order the key ranks them.
///
/// Key characters are compared case-insensitively, first by their base letter
/// and then by the accented form, so `klíč` orders as `Č Í K L`. Equal
/// characters keep their original left-to-right order. Positions beyond the
/// end of the key sort after all real characters, in index order.
///
/// An empty key yields the identity permutation.
///
/// ```
/// use transposition_cipher::column_order;
///
/// assert_eq!(column_order("KEY", 3), vec![1, 0, 2]);
/// assert_eq!(column_order("klíč", 4), vec![3, 2, 0, 1]);
/// assert_eq!(column_order("AAB", 3), vec![0, 1, 2]);
/// assert_eq!(column_order("", 3), vec![0, 1, 2]);
/// ```
pub fn column_order(key: &str, cols: usize) -> Vec<usize> {
    if key.is_empty() {
        return (0..cols).collect();
    }

    let mut chars = key.chars();
    let mut ranked: Vec<(Rank, usize)> = (0..cols).map(|i| (Rank::of(chars.next()), i)).collect();

    ranked.sort_by(|(ra, ia), (rb, ib)| match ra.cmp(rb) {
        Ordering::Equal => ia.cmp(ib),
        other => other,
    });

    let order: Vec<usize> = ranked.into_iter().map(|(_, i)| i).collect();
    trace!("Column order for {} columns: {:?}", cols, order);
    order
}
