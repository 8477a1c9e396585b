//! Letters-only transformation that leaves every other character in place.

use std::sync::OnceLock;

use log::trace;
use regex::Regex;

/// Compiled regex for the Unicode letter category.
static LETTER_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Returns the cached letter regex.
fn letter_regex() -> &'static Regex {
    LETTER_PATTERN.get_or_init(|| Regex::new(r"^\p{L}$").expect("Invalid letter regex pattern"))
}

/// Returns true if `ch` belongs to the Unicode `L` (letter) category.
pub fn is_letter(ch: char) -> bool {
    let mut buf = [0u8; 4];
    letter_regex().is_match(ch.encode_utf8(&mut buf))
}

/// Applies `transform` to the letters of `text` only.
///
/// The letters are extracted in order, joined and passed to `transform`. The
/// result is cut to the original letter count and written back into the
/// letter positions. Digits, spaces and punctuation never move, so the output
/// has the same length in characters as the input. If `transform` returns
/// fewer characters than there were letters, the remaining letters are left
/// unchanged.
///
/// ```
/// use transposition_cipher::transform_letters_only;
///
/// let out = transform_letters_only("ab, cd!", |s| s.chars().rev().collect());
/// assert_eq!(out, "dc, ba!");
/// ```
pub fn transform_letters_only<F>(text: &str, transform: F) -> String
where
    F: FnOnce(&str) -> String,
{
    let mut chars: Vec<char> = text.chars().collect();
    let positions: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, ch)| is_letter(**ch))
        .map(|(i, _)| i)
        .collect();
    let letters: String = positions.iter().map(|&i| chars[i]).collect();

    let transformed = transform(&letters);
    trace!(
        "Letters-only: {} of {} characters transformed",
        positions.len(),
        chars.len()
    );

    for (&pos, ch) in positions.iter().zip(transformed.chars()) {
        chars[pos] = ch;
    }
    chars.into_iter().collect()
}
