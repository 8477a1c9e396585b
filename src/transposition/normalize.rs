//! Text normalization to the bare `A`-`Z` alphabet.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Uppercases `text`, strips diacritics and removes everything outside `A`-`Z`.
///
/// Spaces, digits, punctuation and letters with no ASCII base (e.g. `Ж`) are
/// all dropped, so the result may be empty. The transformation is lossy and
/// cannot be undone.
///
/// ```
/// use transposition_cipher::normalize_az;
///
/// assert_eq!(normalize_az("Tajný útok!"), "TAJNYUTOK");
/// assert_eq!(normalize_az("123 ..."), "");
/// ```
pub fn normalize_az(text: &str) -> String {
    strip_diacritics(&text.to_uppercase())
        .chars()
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Canonical decomposition with every combining mark removed.
pub(crate) fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
