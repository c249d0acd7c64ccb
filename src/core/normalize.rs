// Word of the Day - core/normalize.rs
//
// Accent- and case-folding used for word search comparisons only.
// Stored values are never normalised.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strip diacritics and lowercase `text`.
///
/// Applies canonical decomposition (NFD), drops every combining mark, then
/// lowercases, so "SZÓ", "szó" and "szo" all normalise to "szo".
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}
