//! Text normalization shared by the catalog filter and the product matcher.

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block stripped after NFD decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Decompose, drop combining marks, lowercase.
///
/// `normalize_text("Café") == normalize_text("cafe")`.
pub fn normalize_text(s: &str) -> String {
    s.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect::<String>()
        .to_lowercase()
}

/// Split on non-word characters, keeping tokens longer than two characters.
///
/// Word characters are ASCII alphanumerics and `_`; everything else,
/// including letters outside ASCII, separates tokens.
pub fn keywords(normalized: &str) -> Vec<&str> {
    normalized
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|w| w.len() > 2)
        .collect()
}
