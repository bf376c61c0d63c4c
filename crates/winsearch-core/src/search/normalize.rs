use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Fold a string into its search form: accents removed, lower-cased.
///
/// Text is decomposed (NFD) so accents become separate combining marks, which
/// are then dropped. Letters without a decomposition, like `ø` or `ł`, are
/// kept as they are.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}
