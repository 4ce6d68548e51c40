//! Text sanitization for PDF content streams.
//!
//! The renderer emits text inside PDF literal strings with a non-embedded
//! Type1 font, so content is restricted to printable ASCII and must never
//! contain unescaped `(`, `)` or `\`.

use unicode_normalization::UnicodeNormalization;

/// Characters that delimit or escape PDF literal strings.
const STRUCTURAL: [char; 3] = ['(', ')', '\\'];

/// Normalize a line of text for inclusion in a content stream.
///
/// Decomposes to NFD and drops combining diacritical marks (U+0300..=U+036F),
/// so accented Latin text survives as its base letters. Any remaining
/// character outside printable ASCII (0x20..=0x7E) becomes a space; the
/// string delimiters `(`, `)` and `\` are stripped. The result is trimmed.
///
/// Total function: never fails, any input yields a valid content string.
///
/// # Example
///
/// ```
/// use fogodoc::render::sanitize;
///
/// assert_eq!(sanitize("café (test)\\"), "cafe test");
/// ```
pub fn sanitize(text: &str) -> String {
    let cleaned: String = text
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .map(|c| if (' '..='~').contains(&c) { c } else { ' ' })
        .filter(|c| !STRUCTURAL.contains(c))
        .collect();
    cleaned.trim().to_string()
}
