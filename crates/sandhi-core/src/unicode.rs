//! Character-level Unicode classification for Sanskrit text.

pub const VIRAMA: char = '\u{094D}';

/// Check the full Devanagari block (U+0900..U+097F). The block also holds
/// Vedic and regional letters that never appear in the phoneme table; they
/// still count towards Devanagari during detection.
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Daṇḍa and double daṇḍa sit inside the Devanagari block but act as
/// punctuation.
pub fn is_danda(c: char) -> bool {
    matches!(c, '\u{0964}' | '\u{0965}')
}

/// Combining Diacritical Marks block, used by decomposed IAST.
pub fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

const IAST_DIACRITIC_LETTERS: &str = "āīūṛṝḷḹṅñṭḍṇśṣṃḥṁḻ";

/// Latin letters and diacritics that IAST actually uses. `f q w x z` are
/// not part of the alphabet.
pub fn is_iast_letter(c: char) -> bool {
    if is_combining_mark(c) {
        return true;
    }
    let lower = c.to_lowercase().next().unwrap_or(c);
    (lower.is_ascii_lowercase() && !matches!(lower, 'f' | 'q' | 'w' | 'x' | 'z'))
        || IAST_DIACRITIC_LETTERS.contains(lower)
}

/// Whitespace and punctuation that pass through tokenization untouched.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || c.is_ascii_punctuation()
        || ('\u{2000}'..='\u{206F}').contains(&c)
        || is_danda(c)
}
