//! Script-free canonical form and rendering back into either script.
//!
//! `to_canonical` drops everything script-specific (inherent-`a` tokens
//! become plain `a`, mātrās become vowels, virāmas disappear), while
//! separators and unrecognized text are carried verbatim. `render` then
//! spells the units in a target script, choosing independent vowels or
//! mātrās and inserting virāma where a consonant has no vowel.
//!
//! `fold_iast` is the one lossy step: it rewrites IAST input that the
//! tokenizer does not read (uppercase, decomposed, ISO-15919 ring-below
//! vocalics, the other anusvāra dot) into the spellings it does.

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::error::EngineError;
use crate::phoneme::{Mark, PhonemeId, PHONEMES};
use crate::script::ScriptKind;
use crate::settings::{settings, RenderSettings};
use crate::tokenizer::{Token, TokenKind, TokenSequence};
use crate::unicode::VIRAMA;

/// One script-independent unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Unit {
    Phoneme(PhonemeId),
    Mark(Mark),
    Separator(String),
    Unrecognized(String),
}

impl Unit {
    pub fn phoneme_id(&self) -> Option<PhonemeId> {
        match self {
            Unit::Phoneme(id) => Some(*id),
            _ => None,
        }
    }

    fn is_vowel(&self) -> bool {
        self.phoneme_id().is_some_and(|id| id.phoneme().is_vowel())
    }

    fn is_consonant_letter(&self) -> bool {
        self.phoneme_id()
            .is_some_and(|id| id.phoneme().is_consonant_letter())
    }
}

impl From<PhonemeId> for Unit {
    fn from(id: PhonemeId) -> Self {
        Unit::Phoneme(id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CanonicalSequence {
    units: Vec<Unit>,
}

impl CanonicalSequence {
    pub fn new(units: Vec<Unit>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn into_units(self) -> Vec<Unit> {
        self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn phonemes(&self) -> impl Iterator<Item = PhonemeId> + '_ {
        self.units.iter().filter_map(Unit::phoneme_id)
    }

    /// Canonical ids of the phoneme units, in order.
    pub fn canonical_ids(&self) -> Vec<&'static str> {
        self.phonemes().map(PhonemeId::canonical_id).collect()
    }
}

impl FromIterator<Unit> for CanonicalSequence {
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<PhonemeId> for CanonicalSequence {
    fn from_iter<I: IntoIterator<Item = PhonemeId>>(iter: I) -> Self {
        iter.into_iter().map(Unit::Phoneme).collect()
    }
}

pub fn to_canonical(seq: &TokenSequence) -> CanonicalSequence {
    seq.iter().map(unit_of).collect()
}

fn unit_of(token: &Token) -> Unit {
    match token.kind {
        TokenKind::Phoneme(id) => Unit::Phoneme(id),
        TokenKind::Mark(mark) => Unit::Mark(mark),
        TokenKind::Separator => Unit::Separator(token.surface.clone()),
        TokenKind::Unrecognized => Unit::Unrecognized(token.surface.clone()),
    }
}

/// Spell `seq` in `target`.
pub fn render(seq: &CanonicalSequence, target: ScriptKind) -> Result<String, EngineError> {
    if !target.is_known() {
        return Err(EngineError::UnknownScript);
    }
    Ok(render_tokens(seq, target, &settings().render)
        .iter()
        .map(|t| t.surface.as_str())
        .collect())
}

/// Tokens of `seq` spelled in `target`, one per unit, as the tokenizer
/// would produce them from the rendered text. `Unknown` spells IAST.
pub(crate) fn render_tokens(
    seq: &CanonicalSequence,
    target: ScriptKind,
    spelling: &RenderSettings,
) -> Vec<Token> {
    let script = output_script(target);
    let units = seq.units();
    let mut offset = 0;
    let mut tokens = Vec::with_capacity(units.len());
    for (i, unit) in units.iter().enumerate() {
        let (kind, surface) = match unit {
            Unit::Phoneme(id) => {
                let surface = match script {
                    ScriptKind::Devanagari => {
                        let prev = i.checked_sub(1).map(|j| &units[j]);
                        spell_devanagari(*id, prev, units.get(i + 1))
                    }
                    _ => spell_iast(*id, spelling).to_string(),
                };
                (TokenKind::Phoneme(*id), surface)
            }
            Unit::Mark(mark) => {
                let surface = match script {
                    ScriptKind::Devanagari => mark.devanagari(),
                    _ => mark.iast(),
                };
                (TokenKind::Mark(*mark), surface.to_string())
            }
            Unit::Separator(text) => (TokenKind::Separator, text.clone()),
            Unit::Unrecognized(text) => (TokenKind::Unrecognized, text.clone()),
        };
        let len = surface.len();
        tokens.push(Token {
            kind,
            surface,
            script,
            offset,
        });
        offset += len;
    }
    tokens
}

pub(crate) fn render_sequence(
    seq: &CanonicalSequence,
    target: ScriptKind,
    spelling: &RenderSettings,
) -> TokenSequence {
    TokenSequence::from_tokens(output_script(target), render_tokens(seq, target, spelling))
}

fn output_script(target: ScriptKind) -> ScriptKind {
    match target {
        ScriptKind::Unknown => ScriptKind::Iast,
        known => known,
    }
}

fn spell_iast(id: PhonemeId, spelling: &RenderSettings) -> &str {
    if id == PhonemeId::Anusvara {
        return spelling.iast_anusvara.as_str();
    }
    id.phoneme().iast
}

fn spell_devanagari(id: PhonemeId, prev: Option<&Unit>, next: Option<&Unit>) -> String {
    let p = id.phoneme();
    let letter = p.devanagari.unwrap_or(p.iast);
    if p.is_vowel() {
        if prev.is_some_and(Unit::is_consonant_letter) {
            return match id {
                PhonemeId::A => String::new(),
                _ => p.matra.unwrap_or(letter).to_string(),
            };
        }
        return letter.to_string();
    }
    if p.is_consonant_letter() && !next.is_some_and(Unit::is_vowel) {
        let mut s = String::with_capacity(letter.len() + VIRAMA.len_utf8());
        s.push_str(letter);
        s.push(VIRAMA);
        return s;
    }
    letter.to_string()
}

/// Rewrite IAST `text` into the spellings the tokenizer reads: NFC
/// composition, lowercase, and every alternate spelling replaced by its
/// primary one (anusvāra in the configured dot). Lossy: the original case
/// and spelling are not recoverable.
pub fn fold_iast(text: &str) -> String {
    fold_iast_spelled(text, &settings().render)
}

pub fn fold_iast_spelled(text: &str, spelling: &RenderSettings) -> String {
    let composed: String = text.nfc().flat_map(char::to_lowercase).collect();
    let mut out = String::with_capacity(composed.len());
    let mut rest = composed.as_str();
    while let Some(c) = rest.chars().next() {
        let len = match folded_spelling(rest) {
            Some((len, id)) => {
                out.push_str(spell_iast(id, spelling));
                len
            }
            None => {
                out.push(c);
                c.len_utf8()
            }
        };
        rest = &rest[len..];
    }
    out
}

/// Longest spelling at the start of `text` that folding rewrites: any
/// alternate not taken by another phoneme's primary spelling, and both
/// anusvāra dots.
fn folded_spelling(text: &str) -> Option<(usize, PhonemeId)> {
    let anusvara = PhonemeId::Anusvara.phoneme();
    PHONEMES
        .iter()
        .flat_map(|p| p.iast_alternates.iter().map(move |alt| (*alt, p.id)))
        .filter(|(alt, _)| !PHONEMES.iter().any(|p| p.iast == *alt))
        .chain(std::iter::once((anusvara.iast, anusvara.id)))
        .filter(|(spelling, _)| text.starts_with(spelling))
        .max_by_key(|(spelling, _)| spelling.len())
        .map(|(spelling, id)| (spelling.len(), id))
}

/// Canonical form of `seq`, spelled in `target`.
pub fn normalize(seq: &TokenSequence, target: ScriptKind) -> Result<String, EngineError> {
    render(&to_canonical(seq), target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;
    use PhonemeId::*;

    fn canon(text: &str, script: ScriptKind) -> CanonicalSequence {
        to_canonical(&tokenize(text, script).unwrap())
    }

    fn roundtrip(text: &str, script: ScriptKind) {
        let rendered = render(&canon(text, script), script).unwrap();
        assert_eq!(rendered, text, "{script} round trip");
    }

    #[test]
    fn test_canonical_is_script_free() {
        let iast = canon("saṃskṛtam", ScriptKind::Iast);
        let deva = canon("संस्कृतम्", ScriptKind::Devanagari);
        assert_eq!(iast, deva);
        assert_eq!(
            iast.canonical_ids(),
            vec![
                "CONSONANT_SA",
                "VOWEL_A_SHORT",
                "SIGN_ANUSVARA",
                "CONSONANT_SA",
                "CONSONANT_KA",
                "VOWEL_R_SHORT",
                "CONSONANT_TA",
                "VOWEL_A_SHORT",
                "CONSONANT_MA",
            ]
        );
    }

    #[test]
    fn test_roundtrip_iast() {
        roundtrip("saṃgacchate", ScriptKind::Iast);
        roundtrip("dharmakṣetre kurukṣetre |", ScriptKind::Iast);
        roundtrip("ṛṣiḥ", ScriptKind::Iast);
        roundtrip("so'ham 12", ScriptKind::Iast);
    }

    #[test]
    fn test_roundtrip_devanagari() {
        roundtrip("संगच्छते", ScriptKind::Devanagari);
        roundtrip("धर्मक्षेत्रे कुरुक्षेत्रे ।", ScriptKind::Devanagari);
        roundtrip("ऋषिः", ScriptKind::Devanagari);
        roundtrip("सम्", ScriptKind::Devanagari);
        roundtrip("प्रउग", ScriptKind::Devanagari);
        roundtrip("हँस ॥ १२", ScriptKind::Devanagari);
    }

    #[test]
    fn test_transliterate_iast_to_devanagari() {
        let seq = canon("rāmaḥ vanam gacchati", ScriptKind::Iast);
        assert_eq!(
            render(&seq, ScriptKind::Devanagari).unwrap(),
            "रामः वनम् गच्छति"
        );
        let seq = canon("kṣatriya", ScriptKind::Iast);
        assert_eq!(render(&seq, ScriptKind::Devanagari).unwrap(), "क्षत्रिय");
    }

    #[test]
    fn test_transliterate_devanagari_to_iast() {
        let seq = canon("अग्निमीळे पुरोहितम्", ScriptKind::Devanagari);
        assert_eq!(render(&seq, ScriptKind::Iast).unwrap(), "agnimīḻe purohitam");
    }

    #[test]
    fn test_vowel_forms_in_devanagari() {
        // Word-initial vowel is independent, post-consonant vowel is a mātrā,
        // vowel after vowel is independent again.
        let seq: CanonicalSequence = [I, T, I, A, U].into_iter().collect();
        assert_eq!(render(&seq, ScriptKind::Devanagari).unwrap(), "इतिअउ");
        // A vowel after a sign is independent.
        let seq: CanonicalSequence = [A, Visarga, I].into_iter().collect();
        assert_eq!(render(&seq, ScriptKind::Devanagari).unwrap(), "अःइ");
    }

    #[test]
    fn test_virama_before_non_vowel() {
        let seq: CanonicalSequence = [T, Visarga].into_iter().collect();
        assert_eq!(render(&seq, ScriptKind::Devanagari).unwrap(), "त्ः");
        let seq: CanonicalSequence = vec![
            Unit::Phoneme(K),
            Unit::Separator(" ".to_string()),
            Unit::Phoneme(A),
        ]
        .into_iter()
        .collect();
        assert_eq!(render(&seq, ScriptKind::Devanagari).unwrap(), "क् अ");
    }

    #[test]
    fn test_recognized_text_roundtrips_exactly() {
        // Each of these reads without unrecognized tokens only in the
        // exact spelling; anything else is flagged instead of rewritten.
        for (text, script) in [
            ("Rāma", ScriptKind::Iast),
            ("saṁskṛtam", ScriptKind::Iast),
            ("ra\u{304}ma", ScriptKind::Iast),
            ("kr\u{325}ta", ScriptKind::Iast),
            ("क\u{94d}अ", ScriptKind::Devanagari),
        ] {
            let seq = tokenize(text, script).unwrap();
            assert!(seq.has_unrecognized(), "{text:?}");
            assert_eq!(render(&to_canonical(&seq), script).unwrap(), text);
        }
    }

    #[test]
    fn test_fold_iast() {
        assert_eq!(fold_iast("RĀMA"), "rāma");
        assert_eq!(fold_iast("ra\u{304}ma"), "rāma");
        assert_eq!(fold_iast("saṁskṛtam"), "saṃskṛtam");
        assert_eq!(fold_iast("r\u{325}\u{304}"), "ṝ");
        assert_eq!(fold_iast("Kl\u{325}pta"), "kḷpta");
        // `ḷ` stays vocalic l rather than becoming ळ.
        assert_eq!(fold_iast("ḷ"), "ḷ");
        assert_eq!(fold_iast("rāma 12 |"), "rāma 12 |");
        let dot_above = RenderSettings {
            iast_anusvara: "ṁ".to_string(),
        };
        assert_eq!(fold_iast_spelled("SAṂ", &dot_above), "saṁ");
    }

    #[test]
    fn test_folded_text_roundtrips() {
        for text in ["Rāma", "saṁskṛtam", "ra\u{304}ma", "Kr\u{325}ta"] {
            let folded = fold_iast(text);
            let seq = tokenize(&folded, ScriptKind::Iast).unwrap();
            assert!(!seq.has_unrecognized(), "{folded:?}");
            assert_eq!(render(&to_canonical(&seq), ScriptKind::Iast).unwrap(), folded);
        }
    }

    #[test]
    fn test_unrecognized_passes_through() {
        let seq = canon("rāma€", ScriptKind::Iast);
        assert_eq!(render(&seq, ScriptKind::Devanagari).unwrap(), "राम€");
    }

    #[test]
    fn test_render_unknown_target_fails() {
        let seq = canon("rāma", ScriptKind::Iast);
        assert_eq!(
            render(&seq, ScriptKind::Unknown),
            Err(EngineError::UnknownScript)
        );
    }

    #[test]
    fn test_render_tokens_match_retokenization() {
        for (text, script) in [
            ("saṃgacchate", ScriptKind::Iast),
            ("संगच्छते", ScriptKind::Devanagari),
            ("पुनः पुनः ॥", ScriptKind::Devanagari),
        ] {
            let seq = canon(text, script);
            let rendered = render_sequence(&seq, script, &settings().render);
            let retokenized = tokenize(&rendered.surface(), script).unwrap();
            assert_eq!(rendered, retokenized, "{text}");
        }
    }

    #[test]
    fn test_normalize_token_sequence() {
        let seq = tokenize("गच्छति", ScriptKind::Devanagari).unwrap();
        assert_eq!(normalize(&seq, ScriptKind::Iast).unwrap(), "gacchati");
        assert_eq!(normalize(&seq, ScriptKind::Devanagari).unwrap(), "गच्छति");
    }
}
