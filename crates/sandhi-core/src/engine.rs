//! Text-level entry points: detection, tokenization, transliteration and
//! sandhi composed over plain strings.

use serde::Serialize;
use tracing::debug;

use crate::error::EngineError;
use crate::normalize::{fold_iast, normalize};
use crate::phoneme::{PhonemeId, SurfaceTrie, Target};
use crate::sandhi::{SandhiExplanation, SandhiRuleName, Transducer};
use crate::script::{detect, ScriptKind};
use crate::settings::{settings, RenderSettings};
use crate::tokenizer::{tokenize, tokenize_spelled, TokenSequence};

/// Result of joining two texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SandhiOutcome {
    pub combined: String,
    pub rule: Option<SandhiRuleName>,
}

/// Tokenize in `script`, or in the detected script when `None`.
///
/// Empty text yields an empty sequence; other text of undetectable script
/// is `UnknownScript`.
pub fn tokenize_auto(text: &str, script: Option<ScriptKind>) -> Result<TokenSequence, EngineError> {
    if text.is_empty() {
        return Ok(TokenSequence::from_tokens(
            script.unwrap_or(ScriptKind::Unknown),
            Vec::new(),
        ));
    }
    let script = script.unwrap_or_else(|| detect(text));
    Ok(tokenize(text, script)?)
}

/// Re-spell `text` in `target`.
pub fn transliterate(
    text: &str,
    source: Option<ScriptKind>,
    target: ScriptKind,
) -> Result<String, EngineError> {
    let seq = tokenize_auto(text, source)?;
    normalize(&seq, target)
}

/// Tokenize both sides of a join. A side whose script cannot be detected
/// is read in the other side's script.
pub fn tokenize_pair(left: &str, right: &str) -> Result<(TokenSequence, TokenSequence), EngineError> {
    tokenize_pair_spelled(left, right, &settings().render)
}

fn tokenize_pair_spelled(
    left: &str,
    right: &str,
    spelling: &RenderSettings,
) -> Result<(TokenSequence, TokenSequence), EngineError> {
    if left.is_empty() && right.is_empty() {
        return Err(EngineError::invalid_input("both sides are empty"));
    }
    let (left_script, right_script) = match (detect(left), detect(right)) {
        (ScriptKind::Unknown, ScriptKind::Unknown) => return Err(EngineError::UnknownScript),
        (ScriptKind::Unknown, r) => (r, r),
        (l, ScriptKind::Unknown) => (l, l),
        scripts => scripts,
    };
    Ok((
        tokenize_spelled(left, left_script, spelling)?,
        tokenize_spelled(right, right_script, spelling)?,
    ))
}

/// Join two texts with sandhi under the global configuration.
pub fn apply_sandhi(left: &str, right: &str) -> Result<SandhiOutcome, EngineError> {
    apply_sandhi_with(&Transducer::global(), left, right)
}

/// Join two texts with sandhi under `transducer`'s configuration.
pub fn apply_sandhi_with(
    transducer: &Transducer<'_>,
    left: &str,
    right: &str,
) -> Result<SandhiOutcome, EngineError> {
    let (left, right) = tokenize_pair_spelled(left, right, &transducer.settings().render)?;
    let (seq, rule) = transducer.join(left, right);
    debug!(rule = rule.map(SandhiRuleName::as_str), "apply_sandhi");
    Ok(SandhiOutcome {
        combined: seq.surface(),
        rule,
    })
}

/// Rule-by-rule account of joining two texts.
pub fn explain_sandhi_with(
    transducer: &Transducer<'_>,
    left: &str,
    right: &str,
) -> Result<SandhiExplanation, EngineError> {
    let (left, right) = tokenize_pair_spelled(left, right, &transducer.settings().render)?;
    Ok(transducer.explain(&left, &right))
}

/// Resolve a canonical id (`VOWEL_I_SHORT`) or a single-phoneme spelling in
/// either script (`ṛ`, `ऋ`, `ृ`). IAST spellings are folded first, so `Kh`
/// and `r̥` resolve too.
pub fn phoneme_of(name: &str) -> Option<PhonemeId> {
    if let Some(id) = PhonemeId::from_canonical_id(name) {
        return Some(id);
    }
    let script = detect(name);
    let entry = match script {
        ScriptKind::Iast => SurfaceTrie::iast().lookup(&fold_iast(name))?,
        _ => SurfaceTrie::for_script(script)?.lookup(name)?,
    };
    match entry.target {
        Target::Phoneme(id) => Some(id),
        Target::Mark(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_auto_detects_script() {
        let seq = tokenize_auto("रामः", None).unwrap();
        assert_eq!(seq.script(), ScriptKind::Devanagari);
        let seq = tokenize_auto("rāmaḥ", None).unwrap();
        assert_eq!(seq.script(), ScriptKind::Iast);
        let seq = tokenize_auto("rama", Some(ScriptKind::Devanagari)).unwrap();
        assert_eq!(seq.unrecognized_count(), 4);
    }

    #[test]
    fn test_tokenize_auto_edge_cases() {
        assert!(tokenize_auto("", None).unwrap().is_empty());
        assert_eq!(
            tokenize_auto("€€", None).unwrap_err(),
            EngineError::UnknownScript
        );
    }

    #[test]
    fn test_transliterate() {
        assert_eq!(
            transliterate("saṃskṛtam", None, ScriptKind::Devanagari).unwrap(),
            "संस्कृतम्"
        );
        assert_eq!(
            transliterate("संस्कृतम्", None, ScriptKind::Iast).unwrap(),
            "saṃskṛtam"
        );
        assert_eq!(
            transliterate("rāma", None, ScriptKind::Unknown).unwrap_err(),
            EngineError::UnknownScript
        );
        assert_eq!(transliterate("", None, ScriptKind::Iast).unwrap(), "");
    }

    #[test]
    fn test_apply_sandhi() {
        let out = apply_sandhi("sam", "gacchate").unwrap();
        assert_eq!(out.combined, "saṃgacchate");
        assert_eq!(out.rule, Some(SandhiRuleName::Anusvara));

        let out = apply_sandhi("प्रति", "एकम्").unwrap();
        assert_eq!(out.combined, "प्रत्येकम्");
        assert_eq!(out.rule, Some(SandhiRuleName::Yan));

        let out = apply_sandhi("pra", "bhavati").unwrap();
        assert_eq!(out.combined, "prabhavati");
        assert_eq!(out.rule, None);
    }

    #[test]
    fn test_apply_sandhi_empty_and_unknown() {
        assert!(matches!(
            apply_sandhi("", ""),
            Err(EngineError::InvalidInput { .. })
        ));
        let out = apply_sandhi("", "eti").unwrap();
        assert_eq!(out.combined, "eti");
        assert_eq!(out.rule, None);
        assert_eq!(apply_sandhi("€", "€"), Err(EngineError::UnknownScript));
    }

    #[test]
    fn test_apply_sandhi_unknown_side_borrows_script() {
        // ASCII digits have no script; here they are read as Devanagari,
        // which has no spelling for them.
        let out = apply_sandhi("12", "राम").unwrap();
        assert_eq!(out.combined, "12राम");
        assert_eq!(out.rule, None);
    }

    #[test]
    fn test_explain_sandhi_with_global_transducer() {
        let exp = explain_sandhi_with(&Transducer::global(), "दुस्", "चरति").unwrap();
        assert_eq!(exp.rule, Some(SandhiRuleName::Schutva));
        assert_eq!(exp.combined, "दुश्चरति");
        assert!(explain_sandhi_with(&Transducer::global(), "", "").is_err());
    }

    #[test]
    fn test_transducer_spelling_reads_its_own_anusvara() {
        let settings = crate::settings::parse_settings_toml(
            r#"
[sandhi]
nasal_assimilation = "anusvara"

[render]
iast_anusvara = "ṁ"
"#,
        )
        .unwrap();
        let table = crate::sandhi::ExceptionTable::global();
        let t = Transducer::new(&settings, table);
        let out = apply_sandhi_with(&t, "saṁ", "yogaḥ").unwrap();
        assert_eq!(out.combined, "saṁyogaḥ");
        assert_eq!(out.rule, None);
        let exp = explain_sandhi_with(&t, "saṁ", "yogaḥ").unwrap();
        assert_eq!(exp.left_final, Some(PhonemeId::Anusvara));
    }

    #[test]
    fn test_phoneme_of() {
        assert_eq!(phoneme_of("VOWEL_R_SHORT"), Some(PhonemeId::VocalicR));
        assert_eq!(phoneme_of("ṛ"), Some(PhonemeId::VocalicR));
        assert_eq!(phoneme_of("ऋ"), Some(PhonemeId::VocalicR));
        assert_eq!(phoneme_of("ृ"), Some(PhonemeId::VocalicR));
        assert_eq!(phoneme_of("Kh"), Some(PhonemeId::Kh));
        assert_eq!(phoneme_of("r\u{325}"), Some(PhonemeId::VocalicR));
        assert_eq!(phoneme_of("ṁ"), Some(PhonemeId::Anusvara));
        assert_eq!(phoneme_of("ḷ"), Some(PhonemeId::VocalicL));
        assert_eq!(phoneme_of("क"), Some(PhonemeId::K));
        assert_eq!(phoneme_of("ka"), None);
        assert_eq!(phoneme_of("।"), None);
        assert_eq!(phoneme_of(""), None);
    }
}
