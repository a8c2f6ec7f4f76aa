//! UniFFI surface: free functions over the global configuration, plus
//! [`SandhiEngine`] for callers that carry their own.

mod engine;
mod types;

pub use engine::SandhiEngine;
pub use types::{
    SandhiCensus, SandhiConsonantFeatures, SandhiError, SandhiExplain, SandhiOutcome,
    SandhiRuleCheck, SandhiScript, SandhiToken, SandhiTokenKind,
};

use std::path::Path;

use sandhi_core::classify::{self, grade_of};
use sandhi_core::engine::{self as ops, phoneme_of};
use sandhi_core::sandhi::{self, ExceptionTable, Transducer};
use sandhi_core::script::{self, ScriptKind};

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// ---------------------------------------------------------------------------
// Script and tokens
// ---------------------------------------------------------------------------

#[uniffi::export]
fn detect_script(text: String) -> SandhiScript {
    script::detect(&text).into()
}

#[uniffi::export]
fn script_census(text: String) -> SandhiCensus {
    script::census(&text).into()
}

/// Tokenize `text` in `script`, or in the detected script.
#[uniffi::export]
fn tokenize(text: String, script: Option<SandhiScript>) -> Result<Vec<SandhiToken>, SandhiError> {
    let seq = ops::tokenize_auto(&text, script.map(ScriptKind::from))?;
    Ok(seq.into_tokens().into_iter().map(SandhiToken::from).collect())
}

#[uniffi::export]
fn normalize(
    text: String,
    source: Option<SandhiScript>,
    target: SandhiScript,
) -> Result<String, SandhiError> {
    Ok(ops::transliterate(
        &text,
        source.map(ScriptKind::from),
        target.into(),
    )?)
}

/// Rewrite IAST into the spellings `tokenize` reads (lowercase, NFC,
/// primary spellings). Lossy.
#[uniffi::export]
fn fold_iast(text: String) -> String {
    sandhi_core::normalize::fold_iast(&text)
}

// ---------------------------------------------------------------------------
// Classification
//
// `phoneme` is a canonical id (`VOWEL_I_SHORT`) or a single-phoneme
// spelling in either script.
// ---------------------------------------------------------------------------

#[uniffi::export]
fn is_vowel(phoneme: String) -> bool {
    phoneme_of(&phoneme).is_some_and(classify::is_vowel)
}

#[uniffi::export]
fn is_consonant(phoneme: String) -> bool {
    phoneme_of(&phoneme).is_some_and(classify::is_consonant)
}

#[uniffi::export]
fn is_ik_vowel(phoneme: String) -> bool {
    phoneme_of(&phoneme).is_some_and(classify::is_ik_vowel)
}

#[uniffi::export]
fn guna_of(phoneme: String) -> Option<Vec<String>> {
    phoneme_of(&phoneme)
        .and_then(classify::guna_of)
        .map(canonical_ids)
}

#[uniffi::export]
fn vrddhi_of(phoneme: String) -> Option<Vec<String>> {
    phoneme_of(&phoneme)
        .and_then(classify::vrddhi_of)
        .map(canonical_ids)
}

/// `"guna"`, `"vrddhi"`, or `None` for a sequence of canonical ids.
#[uniffi::export]
fn grade_of_ids(ids: Vec<String>) -> Option<String> {
    let seq = ids
        .iter()
        .map(|id| phoneme_of(id))
        .collect::<Option<Vec<_>>>()?;
    grade_of(&seq).map(|g| types::grade_name(g).to_string())
}

#[uniffi::export]
fn consonant_features_of(phoneme: String) -> Option<SandhiConsonantFeatures> {
    phoneme_of(&phoneme)
        .and_then(classify::consonant_features_of)
        .map(SandhiConsonantFeatures::from)
}

fn canonical_ids(ids: &[sandhi_core::phoneme::PhonemeId]) -> Vec<String> {
    ids.iter().map(|id| id.canonical_id().to_string()).collect()
}

// ---------------------------------------------------------------------------
// Sandhi
// ---------------------------------------------------------------------------

#[uniffi::export]
fn apply_sandhi(left: String, right: String) -> Result<SandhiOutcome, SandhiError> {
    Ok(ops::apply_sandhi(&left, &right)?.into())
}

#[uniffi::export]
fn explain_sandhi(left: String, right: String) -> Result<SandhiExplain, SandhiError> {
    Ok(ops::explain_sandhi_with(&Transducer::global(), &left, &right)?.into())
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), SandhiError> {
    let content = read_config(&path)?;
    sandhi_core::settings::init_custom(content)
        .map_err(|e| SandhiError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn exceptions_load_config(path: String) -> Result<(), SandhiError> {
    let content = read_config(&path)?;
    ExceptionTable::init_custom(content)
        .map_err(|e| SandhiError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    sandhi_core::settings::default_toml().to_string()
}

#[uniffi::export]
fn exceptions_default_config() -> String {
    sandhi::default_exceptions_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}

fn read_config(path: &str) -> Result<String, SandhiError> {
    std::fs::read_to_string(path).map_err(|e| SandhiError::Io {
        msg: format!("{path}: {e}"),
    })
}
