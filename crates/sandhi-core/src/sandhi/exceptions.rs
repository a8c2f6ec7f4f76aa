//! Lexical exception table: whole-morpheme pairs whose sandhi result is
//! listed rather than derived. Follows the same OnceLock pattern as the
//! settings: `init_custom` before first use, `global()` afterwards.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::normalize::fold_iast;
use crate::phoneme::PhonemeId;
use crate::script::ScriptKind;
use crate::tokenizer::tokenize;

pub const DEFAULT_EXCEPTIONS_TOML: &str = include_str!("default_exceptions.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Deserialize)]
struct ExceptionConfig {
    #[serde(default)]
    exception: Vec<ExceptionEntry>,
}

/// One listed pair, spelled in IAST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionEntry {
    pub left: String,
    pub right: String,
    pub result: String,
    /// Grammatical authority for the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExceptionConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[[exception]] table is empty")]
    Empty,
    #[error("exception {index}: {field} {value:?} is not plain IAST")]
    InvalidSpelling {
        index: usize,
        field: &'static str,
        value: String,
    },
    #[error("duplicate exception: {left} + {right}")]
    Duplicate { left: String, right: String },
    #[error("exception table already initialized")]
    AlreadyInitialized,
}

/// Parse and validate exception TOML.
pub fn parse_exceptions_toml(toml_str: &str) -> Result<Vec<ExceptionEntry>, ExceptionConfigError> {
    let config: ExceptionConfig =
        toml::from_str(toml_str).map_err(|e| ExceptionConfigError::Parse(e.to_string()))?;

    if config.exception.is_empty() {
        return Err(ExceptionConfigError::Empty);
    }

    let mut seen = HashSet::new();
    for (index, entry) in config.exception.iter().enumerate() {
        let left = phonemes_of(index, "left", &entry.left)?;
        let right = phonemes_of(index, "right", &entry.right)?;
        phonemes_of(index, "result", &entry.result)?;
        if !seen.insert((left, right)) {
            return Err(ExceptionConfigError::Duplicate {
                left: entry.left.clone(),
                right: entry.right.clone(),
            });
        }
    }

    Ok(config.exception)
}

/// Phonemes of an IAST spelling; separators, marks and unknown characters
/// are rejected.
fn phonemes_of(
    index: usize,
    field: &'static str,
    value: &str,
) -> Result<Vec<PhonemeId>, ExceptionConfigError> {
    let invalid = || ExceptionConfigError::InvalidSpelling {
        index,
        field,
        value: value.to_string(),
    };
    // Either anusvāra dot and any case are accepted in the table.
    let seq = tokenize(&fold_iast(value), ScriptKind::Iast).map_err(|_| invalid())?;
    if seq.is_empty() {
        return Err(invalid());
    }
    seq.iter()
        .map(|t| t.phoneme_id().ok_or_else(invalid))
        .collect()
}

/// Returns the embedded default exceptions TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_EXCEPTIONS_TOML
}

pub struct ExceptionTable {
    pairs: HashMap<(Vec<PhonemeId>, Vec<PhonemeId>), Vec<PhonemeId>>,
    entries: Vec<ExceptionEntry>,
}

impl ExceptionTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), ExceptionConfigError> {
        // Validate eagerly
        parse_exceptions_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| ExceptionConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static ExceptionTable {
        static INSTANCE: OnceLock<ExceptionTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_EXCEPTIONS_TOML);
            ExceptionTable::from_toml(toml_str).expect("exceptions TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, ExceptionConfigError> {
        let entries = parse_exceptions_toml(toml_str)?;
        let mut pairs = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let key = (
                phonemes_of(index, "left", &entry.left)?,
                phonemes_of(index, "right", &entry.right)?,
            );
            pairs.insert(key, phonemes_of(index, "result", &entry.result)?);
        }
        Ok(Self { pairs, entries })
    }

    /// Listed result for a whole `left + right` pair.
    pub fn lookup(&self, left: &[PhonemeId], right: &[PhonemeId]) -> Option<&[PhonemeId]> {
        self.pairs
            .get(&(left.to_vec(), right.to_vec()))
            .map(Vec::as_slice)
    }

    pub fn entries(&self) -> &[ExceptionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
