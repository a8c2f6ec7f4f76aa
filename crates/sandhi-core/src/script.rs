//! Script detection over the Devanagari block and the IAST alphabet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::unicode::{is_danda, is_devanagari, is_iast_letter, is_separator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptKind {
    Iast,
    Devanagari,
    Unknown,
}

impl ScriptKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ScriptKind::Iast => "iast",
            ScriptKind::Devanagari => "devanagari",
            ScriptKind::Unknown => "unknown",
        }
    }

    pub fn is_known(self) -> bool {
        self != ScriptKind::Unknown
    }
}

impl fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown script name: {0} (expected iast or devanagari)")]
pub struct ParseScriptError(String);

impl FromStr for ScriptKind {
    type Err = ParseScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iast" | "latin" => Ok(ScriptKind::Iast),
            "devanagari" | "deva" => Ok(ScriptKind::Devanagari),
            "unknown" => Ok(ScriptKind::Unknown),
            _ => Err(ParseScriptError(s.to_string())),
        }
    }
}

/// Per-script character counts. Whitespace, punctuation, daṇḍas and ASCII
/// digits are not counted at all.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScriptCensus {
    pub devanagari: usize,
    pub iast: usize,
    pub other: usize,
}

impl ScriptCensus {
    /// Majority script; an exact tie or no matched character is `Unknown`.
    pub fn verdict(&self) -> ScriptKind {
        use std::cmp::Ordering;
        match self.devanagari.cmp(&self.iast) {
            Ordering::Greater => ScriptKind::Devanagari,
            Ordering::Less => ScriptKind::Iast,
            Ordering::Equal => ScriptKind::Unknown,
        }
    }
}

pub fn census(text: &str) -> ScriptCensus {
    let mut counts = ScriptCensus::default();
    for c in text.chars() {
        if is_devanagari(c) && !is_danda(c) {
            counts.devanagari += 1;
        } else if is_separator(c) || c.is_ascii_digit() {
            continue;
        } else if is_iast_letter(c) {
            counts.iast += 1;
        } else {
            counts.other += 1;
        }
    }
    counts
}

/// Classify `text` as IAST, Devanagari or Unknown. Empty input is `Unknown`,
/// not an error.
pub fn detect(text: &str) -> ScriptKind {
    census(text).verdict()
}
