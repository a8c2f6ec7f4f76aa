use sandhi_core::classify::Grade;
use sandhi_core::engine::SandhiOutcome as CoreOutcome;
use sandhi_core::error::EngineError;
use sandhi_core::phoneme::{ConsonantFeatures, Manner, Place, Voicing};
use sandhi_core::sandhi::SandhiExplanation;
use sandhi_core::script::{ScriptCensus, ScriptKind};
use sandhi_core::tokenizer::{Token, TokenKind};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum SandhiError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid input: {msg}")]
    InvalidInput { msg: String },
    #[error("script could not be determined")]
    UnknownScript,
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

impl From<EngineError> for SandhiError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::InvalidInput { reason } => SandhiError::InvalidInput { msg: reason },
            EngineError::UnknownScript => SandhiError::UnknownScript,
        }
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum SandhiScript {
    Iast,
    Devanagari,
    Unknown,
}

impl From<ScriptKind> for SandhiScript {
    fn from(s: ScriptKind) -> Self {
        match s {
            ScriptKind::Iast => SandhiScript::Iast,
            ScriptKind::Devanagari => SandhiScript::Devanagari,
            ScriptKind::Unknown => SandhiScript::Unknown,
        }
    }
}

impl From<SandhiScript> for ScriptKind {
    fn from(s: SandhiScript) -> Self {
        match s {
            SandhiScript::Iast => ScriptKind::Iast,
            SandhiScript::Devanagari => ScriptKind::Devanagari,
            SandhiScript::Unknown => ScriptKind::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum SandhiTokenKind {
    Phoneme { canonical_id: String },
    /// Daṇḍa, avagraha or digit, named by its IAST spelling.
    Mark { iast: String },
    Separator,
    Unrecognized,
}

impl From<TokenKind> for SandhiTokenKind {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Phoneme(id) => SandhiTokenKind::Phoneme {
                canonical_id: id.canonical_id().to_string(),
            },
            TokenKind::Mark(mark) => SandhiTokenKind::Mark {
                iast: mark.iast().to_string(),
            },
            TokenKind::Separator => SandhiTokenKind::Separator,
            TokenKind::Unrecognized => SandhiTokenKind::Unrecognized,
        }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, uniffi::Record)]
pub struct SandhiToken {
    pub kind: SandhiTokenKind,
    pub surface: String,
    pub script: SandhiScript,
    /// Byte offset in the tokenized text.
    pub offset: u32,
}

impl From<Token> for SandhiToken {
    fn from(t: Token) -> Self {
        Self {
            kind: t.kind.into(),
            surface: t.surface,
            script: t.script.into(),
            offset: t.offset as u32,
        }
    }
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct SandhiCensus {
    pub devanagari: u32,
    pub iast: u32,
    pub other: u32,
    pub verdict: SandhiScript,
}

impl From<ScriptCensus> for SandhiCensus {
    fn from(c: ScriptCensus) -> Self {
        Self {
            devanagari: c.devanagari as u32,
            iast: c.iast as u32,
            other: c.other as u32,
            verdict: c.verdict().into(),
        }
    }
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct SandhiOutcome {
    pub combined: String,
    /// Kebab-case rule name, e.g. `savarna-dirgha`; `None` for plain
    /// concatenation.
    pub rule: Option<String>,
}

impl From<CoreOutcome> for SandhiOutcome {
    fn from(o: CoreOutcome) -> Self {
        Self {
            combined: o.combined,
            rule: o.rule.map(|r| r.as_str().to_string()),
        }
    }
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct SandhiConsonantFeatures {
    pub place: String,
    pub manner: String,
    pub voiced: bool,
    pub aspirated: bool,
}

impl From<ConsonantFeatures> for SandhiConsonantFeatures {
    fn from(f: ConsonantFeatures) -> Self {
        Self {
            place: place_name(f.place).to_string(),
            manner: manner_name(f.manner).to_string(),
            voiced: f.voicing == Voicing::Voiced,
            aspirated: f.aspirated,
        }
    }
}

fn place_name(place: Place) -> &'static str {
    match place {
        Place::Velar => "velar",
        Place::Palatal => "palatal",
        Place::Retroflex => "retroflex",
        Place::Dental => "dental",
        Place::Labial => "labial",
        Place::Glottal => "glottal",
        Place::Nasal => "nasal",
    }
}

fn manner_name(manner: Manner) -> &'static str {
    match manner {
        Manner::Stop => "stop",
        Manner::Nasal => "nasal",
        Manner::Semivowel => "semivowel",
        Manner::Sibilant => "sibilant",
        Manner::Fricative => "fricative",
        Manner::Anusvara => "anusvara",
        Manner::Visarga => "visarga",
        Manner::Candrabindu => "candrabindu",
    }
}

pub(super) fn grade_name(grade: Grade) -> &'static str {
    match grade {
        Grade::Guna => "guna",
        Grade::Vrddhi => "vrddhi",
    }
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct SandhiRuleCheck {
    pub priority: u32,
    pub rule: String,
    pub matched: bool,
    pub disabled: bool,
    /// Canonical ids placed at the seam when the rule matches.
    pub replacement: Option<Vec<String>>,
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct SandhiExplain {
    pub left_final: Option<String>,
    pub right_initial: Option<String>,
    pub checks: Vec<SandhiRuleCheck>,
    pub rule: Option<String>,
    pub combined: String,
}

impl From<SandhiExplanation> for SandhiExplain {
    fn from(e: SandhiExplanation) -> Self {
        Self {
            left_final: e.left_final.map(|id| id.canonical_id().to_string()),
            right_initial: e.right_initial.map(|id| id.canonical_id().to_string()),
            checks: e
                .checks
                .into_iter()
                .map(|c| SandhiRuleCheck {
                    priority: c.priority as u32,
                    rule: c.rule.as_str().to_string(),
                    matched: c.matched,
                    disabled: c.disabled,
                    replacement: c.replacement.map(|ids| {
                        ids.iter().map(|id| id.canonical_id().to_string()).collect()
                    }),
                })
                .collect(),
            rule: e.rule.map(|r| r.as_str().to_string()),
            combined: e.combined,
        }
    }
}
