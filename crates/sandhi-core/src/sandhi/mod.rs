//! Sandhi at a morpheme boundary.
//!
//! Both sides are reduced to canonical units, the first enabled rule whose
//! predicate holds rewrites the seam, and the result is rendered back in
//! the script of the left side. Rules only see canonical units, so IAST,
//! Devanagari and mixed input are treated alike.

mod exceptions;
mod rules;
#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::normalize::{render_sequence, to_canonical, CanonicalSequence, Unit};
use crate::phoneme::PhonemeId;
use crate::settings::{settings, Settings};
use crate::tokenizer::TokenSequence;

pub use exceptions::{
    default_toml as default_exceptions_toml, parse_exceptions_toml, ExceptionConfigError,
    ExceptionEntry, ExceptionTable, DEFAULT_EXCEPTIONS_TOML,
};

use rules::RULES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SandhiRuleName {
    LexicalException,
    Anusvara,
    Schutva,
    SavarnaDirgha,
    Guna,
    Vrddhi,
    Yan,
    Visarga,
    /// Off in the default settings.
    Ayadi,
}

impl SandhiRuleName {
    /// Every rule in priority order.
    pub const ALL: [SandhiRuleName; 9] = [
        SandhiRuleName::LexicalException,
        SandhiRuleName::Anusvara,
        SandhiRuleName::Schutva,
        SandhiRuleName::SavarnaDirgha,
        SandhiRuleName::Guna,
        SandhiRuleName::Vrddhi,
        SandhiRuleName::Yan,
        SandhiRuleName::Visarga,
        SandhiRuleName::Ayadi,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SandhiRuleName::LexicalException => "lexical-exception",
            SandhiRuleName::Anusvara => "anusvara",
            SandhiRuleName::Schutva => "schutva",
            SandhiRuleName::SavarnaDirgha => "savarna-dirgha",
            SandhiRuleName::Guna => "guna",
            SandhiRuleName::Vrddhi => "vrddhi",
            SandhiRuleName::Yan => "yan",
            SandhiRuleName::Ayadi => "ayadi",
            SandhiRuleName::Visarga => "visarga",
        }
    }

    /// Aṣṭādhyāyī reference for the regular rules.
    pub fn sutra(self) -> Option<&'static str> {
        match self {
            SandhiRuleName::LexicalException => None,
            SandhiRuleName::Anusvara => Some("8.3.23-24 mo 'nusvāraḥ, naś cāpadāntasya jhali"),
            SandhiRuleName::Schutva => Some("8.4.40 stoḥ ścunā ścuḥ"),
            SandhiRuleName::SavarnaDirgha => Some("6.1.101 akaḥ savarṇe dīrghaḥ"),
            SandhiRuleName::Guna => Some("6.1.87 ād guṇaḥ"),
            SandhiRuleName::Vrddhi => Some("6.1.88 vṛddhir eci"),
            SandhiRuleName::Yan => Some("6.1.77 iko yaṇ aci"),
            SandhiRuleName::Ayadi => Some("6.1.78 eco 'yavāyāvaḥ"),
            SandhiRuleName::Visarga => Some("6.1.114 haśi ca"),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SandhiRuleName::LexicalException => "listed pair with an irregular result",
            SandhiRuleName::Anusvara => "final nasal before a consonant becomes anusvāra",
            SandhiRuleName::Schutva => "final s before c/k becomes ś",
            SandhiRuleName::SavarnaDirgha => "similar vowels merge into the long vowel",
            SandhiRuleName::Guna => "a/ā + ik-vowel gives its guṇa",
            SandhiRuleName::Vrddhi => "a/ā + e/ai/o/au gives ai/au",
            SandhiRuleName::Yan => "ik-vowel before a dissimilar vowel becomes y/v/r/l",
            SandhiRuleName::Ayadi => "e/ai/o/au before a vowel become ay/āy/av/āv",
            SandhiRuleName::Visarga => "aḥ before a voiced consonant becomes o",
        }
    }
}

impl fmt::Display for SandhiRuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sandhi rule: {0}")]
pub struct ParseRuleNameError(String);

impl FromStr for SandhiRuleName {
    type Err = ParseRuleNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SandhiRuleName::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| ParseRuleNameError(s.to_string()))
    }
}

/// The two canonical sides of a join, plus the configuration rules consult.
pub(crate) struct Boundary<'a> {
    pub left: &'a [Unit],
    pub right: &'a [Unit],
    pub settings: &'a Settings,
    pub exceptions: &'a ExceptionTable,
}

impl Boundary<'_> {
    pub fn last(&self) -> Option<PhonemeId> {
        self.left.last().and_then(Unit::phoneme_id)
    }

    pub fn first(&self) -> Option<PhonemeId> {
        self.right.first().and_then(Unit::phoneme_id)
    }

    /// Final two phonemes of the left side, in order.
    pub fn last_two(&self) -> Option<(PhonemeId, PhonemeId)> {
        match self.left {
            [.., a, b] => Some((a.phoneme_id()?, b.phoneme_id()?)),
            _ => None,
        }
    }
}

/// Replace the last `left_drop` units of the left side and the first
/// `right_drop` units of the right side with `insert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Splice {
    pub left_drop: usize,
    pub right_drop: usize,
    pub insert: Vec<PhonemeId>,
}

impl Splice {
    fn apply(&self, left: &[Unit], right: &[Unit]) -> CanonicalSequence {
        let keep_left = left.len().saturating_sub(self.left_drop);
        let skip_right = self.right_drop.min(right.len());
        left[..keep_left]
            .iter()
            .cloned()
            .chain(self.insert.iter().copied().map(Unit::Phoneme))
            .chain(right[skip_right..].iter().cloned())
            .collect()
    }
}

/// Outcome of every rule for one boundary, for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct SandhiExplanation {
    pub left: String,
    pub right: String,
    pub left_final: Option<PhonemeId>,
    pub right_initial: Option<PhonemeId>,
    pub checks: Vec<RuleCheck>,
    pub rule: Option<SandhiRuleName>,
    pub combined: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleCheck {
    /// 1-based position in the rule order.
    pub priority: usize,
    pub rule: SandhiRuleName,
    pub matched: bool,
    pub disabled: bool,
    /// Phonemes the rule puts at the seam when it matches.
    pub replacement: Option<Vec<PhonemeId>>,
}

/// Sandhi under an explicit configuration.
#[derive(Clone, Copy)]
pub struct Transducer<'a> {
    settings: &'a Settings,
    exceptions: &'a ExceptionTable,
}

impl<'a> Transducer<'a> {
    pub fn new(settings: &'a Settings, exceptions: &'a ExceptionTable) -> Self {
        Self {
            settings,
            exceptions,
        }
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    /// Transducer over the global settings and exception table.
    pub fn global() -> Transducer<'static> {
        Transducer::new(settings(), ExceptionTable::global())
    }

    /// Join two morphemes, returning the combined sequence and the rule that
    /// fired. An empty side returns the other side unchanged.
    pub fn join(
        &self,
        left: TokenSequence,
        right: TokenSequence,
    ) -> (TokenSequence, Option<SandhiRuleName>) {
        if left.is_empty() {
            return (right, None);
        }
        if right.is_empty() {
            return (left, None);
        }
        let _span = debug_span!("sandhi_join", left = %left.surface(), right = %right.surface())
            .entered();

        let left_units = to_canonical(&left);
        let right_units = to_canonical(&right);
        let boundary = self.boundary(&left_units, &right_units);
        let chosen = RULES
            .iter()
            .filter(|rule| self.settings.rule_enabled(rule.name()))
            .find_map(|rule| rule.apply(&boundary).map(|splice| (rule.name(), splice)));

        let (combined, rule) = match chosen {
            Some((name, splice)) => (splice.apply(boundary.left, boundary.right), Some(name)),
            None => (concat(boundary.left, boundary.right), None),
        };
        let output = render_sequence(&combined, left.script(), &self.settings.render);
        debug!(rule = rule.map(SandhiRuleName::as_str), combined = %output.surface());
        (output, rule)
    }

    /// Evaluate every rule at the boundary and report which one wins.
    pub fn explain(&self, left: &TokenSequence, right: &TokenSequence) -> SandhiExplanation {
        let _span = debug_span!("sandhi_explain").entered();

        let left_units = to_canonical(left);
        let right_units = to_canonical(right);
        let boundary = self.boundary(&left_units, &right_units);
        let both_sides = !left.is_empty() && !right.is_empty();

        let mut checks = Vec::with_capacity(RULES.len());
        let mut chosen = None;
        for (i, rule) in RULES.iter().enumerate() {
            let splice = if both_sides { rule.apply(&boundary) } else { None };
            let disabled = !self.settings.rule_enabled(rule.name());
            if !disabled && chosen.is_none() {
                if let Some(splice) = &splice {
                    chosen = Some((rule.name(), splice.clone()));
                }
            }
            checks.push(RuleCheck {
                priority: i + 1,
                rule: rule.name(),
                matched: splice.is_some(),
                disabled,
                replacement: splice.map(|s| s.insert),
            });
        }

        let (combined, rule) = match (&chosen, both_sides) {
            (Some((name, splice)), _) => (
                render_sequence(
                    &splice.apply(boundary.left, boundary.right),
                    left.script(),
                    &self.settings.render,
                )
                .surface(),
                Some(*name),
            ),
            (None, true) => (
                render_sequence(
                    &concat(boundary.left, boundary.right),
                    left.script(),
                    &self.settings.render,
                )
                .surface(),
                None,
            ),
            (None, false) if left.is_empty() => (right.surface(), None),
            (None, false) => (left.surface(), None),
        };
        debug!(rule = rule.map(SandhiRuleName::as_str), checks = checks.len());

        SandhiExplanation {
            left: left.surface(),
            right: right.surface(),
            left_final: boundary.last(),
            right_initial: boundary.first(),
            checks,
            rule,
            combined,
        }
    }

    fn boundary<'b>(
        &'b self,
        left: &'b CanonicalSequence,
        right: &'b CanonicalSequence,
    ) -> Boundary<'b> {
        Boundary {
            left: left.units(),
            right: right.units(),
            settings: self.settings,
            exceptions: self.exceptions,
        }
    }
}

fn concat(left: &[Unit], right: &[Unit]) -> CanonicalSequence {
    left.iter().chain(right).cloned().collect()
}

/// Join under the global configuration. See [`Transducer::join`].
pub fn join(left: TokenSequence, right: TokenSequence) -> (TokenSequence, Option<SandhiRuleName>) {
    Transducer::global().join(left, right)
}

/// Explain under the global configuration. See [`Transducer::explain`].
pub fn explain(left: &TokenSequence, right: &TokenSequence) -> SandhiExplanation {
    Transducer::global().explain(left, right)
}
