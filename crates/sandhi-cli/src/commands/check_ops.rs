//! Sandhi accuracy corpus: `[[case]]` entries joined and compared against
//! their expected result and rule.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::process;

use serde::{Deserialize, Serialize};

use sandhi_engine::engine::apply_sandhi;
use sandhi_engine::sandhi::{ParseRuleNameError, SandhiRuleName};

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse corpus TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("case {index}: {source}")]
    Rule {
        index: usize,
        source: ParseRuleNameError,
    },
    #[error("corpus has no cases")]
    Empty,
}

#[derive(Debug, Deserialize)]
pub struct CaseCorpus {
    #[serde(default, rename = "case")]
    pub cases: Vec<SandhiCase>,
}

#[derive(Debug, Deserialize)]
pub struct SandhiCase {
    pub left: String,
    pub right: String,
    pub expected: String,
    /// Expected rule name, or `"none"` for plain concatenation. Unchecked
    /// when absent.
    #[serde(default)]
    pub rule: Option<String>,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

impl SandhiCase {
    /// `Some(None)` expects plain concatenation; `None` leaves the rule
    /// unchecked.
    fn expected_rule(&self) -> Result<Option<Option<SandhiRuleName>>, ParseRuleNameError> {
        match self.rule.as_deref() {
            None => Ok(None),
            Some("none") => Ok(Some(None)),
            Some(name) => name.parse().map(|r| Some(Some(r))),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub left: String,
    pub right: String,
    pub expected: String,
    pub actual: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_rule: Option<String>,
    pub actual_rule: String,
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct CheckSummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub pass_rate: String,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub results: Vec<CheckResult>,
    pub summary: CheckSummary,
}

pub fn parse_corpus(content: &str) -> Result<CaseCorpus, CorpusError> {
    let corpus: CaseCorpus = toml::from_str(content)?;
    if corpus.cases.is_empty() {
        return Err(CorpusError::Empty);
    }
    for (index, case) in corpus.cases.iter().enumerate() {
        case.expected_rule()
            .map_err(|source| CorpusError::Rule { index, source })?;
    }
    Ok(corpus)
}

pub fn load_corpus(path: &str) -> Result<CaseCorpus, CorpusError> {
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_string(),
        source,
    })?;
    parse_corpus(&content)
}

fn rule_label(rule: Option<SandhiRuleName>) -> String {
    rule.map_or("none", SandhiRuleName::as_str).to_string()
}

/// Run every case whose expected rule matches `rule_filter` (all cases
/// when `None`).
pub fn run_cases(corpus: &CaseCorpus, rule_filter: Option<&str>) -> CheckReport {
    let mut results = Vec::new();
    for case in &corpus.cases {
        if rule_filter.is_some() && case.rule.as_deref() != rule_filter {
            continue;
        }
        let expected_rule = case.expected_rule().ok().flatten();
        let mut result = CheckResult {
            left: case.left.clone(),
            right: case.right.clone(),
            expected: case.expected.clone(),
            actual: String::new(),
            expected_rule: case.rule.clone(),
            actual_rule: String::new(),
            status: CheckStatus::Skip,
            note: case.note.clone(),
        };
        if case.skip {
            results.push(result);
            continue;
        }

        match apply_sandhi(&case.left, &case.right) {
            Ok(outcome) => {
                let rule_ok = expected_rule.map_or(true, |r| r == outcome.rule);
                result.status = if outcome.combined == case.expected && rule_ok {
                    CheckStatus::Pass
                } else {
                    CheckStatus::Fail
                };
                result.actual = outcome.combined;
                result.actual_rule = rule_label(outcome.rule);
            }
            Err(e) => {
                result.status = CheckStatus::Fail;
                result.actual = format!("error: {e}");
            }
        }
        results.push(result);
    }

    let count = |status| results.iter().filter(|r| r.status == status).count();
    let (pass, fail, skip) = (
        count(CheckStatus::Pass),
        count(CheckStatus::Fail),
        count(CheckStatus::Skip),
    );
    let tested = results.len() - skip;
    let rate = if tested > 0 {
        pass as f64 / tested as f64 * 100.0
    } else {
        0.0
    };
    let summary = CheckSummary {
        total: results.len(),
        pass,
        fail,
        skip,
        pass_rate: format!("{rate:.1}%"),
    };
    CheckReport { results, summary }
}

/// Text report grouped by expected rule.
pub fn format_report(report: &CheckReport, verbose: bool) -> String {
    let mut grouped: BTreeMap<&str, Vec<&CheckResult>> = BTreeMap::new();
    for r in &report.results {
        let key = r.expected_rule.as_deref().unwrap_or("(any)");
        grouped.entry(key).or_default().push(r);
    }

    let mut out = String::new();
    for (rule, group) in &grouped {
        let _ = writeln!(out, "\n=== {} ({} cases) ===", rule, group.len());
        for r in group {
            match r.status {
                CheckStatus::Pass => {
                    if verbose {
                        let _ = writeln!(
                            out,
                            "  \u{2713} {} + {} \u{2192} {}",
                            r.left, r.right, r.expected
                        );
                    }
                }
                CheckStatus::Fail => {
                    let _ = writeln!(
                        out,
                        "  \u{2717} {} + {} \u{2192} {} (got: {} [{}])",
                        r.left, r.right, r.expected, r.actual, r.actual_rule
                    );
                }
                CheckStatus::Skip => {
                    let reason = r.note.as_deref().unwrap_or("known failure");
                    let _ = writeln!(out, "  - {} + {} [skip: {}]", r.left, r.right, reason);
                }
            }
        }
    }

    let s = &report.summary;
    let _ = writeln!(out, "\n=== Summary ===");
    let _ = writeln!(out, "  Total:     {}", s.total);
    let _ = writeln!(out, "  Pass:      {:>3}", s.pass);
    let _ = writeln!(out, "  Fail:      {:>3}", s.fail);
    let _ = writeln!(out, "  Skip:      {:>3}", s.skip);
    let _ = writeln!(
        out,
        "  Pass rate: {} ({}/{})",
        s.pass_rate,
        s.pass,
        s.total - s.skip
    );
    out
}

pub fn check_cmd(corpus_file: &str, rule: Option<&str>, verbose: bool, json: bool) {
    let corpus = die!(load_corpus(corpus_file), "Error: {}");
    let report = run_cases(&corpus, rule);
    if report.results.is_empty() {
        eprintln!("No cases match the given filters");
        process::exit(1);
    }

    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&report), "Error: {}")
        );
    } else {
        print!("{}", format_report(&report, verbose));
    }

    if report.summary.fail > 0 {
        process::exit(1);
    }
}
