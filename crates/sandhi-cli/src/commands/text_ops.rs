use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

use sandhi_engine::classify::homorganic_nasal;
use sandhi_engine::engine::{self, phoneme_of};
use sandhi_engine::error::EngineError;
use sandhi_engine::normalize::fold_iast;
use sandhi_engine::phoneme::{Category, Length, PhonemeId, Voicing};
use sandhi_engine::sandhi::{self, SandhiExplanation};
use sandhi_engine::script::{census, ScriptKind};
use sandhi_engine::tokenizer::{Token, TokenKind, TokenSequence};

const SURFACE_WIDTH: usize = 8;

fn pad(label: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(label);
    if w < width {
        format!("{label}{}", " ".repeat(width - w))
    } else {
        label.to_string()
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    die!(serde_json::to_string_pretty(value), "Error: {}")
}

pub fn detect_cmd(text: &str) {
    print!("{}", format_census(text));
}

pub fn tokenize_cmd(text: &str, script: Option<ScriptKind>, json: bool) {
    let seq = die!(engine::tokenize_auto(text, script), "Error: {}");
    if json {
        println!("{}", to_json(seq.tokens()));
    } else {
        print!("{}", format_tokens(&seq));
    }
}

pub fn translit_cmd(text: &str, from: Option<ScriptKind>, to: ScriptKind, fold: bool) {
    let out = die!(translit_text(text, from, to, fold), "Error: {}");
    println!("{out}");
}

fn translit_text(
    text: &str,
    from: Option<ScriptKind>,
    to: ScriptKind,
    fold: bool,
) -> Result<String, EngineError> {
    if fold && from != Some(ScriptKind::Devanagari) {
        return engine::transliterate(&fold_iast(text), from, to);
    }
    engine::transliterate(text, from, to)
}

pub fn classify_cmd(phoneme: &str) {
    let Some(id) = phoneme_of(phoneme) else {
        eprintln!("Error: {phoneme:?} is not a single phoneme");
        std::process::exit(1);
    };
    print!("{}", format_phoneme(id));
}

pub fn join_cmd(left: &str, right: &str, json: bool) {
    let outcome = die!(engine::apply_sandhi(left, right), "Error: {}");
    if json {
        println!("{}", to_json(&outcome));
    } else {
        let rule = outcome.rule.map_or("none", |r| r.as_str());
        println!("{}  ({rule})", outcome.combined);
    }
}

pub fn explain_cmd(left: &str, right: &str, json: bool) {
    let (l, r) = die!(engine::tokenize_pair(left, right), "Error: {}");
    let exp = sandhi::explain(&l, &r);
    if json {
        println!("{}", to_json(&exp));
    } else {
        print!("{}", format_explain(&exp));
    }
}

// --- formatting ---

pub fn format_census(text: &str) -> String {
    let c = census(text);
    format!(
        "script: {}\n  devanagari={} iast={} other={}\n",
        c.verdict(),
        c.devanagari,
        c.iast,
        c.other
    )
}

pub fn format_tokens(seq: &TokenSequence) -> String {
    let mut out = format!("=== {} tokens ({}) ===\n", seq.len(), seq.script());
    for t in seq {
        let _ = writeln!(
            out,
            "  {:>4}  {} {}",
            t.offset,
            pad(&surface_label(t), SURFACE_WIDTH),
            kind_label(t)
        );
    }
    if seq.has_unrecognized() {
        let _ = writeln!(out, "  ({} unrecognized)", seq.unrecognized_count());
    }
    out
}

fn surface_label(t: &Token) -> String {
    match t.kind {
        TokenKind::Separator => format!("{:?}", t.surface),
        _ if t.surface.is_empty() => "∅".to_string(),
        _ => t.surface.clone(),
    }
}

fn kind_label(t: &Token) -> String {
    match t.kind {
        TokenKind::Phoneme(id) if t.is_inherent() => format!("{id} (inherent)"),
        TokenKind::Phoneme(id) => id.to_string(),
        TokenKind::Mark(mark) => format!("MARK {}", mark.iast()),
        TokenKind::Separator => "SEPARATOR".to_string(),
        TokenKind::Unrecognized => "UNRECOGNIZED".to_string(),
    }
}

fn iast_of(ids: &[PhonemeId]) -> String {
    ids.iter().map(|id| id.phoneme().iast).collect()
}

pub fn format_phoneme(id: PhonemeId) -> String {
    let p = id.phoneme();
    let mut out = format!("{}  {}", p.canonical_id, p.iast);
    if let Some(deva) = p.devanagari {
        let _ = write!(out, "  {deva}");
    }
    if let Some(matra) = p.matra {
        let _ = write!(out, "  (mātrā {matra})");
    }
    out.push('\n');

    match p.category {
        Category::Vowel => {
            let length = match p.length {
                Some(Length::Short) => "short",
                Some(Length::Long) => "long",
                Some(Length::Diphthong) => "diphthong",
                None => "-",
            };
            let _ = writeln!(
                out,
                "  vowel, {length}{}",
                if p.is_ik { ", ik" } else { "" }
            );
            let guna = p.guna.map_or("-".to_string(), iast_of);
            let vrddhi = p.vrddhi.map_or("-".to_string(), iast_of);
            let _ = writeln!(out, "  guṇa: {guna}  vṛddhi: {vrddhi}");
        }
        Category::Consonant => match p.features {
            Some(f) => {
                let voicing = match f.voicing {
                    Voicing::Voiced => "voiced",
                    Voicing::Voiceless => "voiceless",
                };
                let _ = writeln!(
                    out,
                    "  consonant, {:?} {:?}, {voicing}{}",
                    f.place,
                    f.manner,
                    if f.aspirated { ", aspirated" } else { "" }
                );
                if let Some(nasal) = homorganic_nasal(id) {
                    let _ = writeln!(out, "  class nasal: {}", nasal.phoneme().iast);
                }
            }
            None => out.push_str("  consonant\n"),
        },
    }
    out
}

pub fn format_explain(exp: &SandhiExplanation) -> String {
    let label = |id: Option<PhonemeId>| id.map_or("-".to_string(), |id| id.to_string());
    let mut out = format!("=== {} + {} ===\n", exp.left, exp.right);
    let _ = writeln!(out, "  left final:    {}", label(exp.left_final));
    let _ = writeln!(out, "  right initial: {}", label(exp.right_initial));

    for check in &exp.checks {
        let status = match (check.matched, check.disabled) {
            (_, true) if check.matched => "disabled (match)",
            (_, true) => "disabled",
            (true, false) => "match",
            (false, false) => "-",
        };
        let replacement = check
            .replacement
            .as_deref()
            .map_or(String::new(), iast_of);
        let fired = if exp.rule == Some(check.rule) { "  <- fired" } else { "" };
        let _ = writeln!(
            out,
            "  {}. {} {} {}{}",
            check.priority,
            pad(check.rule.as_str(), 18),
            pad(status, 17),
            pad(&replacement, 6),
            fired
        );
    }

    let rule = exp.rule.map_or("none", |r| r.as_str());
    let _ = writeln!(out, "=> {} ({rule})", exp.combined);
    out
}
