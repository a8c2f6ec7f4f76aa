use super::*;
use crate::script::{detect, ScriptKind};
use crate::settings::parse_settings_toml;
use crate::tokenizer::tokenize;

use SandhiRuleName::*;

fn tok(text: &str) -> TokenSequence {
    let script = match detect(text) {
        ScriptKind::Unknown => ScriptKind::Iast,
        known => known,
    };
    tokenize(text, script).unwrap()
}

fn join_str(left: &str, right: &str) -> (String, Option<SandhiRuleName>) {
    let (seq, rule) = join(tok(left), tok(right));
    (seq.surface(), rule)
}

fn assert_join(left: &str, right: &str, expected: &str, rule: Option<SandhiRuleName>) {
    assert_eq!(
        join_str(left, right),
        (expected.to_string(), rule),
        "{left} + {right}"
    );
}

fn transducer_toml(settings_toml: &str) -> (Settings, ExceptionTable) {
    (
        parse_settings_toml(settings_toml).unwrap(),
        ExceptionTable::from_toml(DEFAULT_EXCEPTIONS_TOML).unwrap(),
    )
}

// --- the canonical examples, IAST ---

#[test]
fn test_anusvara() {
    assert_join("sam", "gacchate", "saṃgacchate", Some(Anusvara));
}

#[test]
fn test_anusvara_covers_every_nasal() {
    assert_join("tan", "gacchati", "taṃgacchati", Some(Anusvara));
    assert_join("rājan", "bhavati", "rājaṃbhavati", Some(Anusvara));
    assert_join("prāṅ", "mukhaḥ", "prāṃmukhaḥ", Some(Anusvara));
    assert_join("तन्", "गच्छति", "तंगच्छति", Some(Anusvara));
    // A nasal before a vowel or a sign stays.
    assert_join("rājan", "iva", "rājaniva", None);
    assert_join("tan", "ḥ", "tanḥ", None);
}

#[test]
fn test_schutva() {
    assert_join("dus", "carati", "duścarati", Some(Schutva));
    assert_join("dus", "kṛtam", "duśkṛtam", Some(Schutva));
    assert_join("dus", "gamaḥ", "dusgamaḥ", None);
}

#[test]
fn test_savarna_dirgha() {
    assert_join("su", "uktam", "sūktam", Some(SavarnaDirgha));
    assert_join("pari", "īkṣate", "parīkṣate", Some(SavarnaDirgha));
    assert_join("deva", "ālayaḥ", "devālayaḥ", Some(SavarnaDirgha));
}

#[test]
fn test_guna() {
    assert_join("mahā", "indraḥ", "mahendraḥ", Some(Guna));
    assert_join("upa", "ikṣate", "upekṣate", Some(Guna));
    assert_join("mahā", "ṛṣiḥ", "maharṣiḥ", Some(Guna));
}

#[test]
fn test_vrddhi() {
    assert_join("pra", "eti", "praiti", Some(Vrddhi));
    assert_join("mahā", "auṣadhiḥ", "mahauṣadhiḥ", Some(Vrddhi));
    assert_join("deva", "aiśvaryam", "devaiśvaryam", Some(Vrddhi));
}

#[test]
fn test_yan() {
    assert_join("prati", "ekam", "pratyekam", Some(Yan));
    assert_join("su", "āgatam", "svāgatam", Some(Yan));
    assert_join("madhu", "ariḥ", "madhvariḥ", Some(Yan));
}

#[test]
fn test_ayadi_is_off_by_default() {
    assert_join("vane", "api", "vaneapi", None);
    assert_join("te", "eva", "teeva", None);
    assert_join("ne", "anam", "neanam", None);
}

#[test]
fn test_ayadi_when_enabled() {
    let (settings, table) = transducer_toml(
        r#"
[sandhi]
nasal_assimilation = "anusvara"
disabled_rules = []

[render]
iast_anusvara = "ṃ"
"#,
    );
    let t = Transducer::new(&settings, &table);
    for (left, right, expected) in [
        ("ne", "anam", "nayanam"),
        ("bho", "ati", "bhavati"),
        ("nau", "ikaḥ", "nāvikaḥ"),
        ("ने", "अनम्", "नयनम्"),
    ] {
        let (seq, rule) = t.join(tok(left), tok(right));
        assert_eq!((seq.surface(), rule), (expected.to_string(), Some(Ayadi)));
    }
}

#[test]
fn test_visarga() {
    assert_join("rāmaḥ", "gacchati", "rāmogacchati", Some(Visarga));
    // Voiceless initial: no rule.
    assert_join("rāmaḥ", "tiṣṭhati", "rāmaḥtiṣṭhati", None);
}

#[test]
fn test_default_concatenation() {
    assert_join("pra", "bhavati", "prabhavati", None);
    assert_join("sam", "ādhiḥ", "samādhiḥ", None);
}

#[test]
fn test_lexical_exception_precedes_regular_rules() {
    assert_join("pra", "ūḍhaḥ", "prauḍhaḥ", Some(LexicalException));
    assert_join("go", "agram", "gavāgram", Some(LexicalException));
    assert_join("manas", "īṣā", "manīṣā", Some(LexicalException));
    // A longer left side is no longer the listed morpheme.
    assert_join("upra", "ūḍhaḥ", "uproḍhaḥ", Some(Guna));
}

// --- the same examples, Devanagari ---

#[test]
fn test_devanagari_examples() {
    assert_join("सम्", "गच्छते", "संगच्छते", Some(Anusvara));
    assert_join("दुस्", "चरति", "दुश्चरति", Some(Schutva));
    assert_join("सु", "उक्तम्", "सूक्तम्", Some(SavarnaDirgha));
    assert_join("परि", "ईक्षते", "परीक्षते", Some(SavarnaDirgha));
    assert_join("महा", "इन्द्रः", "महेन्द्रः", Some(Guna));
    assert_join("उप", "इक्षते", "उपेक्षते", Some(Guna));
    assert_join("प्र", "एति", "प्रैति", Some(Vrddhi));
    assert_join("प्रति", "एकम्", "प्रत्येकम्", Some(Yan));
    assert_join("ने", "अनम्", "नेअनम्", None);
    assert_join("रामः", "गच्छति", "रामोगच्छति", Some(Visarga));
    assert_join("प्र", "भवति", "प्रभवति", None);
    assert_join("प्र", "ऊढः", "प्रौढः", Some(LexicalException));
}

#[test]
fn test_mixed_scripts_render_in_left_script() {
    assert_join("सम्", "gacchate", "संगच्छते", Some(Anusvara));
    assert_join("prati", "एकम्", "pratyekam", Some(Yan));
}

#[test]
fn test_empty_side_returns_other_unchanged() {
    let right = tok("rāma");
    let (seq, rule) = join(tok(""), right.clone());
    assert_eq!(seq, right);
    assert_eq!(rule, None);

    let left = tok("रामः");
    let (seq, rule) = join(left.clone(), tok(""));
    assert_eq!(seq, left);
    assert_eq!(rule, None);
}

#[test]
fn test_separator_at_boundary_blocks_rules() {
    assert_join("mahā ", "indraḥ", "mahā indraḥ", None);
}

#[test]
fn test_output_tokens_match_retokenization() {
    for (left, right) in [
        ("sam", "gacchate"),
        ("प्रति", "एकम्"),
        ("रामः", "गच्छति"),
        ("pra", "bhavati"),
    ] {
        let (seq, _) = join(tok(left), tok(right));
        let retokenized = tokenize(&seq.surface(), seq.script()).unwrap();
        assert_eq!(seq, retokenized, "{left} + {right}");
    }
}

// --- configuration ---

#[test]
fn test_homorganic_nasal_setting() {
    let (settings, table) = transducer_toml(
        r#"
[sandhi]
nasal_assimilation = "homorganic"

[render]
iast_anusvara = "ṃ"
"#,
    );
    let t = Transducer::new(&settings, &table);

    let (seq, rule) = t.join(tok("sam"), tok("gacchate"));
    assert_eq!(seq.surface(), "saṅgacchate");
    assert_eq!(rule, Some(Anusvara));

    let (seq, _) = t.join(tok("सम्"), tok("गच्छते"));
    assert_eq!(seq.surface(), "सङ्गच्छते");

    // No class nasal before a semivowel.
    let (seq, _) = t.join(tok("sam"), tok("yāti"));
    assert_eq!(seq.surface(), "saṃyāti");

    let (seq, rule) = t.join(tok("tan"), tok("bhavati"));
    assert_eq!(seq.surface(), "tambhavati");
    assert_eq!(rule, Some(Anusvara));
}

#[test]
fn test_retroflex_velar_sibilant_setting() {
    let (settings, table) = transducer_toml(
        r#"
[sandhi]
nasal_assimilation = "anusvara"
velar_sibilant = "retroflex"

[render]
iast_anusvara = "ṃ"
"#,
    );
    let t = Transducer::new(&settings, &table);
    let (seq, rule) = t.join(tok("dus"), tok("kṛtam"));
    assert_eq!(seq.surface(), "duṣkṛtam");
    assert_eq!(rule, Some(Schutva));
    let (seq, _) = t.join(tok("dus"), tok("carati"));
    assert_eq!(seq.surface(), "duścarati");
}

#[test]
fn test_render_settings_follow_the_transducer() {
    let (settings, table) = transducer_toml(
        r#"
[sandhi]
nasal_assimilation = "anusvara"

[render]
iast_anusvara = "ṁ"
"#,
    );
    let t = Transducer::new(&settings, &table);
    let (seq, _) = t.join(tok("sam"), tok("gacchate"));
    assert_eq!(seq.surface(), "saṁgacchate");
    assert_eq!(t.explain(&tok("sam"), &tok("gacchate")).combined, "saṁgacchate");
}

#[test]
fn test_disabled_rules_are_skipped() {
    let (settings, table) = transducer_toml(
        r#"
[sandhi]
nasal_assimilation = "anusvara"
disabled_rules = ["lexical-exception", "guna"]

[render]
iast_anusvara = "ṃ"
"#,
    );
    let t = Transducer::new(&settings, &table);

    let (seq, rule) = t.join(tok("mahā"), tok("indraḥ"));
    assert_eq!(seq.surface(), "mahāindraḥ");
    assert_eq!(rule, None);

    let (seq, rule) = t.join(tok("pra"), tok("eti"));
    assert_eq!(seq.surface(), "praiti");
    assert_eq!(rule, Some(Vrddhi));
}

#[test]
fn test_custom_exception_table() {
    let settings = parse_settings_toml(crate::settings::DEFAULT_SETTINGS_TOML).unwrap();
    let table = ExceptionTable::from_toml(
        r#"
[[exception]]
left = "sam"
right = "kṛtam"
result = "saṃskṛtam"
"#,
    )
    .unwrap();
    let t = Transducer::new(&settings, &table);
    let (seq, rule) = t.join(tok("sam"), tok("kṛtam"));
    assert_eq!(seq.surface(), "saṃskṛtam");
    assert_eq!(rule, Some(LexicalException));

    // The default table is not consulted.
    let (seq, rule) = t.join(tok("pra"), tok("ūḍhaḥ"));
    assert_eq!(seq.surface(), "proḍhaḥ");
    assert_eq!(rule, Some(Guna));
}

// --- explain ---

#[test]
fn test_explain_reports_every_rule() {
    let exp = explain(&tok("mahā"), &tok("indraḥ"));
    assert_eq!(exp.checks.len(), SandhiRuleName::ALL.len());
    assert_eq!(exp.left_final, Some(PhonemeId::Aa));
    assert_eq!(exp.right_initial, Some(PhonemeId::I));
    assert_eq!(exp.rule, Some(Guna));
    assert_eq!(exp.combined, "mahendraḥ");

    let guna = &exp.checks[4];
    assert_eq!(guna.rule, Guna);
    assert_eq!(guna.priority, 5);
    assert!(guna.matched);
    assert_eq!(guna.replacement, Some(vec![PhonemeId::E]));
    assert!(exp
        .checks
        .iter()
        .filter(|c| c.rule != Guna)
        .all(|c| !c.matched && c.disabled == (c.rule == Ayadi)));
    assert_eq!(exp.checks.last().map(|c| c.rule), Some(Ayadi));
}

#[test]
fn test_explain_shows_shadowed_matches() {
    let exp = explain(&tok("pra"), &tok("ūḍhaḥ"));
    let matched: Vec<SandhiRuleName> = exp
        .checks
        .iter()
        .filter(|c| c.matched)
        .map(|c| c.rule)
        .collect();
    assert_eq!(matched, vec![LexicalException, Guna]);
    assert_eq!(exp.rule, Some(LexicalException));
    assert_eq!(exp.combined, "prauḍhaḥ");
}

#[test]
fn test_explain_with_disabled_rule() {
    let (settings, table) = transducer_toml(
        r#"
[sandhi]
nasal_assimilation = "anusvara"
disabled_rules = ["lexical-exception"]

[render]
iast_anusvara = "ṃ"
"#,
    );
    let exp = Transducer::new(&settings, &table).explain(&tok("pra"), &tok("ūḍhaḥ"));
    assert!(exp.checks[0].matched);
    assert!(exp.checks[0].disabled);
    assert_eq!(exp.rule, Some(Guna));
    assert_eq!(exp.combined, "proḍhaḥ");
}

#[test]
fn test_explain_agrees_with_join() {
    for (left, right) in [
        ("sam", "gacchate"),
        ("prati", "ekam"),
        ("pra", "bhavati"),
        ("दुस्", "चरति"),
        ("", "eti"),
    ] {
        let exp = explain(&tok(left), &tok(right));
        let (combined, rule) = join_str(left, right);
        assert_eq!((exp.combined, exp.rule), (combined, rule), "{left} + {right}");
    }
}

// --- rule names ---

#[test]
fn test_rule_names_parse_back() {
    for rule in SandhiRuleName::ALL {
        assert_eq!(rule.as_str().parse::<SandhiRuleName>(), Ok(rule));
        assert_eq!(rule.to_string(), rule.as_str());
        assert!(!rule.description().is_empty());
    }
    assert_eq!(LexicalException.sutra(), None);
    assert_eq!(Guna.sutra(), Some("6.1.87 ād guṇaḥ"));
    assert!("gunna".parse::<SandhiRuleName>().is_err());
}

#[test]
fn test_rule_names_serialize_kebab_case() {
    let json = serde_json::to_string(&SavarnaDirgha).unwrap();
    assert_eq!(json, "\"savarna-dirgha\"");
}
