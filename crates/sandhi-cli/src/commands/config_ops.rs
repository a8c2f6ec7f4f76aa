use std::fs;

use sandhi_engine::sandhi::{self, ExceptionTable};
use sandhi_engine::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!("{}", settings_summary(&s));
}

pub fn exceptions_export() {
    print!("{}", sandhi::default_exceptions_toml());
}

pub fn exceptions_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let entries = die!(sandhi::parse_exceptions_toml(&content), "Error: {}");
    println!("OK: {} exceptions", entries.len());
}

/// Install custom settings and exceptions before any command runs.
pub fn load_custom(settings_file: Option<&str>, exceptions_file: Option<&str>) {
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = exceptions_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(ExceptionTable::init_custom(content), "Error in {file}: {}");
    }
}

pub fn settings_summary(s: &settings::Settings) -> String {
    let disabled: Vec<&str> = s
        .sandhi
        .disabled_rules()
        .iter()
        .map(|r| r.as_str())
        .collect();
    format!(
        "OK: sandhi.nasal_assimilation={:?}, sandhi.velar_sibilant={:?}, sandhi.disabled_rules=[{}], render.iast_anusvara={}",
        s.sandhi.nasal_assimilation,
        s.sandhi.velar_sibilant,
        disabled.join(", "),
        s.render.iast_anusvara
    )
}
