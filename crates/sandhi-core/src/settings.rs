//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::sandhi::SandhiRuleName;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub sandhi: SandhiSettings,
    pub render: RenderSettings,
}

impl Settings {
    pub fn rule_enabled(&self, rule: SandhiRuleName) -> bool {
        !self.sandhi.disabled.contains(&rule)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SandhiSettings {
    pub nasal_assimilation: NasalAssimilation,
    #[serde(default)]
    pub velar_sibilant: VelarSibilant,
    #[serde(default = "default_disabled_rules")]
    disabled_rules: Vec<String>,
    #[serde(skip)]
    disabled: Vec<SandhiRuleName>,
}

impl SandhiSettings {
    pub fn disabled_rules(&self) -> &[SandhiRuleName] {
        &self.disabled
    }
}

/// Ayadi is not part of the default rule list.
fn default_disabled_rules() -> Vec<String> {
    vec![SandhiRuleName::Ayadi.as_str().to_string()]
}

/// Output of the anusvāra rule for a final nasal before a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NasalAssimilation {
    Anusvara,
    /// Class nasal before stops and nasals; anusvāra elsewhere.
    Homorganic,
}

/// What schutva makes of `s` before `k/kh`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VelarSibilant {
    /// `ś`, as before `c/ch`.
    #[default]
    Palatal,
    /// `ṣ` (dus + kṛtam -> duṣkṛtam).
    Retroflex,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderSettings {
    pub iast_anusvara: String,
}

const IAST_ANUSVARA_SPELLINGS: [&str; 2] = ["ṃ", "ṁ"];

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.sandhi.disabled = parse_disabled_rules(&s.sandhi.disabled_rules)?;
    Ok(s)
}

fn parse_disabled_rules(raw: &[String]) -> Result<Vec<SandhiRuleName>, SettingsError> {
    raw.iter()
        .map(|name| {
            name.parse::<SandhiRuleName>()
                .map_err(|e| SettingsError::InvalidValue {
                    field: "sandhi.disabled_rules".to_string(),
                    reason: e.to_string(),
                })
        })
        .collect()
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if !IAST_ANUSVARA_SPELLINGS.contains(&s.render.iast_anusvara.as_str()) {
        return Err(SettingsError::InvalidValue {
            field: "render.iast_anusvara".to_string(),
            reason: format!("must be one of {IAST_ANUSVARA_SPELLINGS:?}"),
        });
    }
    Ok(())
}
