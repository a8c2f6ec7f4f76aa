use std::sync::Arc;

use sandhi_core::engine::{apply_sandhi_with, explain_sandhi_with};
use sandhi_core::sandhi::{ExceptionTable, Transducer};
use sandhi_core::settings::{parse_settings_toml, Settings, DEFAULT_SETTINGS_TOML};

use super::{SandhiError, SandhiExplain, SandhiOutcome};

/// Sandhi under its own settings and exception table, independent of the
/// global configuration.
#[derive(uniffi::Object)]
pub struct SandhiEngine {
    settings: Settings,
    exceptions: ExceptionTable,
}

#[uniffi::export]
impl SandhiEngine {
    /// `None` for either TOML selects the embedded default.
    #[uniffi::constructor]
    fn new(
        settings_toml: Option<String>,
        exceptions_toml: Option<String>,
    ) -> Result<Arc<Self>, SandhiError> {
        let settings = parse_settings_toml(settings_toml.as_deref().unwrap_or(DEFAULT_SETTINGS_TOML))
            .map_err(|e| SandhiError::InvalidData { msg: e.to_string() })?;
        let exceptions = match exceptions_toml {
            Some(toml) => ExceptionTable::from_toml(&toml),
            None => ExceptionTable::from_toml(sandhi_core::sandhi::DEFAULT_EXCEPTIONS_TOML),
        }
        .map_err(|e| SandhiError::InvalidData { msg: e.to_string() })?;
        Ok(Arc::new(Self {
            settings,
            exceptions,
        }))
    }

    fn apply_sandhi(&self, left: String, right: String) -> Result<SandhiOutcome, SandhiError> {
        Ok(apply_sandhi_with(&self.transducer(), &left, &right)?.into())
    }

    fn explain_sandhi(&self, left: String, right: String) -> Result<SandhiExplain, SandhiError> {
        Ok(explain_sandhi_with(&self.transducer(), &left, &right)?.into())
    }

    fn exception_count(&self) -> u32 {
        self.exceptions.len() as u32
    }
}

impl SandhiEngine {
    fn transducer(&self) -> Transducer<'_> {
        Transducer::new(&self.settings, &self.exceptions)
    }
}
