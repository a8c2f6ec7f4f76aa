/// Hard errors reported to callers. Unrecognized characters are never an
/// error: the tokenizer flags them on the token and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("script could not be determined and a definite script is required")]
    UnknownScript,
}

impl EngineError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            reason: reason.into(),
        }
    }
}
