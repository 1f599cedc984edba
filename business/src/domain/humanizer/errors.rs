/// Errors raised while humanizing content.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HumanizeError {
    #[error("humanizer.empty_input")]
    EmptyInput,
    #[error("humanizer.missing_credential")]
    MissingCredential,
    #[error("humanizer.generation_failed: {0}")]
    GenerationFailed(String),
}

impl HumanizeError {
    pub fn generation_failed(detail: impl Into<String>) -> Self {
        HumanizeError::GenerationFailed(detail.into())
    }

    /// Human readable detail carried by the error, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            HumanizeError::GenerationFailed(detail) => Some(detail),
            _ => None,
        }
    }
}
