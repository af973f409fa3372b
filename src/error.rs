use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpellCheckError>;

#[derive(Debug, Error)]
pub enum SpellCheckError {
    /// The dictionary engine could not be constructed or bound to a locale.
    #[error("failed to initialize dictionary engine for '{locale}': {reason}")]
    EngineInit { locale: String, reason: String },

    /// The active engine does not implement this operation.
    #[error("operation not supported by the dictionary engine: {0}")]
    Unsupported(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpellCheckError {
    pub fn engine_init(locale: impl Into<String>, reason: impl ToString) -> Self {
        SpellCheckError::EngineInit {
            locale: locale.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, SpellCheckError::Unsupported(_))
    }
}
