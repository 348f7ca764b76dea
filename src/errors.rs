use thiserror::Error;

use crate::implementations::config::ConfigError;

/// Custom error types for the Casegen system
#[derive(Debug, Error)]
pub enum CaseGenError {
    /// The generation backend failed (network, timeout, non-2xx, unreadable body)
    #[error("{0}")]
    BackendError(String),

    /// No array could be recovered from the model output
    #[error("{reason}")]
    ExtractionError { reason: String, candidate: Option<String> },

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Template error: {0}")]
    TemplateError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type specific to Casegen operations
pub type CaseGenResult<T> = Result<T, CaseGenError>;

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Fatal,
    Error,
    Warning,
}

/// Recoverable vs. non-recoverable errors
pub trait RecoverableError {
    fn is_recoverable(&self) -> bool;
    fn recovery_strategy(&self) -> Option<String>;
    fn severity(&self) -> ErrorSeverity;
}

impl RecoverableError for CaseGenError {
    fn is_recoverable(&self) -> bool {
        matches!(self, CaseGenError::ExtractionError { .. } | CaseGenError::InvalidInput(_))
    }

    fn recovery_strategy(&self) -> Option<String> {
        match self {
            CaseGenError::ExtractionError { .. } =>
                Some(
                    "Inspect the raw model output, fix the JSON by hand and pass it to `casegen refine` or `casegen export`.".to_string()
                ),
            CaseGenError::InvalidInput(_) =>
                Some("Pass --requirement or --file, or answer the interactive prompt.".to_string()),
            _ => None,
        }
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            CaseGenError::ExtractionError { .. } => ErrorSeverity::Warning,
            CaseGenError::InvalidInput(_) => ErrorSeverity::Error,
            CaseGenError::ConfigError(_) | CaseGenError::TemplateError(_) => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Error,
        }
    }
}
