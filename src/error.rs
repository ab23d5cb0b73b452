//! Error types for the library console

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Standard input reached end of file while a prompt was waiting.
    #[error("Console input closed")]
    InputClosed,
}

impl AppError {
    /// Errors after which the session cannot continue.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::Io(_) | AppError::Serialization(_) | AppError::Config(_) | AppError::InputClosed
        )
    }

    /// Plain text shown on the console for a failed operation
    pub fn user_message(&self) -> String {
        match self {
            AppError::Authorization(msg) => format!("Access Denied. {}", msg),
            AppError::Authentication(msg) => format!("{} Please try again.", msg),
            AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::Conflict(msg)
            | AppError::BusinessRule(msg) => format!("Error: {}", msg),
            other => format!("Error: {}", other),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
