//! Core Error Types
//!
//! Errors raised by the shared data types in this crate. The application
//! crate extends these with the generation pipeline errors
//! (`GenerationError`, `FeatureError`) and its own `AppError`.

use thiserror::Error;

/// Core error type for the EduMorph workspace.
#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}
