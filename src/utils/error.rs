//! Error Handling
//!
//! Error types for the generation pipeline and the application shell.
//! Uses thiserror for ergonomic error definitions.

use edumorph_llm::LlmError;
use thiserror::Error;

use crate::services::features::Feature;
use crate::services::normalizer::JsonShape;

/// Failure of one prompt -> invoke -> normalize pass
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The backend answered without any text content
    #[error("Received empty response from AI model")]
    EmptyResponse,

    /// The backend call itself failed (network, auth, quota, ...)
    #[error("Backend error: {0}")]
    Backend(#[from] LlmError),

    /// No opening/closing delimiter pair for the expected payload
    #[error("No JSON {expected} found in model response")]
    Extraction { expected: JsonShape },

    /// The delimited span is not valid JSON
    #[error("Invalid JSON in model response: {0}")]
    Parse(#[source] serde_json::Error),

    /// Valid JSON with the wrong structure
    #[error("Model response has an unexpected shape: {0}")]
    Schema(String),
}

impl GenerationError {
    /// Create a schema error
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }
}

/// Feature-level failure, wrapping whatever went wrong underneath
#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("Failed to generate {feature}: {source}")]
    GenerationFailed {
        feature: Feature,
        #[source]
        source: GenerationError,
    },
}

impl FeatureError {
    pub fn generation_failed(feature: Feature, source: GenerationError) -> Self {
        Self::GenerationFailed { feature, source }
    }

    /// Which feature failed
    pub fn feature(&self) -> Feature {
        match self {
            Self::GenerationFailed { feature, .. } => *feature,
        }
    }

    /// The underlying pipeline error
    pub fn cause(&self) -> &GenerationError {
        match self {
            Self::GenerationFailed { source, .. } => source,
        }
    }
}

/// Result type for feature services
pub type FeatureResult<T> = Result<T, FeatureError>;

/// Application shell error type (configuration, CLI)
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<AppError> for String {
    fn from(err: AppError) -> String {
        err.to_string()
    }
}
