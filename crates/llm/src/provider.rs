//! LLM Provider Trait
//!
//! Defines the common interface for generative-AI backends.

use async_trait::async_trait;
use futures_util::stream::BoxStream;

use super::types::{LlmError, LlmResponse, LlmResult, Message, ProviderConfig};
use edumorph_core::streaming::UnifiedStreamEvent;

/// Pull-based sequence of stream events.
///
/// The next event is only read from the backend once the consumer polls for
/// it, so a consumer that finishes handling event N before polling again gets
/// strict in-order, one-at-a-time delivery.
pub type FragmentStream = BoxStream<'static, LlmResult<UnifiedStreamEvent>>;

/// Trait that all generative-AI providers must implement.
///
/// Provides a unified interface for:
/// - Single-shot completions (send_message)
/// - Streaming completions (stream_message)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the current model being used.
    fn model(&self) -> &str;

    /// Get the configuration for this provider.
    fn config(&self) -> &ProviderConfig;

    /// Send messages and get a complete response.
    async fn send_message(&self, messages: Vec<Message>) -> LlmResult<LlmResponse>;

    /// Start a streaming call.
    ///
    /// Resolves once the backend accepted the request; the returned stream
    /// ends when the backend signals end-of-stream or yields its first error.
    async fn stream_message(&self, messages: Vec<Message>) -> LlmResult<FragmentStream>;
}

/// Helper function to create an error for missing API key
pub fn missing_api_key_error(provider: &str) -> LlmError {
    LlmError::AuthenticationFailed {
        message: format!("API key not configured for {}", provider),
    }
}

/// Helper function to parse HTTP error status codes
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> LlmError {
    match status {
        401 => LlmError::AuthenticationFailed {
            message: format!("{}: Invalid API key", provider),
        },
        403 => LlmError::AuthenticationFailed {
            message: format!("{}: Access denied", provider),
        },
        404 => LlmError::ModelNotFound {
            model: body.to_string(),
        },
        429 => LlmError::RateLimited {
            message: body.to_string(),
        },
        400 => LlmError::InvalidRequest {
            message: body.to_string(),
        },
        500..=599 => LlmError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => LlmError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}
