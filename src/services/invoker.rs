//! Model Invoker
//!
//! Sends one prompt to the injected backend, either single-shot or streaming.
//! No retry, timeout or caching happens at this layer.

use std::sync::Arc;

use edumorph_core::streaming::UnifiedStreamEvent;
use edumorph_llm::{LlmError, LlmProvider, Message, StopReason, UsageStats};
use futures_util::StreamExt;
use tracing::debug;

use crate::utils::error::GenerationError;

/// What a completed stream reported besides its text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamSummary {
    /// Number of fragments handed to the callback
    pub fragments: usize,
    pub usage: Option<UsageStats>,
    pub stop_reason: Option<StopReason>,
}

/// Thin facade over an `LlmProvider`
#[derive(Clone)]
pub struct ModelInvoker {
    provider: Arc<dyn LlmProvider>,
}

impl ModelInvoker {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Single-shot call returning the full response text.
    ///
    /// A response without text fails with `EmptyResponse`; any backend
    /// failure is reported as `Backend`.
    pub async fn invoke(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!(
            provider = self.provider.name(),
            model = self.provider.model(),
            prompt_len = prompt.len(),
            "invoking model"
        );

        let response = self
            .provider
            .send_message(vec![Message::user(prompt)])
            .await?;

        match response.content {
            Some(text) if !text.is_empty() => {
                debug!(
                    response_len = text.len(),
                    output_tokens = response.usage.output_tokens,
                    "model responded"
                );
                Ok(text)
            }
            _ => Err(GenerationError::EmptyResponse),
        }
    }

    /// Streaming call.
    ///
    /// Each fragment is passed to `on_fragment` in arrival order; the next
    /// fragment is not pulled from the backend until the callback returned.
    /// Resolves once the backend ends the stream. On failure, fragments
    /// already delivered stay delivered.
    pub async fn invoke_streaming<F>(
        &self,
        prompt: &str,
        mut on_fragment: F,
    ) -> Result<StreamSummary, GenerationError>
    where
        F: FnMut(&str) + Send,
    {
        debug!(
            provider = self.provider.name(),
            model = self.provider.model(),
            prompt_len = prompt.len(),
            "opening model stream"
        );

        let mut stream = self
            .provider
            .stream_message(vec![Message::user(prompt)])
            .await?;
        let mut summary = StreamSummary::default();

        while let Some(event) = stream.next().await {
            match event? {
                UnifiedStreamEvent::TextDelta { content } => {
                    if content.is_empty() {
                        continue;
                    }
                    on_fragment(&content);
                    summary.fragments += 1;
                }
                UnifiedStreamEvent::Usage {
                    input_tokens,
                    output_tokens,
                } => {
                    summary.usage = Some(UsageStats {
                        input_tokens,
                        output_tokens,
                    });
                }
                UnifiedStreamEvent::Complete { stop_reason } => {
                    summary.stop_reason = stop_reason.as_deref().map(StopReason::from);
                }
                UnifiedStreamEvent::Error { message, code } => {
                    return Err(GenerationError::Backend(stream_error(message, code)));
                }
            }
        }

        debug!(
            fragments = summary.fragments,
            stop_reason = ?summary.stop_reason,
            "model stream finished"
        );
        Ok(summary)
    }
}

/// Map an in-stream error report onto the backend error type.
fn stream_error(message: String, code: Option<String>) -> LlmError {
    match code.as_deref() {
        Some("RESOURCE_EXHAUSTED") | Some("429") => LlmError::RateLimited { message },
        Some("UNAUTHENTICATED") | Some("PERMISSION_DENIED") => {
            LlmError::AuthenticationFailed { message }
        }
        _ => LlmError::ServerError {
            message,
            status: code.as_deref().and_then(|c| c.parse().ok()),
        },
    }
}
