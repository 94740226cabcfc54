//! Gemini Provider
//!
//! Implementation of the LlmProvider trait for the Google Generative Language
//! REST API (`generateContent` / `streamGenerateContent`).

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::provider::{missing_api_key_error, parse_http_error, FragmentStream, LlmProvider};
use super::types::{LlmError, LlmResponse, LlmResult, Message, ProviderConfig, StopReason, UsageStats};
use crate::http_client::build_http_client;
use crate::sse::decode_event_stream;
use crate::streaming_adapters::GeminiAdapter;

/// Default Generative Language API base
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider
pub struct GeminiProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the given configuration
    pub fn new(config: ProviderConfig) -> LlmResult<Self> {
        let client = build_http_client(config.proxy.as_ref())?;
        Ok(Self { config, client })
    }

    /// Get the API base URL
    fn base_url(&self) -> &str {
        self.config
            .base_url
            .as_deref()
            .unwrap_or(GEMINI_API_BASE)
            .trim_end_matches('/')
    }

    fn endpoint(&self, stream: bool) -> String {
        if stream {
            format!(
                "{}/models/{}:streamGenerateContent?alt=sse",
                self.base_url(),
                self.config.model
            )
        } else {
            format!("{}/models/{}:generateContent", self.base_url(), self.config.model)
        }
    }

    fn api_key(&self) -> LlmResult<&str> {
        self.config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| missing_api_key_error("gemini"))
    }

    /// Build the request body for the API
    fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        let contents: Vec<serde_json::Value> = messages
            .iter()
            .map(|msg| {
                let parts: Vec<serde_json::Value> = msg
                    .parts
                    .iter()
                    .map(|text| serde_json::json!({ "text": text }))
                    .collect();
                serde_json::json!({
                    "role": msg.role.as_str(),
                    "parts": parts
                })
            })
            .collect();

        let mut body = serde_json::json!({ "contents": contents });

        let mut generation_config = serde_json::Map::new();
        if let Some(temperature) = self.config.temperature {
            generation_config.insert("temperature".to_string(), serde_json::json!(temperature));
        }
        if let Some(max) = self.config.max_output_tokens {
            generation_config.insert("maxOutputTokens".to_string(), serde_json::json!(max));
        }
        if !generation_config.is_empty() {
            body["generationConfig"] = serde_json::Value::Object(generation_config);
        }

        body
    }

    async fn post(&self, stream: bool, messages: &[Message]) -> LlmResult<reqwest::Response> {
        let api_key = self.api_key()?;
        let body = self.build_request_body(messages);

        let response = self
            .client
            .post(self.endpoint(stream))
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            let body_text = response.text().await.map_err(|e| LlmError::NetworkError {
                message: e.to_string(),
            })?;
            return Err(parse_http_error(status, &body_text, "gemini"));
        }
        Ok(response)
    }

    /// Parse a complete response from the API
    fn parse_response(&self, response: &GenerateContentResponse) -> LlmResponse {
        let candidate = response.candidates.first();
        let content = candidate.and_then(Candidate::text);

        let stop_reason = match (candidate, &response.prompt_feedback) {
            (Some(c), _) => c
                .finish_reason
                .as_deref()
                .map(StopReason::from)
                .unwrap_or(StopReason::EndTurn),
            (None, Some(feedback)) if feedback.block_reason.is_some() => StopReason::Blocked,
            (None, _) => StopReason::EndTurn,
        };

        LlmResponse {
            content,
            stop_reason,
            usage: response
                .usage_metadata
                .as_ref()
                .map(UsageMetadata::to_stats)
                .unwrap_or_default(),
            model: response
                .model_version
                .clone()
                .unwrap_or_else(|| self.config.model.clone()),
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn send_message(&self, messages: Vec<Message>) -> LlmResult<LlmResponse> {
        let response = self.post(false, &messages).await?;
        let body_text = response.text().await.map_err(|e| LlmError::NetworkError {
            message: e.to_string(),
        })?;

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body_text).map_err(|e| LlmError::ParseError {
                message: format!("Failed to parse response: {}", e),
            })?;

        let result = self.parse_response(&parsed);
        debug!(
            model = %result.model,
            output_tokens = result.usage.output_tokens,
            "gemini generateContent finished"
        );
        Ok(result)
    }

    async fn stream_message(&self, messages: Vec<Message>) -> LlmResult<FragmentStream> {
        let response = self.post(true, &messages).await?;
        debug!(model = %self.config.model, "gemini stream opened");
        Ok(decode_event_stream(
            response.bytes_stream(),
            GeminiAdapter::new(),
        ))
    }
}

// ============================================================================
// Wire types (shared with the stream adapter)
// ============================================================================

/// `GenerateContentResponse`, also the payload of each SSE event
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    pub model_version: Option<String>,
    /// Present when the backend reports an error inside the stream
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl Candidate {
    /// Concatenated text of all non-thought parts; `None` when there is none.
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .content
            .as_ref()?
            .parts
            .iter()
            .filter(|p| !p.thought)
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Part {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl UsageMetadata {
    pub fn to_stats(&self) -> UsageStats {
        UsageStats {
            input_tokens: self.prompt_token_count,
            output_tokens: self.candidates_token_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
