//! Gemini SSE Stream Adapter
//!
//! `streamGenerateContent?alt=sse` emits one `data: {...}` line per event, each
//! carrying a partial `GenerateContentResponse`. Text parts become
//! `TextDelta` fragments in arrival order.

use edumorph_core::streaming::{AdapterError, StreamAdapter, UnifiedStreamEvent};

use crate::gemini::GenerateContentResponse;

/// Adapter for the Gemini SSE format
pub struct GeminiAdapter {
    /// Usage arrives cumulatively on several events; only the last one matters
    last_usage: Option<(u32, u32)>,
    completed: bool,
}

impl GeminiAdapter {
    pub fn new() -> Self {
        Self {
            last_usage: None,
            completed: false,
        }
    }
}

impl Default for GeminiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamAdapter for GeminiAdapter {
    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn adapt(&mut self, input: &str) -> Result<Vec<UnifiedStreamEvent>, AdapterError> {
        let trimmed = input.trim();

        // Only `data:` lines carry payloads; comments and other fields are skipped.
        let json_str = match trimmed.strip_prefix("data:") {
            Some(rest) => rest.trim_start(),
            None => return Ok(vec![]),
        };
        if json_str.is_empty() || json_str == "[DONE]" {
            return Ok(vec![]);
        }

        let event: GenerateContentResponse =
            serde_json::from_str(json_str).map_err(|e| AdapterError::ParseError(e.to_string()))?;

        let mut events = vec![];

        if let Some(error) = event.error {
            events.push(UnifiedStreamEvent::Error {
                message: error.message,
                code: error
                    .status
                    .or_else(|| error.code.map(|c| c.to_string())),
            });
            return Ok(events);
        }

        for candidate in &event.candidates {
            if let Some(text) = candidate.text() {
                events.push(UnifiedStreamEvent::TextDelta { content: text });
            }
        }

        if let Some(usage) = &event.usage_metadata {
            let current = (usage.prompt_token_count, usage.candidates_token_count);
            if self.last_usage != Some(current) {
                self.last_usage = Some(current);
                events.push(UnifiedStreamEvent::Usage {
                    input_tokens: current.0,
                    output_tokens: current.1,
                });
            }
        }

        let finish = event
            .candidates
            .iter()
            .find_map(|c| c.finish_reason.clone());
        let blocked = event
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone());
        if let Some(reason) = finish.or(blocked) {
            if !self.completed {
                self.completed = true;
                events.push(UnifiedStreamEvent::Complete {
                    stop_reason: Some(reason),
                });
            }
        }

        Ok(events)
    }

    fn reset(&mut self) {
        self.last_usage = None;
        self.completed = false;
    }
}
