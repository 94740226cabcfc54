//! Doubt-resolver conversation history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How many trailing messages feed the next prompt
pub const CONTEXT_WINDOW: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub content: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn student(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_user: true,
            timestamp: Utc::now(),
        }
    }

    pub fn tutor(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_user: false,
            timestamp: Utc::now(),
        }
    }
}

/// Render the last few messages as `Student: ...` / `Tutor: ...` lines.
pub fn build_conversation_context(history: &[ChatMessage]) -> String {
    let skip = history.len().saturating_sub(CONTEXT_WINDOW);
    history[skip..]
        .iter()
        .map(|m| {
            let speaker = if m.is_user { "Student" } else { "Tutor" };
            format!("{}: {}", speaker, m.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
