//! EduMorph LLM
//!
//! Provides the interface the generation pipeline uses to reach the
//! generative-AI backend:
//! - `LlmProvider` trait (single-shot and streaming calls)
//! - Google Gemini implementation over the REST API
//! - Gemini SSE stream adapter and the byte-stream line decoder
//! - HTTP client factory with proxy support
//!
//! With the `testing` feature, `ScriptedProvider` replays canned replies
//! without any network traffic.

pub mod gemini;
pub mod http_client;
pub mod provider;
pub mod sse;
pub mod streaming_adapters;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod scripted;

// Re-export main types
pub use gemini::GeminiProvider;
pub use http_client::build_http_client;
pub use provider::{FragmentStream, LlmProvider};
pub use types::*;

pub use streaming_adapters::GeminiAdapter;

#[cfg(any(test, feature = "testing"))]
pub use scripted::{ScriptedProvider, ScriptedReply};
