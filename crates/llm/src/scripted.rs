//! Scripted Provider
//!
//! An `LlmProvider` that replays canned replies instead of calling a backend.
//! Every prompt it receives is recorded, and every text fragment it hands out
//! is appended to a shared event log at the moment it is pulled, so callers
//! can check exactly when fragments were consumed.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures_util::stream::{self, StreamExt};

use crate::provider::{FragmentStream, LlmProvider};
use crate::types::{LlmError, LlmResponse, LlmResult, Message, ProviderConfig, StopReason, UsageStats};
use edumorph_core::streaming::UnifiedStreamEvent;

/// One canned backend reply
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// Full text; streamed as a single fragment
    Text(String),
    /// A response with no text at all
    Empty,
    /// The call fails before any output
    Error(LlmError),
    /// Fragments in order; joined for single-shot calls
    Stream(Vec<String>),
    /// Fragments followed by a mid-stream failure
    StreamThenError(Vec<String>, LlmError),
}

impl ScriptedReply {
    pub fn text(text: impl Into<String>) -> Self {
        ScriptedReply::Text(text.into())
    }

    pub fn stream<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedReply::Stream(fragments.into_iter().map(Into::into).collect())
    }
}

type Responder = Box<dyn Fn(&str) -> ScriptedReply + Send + Sync>;

enum Script {
    Queue(Mutex<VecDeque<ScriptedReply>>),
    Responder(Responder),
}

/// Provider that answers from a script
pub struct ScriptedProvider {
    config: ProviderConfig,
    script: Script,
    prompts: Mutex<Vec<String>>,
    log: Arc<Mutex<Vec<String>>>,
}

impl ScriptedProvider {
    /// Replies are handed out in order, one per call.
    pub fn new<I: IntoIterator<Item = ScriptedReply>>(replies: I) -> Self {
        Self::with_script(Script::Queue(Mutex::new(replies.into_iter().collect())))
    }

    /// Replies are computed from the prompt text.
    pub fn from_fn<F>(responder: F) -> Self
    where
        F: Fn(&str) -> ScriptedReply + Send + Sync + 'static,
    {
        Self::with_script(Script::Responder(Box::new(responder)))
    }

    fn with_script(script: Script) -> Self {
        Self {
            config: ProviderConfig {
                api_key: Some("scripted".to_string()),
                ..Default::default()
            },
            script,
            prompts: Mutex::new(Vec::new()),
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    /// Number of backend calls made
    pub fn call_count(&self) -> usize {
        self.prompts().len()
    }

    /// Shared log; each streamed fragment appends `pull:<text>` when pulled.
    ///
    /// Callers may push their own entries to interleave with the pulls.
    pub fn event_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.log)
    }

    fn next_reply(&self, messages: &[Message]) -> ScriptedReply {
        let prompt: String = messages.iter().map(Message::text).collect::<Vec<_>>().join("\n");
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.clone());
        }
        match &self.script {
            Script::Queue(queue) => queue
                .lock()
                .ok()
                .and_then(|mut q| q.pop_front())
                .unwrap_or_else(|| {
                    ScriptedReply::Error(LlmError::Other {
                        message: "script exhausted".to_string(),
                    })
                }),
            Script::Responder(responder) => responder(&prompt),
        }
    }

    fn response(&self, content: Option<String>) -> LlmResponse {
        LlmResponse {
            content,
            stop_reason: StopReason::EndTurn,
            usage: UsageStats::default(),
            model: self.config.model.clone(),
        }
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn send_message(&self, messages: Vec<Message>) -> LlmResult<LlmResponse> {
        match self.next_reply(&messages) {
            ScriptedReply::Text(text) => Ok(self.response(Some(text))),
            ScriptedReply::Empty => Ok(self.response(None)),
            ScriptedReply::Stream(fragments) => Ok(self.response(Some(fragments.concat()))),
            ScriptedReply::Error(e) | ScriptedReply::StreamThenError(_, e) => Err(e),
        }
    }

    async fn stream_message(&self, messages: Vec<Message>) -> LlmResult<FragmentStream> {
        let (fragments, tail) = match self.next_reply(&messages) {
            ScriptedReply::Text(text) => (vec![text], None),
            ScriptedReply::Empty => (vec![], None),
            ScriptedReply::Stream(fragments) => (fragments, None),
            ScriptedReply::StreamThenError(fragments, e) => (fragments, Some(e)),
            ScriptedReply::Error(e) => return Err(e),
        };

        let mut items: VecDeque<LlmResult<UnifiedStreamEvent>> = fragments
            .into_iter()
            .map(|content| Ok(UnifiedStreamEvent::TextDelta { content }))
            .collect();
        match tail {
            Some(e) => items.push_back(Err(e)),
            None => items.push_back(Ok(UnifiedStreamEvent::Complete {
                stop_reason: Some("STOP".to_string()),
            })),
        }

        let log = Arc::clone(&self.log);
        Ok(stream::unfold(items, move |mut items| {
            let log = Arc::clone(&log);
            async move {
                let item = items.pop_front()?;
                if let Ok(UnifiedStreamEvent::TextDelta { content }) = &item {
                    if let Ok(mut log) = log.lock() {
                        log.push(format!("pull:{}", content));
                    }
                }
                Some((item, items))
            }
        })
        .boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_queue_replies_in_order() {
        let provider = ScriptedProvider::new(vec![
            ScriptedReply::text("first"),
            ScriptedReply::Empty,
        ]);

        let r1 = provider.send_message(vec![Message::user("a")]).await.unwrap();
        let r2 = provider.send_message(vec![Message::user("b")]).await.unwrap();
        let r3 = provider.send_message(vec![Message::user("c")]).await;

        assert_eq!(r1.content.as_deref(), Some("first"));
        assert!(r2.content.is_none());
        assert!(matches!(r3, Err(LlmError::Other { .. })));
        assert_eq!(provider.prompts(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_stream_logs_each_pull() {
        let provider = ScriptedProvider::new(vec![ScriptedReply::stream(["Hel", "lo"])]);
        let mut stream = provider
            .stream_message(vec![Message::user("greet")])
            .await
            .unwrap();

        assert!(provider.event_log().lock().unwrap().is_empty());
        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(
            first,
            UnifiedStreamEvent::TextDelta {
                content: "Hel".to_string()
            }
        );
        assert_eq!(*provider.event_log().lock().unwrap(), vec!["pull:Hel"]);

        let rest: Vec<_> = stream.collect().await;
        assert_eq!(rest.len(), 2);
        assert_eq!(
            *provider.event_log().lock().unwrap(),
            vec!["pull:Hel", "pull:lo"]
        );
    }

    #[tokio::test]
    async fn test_stream_then_error() {
        let provider = ScriptedProvider::from_fn(|_| {
            ScriptedReply::StreamThenError(
                vec!["partial".to_string()],
                LlmError::NetworkError {
                    message: "reset".to_string(),
                },
            )
        });
        let stream = provider
            .stream_message(vec![Message::user("x")])
            .await
            .unwrap();
        let items: Vec<_> = stream.collect().await;
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(matches!(items[1], Err(LlmError::NetworkError { .. })));
    }
}
