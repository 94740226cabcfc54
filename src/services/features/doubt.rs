//! Doubt Resolver
//!
//! Free-text tutoring answers; the response is returned as the model wrote it.

use std::sync::Arc;

use edumorph_llm::LlmProvider;
use tracing::info;

use super::{generation_failed, Feature};
use crate::models::chat::{build_conversation_context, ChatMessage};
use crate::services::invoker::ModelInvoker;
use crate::services::prompts::{build_doubt_prompt, DoubtParams};
use crate::utils::error::FeatureResult;

#[derive(Clone)]
pub struct DoubtResolverService {
    invoker: ModelInvoker,
}

impl DoubtResolverService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self::with_invoker(ModelInvoker::new(provider))
    }

    pub fn with_invoker(invoker: ModelInvoker) -> Self {
        Self { invoker }
    }

    pub async fn resolve(&self, params: &DoubtParams) -> FeatureResult<String> {
        info!(
            subject = %params.subject,
            has_context = !params.context.is_empty(),
            "resolving doubt"
        );
        let prompt = build_doubt_prompt(params);
        self.invoker
            .invoke(&prompt)
            .await
            .map_err(|e| generation_failed(Feature::DoubtResolver, e))
    }

    /// Resolve a question in light of the preceding conversation.
    pub async fn resolve_in_conversation(
        &self,
        question: &str,
        history: &[ChatMessage],
        subject: &str,
    ) -> FeatureResult<String> {
        let params = DoubtParams {
            question: question.to_string(),
            context: build_conversation_context(history),
            subject: subject.to_string(),
        };
        self.resolve(&params).await
    }
}
