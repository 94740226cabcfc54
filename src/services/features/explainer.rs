//! Concept Explainer
//!
//! Streamed explanations at a chosen depth and tone. Text is passed through
//! unparsed; accumulating it is up to the caller unless one of the
//! accumulating helpers is used.

use std::sync::{Arc, Mutex};

use edumorph_llm::LlmProvider;
use futures_util::future::try_join3;
use tracing::{debug, info};

use super::{generation_failed, Feature};
use crate::models::explanation::ExplanationSet;
use crate::services::invoker::{ModelInvoker, StreamSummary};
use crate::services::prompts::{build_explanation_prompt, ExplanationDepth, ExplanationParams, ToneMode};
use crate::utils::error::{FeatureError, FeatureResult};

#[derive(Clone)]
pub struct ConceptExplainerService {
    invoker: ModelInvoker,
}

impl ConceptExplainerService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self::with_invoker(ModelInvoker::new(provider))
    }

    pub fn with_invoker(invoker: ModelInvoker) -> Self {
        Self { invoker }
    }

    /// Stream one explanation, handing each fragment to `on_fragment` in order.
    pub async fn stream_explanation<F>(
        &self,
        params: &ExplanationParams,
        on_fragment: F,
    ) -> FeatureResult<StreamSummary>
    where
        F: FnMut(&str) + Send,
    {
        info!(
            topic_len = params.topic.len(),
            depth = %params.depth,
            tone = %params.tone,
            "streaming concept explanation"
        );
        let prompt = build_explanation_prompt(params);
        self.invoker
            .invoke_streaming(&prompt, on_fragment)
            .await
            .map_err(|e| generation_failed(Feature::ConceptExplainer, e))
    }

    /// Stream one explanation and return the accumulated text.
    pub async fn explain(&self, params: &ExplanationParams) -> FeatureResult<String> {
        let mut text = String::new();
        self.stream_explanation(params, |fragment| text.push_str(fragment))
            .await?;
        Ok(text)
    }

    /// Stream all three depths concurrently.
    ///
    /// Fragments from different depths interleave freely; within one depth
    /// they arrive in order. The first failing stream fails the whole call.
    pub async fn explain_all_depths<F>(
        &self,
        topic: &str,
        tone: &ToneMode,
        on_fragment: F,
    ) -> FeatureResult<ExplanationSet>
    where
        F: FnMut(&ExplanationDepth, &str) + Send,
    {
        let on_fragment = Mutex::new(on_fragment);

        let run = |depth: ExplanationDepth| {
            let on_fragment = &on_fragment;
            async move {
                let params = ExplanationParams {
                    topic: topic.to_string(),
                    depth: depth.clone(),
                    tone: tone.clone(),
                };
                let mut text = String::new();
                self.stream_explanation(&params, |fragment| {
                    text.push_str(fragment);
                    if let Ok(mut callback) = on_fragment.lock() {
                        (*callback)(&depth, fragment);
                    }
                })
                .await?;
                debug!(depth = %depth, len = text.len(), "explanation depth finished");
                Ok::<String, FeatureError>(text)
            }
        };

        let (tldr, eli5, deepdive) = try_join3(
            run(ExplanationDepth::Tldr),
            run(ExplanationDepth::Eli5),
            run(ExplanationDepth::Deepdive),
        )
        .await?;

        Ok(ExplanationSet {
            tldr,
            eli5,
            deepdive,
        })
    }

    /// Deep-dive explanation of a concept in the context of a question.
    pub async fn explain_in_context(
        &self,
        concept: &str,
        question_context: &str,
        tone: &ToneMode,
    ) -> FeatureResult<String> {
        let params = ExplanationParams {
            topic: format!("Concept: {}\nQuestion Context: {}", concept, question_context),
            depth: ExplanationDepth::Deepdive,
            tone: tone.clone(),
        };
        self.explain(&params).await
    }
}
