//! Quiz Generator

use std::sync::Arc;

use edumorph_llm::LlmProvider;
use tracing::info;

use super::{generate_structured, Feature};
use crate::models::quiz::QuizQuestion;
use crate::services::invoker::ModelInvoker;
use crate::services::prompts::{build_quiz_prompt, QuizParams};
use crate::utils::error::FeatureResult;

#[derive(Clone)]
pub struct QuizGeneratorService {
    invoker: ModelInvoker,
}

impl QuizGeneratorService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self::with_invoker(ModelInvoker::new(provider))
    }

    pub fn with_invoker(invoker: ModelInvoker) -> Self {
        Self { invoker }
    }

    /// Every returned question has `correct_answer < options.len()`.
    pub async fn generate(&self, params: &QuizParams) -> FeatureResult<Vec<QuizQuestion>> {
        info!(
            topic = %params.topic,
            difficulty = %params.difficulty,
            count = params.count,
            "generating quiz questions"
        );
        let prompt = build_quiz_prompt(params);
        generate_structured(&self.invoker, Feature::Quiz, &prompt).await
    }
}
