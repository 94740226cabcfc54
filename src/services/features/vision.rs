//! Application Vision
//!
//! Real-world use cases, a mini project, tools, and industries for a concept.

use std::sync::Arc;

use edumorph_llm::LlmProvider;
use tracing::info;

use super::{generate_structured, Feature};
use crate::models::vision::ApplicationVision;
use crate::services::invoker::ModelInvoker;
use crate::services::prompts::{build_vision_prompt, VisionParams};
use crate::utils::error::FeatureResult;

#[derive(Clone)]
pub struct ApplicationVisionService {
    invoker: ModelInvoker,
}

impl ApplicationVisionService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self::with_invoker(ModelInvoker::new(provider))
    }

    pub fn with_invoker(invoker: ModelInvoker) -> Self {
        Self { invoker }
    }

    pub async fn generate(&self, params: &VisionParams) -> FeatureResult<ApplicationVision> {
        info!(concept = %params.concept, persona = %params.persona, "generating application vision");
        let prompt = build_vision_prompt(params);
        generate_structured(&self.invoker, Feature::ApplicationVision, &prompt).await
    }
}
