//! Roadmap Creator

use std::sync::Arc;

use edumorph_llm::LlmProvider;
use tracing::info;

use super::{generate_structured, Feature};
use crate::models::roadmap::{GeneratedRoadmap, TrackedRoadmap};
use crate::services::invoker::ModelInvoker;
use crate::services::prompts::{build_roadmap_prompt, RoadmapParams};
use crate::utils::error::FeatureResult;

#[derive(Clone)]
pub struct RoadmapCreatorService {
    invoker: ModelInvoker,
}

impl RoadmapCreatorService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self::with_invoker(ModelInvoker::new(provider))
    }

    pub fn with_invoker(invoker: ModelInvoker) -> Self {
        Self { invoker }
    }

    /// Generate a roadmap exactly as the model described it.
    pub async fn generate(&self, params: &RoadmapParams) -> FeatureResult<GeneratedRoadmap> {
        info!(
            goal = %params.learning_goal,
            level = %params.level,
            time_commitment = %params.time_commitment,
            "generating learning roadmap"
        );
        let prompt = build_roadmap_prompt(params);
        generate_structured(&self.invoker, Feature::Roadmap, &prompt).await
    }

    /// Generate a roadmap ready for progress tracking.
    pub async fn generate_tracked(&self, params: &RoadmapParams) -> FeatureResult<TrackedRoadmap> {
        self.generate(params).await.map(TrackedRoadmap::from_generated)
    }
}
