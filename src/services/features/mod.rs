//! Feature Services
//!
//! Each service composes prompt building, model invocation and response
//! normalization for one product feature. The backend client is injected;
//! services hold no other state.

pub mod doubt;
pub mod explainer;
pub mod quiz;
pub mod roadmap;
pub mod vision;

use std::fmt;
use std::sync::Arc;

use edumorph_llm::LlmProvider;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::services::invoker::ModelInvoker;
use crate::services::normalizer::{extract_typed, ResponseSchema};
use crate::utils::error::{FeatureError, FeatureResult, GenerationError};

pub use doubt::DoubtResolverService;
pub use explainer::ConceptExplainerService;
pub use quiz::QuizGeneratorService;
pub use roadmap::RoadmapCreatorService;
pub use vision::ApplicationVisionService;

/// The five end-user capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    ApplicationVision,
    Roadmap,
    DoubtResolver,
    ConceptExplainer,
    Quiz,
}

impl Feature {
    /// What the feature produces, as used in failure messages
    pub fn label(&self) -> &'static str {
        match self {
            Feature::ApplicationVision => "application vision",
            Feature::Roadmap => "learning roadmap",
            Feature::DoubtResolver => "doubt resolution",
            Feature::ConceptExplainer => "concept explanation",
            Feature::Quiz => "quiz questions",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All feature services sharing one backend client
#[derive(Clone)]
pub struct FeatureServices {
    pub vision: ApplicationVisionService,
    pub roadmap: RoadmapCreatorService,
    pub doubt: DoubtResolverService,
    pub explainer: ConceptExplainerService,
    pub quiz: QuizGeneratorService,
}

impl FeatureServices {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        let invoker = ModelInvoker::new(provider);
        Self {
            vision: ApplicationVisionService::with_invoker(invoker.clone()),
            roadmap: RoadmapCreatorService::with_invoker(invoker.clone()),
            doubt: DoubtResolverService::with_invoker(invoker.clone()),
            explainer: ConceptExplainerService::with_invoker(invoker.clone()),
            quiz: QuizGeneratorService::with_invoker(invoker),
        }
    }
}

/// Wrap a pipeline error at feature level, logging it once.
pub(crate) fn generation_failed(feature: Feature, source: GenerationError) -> FeatureError {
    error!(feature = %feature, error = %source, "generation failed");
    FeatureError::generation_failed(feature, source)
}

/// Single-shot call followed by typed extraction.
pub(crate) async fn generate_structured<T: ResponseSchema>(
    invoker: &ModelInvoker,
    feature: Feature,
    prompt: &str,
) -> FeatureResult<T> {
    let result: Result<T, GenerationError> = async {
        let text = invoker.invoke(prompt).await?;
        extract_typed::<T>(&text)
    }
    .await;

    match result {
        Ok(value) => {
            debug!(feature = %feature, "structured result extracted");
            Ok(value)
        }
        Err(source) => Err(generation_failed(feature, source)),
    }
}
