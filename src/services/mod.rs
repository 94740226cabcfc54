//! Services
//!
//! The generation pipeline: prompt construction, model invocation, response
//! normalization, and the feature services built on them.

pub mod features;
pub mod invoker;
pub mod normalizer;
pub mod prompts;

pub use features::{
    ApplicationVisionService, ConceptExplainerService, DoubtResolverService, Feature,
    FeatureServices, QuizGeneratorService, RoadmapCreatorService,
};
pub use invoker::{ModelInvoker, StreamSummary};
pub use normalizer::{
    extract_json_array, extract_json_object, extract_typed, span_is_suspect, JsonShape,
    ResponseSchema,
};
