//! EduMorph
//!
//! Prompt orchestration for an AI learning assistant. Five features
//! (application vision, roadmaps, doubt resolution, concept explanation and
//! quizzes) share one pipeline:
//! - `PromptBuilder` turns feature parameters into a prompt
//! - `ModelInvoker` sends it to the injected backend, single-shot or streaming
//! - the normalizer extracts and validates structured payloads
//!
//! The backend client is passed in by the caller; nothing here reads the
//! environment.

pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use models::*;
pub use services::prompts::{
    Difficulty, DoubtParams, ExplanationDepth, ExplanationParams, Persona, PromptBuilder,
    PromptRequest, QuizParams, RoadmapParams, SkillLevel, TemplateId, TimeCommitment, ToneMode,
    VisionParams,
};
pub use services::*;
pub use storage::ConfigService;
pub use utils::error::{AppError, AppResult, FeatureError, FeatureResult, GenerationError};
