//! Prompt Construction
//!
//! Fixed per-feature templates, their typed parameters, and the builder that
//! combines the two into the prompt sent to the backend.

pub mod builder;
pub mod params;
pub mod templates;

pub use builder::{
    build_doubt_prompt, build_explanation_prompt, build_quiz_prompt, build_roadmap_prompt,
    build_vision_prompt, DoubtParams, ExplanationParams, PromptBuilder, PromptRequest, QuizParams,
    RoadmapParams, TemplateId, VisionParams, DEFAULT_QUESTION_COUNT, DEFAULT_SUBJECT,
};
pub use params::{Difficulty, ExplanationDepth, Persona, SkillLevel, TimeCommitment, ToneMode};
