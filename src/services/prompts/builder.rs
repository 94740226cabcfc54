//! Prompt Builder
//!
//! Maps a feature request onto its complete prompt string: the fixed
//! template followed by the interpolated parameter block. Parameter content
//! is not validated here; blank primary parameters are the caller's concern.

use serde::{Deserialize, Serialize};

use super::params::{Difficulty, ExplanationDepth, Persona, SkillLevel, TimeCommitment, ToneMode};
use super::templates::*;

/// Subject used when a doubt does not name one
pub const DEFAULT_SUBJECT: &str = "General";

/// Question count used when a quiz request does not name one
pub const DEFAULT_QUESTION_COUNT: u32 = 5;

/// Which fixed template a prompt is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    ApplicationVision,
    Roadmap,
    DoubtResolver,
    ConceptExplainer,
    QuizGenerator,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionParams {
    pub concept: String,
    #[serde(default)]
    pub persona: Persona,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapParams {
    pub learning_goal: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default)]
    pub time_commitment: TimeCommitment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoubtParams {
    pub question: String,
    /// Rendered conversation history; omitted from the prompt when empty
    #[serde(default)]
    pub context: String,
    #[serde(default = "default_subject")]
    pub subject: String,
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

impl Default for DoubtParams {
    fn default() -> Self {
        Self {
            question: String::new(),
            context: String::new(),
            subject: default_subject(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationParams {
    pub topic: String,
    #[serde(default)]
    pub depth: ExplanationDepth,
    #[serde(default)]
    pub tone: ToneMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizParams {
    pub topic: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_question_count")]
    pub count: u32,
}

fn default_question_count() -> u32 {
    DEFAULT_QUESTION_COUNT
}

impl Default for QuizParams {
    fn default() -> Self {
        Self {
            topic: String::new(),
            difficulty: Difficulty::default(),
            count: DEFAULT_QUESTION_COUNT,
        }
    }
}

/// A template selection together with its parameter set
#[derive(Debug, Clone, PartialEq)]
pub enum PromptRequest {
    Vision(VisionParams),
    Roadmap(RoadmapParams),
    Doubt(DoubtParams),
    Explanation(ExplanationParams),
    Quiz(QuizParams),
}

impl PromptRequest {
    pub fn template_id(&self) -> TemplateId {
        match self {
            PromptRequest::Vision(_) => TemplateId::ApplicationVision,
            PromptRequest::Roadmap(_) => TemplateId::Roadmap,
            PromptRequest::Doubt(_) => TemplateId::DoubtResolver,
            PromptRequest::Explanation(_) => TemplateId::ConceptExplainer,
            PromptRequest::Quiz(_) => TemplateId::QuizGenerator,
        }
    }
}

/// Stateless prompt construction
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(request: &PromptRequest) -> String {
        match request {
            PromptRequest::Vision(p) => build_vision_prompt(p),
            PromptRequest::Roadmap(p) => build_roadmap_prompt(p),
            PromptRequest::Doubt(p) => build_doubt_prompt(p),
            PromptRequest::Explanation(p) => build_explanation_prompt(p),
            PromptRequest::Quiz(p) => build_quiz_prompt(p),
        }
    }
}

pub fn build_vision_prompt(params: &VisionParams) -> String {
    let mut parts = Vec::with_capacity(4);
    parts.push(APPLICATION_VISION_TEMPLATE.to_string());
    parts.push(format!("\nConcept: {}", params.concept));
    // Default (or blank) persona adds no line at all
    if params.persona != Persona::Default && !params.persona.as_str().trim().is_empty() {
        parts.push(format!("Persona: {}", params.persona));
    }
    parts.push("\nGenerate comprehensive application vision:".to_string());
    parts.join("\n")
}

pub fn build_roadmap_prompt(params: &RoadmapParams) -> String {
    format!(
        "{}\n\nLearning Goal: {}\nCurrent Level: {}\nTime Commitment: {}\n\n\
         Please generate a comprehensive, well-structured learning roadmap:",
        ROADMAP_TEMPLATE, params.learning_goal, params.level, params.time_commitment
    )
}

pub fn build_doubt_prompt(params: &DoubtParams) -> String {
    let mut parts = Vec::with_capacity(5);
    parts.push(DOUBT_RESOLVER_TEMPLATE.to_string());
    parts.push(format!("\nCurrent Subject: {}", params.subject));
    if !params.context.is_empty() {
        parts.push(format!("Conversation Context:\n{}", params.context));
    }
    parts.push(format!("\nStudent Question: {}", params.question));
    parts.push("\nPlease provide your best explanation:".to_string());
    parts.join("\n")
}

pub fn build_explanation_prompt(params: &ExplanationParams) -> String {
    format!(
        "{} {} {}",
        depth_instruction(&params.depth, &params.topic),
        tone_instruction(&params.tone),
        EXPLANATION_FORMAT_RULE
    )
}

pub fn build_quiz_prompt(params: &QuizParams) -> String {
    format!(
        "Generate {} quiz questions about {} with {} difficulty.\n{}",
        params.count, params.topic, params.difficulty, QUIZ_TEMPLATE
    )
}

fn depth_instruction(depth: &ExplanationDepth, topic: &str) -> String {
    match depth {
        ExplanationDepth::Tldr => format!(
            "Provide a concise summary of {} in 2-3 sentences. Highlight only the most essential aspects.",
            topic
        ),
        ExplanationDepth::Eli5 => format!(
            "Explain {} in simple terms that a 5-year-old could understand. Use analogies from everyday life.",
            topic
        ),
        // Unknown depths get the full treatment
        ExplanationDepth::Deepdive | ExplanationDepth::Custom(_) => format!(
            "Provide a comprehensive explanation of {}. Cover key concepts, applications, and important details. \
             Use markdown formatting with headings, lists, and bold text for important terms.",
            topic
        ),
    }
}

/// Style instruction for a tone; unknown tones read as the default voice.
pub fn tone_instruction(tone: &ToneMode) -> &'static str {
    match tone {
        ToneMode::Default | ToneMode::Custom(_) => TONE_DEFAULT,
        ToneMode::Gamer => TONE_GAMER,
        ToneMode::Chef => TONE_CHEF,
        ToneMode::Rapper => TONE_RAPPER,
        ToneMode::Pirate => TONE_PIRATE,
        ToneMode::Scientist => TONE_SCIENTIST,
    }
}
