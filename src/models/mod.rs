//! Data Models
//!
//! Result and settings types. Results serialize with camelCase field names so
//! callers can store them as-is.

pub mod chat;
pub mod explanation;
pub mod quiz;
pub mod roadmap;
pub mod settings;
pub mod vision;

pub use chat::{build_conversation_context, ChatMessage};
pub use explanation::ExplanationSet;
pub use quiz::{QuizQuestion, QuizResult};
pub use roadmap::{GeneratedRoadmap, Milestone, TrackedMilestone, TrackedRoadmap};
pub use settings::AppConfig;
pub use vision::ApplicationVision;
