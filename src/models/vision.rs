//! Application Vision Models

use serde::{Deserialize, Serialize};

use crate::services::normalizer::{JsonShape, ResponseSchema};

/// Real-world applications of a concept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationVision {
    pub use_cases: Vec<String>,
    pub mini_project: String,
    pub tools: Vec<String>,
    pub industries: Vec<String>,
}

impl ResponseSchema for ApplicationVision {
    const SHAPE: JsonShape = JsonShape::Object;
}
