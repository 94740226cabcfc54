//! Concept explanation results.

use serde::{Deserialize, Serialize};

/// One accumulated explanation per depth
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplanationSet {
    pub tldr: String,
    pub eli5: String,
    pub deepdive: String,
}
