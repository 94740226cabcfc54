//! Response Normalizer
//!
//! Pulls a JSON payload out of free model text by taking the span from the
//! first opening delimiter to the last closing one, then parses it and checks
//! its structure.
//!
//! The span heuristic tolerates prose and code fences around the payload, but
//! a stray delimiter in that prose shifts the span. A span whose outermost
//! delimiter closes before its end is logged and otherwise left to the
//! parser: the span is never rebalanced.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::utils::error::GenerationError;

/// Kind of payload to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonShape {
    Object,
    Array,
}

impl JsonShape {
    pub fn open(self) -> char {
        match self {
            JsonShape::Object => '{',
            JsonShape::Array => '[',
        }
    }

    pub fn close(self) -> char {
        match self {
            JsonShape::Object => '}',
            JsonShape::Array => ']',
        }
    }
}

impl fmt::Display for JsonShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonShape::Object => f.write_str("object"),
            JsonShape::Array => f.write_str("array"),
        }
    }
}

/// A typed payload the normalizer can produce.
///
/// Deserialization is the structural check; `validate` adds the cross-field
/// rules serde cannot express.
pub trait ResponseSchema: DeserializeOwned {
    const SHAPE: JsonShape;

    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Locate the candidate payload span in `text`.
pub fn locate_json(text: &str, shape: JsonShape) -> Result<&str, GenerationError> {
    let extraction = || GenerationError::Extraction { expected: shape };

    let start = text.find(shape.open()).ok_or_else(extraction)?;
    let end = text
        .rfind(shape.close())
        .filter(|end| *end > start)
        .ok_or_else(extraction)?;

    let span = &text[start..=end];
    if span_is_suspect(span, shape) {
        warn!(
            %shape,
            span_start = start,
            span_end = end,
            "extracted JSON span closes early; prose delimiters may have shifted it"
        );
    }

    Ok(span)
}

/// Whether the outermost delimiter of `span` closes before the span ends.
///
/// Delimiters inside string literals are ignored. A well-formed payload
/// closes exactly on its last character; an earlier close means prose
/// delimiters were pulled into the span.
pub fn span_is_suspect(span: &str, shape: JsonShape) -> bool {
    let (open, close) = (shape.open(), shape.close());
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in span.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        if c == '"' {
            in_string = true;
        } else if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return i + c.len_utf8() < span.len();
            }
        }
    }
    false
}

fn extract(text: &str, shape: JsonShape) -> Result<Value, GenerationError> {
    let span = locate_json(text, shape)?;
    debug!(%shape, span_len = span.len(), text_len = text.len(), "extracted JSON span");
    serde_json::from_str(span).map_err(GenerationError::Parse)
}

/// Extract the JSON object embedded in `text`.
pub fn extract_json_object(text: &str) -> Result<Value, GenerationError> {
    extract(text, JsonShape::Object)
}

/// Extract the JSON array embedded in `text`.
pub fn extract_json_array(text: &str) -> Result<Value, GenerationError> {
    extract(text, JsonShape::Array)
}

/// Extract, parse, and structurally validate a typed payload.
pub fn extract_typed<T: ResponseSchema>(text: &str) -> Result<T, GenerationError> {
    let value = extract(text, T::SHAPE)?;
    let typed: T = serde_json::from_value(value).map_err(|e| GenerationError::schema(e.to_string()))?;
    typed.validate().map_err(GenerationError::Schema)?;
    Ok(typed)
}
