//! Response Normalizer Integration Tests
//!
//! Extraction from realistic model output through the public API.

use edumorph::models::quiz::QuizQuestion;
use edumorph::services::normalizer::{locate_json, span_is_suspect};
use edumorph::{extract_json_array, extract_json_object, extract_typed, Difficulty, GenerationError, JsonShape};
use serde_json::json;

fn sample_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            question: "Which gas do plants absorb?".to_string(),
            options: vec![
                "Oxygen".to_string(),
                "Carbon dioxide".to_string(),
                "Nitrogen".to_string(),
                "Helium".to_string(),
            ],
            correct_answer: 1,
            explanation: "Plants take in CO2 for photosynthesis.".to_string(),
            difficulty: Difficulty::Easy,
        },
        QuizQuestion {
            question: "Where does the light reaction happen?".to_string(),
            options: vec![
                "Stroma".to_string(),
                "Thylakoid membrane".to_string(),
                "Nucleus".to_string(),
                "Cell wall".to_string(),
            ],
            correct_answer: 1,
            explanation: "Photosystems sit in the thylakoid membrane.".to_string(),
            difficulty: Difficulty::Hard,
        },
    ]
}

#[test]
fn test_questions_survive_prose_wrapping() {
    let questions = sample_questions();
    let text = format!(
        "Here are your questions:\n```json\n{}\n```\nGood luck!",
        serde_json::to_string_pretty(&questions).unwrap()
    );

    let value = extract_json_array(&text).unwrap();
    assert_eq!(value, serde_json::to_value(&questions).unwrap());

    let typed: Vec<QuizQuestion> = extract_typed(&text).unwrap();
    assert_eq!(typed, questions);
}

#[test]
fn test_object_with_prefix_and_suffix() {
    assert_eq!(
        extract_json_object(r#"prefix {"a":1} suffix"#).unwrap(),
        json!({"a": 1})
    );
}

#[test]
fn test_no_braces_is_extraction_error() {
    let err = extract_json_object("The model refused to answer.").unwrap_err();
    assert!(matches!(
        err,
        GenerationError::Extraction {
            expected: JsonShape::Object
        }
    ));
}

#[test]
fn test_brace_in_leading_prose_shifts_span() {
    // The prose brace opens the span early; parsing then fails.
    let text = r#"Use {curly} braces like this: {"a": 1}"#;
    let span = locate_json(text, JsonShape::Object).unwrap();
    assert_eq!(span, text.trim_start_matches("Use "));
    assert!(span_is_suspect(span, JsonShape::Object));
    assert!(matches!(
        extract_json_object(text).unwrap_err(),
        GenerationError::Parse(_)
    ));
}

#[test]
fn test_nested_arrays_use_outermost_brackets() {
    let text = "Result: [[1, 2], [3]] done";
    assert_eq!(extract_json_array(text).unwrap(), json!([[1, 2], [3]]));
}
